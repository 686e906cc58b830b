//! Job publishing and search use-cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::domain::ports::{JobCatalog, JobPersistenceError, JobRepository};
use crate::domain::{Error, Job, JobFields, JobQuery, JobSearchParams, NewJob};

/// Message returned when a job draft lacks a title or company.
pub const JOB_REQUIRED_FIELDS_MESSAGE: &str = "title and company are required";

/// Job catalog backed by an injected job repository.
#[derive(Clone)]
pub struct JobCatalogService {
    jobs: Arc<dyn JobRepository>,
}

impl JobCatalogService {
    /// Create a service from its storage port.
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }
}

fn map_job_persistence_error(error: JobPersistenceError) -> Error {
    warn!(error = %error, "job repository failure");
    Error::persistence(error.to_string())
}

#[async_trait]
impl JobCatalog for JobCatalogService {
    #[instrument(name = "jobs.create", skip(self, fields), fields(company = %fields.company))]
    async fn create_job(&self, fields: JobFields) -> Result<Job, Error> {
        let draft = NewJob::try_from_fields(fields).map_err(|err| {
            debug!(reason = %err, "job draft rejected");
            Error::validation(JOB_REQUIRED_FIELDS_MESSAGE)
        })?;
        let job = self
            .jobs
            .insert(&draft)
            .await
            .map_err(map_job_persistence_error)?;
        debug!(job_id = %job.id, "job created");
        Ok(job)
    }

    #[instrument(name = "jobs.search", skip_all)]
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<Vec<Job>, Error> {
        let query = JobQuery::from_params(params);
        debug!(
            city = query.city(),
            keyword = query.keyword(),
            limit = query.limit().get(),
            "searching jobs"
        );
        self.jobs
            .search(&query)
            .await
            .map_err(map_job_persistence_error)
    }
}
