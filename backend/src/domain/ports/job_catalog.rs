//! Driving port for publishing and searching job postings.

use async_trait::async_trait;

use crate::domain::{Error, Job, JobFields, JobSearchParams};

/// Job publishing and search use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Validate and store a job posting.
    async fn create_job(&self, fields: JobFields) -> Result<Job, Error>;

    /// Search postings using raw query inputs.
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<Vec<Job>, Error>;
}
