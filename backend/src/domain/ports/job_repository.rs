//! Port abstraction for job posting storage.
use async_trait::async_trait;

use crate::domain::{Job, JobQuery, NewJob};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by job repository adapters.
    pub enum JobPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "job repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "job repository query failed: {message}",
    }
}

/// Job posting storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a validated job and return the stored row.
    async fn insert(&self, job: &NewJob) -> Result<Job, JobPersistenceError>;

    /// Return jobs matching `query`, newest id first, at most
    /// `query.limit()` rows.
    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, JobPersistenceError>;
}
