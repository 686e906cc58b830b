//! In-memory port doubles shared by the HTTP scenario tests.
//!
//! Both repositories mimic the PostgreSQL adapters closely enough for
//! end-to-end checks: sequential identifiers, a unique email constraint and
//! newest-first search ordering.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use chrono::Utc;
use jobstream::Trace;
use jobstream::domain::ports::{
    JobPersistenceError, JobRepository, UserPersistenceError, UserRepository,
};
use jobstream::domain::{
    IdentityRegistryService, Job, JobCatalogService, JobId, JobQuery, NewJob, NewUser, User,
    UserId,
};
use jobstream::inbound::http::configure;
use jobstream::inbound::http::health::HealthState;
use jobstream::inbound::http::state::HttpState;
use jobstream::outbound::crypto::{Argon2CredentialHasher, HasherConfig};

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| UserPersistenceError::connection("user store poisoned"))?;
        Ok(rows.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| UserPersistenceError::connection("user store poisoned"))?;
        if rows.iter().any(|existing| existing.email == user.email) {
            return Err(UserPersistenceError::duplicate_email());
        }
        let now = Utc::now();
        let stored = User {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryJobs {
    rows: Mutex<Vec<Job>>,
    next_id: AtomicI64,
}

#[async_trait]
impl JobRepository for InMemoryJobs {
    async fn insert(&self, job: &NewJob) -> Result<Job, JobPersistenceError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| JobPersistenceError::connection("job store poisoned"))?;
        let now = Utc::now();
        let stored = Job {
            id: JobId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            title: job.title().to_owned(),
            company: job.company().to_owned(),
            city: job.city().map(str::to_owned),
            salary_min: job.salary_min(),
            salary_max: job.salary_max(),
            tech_stack: job.tech_stack().to_owned(),
            source: job.source().to_owned(),
            url: job.url().to_owned(),
            created_at: now,
            updated_at: now,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<Job>, JobPersistenceError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| JobPersistenceError::connection("job store poisoned"))?;
        let limit = usize::try_from(query.limit().get()).unwrap_or(usize::MAX);
        Ok(rows
            .iter()
            .rev()
            .filter(|job| query.matches(job))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Cheapest work factor Argon2 accepts; keeps scenarios fast.
pub fn fast_hasher() -> Argon2CredentialHasher {
    Argon2CredentialHasher::new(HasherConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid test parameters")
}

/// Wire the real services over in-memory storage.
pub fn http_state() -> HttpState {
    let identity = IdentityRegistryService::new(
        Arc::new(InMemoryUsers::default()),
        Arc::new(fast_hasher()),
    );
    let jobs = JobCatalogService::new(Arc::new(InMemoryJobs::default()));
    HttpState::new(Arc::new(identity), Arc::new(jobs))
}

/// Initialise the full application the way the server builds it.
pub async fn init_app() -> impl Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    actix_test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(http_state()))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}
