//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module. Connections come from a `bb8` pool driven by `diesel-async`;
//! every database failure is mapped to the owning port's error type.
//!
//! ```no_run
//! use jobstream::outbound::persistence::{DbPool, DieselJobRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), jobstream::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/jobstream")).await?;
//! let jobs = DieselJobRepository::new(pool);
//! # let _ = jobs;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_job_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_job_repository::DieselJobRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
