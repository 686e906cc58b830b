//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod identity_registry;
mod job_catalog;
mod job_repository;
mod user_repository;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, HashingError};
#[cfg(test)]
pub use identity_registry::MockIdentityRegistry;
pub use identity_registry::IdentityRegistry;
#[cfg(test)]
pub use job_catalog::MockJobCatalog;
pub use job_catalog::JobCatalog;
#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobPersistenceError, JobRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
