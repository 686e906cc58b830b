//! Port for one-way password hashing.
//!
//! Implementations are synchronous and CPU-bound; callers on an async runtime
//! should move the work onto a blocking thread.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failure to produce a password hash.
    pub enum HashingError {
        /// The hashing primitive rejected its parameters or input.
        Failed { message: String } => "password hashing failed: {message}",
    }
}

/// Salted, slow password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh random salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, HashingError>;

    /// Check `password` against a stored hash.
    ///
    /// A malformed stored hash verifies as `false`.
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool;
}
