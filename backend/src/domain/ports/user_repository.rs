//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email uniqueness constraint rejected an insert.
        DuplicateEmail => "user repository rejected duplicate email",
    }
}

/// Account storage.
///
/// Email lookups are exact and case-sensitive. `insert` must surface a
/// uniqueness violation as [`UserPersistenceError::DuplicateEmail`] so that
/// concurrent registrations of one address resolve to a single account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the account registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new account and return it with its assigned id and
    /// timestamps.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
