//! Driving port for account registration and login.
//!
//! Inbound adapters call this port with already-validated credentials and
//! never touch storage or hashing directly.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, LoginResult, UserSummary};

/// Registration and login use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityRegistry: Send + Sync {
    /// Create an account for a not-yet-registered email.
    async fn register(&self, credentials: &Credentials) -> Result<UserSummary, Error>;

    /// Verify credentials.
    ///
    /// Unknown email and wrong password fail identically.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResult, Error>;
}
