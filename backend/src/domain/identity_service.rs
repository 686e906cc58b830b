//! Registration and login use-cases.
//!
//! [`IdentityRegistryService`] implements the [`IdentityRegistry`] driving
//! port on top of the [`UserRepository`] and [`CredentialHasher`] driven
//! ports. Hashing and verification are CPU-bound and run on Tokio's blocking
//! pool.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    CredentialHasher, HashingError, IdentityRegistry, UserPersistenceError, UserRepository,
};
use crate::domain::{Credentials, Error, LoginResult, NewUser, PasswordHash, UserSummary};

/// Identity registry backed by injected storage and hashing adapters.
#[derive(Clone)]
pub struct IdentityRegistryService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl IdentityRegistryService {
    /// Create a service from its driven ports.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("hashing task failed: {err}")))?
            .map_err(map_hashing_error)
    }

    async fn verify_password(&self, password: &str, hash: PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(|err| Error::internal(format!("verification task failed: {err}")))
    }
}

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateEmail => Error::duplicate_email(),
        other => {
            warn!(error = %other, "user repository failure");
            Error::persistence(other.to_string())
        }
    }
}

fn map_hashing_error(error: HashingError) -> Error {
    warn!(error = %error, "password hashing failed");
    Error::hashing_failure()
}

#[async_trait]
impl IdentityRegistry for IdentityRegistryService {
    #[instrument(
        name = "identity.register",
        skip(self, credentials),
        fields(email = %credentials.email())
    )]
    async fn register(&self, credentials: &Credentials) -> Result<UserSummary, Error> {
        let email = credentials.email();
        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(map_user_persistence_error)?;
        if existing.is_some() {
            debug!(email, "registration rejected: email taken");
            return Err(Error::duplicate_email());
        }

        let password_hash = self.hash_password(credentials.password()).await?;
        let user = self
            .users
            .insert(&NewUser {
                email: email.to_owned(),
                password_hash,
            })
            .await
            .map_err(map_user_persistence_error)?;

        debug!(user_id = %user.id, "user registered");
        Ok(user.summary())
    }

    #[instrument(
        name = "identity.login",
        skip(self, credentials),
        fields(email = %credentials.email())
    )]
    async fn login(&self, credentials: &Credentials) -> Result<LoginResult, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_persistence_error)?
        else {
            debug!("login rejected");
            return Err(Error::invalid_credentials());
        };

        let verified = self
            .verify_password(credentials.password(), user.password_hash.clone())
            .await?;
        if !verified {
            debug!("login rejected");
            return Err(Error::invalid_credentials());
        }

        Ok(LoginResult {
            id: user.id,
            email: user.email,
            login_at: Utc::now(),
        })
    }
}
