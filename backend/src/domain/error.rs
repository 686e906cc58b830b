//! Domain-level error taxonomy.
//!
//! Errors are transport agnostic. Every failure inside the core is mapped to
//! one [`ErrorKind`] at the point where it occurs; inbound adapters turn the
//! kind into a status code and envelope.

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Stable machine-readable error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field was missing or blank once trimmed.
    ValidationError,
    /// Registration attempted with an email that already has an account.
    DuplicateEmail,
    /// Login lookup or password verification failed.
    InvalidCredentials,
    /// The password hashing primitive failed.
    HashingFailure,
    /// Storage was unreachable or rejected the operation.
    PersistenceError,
    /// The route exists but not for this HTTP method.
    MethodNotAllowed,
    /// Unexpected failure outside the documented taxonomy.
    InternalError,
}

impl ErrorKind {
    /// Whether the message must be hidden from clients.
    #[must_use]
    pub fn is_redacted(self) -> bool {
        matches!(self, Self::PersistenceError | Self::InternalError)
    }
}

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid email or password";
/// Message returned when an email is already registered.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "email already registered";
/// Message returned when the password hash could not be produced.
pub const HASHING_FAILURE_MESSAGE: &str = "failed to hash password";

/// Domain error payload.
///
/// The message of redacted kinds ([`ErrorKind::is_redacted`]) carries the
/// internal cause for logging only.
///
/// # Examples
/// ```
/// use jobstream::domain::{Error, ErrorKind};
///
/// let err = Error::validation("title and company are required");
/// assert_eq!(err.kind(), ErrorKind::ValidationError);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message as constructed; may contain internal detail for redacted kinds.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Override the correlation identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorKind::ValidationError`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, message)
    }

    /// Convenience constructor for [`ErrorKind::DuplicateEmail`].
    #[must_use]
    pub fn duplicate_email() -> Self {
        Self::new(ErrorKind::DuplicateEmail, DUPLICATE_EMAIL_MESSAGE)
    }

    /// Convenience constructor for [`ErrorKind::InvalidCredentials`].
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE)
    }

    /// Convenience constructor for [`ErrorKind::HashingFailure`].
    #[must_use]
    pub fn hashing_failure() -> Self {
        Self::new(ErrorKind::HashingFailure, HASHING_FAILURE_MESSAGE)
    }

    /// Convenience constructor for [`ErrorKind::PersistenceError`].
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PersistenceError, message)
    }

    /// Convenience constructor for [`ErrorKind::MethodNotAllowed`].
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorKind::MethodNotAllowed, "method not allowed")
    }

    /// Convenience constructor for [`ErrorKind::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
