//! Domain primitives, use-cases and ports.
//!
//! Purpose: hold the business rules of the job board. Nothing in this module
//! knows about HTTP, SQL or Argon2; adapters reach it through [`ports`].
//!
//! Public surface:
//! - [`Credentials`], [`User`], [`UserSummary`], [`LoginResult`]: identity.
//! - [`JobFields`], [`NewJob`], [`Job`]: postings.
//! - [`JobSearchParams`], [`JobQuery`], [`SearchLimit`]: search predicates.
//! - [`IdentityRegistryService`], [`JobCatalogService`]: use-case services.
//! - [`Error`], [`ErrorKind`]: transport-agnostic failures.
//! - [`TraceId`]: request correlation.

pub mod auth;
pub mod error;
pub mod identity_service;
pub mod job;
pub mod job_catalog_service;
pub mod job_query;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{Credentials, CredentialsValidationError};
pub use self::error::{
    DUPLICATE_EMAIL_MESSAGE, Error, ErrorKind, HASHING_FAILURE_MESSAGE,
    INVALID_CREDENTIALS_MESSAGE,
};
pub use self::identity_service::IdentityRegistryService;
pub use self::job::{Job, JobFields, JobId, JobValidationError, NewJob};
pub use self::job_catalog_service::{JOB_REQUIRED_FIELDS_MESSAGE, JobCatalogService};
pub use self::job_query::{
    DEFAULT_SEARCH_LIMIT, JobQuery, JobSearchParams, MAX_SEARCH_LIMIT, SearchLimit,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{LoginResult, NewUser, PasswordHash, User, UserId, UserSummary};
