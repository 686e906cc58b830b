//! HTTP mapping for domain errors.
//!
//! The domain error stays transport agnostic; this module decides status
//! codes, redacts internal detail and shapes the JSON error envelope.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorKind, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing message for storage failures.
pub const PERSISTENCE_ERROR_MESSAGE: &str = "db error";
/// Client-facing message for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
/// Message returned when a request body is not valid JSON for the endpoint.
pub const INVALID_JSON_MESSAGE: &str = "invalid JSON body";

/// Failure envelope: `code` repeats the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// HTTP status code.
    #[schema(example = 400)]
    pub code: u16,
    /// Human-readable message; never contains storage or crypto detail.
    #[schema(example = "email and password are required")]
    pub message: String,
    /// Stable machine-readable kind.
    #[schema(value_type = String, example = "validation_error")]
    pub kind: ErrorKind,
    /// Request correlation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ValidationError | ErrorKind::DuplicateEmail => StatusCode::BAD_REQUEST,
        ErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::HashingFailure | ErrorKind::PersistenceError | ErrorKind::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn client_message(error: &Error) -> &str {
    match error.kind() {
        ErrorKind::PersistenceError => PERSISTENCE_ERROR_MESSAGE,
        kind if kind.is_redacted() => INTERNAL_ERROR_MESSAGE,
        _ => error.message(),
    }
}

impl ErrorEnvelope {
    /// Build the client-facing envelope, redacting internal messages.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        Self {
            code: status_for(error.kind()).as_u16(),
            message: client_message(error).to_owned(),
            kind: error.kind(),
            trace_id: error.trace_id().map(str::to_owned),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind().is_redacted() {
            error!(
                kind = ?self.kind(),
                detail = self.message(),
                trace_id = self.trace_id(),
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::from_error(self))
    }
}

/// `JsonConfig` error handler: any body that fails to parse is a validation
/// failure with a fixed message.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = req.path(), "rejected request body");
    Error::validation(INVALID_JSON_MESSAGE).into()
}

/// `QueryConfig` error handler.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = req.path(), "rejected query string");
    Error::validation("invalid query string").into()
}

/// Default service for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed())
}
