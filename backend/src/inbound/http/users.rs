//! Account registration and login handlers.
//!
//! ```text
//! POST /api/v1/register {"email":"a@x.com","password":"secret123"}
//! POST /api/v1/login    {"email":"a@x.com","password":"secret123"}
//! ```

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Credentials, Error, LoginResult, UserSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Message returned when either credential is blank.
pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "email and password are required";

/// Request body shared by registration and login.
///
/// Missing fields deserialize as empty strings and fail validation.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct CredentialsRequest {
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "secret123")]
    pub password: String,
}

impl CredentialsRequest {
    fn into_credentials(self) -> Result<Credentials, Error> {
        Credentials::try_from_parts(&self.email, &self.password)
            .map_err(|_| Error::validation(CREDENTIALS_REQUIRED_MESSAGE))
    }
}

/// Registration result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryResponse {
    pub id: i64,
    pub email: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(value: UserSummary) -> Self {
        Self {
            id: value.id.get(),
            email: value.email,
        }
    }
}

/// Login result. `token` is reserved and always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    #[schema(value_type = String, format = DateTime)]
    pub login_at: DateTime<Utc>,
    pub token: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(value: LoginResult) -> Self {
        let token = value.token().to_owned();
        Self {
            id: value.id.get(),
            email: value.email,
            login_at: value.login_at,
            token,
        }
    }
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Account created", body = Envelope<UserSummaryResponse>),
        (status = 400, description = "Missing field or email already registered", body = ErrorEnvelope),
        (status = 500, description = "Hashing or storage failure", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "register"
)]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = payload.into_inner().into_credentials()?;
    let summary = state.identity.register(&credentials).await?;
    Ok(HttpResponse::Created().json(Envelope::ok(
        "register ok",
        UserSummaryResponse::from(summary),
    )))
}

/// Verify credentials.
///
/// Unknown email and wrong password produce the same 401 response.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = Envelope<LoginResponse>),
        (status = 400, description = "Missing field", body = ErrorEnvelope),
        (status = 401, description = "Invalid email or password", body = ErrorEnvelope),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "login"
)]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = payload.into_inner().into_credentials()?;
    let result = state.identity.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(Envelope::ok("login ok", LoginResponse::from(result))))
}
