//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the handler annotations from the inbound layer and the
//! request, response and error schemas they reference. Swagger UI serves the
//! generated document in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::jobs::{CreateJobRequest, JobResponse};
use crate::inbound::http::users::{CredentialsRequest, LoginResponse, UserSummaryResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "JobStream API",
        description = "Account registration, login and job posting search."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::jobs::create_job,
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::health::healthz,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CredentialsRequest,
        UserSummaryResponse,
        LoginResponse,
        CreateJobRequest,
        JobResponse,
        ErrorEnvelope,
        HealthStatus
    )),
    tags(
        (name = "users", description = "Registration and login"),
        (name = "jobs", description = "Job postings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
