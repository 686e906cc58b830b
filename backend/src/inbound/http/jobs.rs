//! Job posting handlers.
//!
//! ```text
//! POST /api/v1/jobs {"title":"Backend Engineer","company":"Acme","city":"Berlin"}
//! GET  /api/v1/jobs?city=Berlin&keyword=go&limit=10
//! ```

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Job, JobFields, JobSearchParams};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/jobs`.
///
/// Every field may be absent or `null`; text then defaults to `""` and
/// salaries to `0`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateJobRequest {
    #[schema(example = "Backend Engineer")]
    pub title: Option<String>,
    #[schema(example = "Acme")]
    pub company: Option<String>,
    #[schema(example = "Berlin")]
    pub city: Option<String>,
    #[schema(example = 60000)]
    pub salary_min: Option<i64>,
    #[schema(example = 80000)]
    pub salary_max: Option<i64>,
    #[schema(example = "go, postgres")]
    pub tech_stack: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
}

impl From<CreateJobRequest> for JobFields {
    fn from(value: CreateJobRequest) -> Self {
        Self {
            title: value.title.unwrap_or_default(),
            company: value.company.unwrap_or_default(),
            city: value.city.unwrap_or_default(),
            salary_min: value.salary_min.unwrap_or_default(),
            salary_max: value.salary_max.unwrap_or_default(),
            tech_stack: value.tech_stack.unwrap_or_default(),
            source: value.source.unwrap_or_default(),
            url: value.url.unwrap_or_default(),
        }
    }
}

/// Query string for `GET /api/v1/jobs`.
///
/// Only documents the parameters; [`JobSearchQuery::from_pairs`] does the
/// parsing so repeated keys and stray parameters never fail a search.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobSearchQuery {
    /// Exact city match.
    pub city: Option<String>,
    /// Substring matched against title, company and tech stack.
    pub keyword: Option<String>,
    /// Result count in `1..=100`; anything else means 20.
    pub limit: Option<String>,
}

impl JobSearchQuery {
    /// Keep the first value of each known key and ignore everything else.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut query.city,
                "keyword" => &mut query.keyword,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl From<JobSearchQuery> for JobSearchParams {
    fn from(value: JobSearchQuery) -> Self {
        Self {
            city: value.city,
            keyword: value.keyword,
            limit: value.limit,
        }
    }
}

/// Job as returned to clients; an absent city is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub city: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub tech_stack: String,
    pub source: String,
    pub url: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self {
            id: value.id.get(),
            title: value.title,
            company: value.company,
            city: value.city.unwrap_or_default(),
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            tech_stack: value.tech_stack,
            source: value.source,
            url: value.url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Publish a job posting.
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job stored", body = Envelope<JobResponse>),
        (status = 400, description = "Title or company missing", body = ErrorEnvelope),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["jobs"],
    operation_id = "createJob"
)]
pub async fn create_job(
    state: web::Data<HttpState>,
    payload: web::Json<CreateJobRequest>,
) -> ApiResult<HttpResponse> {
    let job = state.jobs.create_job(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(Envelope::ok("job created", JobResponse::from(job))))
}

/// Search job postings, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    params(JobSearchQuery),
    responses(
        (status = 200, description = "Matching jobs", body = Envelope<Vec<JobResponse>>),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["jobs"],
    operation_id = "listJobs"
)]
pub async fn list_jobs(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let params = JobSearchParams::from(JobSearchQuery::from_pairs(query.into_inner()));
    let jobs = state.jobs.search_jobs(&params).await?;
    let data: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
    Ok(HttpResponse::Ok().json(Envelope::ok("ok", data)))
}
