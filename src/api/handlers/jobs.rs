//! Handlers for job listing and management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::MessageResponse;
use crate::api::dto::jobs::{CreateJobRequest, ListJobsQuery};
use crate::api::extract::ApiJson;
use crate::domain::entities::{Job, JobListing};
use crate::error::AppError;
use crate::state::AppState;

/// Lists jobs with their company name, optionally filtered.
///
/// # Endpoint
///
/// `GET /api/jobs?keyword=<text>`
///
/// Served from the listing cache when a snapshot exists.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let listings = state
        .listing_service
        .list_jobs(query.keyword.as_deref())
        .await?;

    Ok(Json(listings))
}

/// Creates a job posting. Admin only.
///
/// # Endpoint
///
/// `POST /api/jobs`
///
/// # Errors
///
/// Returns 400 for a malformed body.
/// Returns 500 if the insert fails, including an unknown `company_id`.
pub async fn create_job_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateJobRequest>,
) -> Result<Json<Job>, AppError> {
    payload.validate()?;

    let job = state.listing_service.create_job(payload.into()).await?;

    Ok(Json(job))
}

/// Deletes a job posting. Admin only.
///
/// # Endpoint
///
/// `DELETE /api/jobs/{id}`
///
/// Deleting an id that does not exist still answers 200.
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
pub async fn delete_job_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid job id", json!({ "id": id })))?;

    state.listing_service.delete_job(id).await?;

    Ok(Json(MessageResponse::new("Deleted")))
}
