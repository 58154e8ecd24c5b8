//! Handlers for companies and salary statistics.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::companies::CreateCompanyRequest;
use crate::api::extract::ApiJson;
use crate::domain::entities::{Company, CompanySalaryStat};
use crate::error::AppError;
use crate::state::AppState;

/// Average salary and high-salary job count per company.
///
/// # Endpoint
///
/// `GET /api/companies/stat`
pub async fn company_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanySalaryStat>>, AppError> {
    Ok(Json(state.company_service.salary_stats().await?))
}

/// # Endpoint
///
/// `GET /api/companies`
pub async fn company_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, AppError> {
    Ok(Json(state.company_service.list_companies().await?))
}

/// Creates a company. Admin only.
///
/// # Endpoint
///
/// `POST /api/companies`
///
/// # Errors
///
/// Returns 400 if the name is empty or longer than 128 characters.
pub async fn create_company_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCompanyRequest>,
) -> Result<Json<Company>, AppError> {
    payload.validate()?;

    let company = state.company_service.create_company(&payload.name).await?;

    Ok(Json(company))
}
