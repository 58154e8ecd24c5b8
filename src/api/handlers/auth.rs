//! Handlers for registration and login.

use axum::{Json, extract::State};

use crate::api::dto::auth::{CredentialsRequest, LoginResponse, MessageResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a regular user.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Errors
///
/// Returns 400 if a field is empty, the body is malformed, or the username
/// is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(MessageResponse::new("Registered")))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Errors
///
/// Returns 400 for a malformed body, 401 for bad credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let outcome = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        is_admin: outcome.is_admin,
        user_id: outcome.user_id,
    }))
}
