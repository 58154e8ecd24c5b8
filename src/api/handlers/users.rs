//! Handlers for user administration.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::auth::MessageResponse;
use crate::domain::claims::AuthUser;
use crate::domain::entities::UserSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users. Admin only.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.account_service.list_users().await?))
}

/// Deletes a user. Admin only.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 403 if `id` is the caller's own id.
/// Returns 400 if `id` is not an integer.
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
) -> Result<Json<MessageResponse>, AppError> {
    state.account_service.delete_user(&actor, &id).await?;

    Ok(Json(MessageResponse::new("User deleted")))
}
