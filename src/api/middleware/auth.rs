//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{domain::claims::AuthUser, error::AppError, state::AppState};

/// Requires a valid bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the caller's [`AuthUser`] is stored in the request extensions,
/// where handlers pick it up with `Extension<AuthUser>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, or the
/// token is invalid or expired.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/jobs", get(list_jobs_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_user));
/// ```
pub async fn require_user(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(st, req, next, false).await
}

/// Requires a valid bearer token whose `is_admin` claim is set.
///
/// # Errors
///
/// Returns `401 Unauthorized` as [`require_user`] does, and
/// `403 Forbidden` for a valid non-admin token.
pub async fn require_admin(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(st, req, next, true).await
}

async fn authorize(
    st: AppState,
    req: Request,
    next: Next,
    require_admin: bool,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user: AuthUser = st.auth_service.authorize(&token, require_admin)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
