//! API route configuration.
//!
//! Routes are grouped by the authentication they need; each group carries its
//! own [`crate::api::middleware::auth`] layer.

use crate::api::handlers::{
    company_list_handler, company_stats_handler, create_company_handler, create_job_handler,
    delete_job_handler, delete_user_handler, list_jobs_handler, login_handler, register_handler,
    user_list_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /register` - Create a regular account
/// - `POST /login`    - Exchange credentials for a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Routes for any authenticated user.
///
/// # Endpoints
///
/// - `GET /jobs`           - Cached job listing, `?keyword=` filter
/// - `GET /companies`      - List companies
/// - `GET /companies/stat` - Salary statistics per company
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs_handler))
        .route("/companies", get(company_list_handler))
        .route("/companies/stat", get(company_stats_handler))
}

/// Routes for administrators.
///
/// # Endpoints
///
/// - `POST   /jobs`        - Create a job
/// - `DELETE /jobs/{id}`   - Delete a job
/// - `POST   /companies`   - Create a company
/// - `GET    /users`       - List users
/// - `DELETE /users/{id}`  - Delete a user other than the caller
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", post(create_job_handler))
        .route("/jobs/{id}", delete(delete_job_handler))
        .route("/companies", post(create_company_handler))
        .route("/users", get(user_list_handler))
        .route("/users/{id}", delete(delete_user_handler))
}

/// The complete `/api` router with authentication layers applied.
pub fn routes(state: AppState) -> Router<AppState> {
    let user = user_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_user,
    ));
    let admin = admin_routes().route_layer(middleware::from_fn_with_state(
        state,
        auth::require_admin,
    ));

    Router::new()
        .merge(public_routes())
        .merge(user)
        .merge(admin)
}
