//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod companies;
pub mod health;
pub mod jobs;
pub mod users;

pub use auth::{login_handler, register_handler};
pub use companies::{company_list_handler, company_stats_handler, create_company_handler};
pub use health::health_handler;
pub use jobs::{create_job_handler, delete_job_handler, list_jobs_handler};
pub use users::{delete_user_handler, user_list_handler};
