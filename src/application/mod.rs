//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the cache seam, and expose the
//! operations HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::listing_service::ListingService`] - Cached job listing, job creation and deletion
//! - [`services::auth_service::AuthService`] - Registration, login and bearer-token authorization
//! - [`services::account_service::AccountService`] - User administration
//! - [`services::company_service::CompanyService`] - Companies and salary statistics

pub mod services;
