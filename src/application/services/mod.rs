//! Business logic services for the application layer.

pub mod account_service;
pub mod auth_service;
pub mod company_service;
pub mod listing_service;

pub use account_service::AccountService;
pub use auth_service::{AuthService, LoginOutcome};
pub use company_service::CompanyService;
pub use listing_service::ListingService;
