//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{AccountService, AuthService, CompanyService, ListingService};
use crate::domain::repositories::{CompanyRepository, JobRepository, UserRepository};
use crate::infrastructure::cache::CacheService;
use crate::utils::jwt::TokenCodec;

/// Handles to the services, built once at startup and cloned per request.
///
/// Services are stored behind trait objects so the same router serves
/// PostgreSQL repositories in production and in-memory ones in tests.
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService<dyn JobRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub account_service: Arc<AccountService<dyn UserRepository>>,
    pub company_service: Arc<CompanyService<dyn CompanyRepository>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        listing_service: Arc<ListingService<dyn JobRepository>>,
        auth_service: Arc<AuthService<dyn UserRepository>>,
        account_service: Arc<AccountService<dyn UserRepository>>,
        company_service: Arc<CompanyService<dyn CompanyRepository>>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            listing_service,
            auth_service,
            account_service,
            company_service,
            cache,
        }
    }

    /// Wires every service from its repositories.
    ///
    /// # Arguments
    ///
    /// - `jobs`, `companies`, `users` - repository implementations
    /// - `cache` - snapshot store for job listings
    /// - `tokens` - bearer token codec
    /// - `listing_ttl` - lifetime of a listing snapshot
    pub fn from_repositories(
        jobs: Arc<dyn JobRepository>,
        companies: Arc<dyn CompanyRepository>,
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheService>,
        tokens: TokenCodec,
        listing_ttl: Duration,
    ) -> Self {
        Self::new(
            Arc::new(ListingService::with_ttl(jobs, cache.clone(), listing_ttl)),
            Arc::new(AuthService::new(users.clone(), tokens)),
            Arc::new(AccountService::new(users)),
            Arc::new(CompanyService::new(companies)),
            cache,
        )
    }
}
