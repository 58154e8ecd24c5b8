//! Repository trait for companies and their salary aggregate.

use crate::domain::entities::{Company, CompanySalaryStat};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for companies.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCompanyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Creates a company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, name: &str) -> Result<Company, AppError>;

    /// Number of stored companies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists all companies ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Company>, AppError>;

    /// Computes salary statistics per company name, ordered by name.
    ///
    /// Companies without jobs are not included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn salary_stats(&self) -> Result<Vec<CompanySalaryStat>, AppError>;
}
