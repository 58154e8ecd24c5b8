//! Repository trait for job posting data access.

use crate::domain::entities::{Job, JobWithCompany, NewJob};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for job postings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgJobRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_job.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a job and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the insert fails, including when
    /// `company_id` does not reference an existing company.
    async fn create(&self, new_job: NewJob) -> Result<Job, AppError>;

    /// Deletes a job by id and returns the number of affected rows.
    ///
    /// Deleting an unknown id affects zero rows and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Lists jobs joined with their company, ordered by job id.
    ///
    /// With a keyword, only rows whose title or company name contains it
    /// (case-insensitive substring) are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_company(
        &self,
        keyword: Option<String>,
    ) -> Result<Vec<JobWithCompany>, AppError>;
}
