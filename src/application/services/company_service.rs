//! Company management and salary statistics.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Company, CompanySalaryStat};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

/// Maximum company name length, matching the `company.name` column.
pub const MAX_COMPANY_NAME_LEN: usize = 128;

pub struct CompanyService<C: CompanyRepository + ?Sized> {
    repository: Arc<C>,
}

impl<C: CompanyRepository + ?Sized> CompanyService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Salary aggregate per company, computed on every call.
    pub async fn salary_stats(&self) -> Result<Vec<CompanySalaryStat>, AppError> {
        self.repository.salary_stats().await
    }

    /// Creates a company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or longer than
    /// [`MAX_COMPANY_NAME_LEN`] characters.
    pub async fn create_company(&self, name: &str) -> Result<Company, AppError> {
        let name = name.trim();
        let len = name.chars().count();
        if len == 0 || len > MAX_COMPANY_NAME_LEN {
            return Err(AppError::bad_request(
                "Invalid company name",
                json!({ "reason": format!("name must be 1 to {} characters", MAX_COMPANY_NAME_LEN) }),
            ));
        }

        let company = self.repository.create(name).await?;
        tracing::info!(company_id = company.id, name = %company.name, "Company created");
        Ok(company)
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        self.repository.list().await
    }

    /// Row count of the company table; also serves as the database liveness check.
    pub async fn company_count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
