//! PostgreSQL implementation of company repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Company, CompanySalaryStat};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

/// PostgreSQL repository for companies and salary statistics.
pub struct PgCompanyRepository {
    pool: Arc<PgPool>,
}

impl PgCompanyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, name: &str) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO company (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(company)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>("SELECT id, name FROM company ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(companies)
    }

    async fn salary_stats(&self) -> Result<Vec<CompanySalaryStat>, AppError> {
        // Midpoint uses integer division, matching the column types.
        let stats = sqlx::query_as::<_, CompanySalaryStat>(
            r#"
            SELECT c.name AS company,
                ROUND(AVG((j.salary_min + j.salary_max) / 2))::DOUBLE PRECISION AS avg_salary,
                SUM(CASE WHEN j.salary_min > 100000 THEN 1 ELSE 0 END)::BIGINT AS high_salary
            FROM company c
            JOIN job j ON c.id = j.company_id
            GROUP BY c.name
            ORDER BY c.name
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(stats)
    }
}
