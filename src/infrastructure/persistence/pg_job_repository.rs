//! PostgreSQL implementation of job repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Job, JobWithCompany, NewJob};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;

/// PostgreSQL repository for job postings.
pub struct PgJobRepository {
    pool: Arc<PgPool>,
}

impl PgJobRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Builds an `ILIKE` pattern matching `keyword` anywhere in the column.
///
/// `%`, `_` and `\` in the keyword match themselves.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn create(&self, new_job: NewJob) -> Result<Job, AppError> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO job (company_id, title, salary_min, salary_max)
            VALUES ($1, $2, $3, $4)
            RETURNING id, company_id, title, salary_min, salary_max
            "#,
        )
        .bind(new_job.company_id)
        .bind(&new_job.title)
        .bind(new_job.salary_min)
        .bind(new_job.salary_max)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            // Foreign key and other constraint failures are persistence errors here.
            tracing::warn!(error = %e, company_id = new_job.company_id, "Job insert failed");
            AppError::internal(
                "Failed to create job",
                serde_json::json!({ "company_id": new_job.company_id }),
            )
        })?;

        Ok(job)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM job WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_with_company(
        &self,
        keyword: Option<String>,
    ) -> Result<Vec<JobWithCompany>, AppError> {
        let pattern = keyword.as_deref().map(contains_pattern);

        let rows = sqlx::query_as::<_, JobWithCompany>(
            r#"
            SELECT j.id, j.company_id, c.name AS company_name, j.title, j.salary_min, j.salary_max
            FROM job j
            JOIN company c ON c.id = j.company_id
            WHERE $1::text IS NULL OR j.title ILIKE $1 OR c.name ILIKE $1
            ORDER BY j.id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
