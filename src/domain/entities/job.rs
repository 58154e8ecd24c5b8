//! Job entity and the flattened listing record served to clients.

use serde::{Deserialize, Serialize};

/// A job posting as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

/// Input data for creating a new job.
///
/// `company_id` is not checked up front; the foreign key rejects unknown
/// companies. Empty titles are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub company_id: i64,
    pub title: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

/// A job joined with its company row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct JobWithCompany {
    pub id: i64,
    pub company_id: i64,
    pub company_name: String,
    pub title: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

/// Flattened job record returned by the listing endpoint and stored in
/// cached listing snapshots.
///
/// Carries the company name rather than its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: i64,
    pub company: String,
    pub title: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

impl From<JobWithCompany> for JobListing {
    fn from(row: JobWithCompany) -> Self {
        Self {
            id: row.id,
            company: row.company_name,
            title: row.title,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
        }
    }
}
