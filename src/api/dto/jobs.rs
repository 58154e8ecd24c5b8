//! DTOs for job listing and management.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewJob;

/// Query string of `GET /api/jobs`.
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsQuery {
    /// Substring matched against job title and company name. Empty means no filter.
    pub keyword: Option<String>,
}

/// Body of `POST /api/jobs`.
///
/// Titles may be empty and the company is not checked up front; an unknown
/// `company_id` fails at insert time.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    pub company_id: i64,
    #[validate(length(max = 128, message = "Title must be at most 128 characters"))]
    pub title: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

impl From<CreateJobRequest> for NewJob {
    fn from(req: CreateJobRequest) -> Self {
        NewJob {
            company_id: req.company_id,
            title: req.title,
            salary_min: req.salary_min,
            salary_max: req.salary_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_valid() {
        let req = CreateJobRequest {
            company_id: 1,
            title: String::new(),
            salary_min: 0,
            salary_max: 0,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_overlong_title_is_rejected() {
        let req = CreateJobRequest {
            company_id: 1,
            title: "x".repeat(129),
            salary_min: 0,
            salary_max: 0,
        };
        assert!(req.validate().is_err());
    }
}
