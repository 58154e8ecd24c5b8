//! Company entity and its salary aggregate.

use serde::{Deserialize, Serialize};

/// An employer that owns job postings.
///
/// Companies have no update path once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

impl Company {
    /// Creates a new Company instance.
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Per-company salary statistics.
///
/// `avg_salary` is the rounded mean of each job's salary midpoint,
/// `high_salary` counts jobs whose `salary_min` exceeds 100 000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanySalaryStat {
    pub company: String,
    pub avg_salary: f64,
    pub high_salary: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_creation() {
        let company = Company::new(1, "Acme".to_string());
        assert_eq!(company.id, 1);
        assert_eq!(company.name, "Acme");
    }

    #[test]
    fn test_salary_stat_serialization() {
        let stat = CompanySalaryStat {
            company: "Acme".to_string(),
            avg_salary: 100000.0,
            high_salary: 2,
        };

        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["avg_salary"], 100000.0);
        assert_eq!(json["high_salary"], 2);
    }
}
