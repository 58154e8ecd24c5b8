mod common;

use axum::http::StatusCode;
use job_board::domain::entities::{Company, CompanySalaryStat};
use serde_json::json;

#[tokio::test]
async fn test_salary_stats() {
    let app = common::create_test_app();
    let acme = app.seed_company("Acme").await;
    let globex = app.seed_company("Globex").await;

    for (company_id, title, min, max) in [
        (acme.id, "Backend Engineer", 80000, 120000),
        (acme.id, "Staff Engineer", 150000, 200000),
        (globex.id, "Designer", 50000, 70001),
    ] {
        app.server
            .post("/api/jobs")
            .authorization_bearer(app.admin_token())
            .json(&json!({
                "company_id": company_id,
                "title": title,
                "salary_min": min,
                "salary_max": max,
            }))
            .await
            .assert_status_ok();
    }

    let response = app
        .server
        .get("/api/companies/stat")
        .authorization_bearer(app.user_token())
        .await;

    response.assert_status_ok();
    let stats = response.json::<Vec<CompanySalaryStat>>();

    assert_eq!(
        stats,
        vec![
            CompanySalaryStat {
                company: "Acme".to_string(),
                avg_salary: 137500.0,
                high_salary: 1,
            },
            CompanySalaryStat {
                company: "Globex".to_string(),
                avg_salary: 60000.0,
                high_salary: 0,
            },
        ]
    );
}

#[tokio::test]
async fn test_salary_stats_requires_token() {
    let app = common::create_test_app();

    app.server
        .get("/api/companies/stat")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_companies() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/api/companies")
        .authorization_bearer(app.admin_token())
        .json(&json!({ "name": "Acme" }))
        .await;
    response.assert_status_ok();
    let created = response.json::<Company>();
    assert_eq!(created.name, "Acme");

    let companies = app
        .server
        .get("/api/companies")
        .authorization_bearer(app.user_token())
        .await
        .json::<Vec<Company>>();

    assert_eq!(companies, vec![created]);
}

#[tokio::test]
async fn test_create_company_validation() {
    let app = common::create_test_app();

    for name in ["".to_string(), "x".repeat(129)] {
        let response = app
            .server
            .post("/api/companies")
            .authorization_bearer(app.admin_token())
            .json(&json!({ "name": name }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_create_company_requires_admin() {
    let app = common::create_test_app();

    app.server
        .post("/api/companies")
        .authorization_bearer(app.user_token())
        .json(&json!({ "name": "Acme" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);
}
