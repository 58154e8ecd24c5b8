#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use job_board::api;
use job_board::api::handlers::health_handler;
use job_board::domain::entities::{
    Company, CompanySalaryStat, Job, JobWithCompany, NewJob, NewUser, User, UserSummary,
};
use job_board::domain::repositories::{CompanyRepository, JobRepository, UserRepository};
use job_board::error::AppError;
use job_board::infrastructure::cache::{CacheService, MemoryCache};
use job_board::state::AppState;
use job_board::utils::jwt::TokenCodec;
use job_board::utils::password::hash_password;

pub const TEST_SECRET: &str = "test-jwt-secret";
pub const LISTING_TTL: Duration = Duration::from_secs(600);

/// Tables kept in memory, with the same constraints the schema enforces.
#[derive(Default)]
pub struct InMemoryStore {
    companies: Mutex<Vec<Company>>,
    jobs: Mutex<Vec<Job>>,
    users: Mutex<Vec<User>>,
    next_id: AtomicUsize,
    /// Number of listing queries that reached the store.
    pub listing_queries: AtomicUsize,
    /// Number of company count queries.
    pub company_counts: AtomicUsize,
}

impl InMemoryStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1
    }

    pub fn listing_queries(&self) -> usize {
        self.listing_queries.load(Ordering::SeqCst)
    }

    pub fn job_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn create(&self, new_job: NewJob) -> Result<Job, AppError> {
        let company_exists = self
            .companies
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.id == new_job.company_id);
        if !company_exists {
            return Err(AppError::internal(
                "Failed to create job",
                json!({ "reason": "foreign key violation" }),
            ));
        }

        let job = Job {
            id: self.next_id(),
            company_id: new_job.company_id,
            title: new_job.title,
            salary_min: new_job.salary_min,
            salary_max: new_job.salary_max,
        };
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok((before - jobs.len()) as u64)
    }

    async fn list_with_company(
        &self,
        keyword: Option<String>,
    ) -> Result<Vec<JobWithCompany>, AppError> {
        self.listing_queries.fetch_add(1, Ordering::SeqCst);

        let companies = self.companies.lock().unwrap();
        let needle = keyword.map(|k| k.to_lowercase());

        let mut rows: Vec<JobWithCompany> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter_map(|job| {
                let company = companies.iter().find(|c| c.id == job.company_id)?;
                Some(JobWithCompany {
                    id: job.id,
                    company_id: job.company_id,
                    company_name: company.name.clone(),
                    title: job.title.clone(),
                    salary_min: job.salary_min,
                    salary_max: job.salary_max,
                })
            })
            .filter(|row| match &needle {
                Some(n) => {
                    row.title.to_lowercase().contains(n)
                        || row.company_name.to_lowercase().contains(n)
                }
                None => true,
            })
            .collect();

        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn create(&self, name: &str) -> Result<Company, AppError> {
        let company = Company::new(self.next_id(), name.to_string());
        self.companies.lock().unwrap().push(company.clone());
        Ok(company)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.company_counts.fetch_add(1, Ordering::SeqCst);
        Ok(self.companies.lock().unwrap().len() as i64)
    }

    async fn list(&self) -> Result<Vec<Company>, AppError> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn salary_stats(&self) -> Result<Vec<CompanySalaryStat>, AppError> {
        let companies = self.companies.lock().unwrap();
        let jobs = self.jobs.lock().unwrap();

        let mut names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();

        let stats = names
            .into_iter()
            .filter_map(|name| {
                let ids: Vec<i64> = companies
                    .iter()
                    .filter(|c| c.name == name)
                    .map(|c| c.id)
                    .collect();
                let own: Vec<&Job> = jobs.iter().filter(|j| ids.contains(&j.company_id)).collect();
                if own.is_empty() {
                    return None;
                }
                let sum: i64 = own
                    .iter()
                    .map(|j| (j.salary_min + j.salary_max) / 2)
                    .sum();
                Some(CompanySalaryStat {
                    company: name.to_string(),
                    avg_salary: (sum as f64 / own.len() as f64).round(),
                    high_salary: own.iter().filter(|j| j.salary_min > 100_000).count() as i64,
                })
            })
            .collect();

        Ok(stats)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_username_key" }),
            ));
        }

        let user = User {
            id: self.next_id(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_admin: new_user.is_admin,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<UserSummary>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(UserSummary::from)
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok((before - users.len()) as u64)
    }

    async fn set_admin(&self, username: &str, is_admin: bool) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.username == username) {
            Some(user) => {
                user.is_admin = is_admin;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A running test application with handles to its backing stores.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub tokens: TokenCodec,
}

impl TestApp {
    /// Seeds a user directly in the store.
    pub async fn seed_user(&self, username: &str, password: &str, is_admin: bool) -> User {
        UserRepository::create(
            self.store.as_ref(),
            NewUser {
                username: username.to_string(),
                password_hash: hash_password(password).unwrap(),
                is_admin,
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_company(&self, name: &str) -> Company {
        CompanyRepository::create(self.store.as_ref(), name)
            .await
            .unwrap()
    }

    pub fn token_for(&self, user_id: i64, is_admin: bool) -> String {
        self.tokens.issue(user_id, is_admin).unwrap()
    }

    pub fn admin_token(&self) -> String {
        self.token_for(1000, true)
    }

    pub fn user_token(&self) -> String {
        self.token_for(2000, false)
    }

    pub async fn cached(&self, key: &str) -> Option<String> {
        self.cache.get(key).await.unwrap()
    }
}

/// Router without path normalization, as served under test.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes(state.clone()))
        .with_state(state)
}

/// Builds state over in-memory repositories and an in-process cache.
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>, Arc<MemoryCache>, TokenCodec) {
    let store = Arc::new(InMemoryStore::default());
    let cache = Arc::new(MemoryCache::new());
    let tokens = TokenCodec::new(TEST_SECRET, chrono::Duration::hours(24));

    let state = AppState::from_repositories(
        store.clone(),
        store.clone(),
        store.clone(),
        cache.clone(),
        tokens.clone(),
        LISTING_TTL,
    );

    (state, store, cache, tokens)
}

pub fn create_test_app() -> TestApp {
    let (state, store, cache, tokens) = create_test_state();
    let server = TestServer::new(test_router(state)).unwrap();

    TestApp {
        server,
        store,
        cache,
        tokens,
    }
}
