//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgCompanyRepository`] - Companies and salary statistics
//! - [`PgJobRepository`] - Job postings and the listing join
//! - [`PgUserRepository`] - User accounts

pub mod pg_company_repository;
pub mod pg_job_repository;
pub mod pg_user_repository;

pub use pg_company_repository::PgCompanyRepository;
pub use pg_job_repository::PgJobRepository;
pub use pg_user_repository::PgUserRepository;
