//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CompanyRepository`] - Companies and salary statistics
//! - [`JobRepository`] - Job postings and the joined listing query
//! - [`UserRepository`] - User accounts
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod company_repository;
pub mod job_repository;
pub mod user_repository;

pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
