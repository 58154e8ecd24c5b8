//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Company`] - An employer
//! - [`Job`] - A job posting owned by a company
//! - [`User`] - A registered account
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! (`NewJob`, `NewUser`) and derived read models (`JobListing`, `UserSummary`,
//! `CompanySalaryStat`).

pub mod company;
pub mod job;
pub mod user;

pub use company::{Company, CompanySalaryStat};
pub use job::{Job, JobListing, JobWithCompany, NewJob};
pub use user::{NewUser, User, UserSummary};
