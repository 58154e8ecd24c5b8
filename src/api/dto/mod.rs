//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for JSON deserialization and validator for input
//! validation. Responses reuse the domain read models where their JSON shape
//! already matches the API contract.

pub mod auth;
pub mod companies;
pub mod health;
pub mod jobs;
