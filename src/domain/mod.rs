//! Domain layer containing business entities and contracts.
//!
//! This module defines entities, repository interfaces, the listing cache key
//! policy and token claims, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`listing_key`] - Cache key derivation for listing snapshots
//! - [`claims`] - Bearer token claims and the authenticated principal
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod claims;
pub mod entities;
pub mod listing_key;
pub mod repositories;
