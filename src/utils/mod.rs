//! Utility helpers shared across layers.
//!
//! - [`clock`] - Injectable time source
//! - [`jwt`] - Bearer token signing and validation
//! - [`password`] - Argon2id password hashing

pub mod clock;
pub mod jwt;
pub mod password;
