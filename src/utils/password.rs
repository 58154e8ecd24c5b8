//! Password hashing and verification using Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;
use serde_json::json;

/// Hashes a password with a random salt.
///
/// Returns a PHC-formatted string safe for database storage. This is CPU
/// heavy; async callers should run it on the blocking pool.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            AppError::internal(
                "Password hashing failed",
                json!({ "reason": e.to_string() }),
            )
        })
}

/// Checks a password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`. A stored hash that cannot be parsed is an
/// internal error.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        AppError::internal(
            "Invalid password hash format",
            json!({ "reason": e.to_string() }),
        )
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::internal(
            "Password verification failed",
            json!({ "reason": e.to_string() }),
        )),
    }
}
