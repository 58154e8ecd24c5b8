//! DTOs for registration and login.

use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/register` and `/api/login`.
///
/// Registration rejects empty fields with 400. Login does not check them; an
/// empty username or password simply fails the credential check with 401.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub is_admin: bool,
    pub user_id: i64,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
