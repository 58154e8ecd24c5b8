//! Bearer token claims and the authenticated principal.

use serde::{Deserialize, Serialize};

/// The `is_admin` claim as it appears on the wire.
///
/// Tokens may carry the flag as a JSON boolean or as a number (`1` meaning
/// admin). Decoding accepts both; [`AdminFlag::is_admin`] normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdminFlag {
    Bool(bool),
    Number(f64),
}

impl AdminFlag {
    pub fn is_admin(self) -> bool {
        match self {
            AdminFlag::Bool(flag) => flag,
            AdminFlag::Number(n) => n == 1.0,
        }
    }
}

impl Default for AdminFlag {
    fn default() -> Self {
        AdminFlag::Bool(false)
    }
}

impl From<bool> for AdminFlag {
    fn from(flag: bool) -> Self {
        AdminFlag::Bool(flag)
    }
}

/// JWT payload issued at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    #[serde(default)]
    pub is_admin: AdminFlag,
    /// Issued at (Unix timestamp).
    #[serde(default)]
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// The caller identity established by the auth middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub is_admin: bool,
}

impl From<&Claims> for AuthUser {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.user_id,
            is_admin: claims.is_admin.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_bool_admin_claim() {
        let claims = decode(json!({ "user_id": 1, "is_admin": true, "exp": 10 }));
        assert!(AuthUser::from(&claims).is_admin);
    }

    #[test]
    fn test_numeric_admin_claim() {
        let claims = decode(json!({ "user_id": 1, "is_admin": 1, "exp": 10 }));
        assert_eq!(claims.is_admin, AdminFlag::Number(1.0));
        assert!(AuthUser::from(&claims).is_admin);
    }

    #[test]
    fn test_numeric_zero_is_not_admin() {
        let claims = decode(json!({ "user_id": 1, "is_admin": 0, "exp": 10 }));
        assert!(!AuthUser::from(&claims).is_admin);
    }

    #[test]
    fn test_missing_admin_claim_is_not_admin() {
        let claims = decode(json!({ "user_id": 1, "exp": 10 }));
        assert!(!AuthUser::from(&claims).is_admin);
    }

    #[test]
    fn test_issued_claim_serializes_as_bool() {
        let claims = Claims {
            user_id: 9,
            is_admin: true.into(),
            iat: 0,
            exp: 10,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["is_admin"], true);
    }
}
