//! HS256 token issuing and validation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde_json::json;

use crate::domain::claims::Claims;
use crate::error::AppError;

/// Signs and verifies bearer tokens with a process-wide shared secret.
///
/// Tokens are self-contained: there is no revocation list, so a token stays
/// valid until `exp` even if the user is deleted.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Creates a codec for `secret` issuing tokens valid for `ttl`.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for a user, starting now.
    pub fn issue(&self, user_id: i64, is_admin: bool) -> Result<String, AppError> {
        self.issue_at(user_id, is_admin, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    pub fn issue_at(
        &self,
        user_id: i64,
        is_admin: bool,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            user_id,
            is_admin: is_admin.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// Signs arbitrary claims.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Token signing failed", json!({ "reason": e.to_string() }))
        })
    }

    /// Verifies signature and expiration and returns the claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, expired or forged tokens.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "Token expired",
                    ErrorKind::InvalidSignature => "Invalid token signature",
                    _ => "Invalid token",
                };
                AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::claims::AdminFlag;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-jwt-secret", Duration::hours(24))
    }

    #[test]
    fn test_issue_and_decode() {
        let codec = codec();
        let token = codec.issue(42, true).unwrap();

        let claims = codec.decode(&token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.is_admin, AdminFlag::Bool(true));
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = codec();
        let token = codec
            .issue_at(1, false, Utc::now() - Duration::hours(25))
            .unwrap();

        let err = codec.decode(&token).unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = codec().issue(1, false).unwrap();
        let other = TokenCodec::new("another-secret", Duration::hours(24));

        assert!(matches!(
            other.decode(&token),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            codec().decode("not.a.token"),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_numeric_admin_claim_roundtrip() {
        let codec = codec();
        let claims = Claims {
            user_id: 3,
            is_admin: AdminFlag::Number(1.0),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = codec.encode_claims(&claims).unwrap();

        let decoded = codec.decode(&token).unwrap();

        assert!(decoded.is_admin.is_admin());
    }
}
