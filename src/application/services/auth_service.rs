//! Authentication service: registration, login and token authorization.

use serde_json::json;
use std::sync::Arc;

use crate::domain::claims::AuthUser;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::TokenCodec;
use crate::utils::password::{hash_password, verify_password};

/// Longest username the `users` table accepts.
pub const MAX_USERNAME_LEN: usize = 64;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user_id: i64,
    pub is_admin: bool,
}

/// Service for account credentials and bearer-token authorization.
///
/// Stateless: tokens are signed JWTs checked against the shared secret only,
/// with no session store and no revocation.
pub struct AuthService<U: UserRepository + ?Sized> {
    repository: Arc<U>,
    tokens: TokenCodec,
}

impl<U: UserRepository + ?Sized> AuthService<U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for DB operations
    /// - `tokens` - codec holding the signing secret and token lifetime
    pub fn new(repository: Arc<U>, tokens: TokenCodec) -> Self {
        Self { repository, tokens }
    }

    /// Registers a regular (non-admin) account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if username or password is empty, or
    /// the username is longer than [`MAX_USERNAME_LEN`] characters.
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::bad_request(
                "Invalid params",
                json!({ "reason": "username and password are required" }),
            ));
        }

        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(AppError::bad_request(
                "Invalid params",
                json!({ "reason": "username too long", "max_length": MAX_USERNAME_LEN }),
            ));
        }

        let password_hash = hash_blocking(password.to_string()).await?;

        self.repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
                is_admin: false,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "User already exists",
                    json!({ "username": username }),
                ),
                other => other,
            })
    }

    /// Verifies credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the same message whether the
    /// username is unknown or the password is wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            return Err(bad_credentials());
        };

        let matches = verify_blocking(password.to_string(), user.password_hash.clone()).await?;
        if !matches {
            return Err(bad_credentials());
        }

        let token = self.tokens.issue(user.id, user.is_admin)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            token,
            user_id: user.id,
            is_admin: user.is_admin,
        })
    }

    /// Validates a bearer token and, optionally, the admin claim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, expired
    /// or not signed with our secret.
    /// Returns [`AppError::Forbidden`] if `require_admin` is set and the
    /// token's `is_admin` claim is neither `true` nor `1`.
    pub fn authorize(&self, token: &str, require_admin: bool) -> Result<AuthUser, AppError> {
        let claims = self.tokens.decode(token)?;
        let user = AuthUser::from(&claims);

        if require_admin && !user.is_admin {
            return Err(AppError::forbidden(
                "Admin only",
                json!({ "user_id": user.user_id }),
            ));
        }

        Ok(user)
    }
}

fn bad_credentials() -> AppError {
    AppError::unauthorized(
        "Invalid username or password",
        json!({ "reason": "Bad credentials" }),
    )
}

async fn hash_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal("Hashing task failed", json!({ "reason": e.to_string() })))?
}

async fn verify_blocking(password: String, password_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| {
            AppError::internal("Verification task failed", json!({ "reason": e.to_string() }))
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::claims::{AdminFlag, Claims};
    use crate::domain::repositories::MockUserRepository;
    use chrono::{Duration, Utc};

    fn codec() -> TokenCodec {
        TokenCodec::new("test-jwt-secret", Duration::hours(24))
    }

    fn stored_user(id: i64, username: &str, password: &str, is_admin: bool) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
            is_admin,
        }
    }

    #[tokio::test]
    async fn test_register_success_hashes_password() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .withf(|u| {
                u.username == "alice"
                    && !u.is_admin
                    && u.password_hash.starts_with("$argon2id$")
                    && u.password_hash != "secret"
            })
            .times(1)
            .returning(|u| {
                Ok(User {
                    id: 1,
                    username: u.username,
                    password_hash: u.password_hash,
                    is_admin: u.is_admin,
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), codec());

        let user = service.register("alice", "secret").await.unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().times(0);

        let service = AuthService::new(Arc::new(mock_repo), codec());

        assert!(matches!(
            service.register("", "secret").await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            service.register("alice", "").await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_long_username() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .withf(|u| u.username.chars().count() == MAX_USERNAME_LEN)
            .times(1)
            .returning(|u| {
                Ok(User {
                    id: 1,
                    username: u.username,
                    password_hash: u.password_hash,
                    is_admin: false,
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), codec());

        let longest = "a".repeat(MAX_USERNAME_LEN);
        assert!(service.register(&longest, "secret").await.is_ok());

        let too_long = "a".repeat(MAX_USERNAME_LEN + 1);
        assert!(matches!(
            service.register(&too_long, "secret").await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), codec());

        let err = service.register("alice", "secret").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let user = stored_user(7, "admin", "root", true);
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_username()
            .withf(|name| name == "admin")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), codec());

        let outcome = service.login("admin", "root").await.unwrap();

        assert_eq!(outcome.user_id, 7);
        assert!(outcome.is_admin);
        let claims = codec().decode(&outcome.token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.is_admin, AdminFlag::Bool(true));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let user = stored_user(1, "alice", "secret", false);
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_username()
            .returning(move |name| Ok((name == "alice").then(|| user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), codec());

        let unknown = service.login("bob", "secret").await.unwrap_err();
        let wrong = service.login("alice", "nope").await.unwrap_err();

        assert!(matches!(unknown, AppError::Unauthorized { .. }));
        assert!(matches!(wrong, AppError::Unauthorized { .. }));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn test_authorize_expired_token() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), codec());
        let token = codec()
            .issue_at(1, true, Utc::now() - Duration::hours(48))
            .unwrap();

        assert!(matches!(
            service.authorize(&token, false),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_authorize_non_admin_on_admin_route() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), codec());
        let token = codec().issue(2, false).unwrap();

        assert!(matches!(
            service.authorize(&token, true),
            Err(AppError::Forbidden { .. })
        ));
        assert_eq!(
            service.authorize(&token, false).unwrap(),
            AuthUser {
                user_id: 2,
                is_admin: false
            }
        );
    }

    #[test]
    fn test_authorize_admin() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), codec());
        let token = codec().issue(5, true).unwrap();

        let user = service.authorize(&token, true).unwrap();

        assert_eq!(user.user_id, 5);
        assert!(user.is_admin);
    }

    #[test]
    fn test_authorize_accepts_numeric_admin_claim() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), codec());
        let token = codec()
            .encode_claims(&Claims {
                user_id: 5,
                is_admin: AdminFlag::Number(1.0),
                iat: Utc::now().timestamp(),
                exp: (Utc::now() + Duration::hours(1)).timestamp(),
            })
            .unwrap();

        assert!(service.authorize(&token, true).unwrap().is_admin);
    }

    #[test]
    fn test_authorize_malformed_token() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), codec());

        assert!(matches!(
            service.authorize("garbage", false),
            Err(AppError::Unauthorized { .. })
        ));
    }
}
