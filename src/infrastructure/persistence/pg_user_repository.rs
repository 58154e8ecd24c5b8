//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserSummary};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user accounts.
///
/// Username uniqueness is enforced by the `users_username_key` constraint.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, is_admin)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, is_admin
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(new_user.is_admin)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, is_admin FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserSummary>, AppError> {
        let users =
            sqlx::query_as::<_, UserSummary>("SELECT id, username, is_admin FROM users ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(users)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn set_admin(&self, username: &str, is_admin: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET is_admin = $2 WHERE username = $1")
            .bind(username)
            .bind(is_admin)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
