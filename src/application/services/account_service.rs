//! User account administration.

use serde_json::json;
use std::sync::Arc;

use crate::domain::claims::AuthUser;
use crate::domain::entities::UserSummary;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Admin-facing operations on user accounts.
pub struct AccountService<U: UserRepository + ?Sized> {
    repository: Arc<U>,
}

impl<U: UserRepository + ?Sized> AccountService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Lists all accounts without their password hashes.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        self.repository.list().await
    }

    /// Deletes the account identified by the raw path segment `target_id`.
    ///
    /// The self-delete check compares the raw segment against the actor's id
    /// before any parsing, so `"5"` is refused for user 5.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the actor targets itself.
    /// Returns [`AppError::Validation`] when `target_id` is not an integer.
    /// Deleting an id that does not exist is not an error.
    pub async fn delete_user(&self, actor: &AuthUser, target_id: &str) -> Result<(), AppError> {
        if target_id == actor.user_id.to_string() {
            return Err(AppError::forbidden(
                "Cannot delete yourself",
                json!({ "user_id": actor.user_id }),
            ));
        }

        let id: i64 = target_id.parse().map_err(|_| {
            AppError::bad_request("Invalid user id", json!({ "id": target_id }))
        })?;

        let affected = self.repository.delete(id).await?;
        tracing::info!(
            actor = actor.user_id,
            user_id = id,
            affected,
            "User deleted"
        );

        Ok(())
    }
}
