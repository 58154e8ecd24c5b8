//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value store with per-key expiration.
///
/// Values are opaque strings (serialized listing snapshots). Implementations
/// must be safe to share between request tasks. Errors are reported to the
/// caller, which decides whether to absorb them; the listing service always
/// does.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache with an injectable clock
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Reads the value stored at `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss or expired entry
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` at `key`, expiring `ttl` from now. Overwrites any
    /// previous value and expiration.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Resets the expiration of an existing key to `ttl` from now.
    ///
    /// Returns `Ok(false)` if the key does not exist.
    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<bool>;

    /// Removes a key. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
