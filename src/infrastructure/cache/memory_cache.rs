//! In-process cache with per-key expiration.

use super::service::{CacheError, CacheResult, CacheService};
use crate::utils::clock::{Clock, SystemClock};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Cache kept in the serving process, with the same expiry semantics as Redis.
///
/// Expired entries are dropped when their key is read, and every write sweeps
/// the whole map, so it only ever holds the live keys plus those that expired
/// since the last write. Time comes from an injected [`Clock`], which lets
/// tests drive expiration without sleeping.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Creates a cache backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        debug!("Using MemoryCache");
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Expiration instant of a live key, if any.
    pub fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let now = self.clock.now();
        let entries = self.entries.lock().ok()?;
        entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.expires_at)
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| CacheError::OperationError("memory cache lock poisoned".to_string()))
    }

    fn deadline(&self, ttl: Duration) -> CacheResult<DateTime<Utc>> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| CacheError::OperationError(format!("invalid TTL: {}", e)))?;
        Ok(self.clock.now() + ttl)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = self.clock.now();
        let mut entries = self.lock()?;

        let value = entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone());

        if value.is_none() {
            entries.remove(key);
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let now = self.clock.now();
        let expires_at = self.deadline(ttl)?;
        let mut entries = self.lock()?;

        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<bool> {
        let now = self.clock.now();
        let expires_at = self.deadline(ttl)?;
        let mut entries = self.lock()?;

        if let Some(entry) = entries.get_mut(key)
            && entry.is_live(now)
        {
            entry.expires_at = expires_at;
            return Ok(true);
        }

        entries.remove(key);
        Ok(false)
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.entries.lock().is_ok()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
