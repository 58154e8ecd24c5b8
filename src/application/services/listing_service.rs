//! Read-through cached job listings with invalidate-on-write.
//!
//! # Consistency
//!
//! Snapshots are JSON arrays of [`JobListing`] keyed by [`ListingKey`]. A
//! snapshot is either absent or equal to some earlier database result for its
//! predicate. Staleness is bounded by the TTL, except where invalidation is
//! deliberately narrow:
//!
//! - creating a job deletes `jobs:all` and `jobs:search:<title>` only, so other
//!   keywords that now match the job keep serving the old snapshot
//! - deleting a job deletes `jobs:all` only, so search snapshots may keep
//!   returning the deleted job until they expire
//!
//! There is no locking between the read-then-populate sequence and writers.
//! Two concurrent misses both query the database and the last write wins. A
//! reader that queried the database before a concurrent create committed can
//! repopulate the cache after that create's invalidation, resurrecting a
//! stale snapshot until the TTL runs out.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tracing::{debug, warn};

use crate::domain::entities::{Job, JobListing, NewJob};
use crate::domain::listing_key::{
    ListingKey, keys_invalidated_by_create, keys_invalidated_by_delete,
};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Default lifetime of a listing snapshot, refreshed on every hit.
pub const DEFAULT_LISTING_TTL: Duration = Duration::from_secs(10 * 60);

const LOOKUPS_METRIC: &str = "listing_cache_lookups_total";

/// Serves job listings through the cache and keeps it coherent on writes.
///
/// Cache failures never reach the caller: reads fall back to the database and
/// failed writes or deletes are logged.
pub struct ListingService<J: JobRepository + ?Sized> {
    job_repository: Arc<J>,
    cache: Arc<dyn CacheService>,
    ttl: Duration,
}

impl<J: JobRepository + ?Sized> ListingService<J> {
    /// Creates a listing service with the default snapshot TTL.
    pub fn new(job_repository: Arc<J>, cache: Arc<dyn CacheService>) -> Self {
        Self::with_ttl(job_repository, cache, DEFAULT_LISTING_TTL)
    }

    pub fn with_ttl(job_repository: Arc<J>, cache: Arc<dyn CacheService>, ttl: Duration) -> Self {
        Self {
            job_repository,
            cache,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Lists jobs, optionally filtered by keyword.
    ///
    /// # Flow
    ///
    /// 1. Derive the cache key from the keyword
    /// 2. On a hit that decodes, slide the expiration and return it
    /// 3. Otherwise query the database (title or company name contains the
    ///    keyword, case-insensitive), flatten, store the snapshot and return
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database query fails.
    pub async fn list_jobs(&self, keyword: Option<&str>) -> Result<Vec<JobListing>, AppError> {
        let key = ListingKey::from_keyword(keyword);
        let cache_key = key.cache_key();

        if let Some(listings) = self.read_snapshot(&cache_key).await {
            return Ok(listings);
        }

        let listings: Vec<JobListing> = self
            .job_repository
            .list_with_company(key.keyword().map(str::to_string))
            .await?
            .into_iter()
            .map(JobListing::from)
            .collect();

        self.write_snapshot(&cache_key, &listings).await;

        Ok(listings)
    }

    /// Creates a job and invalidates the snapshots it directly affects.
    ///
    /// The company is not checked up front and empty titles are accepted.
    /// Invalidation runs only after the insert succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails (for example an
    /// unknown `company_id`). Invalidation failures are not reported.
    pub async fn create_job(&self, new_job: NewJob) -> Result<Job, AppError> {
        let job = self.job_repository.create(new_job).await?;

        for key in keys_invalidated_by_create(&job.title) {
            self.invalidate(&key).await;
        }

        debug!(job_id = job.id, "Job created");
        Ok(job)
    }

    /// Deletes a job and invalidates the unfiltered snapshot.
    ///
    /// Deleting an id that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_job(&self, id: i64) -> Result<(), AppError> {
        let affected = self.job_repository.delete(id).await?;
        if affected == 0 {
            debug!(job_id = id, "Delete matched no job");
        }

        for key in keys_invalidated_by_delete() {
            self.invalidate(&key).await;
        }

        Ok(())
    }

    async fn read_snapshot(&self, key: &str) -> Option<Vec<JobListing>> {
        let raw = match self.cache.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "Listing cache MISS");
                counter!(LOOKUPS_METRIC, "result" => "miss").increment(1);
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "Listing cache read failed, using database");
                counter!(LOOKUPS_METRIC, "result" => "error").increment(1);
                return None;
            }
        };

        let listings = match serde_json::from_str::<Vec<JobListing>>(&raw) {
            Ok(listings) => listings,
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable listing snapshot");
                counter!(LOOKUPS_METRIC, "result" => "corrupt").increment(1);
                return None;
            }
        };

        if let Err(e) = self.cache.expire(key, self.ttl).await {
            warn!(key, error = %e, "Failed to refresh listing snapshot TTL");
        }

        debug!(key, count = listings.len(), "Listing cache HIT");
        counter!(LOOKUPS_METRIC, "result" => "hit").increment(1);
        Some(listings)
    }

    async fn write_snapshot(&self, key: &str, listings: &[JobListing]) {
        let encoded = match serde_json::to_string(listings) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode listing snapshot");
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &encoded, self.ttl).await {
            warn!(key, error = %e, "Failed to store listing snapshot");
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!(key, error = %e, "Failed to invalidate listing snapshot");
        }
    }
}
