//! Cache key derivation for job listing snapshots.
//!
//! A listing query has two shapes: the unfiltered listing and a keyword
//! search. Each maps to exactly one cache key:
//!
//! - no keyword (or an empty one) → `jobs:all`
//! - keyword `K` → `jobs:search:K`
//!
//! The keyword is embedded verbatim. The database match is case-insensitive
//! but the key is not, so `Eng` and `eng` are cached separately even though
//! they resolve to the same rows.

use std::fmt;

/// Key of the unfiltered listing snapshot.
pub const ALL_JOBS_KEY: &str = "jobs:all";

/// Prefix of keyword search snapshot keys.
pub const SEARCH_KEY_PREFIX: &str = "jobs:search:";

/// The predicate of a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKey<'a> {
    All,
    Search(&'a str),
}

impl<'a> ListingKey<'a> {
    /// Builds the key for an optional keyword. Empty keywords mean "no filter";
    /// whitespace is not trimmed.
    pub fn from_keyword(keyword: Option<&'a str>) -> Self {
        match keyword {
            Some(k) if !k.is_empty() => ListingKey::Search(k),
            _ => ListingKey::All,
        }
    }

    /// The keyword filter to pass to the repository, if any.
    pub fn keyword(&self) -> Option<&'a str> {
        match *self {
            ListingKey::All => None,
            ListingKey::Search(k) => Some(k),
        }
    }

    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ListingKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKey::All => f.write_str(ALL_JOBS_KEY),
            ListingKey::Search(k) => write!(f, "{}{}", SEARCH_KEY_PREFIX, k),
        }
    }
}

/// Keys deleted after a job is created.
///
/// Only the unfiltered key and the search key equal to the new job's exact
/// title. Other keywords that now match the job stay cached until they expire.
pub fn keys_invalidated_by_create(title: &str) -> [String; 2] {
    [
        ALL_JOBS_KEY.to_string(),
        format!("{}{}", SEARCH_KEY_PREFIX, title),
    ]
}

/// Keys deleted after a job is removed. Search snapshots are left alone.
pub fn keys_invalidated_by_delete() -> [String; 1] {
    [ALL_JOBS_KEY.to_string()]
}
