use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single close-price data point (timestamp → close).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// How long a cached series is considered fresh before re-fetching.
pub const CACHE_TTL_SECONDS: i64 = 300;

/// One cached fetch result for a symbol.
///
/// The series may be empty: an empty series means the symbol had no data
/// (or the fetch failed), and caching it prevents re-hitting the API for
/// a known-bad symbol on every valuation pass within the TTL window.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub series: Vec<PricePoint>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Whether this entry is still within the TTL window at `now`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < Duration::seconds(CACHE_TTL_SECONDS)
    }
}

/// Session-scoped cache of fetched price series, one entry per symbol.
///
/// Lives for one interactive session and is never persisted. There is no
/// eviction beyond overwrite-on-refresh: the entry count is bounded in
/// practice by portfolio size (one entry per distinct symbol ever queried),
/// and entries for deleted holdings simply age out with the session.
///
/// The cache is a plain value owned by the facade and passed `&mut` into
/// the services — single writer by construction, no locking, no globals.
#[derive(Debug, Clone, Default)]
pub struct PriceCache {
    entries: HashMap<String, CacheEntry>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached series for a symbol if its entry is still fresh at `now`.
    #[must_use]
    pub fn get_fresh(&self, symbol: &str, now: DateTime<Utc>) -> Option<&[PricePoint]> {
        self.entries
            .get(symbol)
            .filter(|e| e.is_fresh(now))
            .map(|e| e.series.as_slice())
    }

    /// Store a fetch result, overwriting any prior entry for this symbol.
    pub fn insert(&mut self, symbol: impl Into<String>, series: Vec<PricePoint>, now: DateTime<Utc>) {
        self.entries.insert(
            symbol.into(),
            CacheEntry {
                series,
                fetched_at: now,
            },
        );
    }

    /// When the entry for a symbol was last fetched (fresh or not).
    #[must_use]
    pub fn fetched_at(&self, symbol: &str) -> Option<DateTime<Utc>> {
        self.entries.get(symbol).map(|e| e.fetched_at)
    }

    /// Number of distinct symbols with a cache entry.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.entries.len()
    }

    /// Clear all cached data.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
