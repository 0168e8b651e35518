//! Query-keyed cache for finished video lookups.
//!
//! Entries expire after a fixed TTL and the table never holds more than
//! `capacity` queries.

use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use std::time::{Duration, Instant};

use moka::future::Cache;
use scout_core::YouTubeVideo;

/// Source of "now" for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: StdMutex<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: StdMutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = *self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        self.origin + offset
    }
}

#[derive(Debug, Clone)]
struct CachedLookup {
    videos: Vec<YouTubeVideo>,
    expires_at: Instant,
}

/// Finished lookups keyed by the exact query text.
///
/// Capacity and eviction are handled by `moka`; freshness is decided against
/// the injected [`Clock`] so expiry does not depend on wall time in tests.
pub struct VideoCache {
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
    entries: Cache<String, CachedLookup>,
}

impl VideoCache {
    /// Cache on the system clock. A `capacity` of zero disables caching.
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
        let entries = Cache::builder()
            .max_capacity(capacity as u64)
            .time_to_live(ttl)
            .build();
        Self {
            ttl,
            capacity,
            clock,
            entries,
        }
    }

    /// Fresh entry for `query`, if any. Expired entries are removed on read.
    pub async fn get(&self, query: &str) -> Option<Vec<YouTubeVideo>> {
        let cached = self.entries.get(query).await?;
        if cached.expires_at > self.clock.now() {
            return Some(cached.videos);
        }
        self.entries.invalidate(query).await;
        None
    }

    pub async fn insert(&self, query: &str, videos: Vec<YouTubeVideo>) {
        if self.capacity == 0 {
            return;
        }
        let lookup = CachedLookup {
            videos,
            expires_at: self.clock.now() + self.ttl,
        };
        self.entries.insert(query.to_owned(), lookup).await;
    }

    /// Number of live entries after pending evictions have been applied.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
