//! Result cache.
//!
//! Memoizes compositing runs keyed on a fingerprint of the full request
//! tuple. Entries carry a TTL; expired entries count as misses and are
//! evicted lazily on read. Failed computes are cached too, deliberately:
//! a broken input should not be re-composited on every retry within the
//! TTL window.
//!
//! The cache is an explicitly constructed object rather than a process
//! global so test harnesses can run isolated instances; a mutex-guarded
//! map is enough since writers of different fingerprints need no ordering.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::generator::MockupResult;
use crate::industry::{Industry, LogoPosition, MockupType};
use crate::logo::LogoSource;

/// Default entry lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

struct CacheEntry {
    result: MockupResult,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.ttl
    }
}

/// Entry count snapshot for operational visibility.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
}

#[derive(Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `key` if present and unexpired;
    /// otherwise run `compute`, store its outcome (success or failure)
    /// under a fresh timestamp and return it.
    pub fn get_or_compute<F>(&self, key: &str, ttl: Duration, compute: F) -> MockupResult
    where
        F: FnOnce() -> MockupResult,
    {
        let now = Instant::now();
        {
            let mut entries = self.entries.lock();
            match entries.get(key) {
                Some(entry) if !entry.expired(now) => {
                    debug!(key, "mockup cache hit");
                    return entry.result.clone();
                }
                Some(_) => {
                    // Lazy eviction of the stale entry.
                    entries.remove(key);
                }
                None => {}
            }
        }

        // Compute outside the lock; a concurrent miss on the same key may
        // compute twice, which is acceptable for an idempotent pipeline.
        let result = compute();
        self.entries.lock().insert(
            key.to_string(),
            CacheEntry {
                result: result.clone(),
                created_at: Instant::now(),
                ttl,
            },
        );
        result
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.entries.lock();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: entries.values().filter(|e| e.expired(now)).count(),
        }
    }
}

/// Deterministic fingerprint over the full generation tuple. Two requests
/// with identical tuples must map to the same key.
pub fn mockup_fingerprint(
    logo: &LogoSource,
    mockup_type: MockupType,
    industry: Industry,
    company_name: &str,
    tagline: Option<&str>,
    position: Option<LogoPosition>,
) -> String {
    format!(
        "mockup:{}:{}:{}:{}:{}:{}",
        mockup_type.as_str(),
        industry.as_str(),
        company_name,
        tagline.unwrap_or(""),
        position.map(|p| p.as_str()).unwrap_or("-"),
        logo.identity(),
    )
}
