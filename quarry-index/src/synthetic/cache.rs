//! Generation cache: Moka LRU in-memory, one plane per dispatch mode.
//! Per-directory results are keyed by (handler, directory) so invalidating a
//! directory leaves the other directories' entries intact.

use std::sync::Arc;

use moka::sync::Cache;

use super::handler::SyntheticAddressMap;

/// Cache key combining handler name with the requested directory.
type DirectoryKey = (String, String);

/// A handler's successful output, shared between the cache and consumers.
pub type HandlerResult = Arc<Vec<SyntheticAddressMap>>;

/// In-memory cache of successful generation results.
///
/// Only successes are cached. Failed or panicked invocations are retried on
/// the next dispatch.
pub struct SyntheticCache {
    per_directory: Cache<DirectoryKey, HandlerResult>,
    whole_workspace: Cache<String, HandlerResult>,
}

impl SyntheticCache {
    /// Create a cache holding up to `capacity` results per plane.
    pub fn new(capacity: u64) -> Self {
        Self {
            per_directory: Cache::builder()
                .max_capacity(capacity)
                .support_invalidation_closures()
                .build(),
            whole_workspace: Cache::builder()
                .max_capacity(capacity)
                .support_invalidation_closures()
                .build(),
        }
    }

    /// Get a cached per-directory result.
    pub fn get_directory(&self, handler: &str, directory: &str) -> Option<HandlerResult> {
        self.per_directory
            .get(&(handler.to_string(), directory.to_string()))
    }

    /// Insert a per-directory result.
    pub fn insert_directory(&self, handler: &str, directory: &str, result: HandlerResult) {
        self.per_directory
            .insert((handler.to_string(), directory.to_string()), result);
    }

    /// Get a cached whole-workspace result.
    pub fn get_workspace(&self, handler: &str) -> Option<HandlerResult> {
        self.whole_workspace.get(handler)
    }

    /// Insert a whole-workspace result.
    pub fn insert_workspace(&self, handler: &str, result: HandlerResult) {
        self.whole_workspace.insert(handler.to_string(), result);
    }

    /// Invalidate every per-directory entry for one directory, across all
    /// handlers. Whole-workspace entries are left alone.
    pub fn invalidate_directory(&self, directory: &str) {
        let directory = directory.to_string();
        let _ = self
            .per_directory
            .invalidate_entries_if(move |key, _| key.1 == directory);
    }

    /// Invalidate one handler's entries on both planes.
    pub fn invalidate_handler(&self, handler: &str) {
        let name = handler.to_string();
        let _ = self
            .per_directory
            .invalidate_entries_if(move |key, _| key.0 == name);
        self.whole_workspace.invalidate(handler);
    }

    /// Returns the number of entries across both planes.
    pub fn entry_count(&self) -> u64 {
        self.per_directory.entry_count() + self.whole_workspace.entry_count()
    }
}

impl Default for SyntheticCache {
    fn default() -> Self {
        // Default: cache up to 10,000 handler results per plane
        Self::new(10_000)
    }
}
