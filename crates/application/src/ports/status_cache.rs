use async_trait::async_trait;
use std::time::Duration;

/// Port for the shared edge cache. The backing store is already
/// concurrent-safe; this layer treats it as an opaque capability so tests
/// can swap in an in-memory map.
#[async_trait]
pub trait StatusCache: Send + Sync {
    /// Returns the cached body for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` for at most `ttl`.
    async fn put(&self, key: &str, value: String, ttl: Duration);
}
