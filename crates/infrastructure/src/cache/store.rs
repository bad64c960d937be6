use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use uptime_edge_application::ports::StatusCache;

struct CacheSlot {
    body: String,
    expires_at: Instant,
}

impl CacheSlot {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Concurrent in-memory TTL cache for serialized status bodies.
///
/// Expired slots are removed lazily on read; inserts sweep expired slots
/// once the map reaches `max_entries`, so the map stays bounded without a
/// background task.
pub struct InMemoryStatusCache {
    entries: DashMap<String, CacheSlot>,
    max_entries: usize,
}

impl InMemoryStatusCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sweep_expired(&self, now: Instant) {
        self.entries.retain(|_, slot| !slot.is_expired(now));
    }

    fn evict_one(&self) {
        let victim = self.entries.iter().next().map(|e| e.key().clone());
        if let Some(key) = victim {
            self.entries.remove(&key);
            debug!(key, "Evicted cache entry to stay within capacity");
        }
    }
}

#[async_trait]
impl StatusCache for InMemoryStatusCache {
    async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        // The shard guard must drop before `remove` touches the same shard.
        let (body, expired) = match self.entries.get(key) {
            Some(slot) if !slot.is_expired(now) => (Some(slot.body.clone()), false),
            Some(_) => (None, true),
            None => (None, false),
        };
        if expired {
            self.entries.remove(key);
        }
        body
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) {
        let now = Instant::now();
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(key) {
            self.sweep_expired(now);
            if self.entries.len() >= self.max_entries {
                self.evict_one();
            }
        }
        self.entries.insert(
            key.to_string(),
            CacheSlot {
                body: value,
                expires_at: now + ttl,
            },
        );
    }
}
