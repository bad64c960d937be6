use crate::ports::{StatusCache, UptimeProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uptime_edge_domain::{MonitorStatus, StatusError};

/// Whether the response body came from the cache or a fresh upstream fetch.
/// Surfaces on the wire as the `X-Cache` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Miss,
}

impl CacheOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

/// A ready-to-serve status body plus its cache outcome.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub body: String,
    pub outcome: CacheOutcome,
}

/// Deterministic cache key namespaced by monitor id.
pub fn cache_key(monitor_id: &str) -> String {
    format!("status/{}", monitor_id)
}

/// Cache-aside flow for one monitor-status request: cache lookup, upstream
/// fetch on miss, payload transform, cache population.
pub struct GetMonitorStatusUseCase {
    provider: Arc<dyn UptimeProvider>,
    cache: Arc<dyn StatusCache>,
    cache_ttl: Duration,
}

impl GetMonitorStatusUseCase {
    pub fn new(
        provider: Arc<dyn UptimeProvider>,
        cache: Arc<dyn StatusCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl,
        }
    }

    pub async fn execute(&self, monitor_id: &str) -> Result<StatusReport, StatusError> {
        let key = cache_key(monitor_id);

        if let Some(body) = self.cache.get(&key).await {
            if serde_json::from_str::<MonitorStatus>(&body).is_ok() {
                debug!(monitor_id, "Serving monitor status from cache");
                return Ok(StatusReport {
                    body,
                    outcome: CacheOutcome::Hit,
                });
            }
            // Undecodable entry: fall through and overwrite on populate.
            warn!(monitor_id, "Discarding undecodable cache entry");
        }

        debug!(monitor_id, "Cache miss, fetching from upstream");
        let monitor = self
            .provider
            .fetch_monitor(monitor_id)
            .await?
            .ok_or(StatusError::DataNotFound)?;

        let status = monitor.summarize()?;
        let body = serde_json::to_string(&status)
            .map_err(|e| StatusError::Decode(e.to_string()))?;

        self.cache.put(&key, body.clone(), self.cache_ttl).await;
        debug!(
            monitor_id,
            ttl_seconds = self.cache_ttl.as_secs(),
            "Cached fresh monitor status"
        );

        Ok(StatusReport {
            body,
            outcome: CacheOutcome::Miss,
        })
    }
}
