use std::sync::Arc;
use std::time::Duration;
use uptime_edge_api::AppState;
use uptime_edge_application::GetMonitorStatusUseCase;
use uptime_edge_domain::Config;
use uptime_edge_infrastructure::{HetrixUptimeClient, InMemoryStatusCache};

/// Wire the upstream client and cache into the request-handling state.
pub fn build_state(config: &Config) -> AppState {
    let provider = Arc::new(HetrixUptimeClient::new(&config.upstream));
    let cache = Arc::new(InMemoryStatusCache::new(config.cache.max_entries));

    let get_status = Arc::new(GetMonitorStatusUseCase::new(
        provider,
        cache,
        Duration::from_secs(config.cache.ttl_seconds),
    ));

    AppState::new(get_status, &config.cors.allowed_origin)
}
