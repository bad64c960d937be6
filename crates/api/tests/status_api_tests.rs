use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use uptime_edge_api::{create_app, AppState};
use uptime_edge_application::ports::UptimeProvider;
use uptime_edge_application::GetMonitorStatusUseCase;
use uptime_edge_domain::config::UpstreamConfig;
use uptime_edge_domain::monitor::{MonitorLocation, ResolveAddressInfo, UptimeMonitor};
use uptime_edge_domain::StatusError;
use uptime_edge_infrastructure::{HetrixUptimeClient, InMemoryStatusCache};

struct StubProvider {
    monitor: Option<UptimeMonitor>,
    error: Option<StatusError>,
    calls: AtomicUsize,
}

impl StubProvider {
    fn returning(monitor: Option<UptimeMonitor>) -> Arc<Self> {
        Arc::new(Self {
            monitor,
            error: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(error: StatusError) -> Arc<Self> {
        Arc::new(Self {
            monitor: None,
            error: Some(error),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl UptimeProvider for StubProvider {
    async fn fetch_monitor(
        &self,
        _monitor_id: &str,
    ) -> Result<Option<UptimeMonitor>, StatusError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.monitor.clone()),
        }
    }
}

fn sample_monitor() -> UptimeMonitor {
    let locations: HashMap<String, MonitorLocation> = [
        ("nyc".to_string(), MonitorLocation { response_time: 100.0 }),
        ("fra".to_string(), MonitorLocation { response_time: 200.0 }),
    ]
    .into_iter()
    .collect();
    UptimeMonitor {
        uptime: 99.98,
        locations: Some(locations),
        resolve_address_info: Some(ResolveAddressInfo {
            city: Some("Helsinki".to_string()),
            country: Some("Finland".to_string()),
        }),
    }
}

fn app_with_provider(provider: Arc<dyn UptimeProvider>) -> Router {
    let cache = Arc::new(InMemoryStatusCache::new(16));
    let use_case = Arc::new(GetMonitorStatusUseCase::new(
        provider,
        cache,
        Duration::from_secs(60),
    ));
    create_app(AppState::new(use_case, "*"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let x_cache = response
        .headers()
        .get("x-cache")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, x_cache, json)
}

#[tokio::test]
async fn test_missing_monitor_param_returns_400_with_guidance() {
    let app = app_with_provider(StubProvider::returning(Some(sample_monitor())));
    let (status, _, body) = get(app, "/api/get-status").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("monitor"));
}

#[tokio::test]
async fn test_status_miss_returns_filtered_fields() {
    let app = app_with_provider(StubProvider::returning(Some(sample_monitor())));
    let (status, x_cache, body) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(x_cache.as_deref(), Some("MISS"));
    assert_eq!(body["uptime"], 99.98);
    assert_eq!(body["average_response_time"], 150.0);
    assert_eq!(body["location"], "Helsinki, Finland");
}

#[tokio::test]
async fn test_cache_hit_skips_upstream() {
    let provider = StubProvider::returning(Some(sample_monitor()));
    let app = app_with_provider(provider.clone());

    let (_, first_x_cache, _) = get(app.clone(), "/api/get-status?monitor=mon-1").await;
    let (status, second_x_cache, body) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(first_x_cache.as_deref(), Some("MISS"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second_x_cache.as_deref(), Some("HIT"));
    assert_eq!(body["average_response_time"], 150.0);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_upstream_5xx_maps_to_502() {
    let app = app_with_provider(StubProvider::failing(StatusError::Upstream(503)));
    let (status, _, _) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_upstream_404_passes_through() {
    let app = app_with_provider(StubProvider::failing(StatusError::Upstream(404)));
    let (status, _, _) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_monitor_without_locations_returns_404() {
    let mut monitor = sample_monitor();
    monitor.locations = None;
    let app = app_with_provider(StubProvider::returning(Some(monitor)));
    let (status, _, body) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_no_monitor_record_returns_404() {
    let app = app_with_provider(StubProvider::returning(None));
    let (status, _, _) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_network_failure_returns_generic_500() {
    let app = app_with_provider(StubProvider::failing(StatusError::Fetch(
        "connection refused".to_string(),
    )));
    let (status, _, body) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // the underlying error never leaks into the body
    let message = body["message"].as_str().unwrap();
    assert!(!message.contains("connection refused"));
}

#[tokio::test]
async fn test_missing_api_key_returns_500_with_hint() {
    // Real upstream client without a key: rejected before any network I/O.
    let config = UpstreamConfig {
        api_key: None,
        ..UpstreamConfig::default()
    };
    let app = app_with_provider(Arc::new(HetrixUptimeClient::new(&config)));
    let (status, _, body) = get(app, "/api/get-status?monitor=mon-1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("HT_API_KEY"));
}

#[tokio::test]
async fn test_unknown_path_returns_404_message() {
    let app = app_with_provider(StubProvider::returning(Some(sample_monitor())));
    let (status, _, body) = get(app, "/api/other").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with_provider(StubProvider::returning(Some(sample_monitor())));
    let (status, _, body) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
