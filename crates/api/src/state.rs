use std::sync::Arc;
use uptime_edge_application::GetMonitorStatusUseCase;

#[derive(Clone)]
pub struct AppState {
    pub get_status: Arc<GetMonitorStatusUseCase>,
    /// CORS allowed-origin pattern (`*`, exact origin, or `*.domain`).
    pub allowed_origin: Arc<str>,
}

impl AppState {
    pub fn new(get_status: Arc<GetMonitorStatusUseCase>, allowed_origin: &str) -> Self {
        Self {
            get_status,
            allowed_origin: Arc::from(allowed_origin),
        }
    }
}
