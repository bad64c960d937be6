use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StatusError {
    #[error("Parameter \"monitor\" is required. Example: /api/get-status?monitor=MONITOR_ID")]
    MissingMonitorId,

    #[error("HT_API_KEY is not configured. Set upstream.api_key in uptime-edge.toml or export HT_API_KEY")]
    ApiKeyNotConfigured,

    #[error("Upstream API error: {0}")]
    Upstream(u16),

    #[error("Monitor data or locations not found")]
    DataNotFound,

    #[error("Upstream fetch failed: {0}")]
    Fetch(String),

    #[error("Upstream response decode failed: {0}")]
    Decode(String),
}
