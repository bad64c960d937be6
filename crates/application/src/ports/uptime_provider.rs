use async_trait::async_trait;
use uptime_edge_domain::{StatusError, UptimeMonitor};

/// Port for the upstream monitoring API.
#[async_trait]
pub trait UptimeProvider: Send + Sync {
    /// Fetches the monitor record for `monitor_id`. `Ok(None)` means the
    /// upstream answered but carried no record for that id.
    async fn fetch_monitor(&self, monitor_id: &str)
        -> Result<Option<UptimeMonitor>, StatusError>;
}
