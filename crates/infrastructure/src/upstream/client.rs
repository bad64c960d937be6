use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use uptime_edge_application::ports::UptimeProvider;
use uptime_edge_domain::config::UpstreamConfig;
use uptime_edge_domain::{StatusError, UptimeMonitor};

#[derive(Debug, Deserialize)]
struct MonitorsEnvelope {
    #[serde(default)]
    monitors: Vec<UptimeMonitor>,
}

/// Authenticated client for the HetrixTools-style `uptime-monitors` endpoint.
pub struct HetrixUptimeClient {
    http: reqwest::Client,
    api_server: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HetrixUptimeClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_server: config.api_server.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[async_trait]
impl UptimeProvider for HetrixUptimeClient {
    async fn fetch_monitor(
        &self,
        monitor_id: &str,
    ) -> Result<Option<UptimeMonitor>, StatusError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(StatusError::ApiKeyNotConfigured)?;

        let url = format!("{}/uptime-monitors", self.api_server);
        debug!(monitor_id, url = %url, "Fetching monitor from upstream API");

        let response = self
            .http
            .get(&url)
            .query(&[("id", monitor_id)])
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| StatusError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(monitor_id, status = status.as_u16(), "Upstream API returned an error");
            return Err(StatusError::Upstream(status.as_u16()));
        }

        let envelope: MonitorsEnvelope = response
            .json()
            .await
            .map_err(|e| StatusError::Decode(e.to_string()))?;

        Ok(envelope.monitors.into_iter().next())
    }
}
