use serde::{Deserialize, Serialize};

/// Monitoring API the proxy fetches from. The key is a secret and normally
/// arrives through the `HT_API_KEY` environment variable rather than the
/// config file; a missing key is reported at request time, not startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_api_server")]
    pub api_server: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_server: default_api_server(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_server() -> String {
    "https://api.hetrixtools.com/v3".to_string()
}

fn default_timeout() -> u64 {
    30
}
