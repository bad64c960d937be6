use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::cors::CorsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for the uptime-edge proxy
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Monitoring API endpoint and credentials
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// CORS allowed-origin pattern
    #[serde(default)]
    pub cors: CorsConfig,

    /// Status cache TTL and bounds
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. uptime-edge.toml in current directory
    /// 3. /etc/uptime-edge/config.toml
    /// 4. Default configuration
    ///
    /// Environment variables (`HT_API_SERVER`, `HT_API_KEY`, `ALLOWED_ORIGIN`)
    /// override the file; CLI flags override both.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("uptime-edge.toml").exists() {
            Self::from_file("uptime-edge.toml")?
        } else if std::path::Path::new("/etc/uptime-edge/config.toml").exists() {
            Self::from_file("/etc/uptime-edge/config.toml")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment overrides to configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(server) = std::env::var("HT_API_SERVER") {
            if !server.is_empty() {
                self.upstream.api_server = server;
            }
        }
        if let Ok(key) = std::env::var("HT_API_KEY") {
            if !key.is_empty() {
                self.upstream.api_key = Some(key);
            }
        }
        if let Ok(origin) = std::env::var("ALLOWED_ORIGIN") {
            if !origin.is_empty() {
                self.cors.allowed_origin = origin;
            }
        }
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.upstream.api_server.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream API server configured".to_string(),
            ));
        }

        if self.cache.ttl_seconds == 0 {
            return Err(ConfigError::Validation(
                "Cache TTL cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
