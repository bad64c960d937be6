use tracing_subscriber::EnvFilter;
use uptime_edge_domain::config::LoggingConfig;

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured
/// level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
