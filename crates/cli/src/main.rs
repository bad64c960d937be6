use clap::Parser;
use std::net::SocketAddr;
use tracing::{info, warn};
use uptime_edge_domain::{CliOverrides, Config};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "uptime-edge")]
#[command(version)]
#[command(about = "Uptime Edge - CORS-aware caching proxy for uptime-monitor status")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = Config::load(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting uptime-edge v{}", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    if config.upstream.api_key.is_none() {
        warn!("HT_API_KEY is not configured; status requests will fail until it is set");
    }

    let state = di::build_state(&config);

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;

    server::start_web_server(bind_addr, state).await
}
