use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use uptime_edge_api::{create_app, AppState};

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        status_url = format!("http://{}/api/get-status", bind_addr),
        "Starting web server"
    );

    let app = create_app(state).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}
