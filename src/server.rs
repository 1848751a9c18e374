use anyhow::Result;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http;
use crate::lifecycle::CatalogSystem;

/// Serves the catalog until Ctrl-C, then stops the actors.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let system = CatalogSystem::new(config.channel_capacity);
    let router = http::router(system.app_state());

    let listener = TcpListener::bind(config.bind_address).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(bind = %actual_addr, "listening");

    let server_result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!("server stopped, shutting down actors");
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    server_result.map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
