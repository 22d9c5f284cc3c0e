use crate::HourgateService;
use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::ServiceExt;
use std::sync::Arc;

pub async fn serve_stdio(service: HourgateService) -> Result<()> {
    let server = service.serve(stdio()).await?;
    server.waiting().await?;
    Ok(())
}

/// Streamable HTTP without sessions: every POST is handled on its own.
pub async fn serve_http(service: HourgateService, bind: &str, path: &str) -> Result<()> {
    let mcp = StreamableHttpService::new(
        move || Ok(service.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig {
            stateful_mode: false,
            ..Default::default()
        },
    );
    let app = axum::Router::new().nest_service(path, mcp);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("bind {bind}"))?;
    log::info!("Serving MCP over HTTP at http://{bind}{path}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}
