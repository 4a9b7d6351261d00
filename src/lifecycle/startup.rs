//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, after the metrics exporter is up

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::CollectorConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Bring the collector up and serve until `shutdown` fires.
pub async fn run(
    config: CollectorConfig,
    shutdown: &Shutdown,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        downstream_url = %config.downstream.url,
        downstream_timeout_ms = config.downstream.timeout_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    Ok(())
}
