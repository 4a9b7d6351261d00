//! Local stand-in for the downstream data processor.

use std::env;

use sensor_collector::config::ObservabilityConfig;
use sensor_collector::lifecycle::{signals, Shutdown};
use sensor_collector::observability::logging;
use sensor_collector::processor;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 3001;

/// Binary targets are named after the executable, not the library crate.
const LOG_FILTER: &str = "data_processor=info,sensor_collector=info,tower_http=info";

fn observability_config() -> ObservabilityConfig {
    ObservabilityConfig {
        log_filter: LOG_FILTER.to_string(),
        ..ObservabilityConfig::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&observability_config())?;

    let port = match env::var("PROCESSOR_PORT").or_else(|_| env::var("PORT")) {
        Ok(value) => value.trim().parse()?,
        Err(_) => DEFAULT_PORT,
    };

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Data processor listening");

    let shutdown = Shutdown::new();
    let mut stop = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    axum::serve(listener, processor::router())
        .with_graceful_shutdown(async move {
            let _ = stop.recv().await;
        })
        .await?;

    tracing::info!("Data processor stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_enables_binary_target() {
        let config = observability_config();
        assert!(config
            .log_filter
            .split(',')
            .any(|directive| directive == "data_processor=info"));
        assert!(config.log_filter.contains("sensor_collector=info"));
        assert!(!config.metrics_enabled);
    }
}
