//! Sensor Collector Service
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               SENSOR COLLECTOR                │
//!                    │                                               │
//!  POST /send_data   │  ┌────────┐    ┌──────────┐    ┌───────────┐  │
//!  ──────────────────┼─▶│  http  │───▶│ reading  │───▶│ forwarder │──┼──▶ Downstream
//!                    │  │ server │    │ generator│    │ (reqwest) │  │    processor
//!                    │  └────────┘    └──────────┘    └─────┬─────┘  │
//!                    │       ▲                             │        │
//!  200 / 5xx + JSON  │       │        ForwardError → status │        │
//!  ◀─────────────────┼───────┴─────────────────────────────┘        │
//!                    │                                               │
//!                    │  config · observability · lifecycle           │
//!                    └──────────────────────────────────────────────┘
//! ```

use sensor_collector::config;
use sensor_collector::lifecycle::{signals, startup, Shutdown};
use sensor_collector::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_from_env()?;
    logging::init(&config.observability)?;

    tracing::info!("sensor-collector v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
