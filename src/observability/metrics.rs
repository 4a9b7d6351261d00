//! Metrics collection and exposition.
//!
//! # Metrics
//! - `collector_forwards_total` (counter): forwarded readings by outcome
//! - `collector_forward_duration_seconds` (histogram): handler latency by outcome
//!
//! Without an installed recorder the macros are no-ops, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one `/send_data` outcome ("success", "timeout", "unreachable", ...).
pub fn record_forward(outcome: &'static str, start_time: Instant) {
    ::metrics::counter!("collector_forwards_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("collector_forward_duration_seconds", "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}
