//! Sensor Collector Library
//!
//! Fabricates synthetic sensor readings on request and forwards them to a
//! downstream processor over HTTP.

pub mod collector;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod processor;

pub use collector::{ForwardError, SensorReading, SensorStatus};
pub use config::schema::CollectorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
