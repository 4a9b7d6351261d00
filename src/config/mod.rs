//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CollectorConfig::default()
//!     → loader.rs (optional TOML file from COLLECTOR_CONFIG)
//!     → loader.rs (environment overrides: DATA_PROCESSOR_URL, PORT, ...)
//!     → validation.rs (semantic checks)
//!     → CollectorConfig (validated, immutable)
//!     → handed to HttpServer::new at startup
//! ```
//!
//! # Design Decisions
//! - Resolved once at startup; there is no reload
//! - All fields have defaults to allow an empty environment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::CollectorConfig;
pub use schema::DownstreamConfig;
pub use schema::ListenerConfig;
pub use schema::{LogFormat, ObservabilityConfig};
