//! Sensor collection subsystem.
//!
//! # Data Flow
//! ```text
//! POST /send_data body
//!     → types.rs (SendDataRequest, optional sensor_id)
//!     → reading.rs (fabricate SensorReading)
//!     → forwarder.rs (POST to downstream, bounded wait)
//!     → types.rs (SendDataResponse or ForwardError → HTTP status)
//! ```

pub mod forwarder;
pub mod reading;
pub mod types;

pub use forwarder::{Forwarded, Forwarder};
pub use reading::{SensorReading, SensorStatus};
pub use types::{ErrorBody, ForwardError, ForwardResult, SendDataRequest, SendDataResponse};
