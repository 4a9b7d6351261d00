//! Mock downstream processor.
//!
//! A stand-in for the service that receives forwarded readings. It validates
//! each reading, keeps running aggregates in memory, and exposes them as JSON.
//! Used by the `data-processor` binary and by end-to-end tests.

pub mod handlers;
pub mod summary;

pub use handlers::{router, router_with_store, ProcessorState};
pub use summary::{DataStore, IncomingReading, ProcessingSummary};
