//! Request/response bodies and error definitions for the collector.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collector::reading::SensorReading;

/// Inbound body of `POST /send_data`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendDataRequest {
    #[serde(default)]
    pub sensor_id: Option<String>,
}

/// Body returned to the caller when the downstream accepted the reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDataResponse {
    pub message: String,
    pub data_sent: SensorReading,
    pub processor_response: serde_json::Value,
}

/// Body of every failure response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors that can occur while collecting and forwarding a reading.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The downstream did not answer within the configured bound.
    #[error("Timeout: Failed to send data to processor at {url}")]
    Timeout { url: String },

    /// No connection to the downstream could be established.
    #[error("Connection Error: Failed to connect to processor at {url}. Is it running?")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx status, undecodable body, or other transport failure.
    #[error("Failed to send data to processor: {0}")]
    Rejected(String),

    /// Anything that went wrong before the downstream was contacted.
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl ForwardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Rejected(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Metric label for this failure class.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Unreachable { .. } => "unreachable",
            Self::Rejected(_) => "rejected",
            Self::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for collector operations.
pub type ForwardResult<T> = Result<T, ForwardError>;
