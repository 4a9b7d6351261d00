//! Downstream processor client with a bounded wait.
//!
//! # Responsibilities
//! - POST a serialized reading to the configured URL
//! - Enforce the downstream timeout on the whole exchange
//! - Classify failures into timeout, unreachable, and rejected
//!
//! No retries: every failure maps to exactly one terminal `ForwardError`.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::collector::reading::SensorReading;
use crate::collector::types::{ForwardError, ForwardResult};
use crate::config::DownstreamConfig;

/// What the downstream answered for an accepted reading.
#[derive(Debug, Clone)]
pub struct Forwarded {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

/// HTTP client bound to a single downstream URL.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    url: String,
}

impl Forwarder {
    /// Build a client whose total request time is capped by `config.timeout_ms`.
    pub fn new(config: &DownstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one reading and decode the downstream's JSON answer.
    pub async fn forward(&self, reading: &SensorReading) -> ForwardResult<Forwarded> {
        let payload = serde_json::to_vec(reading)
            .map_err(|e| ForwardError::Internal(format!("failed to serialize reading: {}", e)))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(ForwardError::Rejected(format!(
                "processor at {} responded with {}: {}",
                self.url,
                status,
                String::from_utf8_lossy(&bytes).trim()
            )));
        }

        let body = serde_json::from_slice(&bytes).map_err(|e| {
            ForwardError::Rejected(format!(
                "processor at {} returned a non-JSON body: {}",
                self.url, e
            ))
        })?;

        tracing::info!(
            url = %self.url,
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&bytes),
            "Data sent to processor"
        );

        Ok(Forwarded { status, body })
    }

    /// Timeouts win over connect errors so a stalled connect reads as 504.
    fn classify(&self, error: reqwest::Error) -> ForwardError {
        if error.is_timeout() {
            ForwardError::Timeout {
                url: self.url.clone(),
            }
        } else if error.is_connect() {
            ForwardError::Unreachable {
                url: self.url.clone(),
                source: error,
            }
        } else {
            ForwardError::Rejected(error.to_string())
        }
    }
}
