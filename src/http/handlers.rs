use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::collector::{ForwardError, ForwardResult, SendDataRequest, SendDataResponse, SensorReading};
use crate::http::server::AppState;
use crate::observability::metrics;

pub const LIVENESS_MESSAGE: &str =
    "Sensor Collector Service is running. Use POST to /send_data to simulate sending data.";

const SUCCESS_MESSAGE: &str = "Data sent successfully to processor";

pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

/// Fabricate a reading, forward it, and relay the outcome.
pub async fn send_data(State(state): State<AppState>, body: Bytes) -> Response {
    let start_time = Instant::now();

    match collect_and_forward(&state, &body).await {
        Ok(response) => {
            metrics::record_forward("success", start_time);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(
                url = %state.forwarder.url(),
                outcome = e.outcome(),
                error = %e,
                source = ?std::error::Error::source(&e),
                "Failed to send data to processor"
            );
            metrics::record_forward(e.outcome(), start_time);
            e.into_response()
        }
    }
}

async fn collect_and_forward(state: &AppState, body: &[u8]) -> ForwardResult<SendDataResponse> {
    let request = parse_request(body)?;

    let reading = {
        let mut rng = rand::thread_rng();
        SensorReading::generate(request.sensor_id, &mut rng)
    };
    tracing::info!(
        sensor_id = %reading.sensor_id,
        temperature = reading.temperature,
        humidity = reading.humidity,
        pressure = reading.pressure,
        vibration = reading.vibration,
        status = reading.status.as_str(),
        timestamp = reading.timestamp,
        "Generated reading"
    );

    let forwarded = state.forwarder.forward(&reading).await?;

    Ok(SendDataResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data_sent: reading,
        processor_response: forwarded.body,
    })
}

/// An empty body or a JSON `null` means "no sensor_id".
fn parse_request(body: &[u8]) -> ForwardResult<SendDataRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SendDataRequest::default());
    }

    serde_json::from_slice::<Option<SendDataRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ForwardError::Internal(format!("invalid request body: {}", e)))
}
