//! HTTP routes of the mock data processor.
//!
//! `POST /api/data` validates and records a reading; the `GET` routes expose
//! the running summary and the recent window held by the shared `DataStore`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::processor::summary::{DataStore, IncomingReading, INVALID_DATA_MESSAGE};

pub const INDEX_MESSAGE: &str = "Data processor is running. Endpoints: \
POST /api/data (submit a reading), \
GET /api/summary (aggregated view), \
GET /api/alldata (last 100 raw readings).";

/// Shared store behind the processor routes.
pub type ProcessorState = Arc<RwLock<DataStore>>;

/// Build the processor's route table with a fresh, empty store.
pub fn router() -> Router {
    router_with_store(Arc::new(RwLock::new(DataStore::new())))
}

pub fn router_with_store(store: ProcessorState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/data", post(receive_data))
        .route("/api/summary", get(summary))
        .route("/api/alldata", get(all_data))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> &'static str {
    INDEX_MESSAGE
}

async fn receive_data(State(store): State<ProcessorState>, body: Bytes) -> Response {
    let raw: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    tracing::info!(data = %raw, "Received data");

    let reading = match IncomingReading::from_value(&raw) {
        Some(r) => r,
        None => {
            tracing::warn!("Rejected reading with missing fields");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": INVALID_DATA_MESSAGE })),
            )
                .into_response();
        }
    };

    store.write().await.record(&reading, raw.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Data received and processed successfully",
            "received_data": raw,
        })),
    )
        .into_response()
}

async fn summary(State(store): State<ProcessorState>) -> Json<Value> {
    let store = store.read().await;
    Json(json!({
        "message": "Data summary",
        "summary": store.summary(),
    }))
}

async fn all_data(State(store): State<ProcessorState>) -> Json<Value> {
    let store = store.read().await;
    Json(json!({
        "message": "All received data",
        "count": store.count(),
        "data": store.recent(),
    }))
}
