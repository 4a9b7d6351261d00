//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use sensor_collector::CollectorConfig;
use serde_json::Value;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its address.
pub async fn spawn_downstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// An address nothing is listening on.
pub fn refused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Collector config pointing at `url` with a short downstream timeout.
pub fn collector_config(url: String, timeout_ms: u64) -> CollectorConfig {
    let mut config = CollectorConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.downstream.url = url;
    config.downstream.timeout_ms = timeout_ms;
    config.downstream.use_system_proxy = false;
    config
}

pub fn post_send_data(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/send_data")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
