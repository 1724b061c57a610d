//! Test fixtures and app setup utilities

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use void_gateway::api::{create_router, AppState};
use void_gateway::{Packet, SettlementSink};

/// Sink that keeps every packet it receives
#[derive(Default)]
pub struct RecordingSink {
    packets: Mutex<Vec<Packet>>,
}

impl RecordingSink {
    /// Packets received so far
    pub fn packets(&self) -> Vec<Packet> {
        self.packets.lock().unwrap().clone()
    }
}

impl SettlementSink for RecordingSink {
    fn accept(&self, packet: Packet) {
        self.packets.lock().unwrap().push(packet);
    }
}

/// Create a test app with the default discarding sink
pub fn test_app() -> Router {
    create_router(Arc::new(AppState::default()))
}

/// Create a test app whose accepted packets can be inspected
pub fn test_app_with_sink() -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let state = Arc::new(AppState::new(sink.clone()));
    (create_router(state), sink)
}

/// Payload from the reference ingest scenario
pub fn sample_payload() -> Value {
    serde_json::json!({
        "epoch_ts": 1_700_000_000u64,
        "sat_id": 42,
        "amount": 1000,
        "asset_id": 1
    })
}

/// Build a POST /api/v1/ingest request with a JSON content type
pub fn ingest_request(body: impl Into<Body>) -> Request<Body> {
    Request::post("/api/v1/ingest")
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

/// Send `request` and return the status plus parsed JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).expect("response body must be JSON");

    (status, json)
}

/// POST a JSON value to the ingest endpoint
pub async fn post_ingest(app: Router, payload: &Value) -> (StatusCode, Value) {
    send(app, ingest_request(payload.to_string())).await
}
