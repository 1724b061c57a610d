//! Ingest endpoint handler

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use crate::api::dto::IngestAck;
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::validation::{validate_packet, ValidationError};

/// POST /api/v1/ingest - Accept one invoice packet from a ground station
///
/// The body is taken as raw bytes so a missing or wrong `Content-Type` is
/// judged by the payload itself. Responds 200 with the echoed `sat_id`, or
/// 400 with a fixed error body. An unreadable body (including one over the
/// body limit) counts as a malformed payload.
pub async fn ingest_packet(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<IngestAck>, ServerError> {
    let body = body.map_err(|rejection| ValidationError::MalformedJson(rejection.body_text()))?;
    let packet = validate_packet(&body)?;

    let sat_id = packet.sat_id;
    state.settlement.accept(packet);

    tracing::debug!(sat_id, "Packet accepted");

    Ok(Json(IngestAck::accepted(sat_id)))
}
