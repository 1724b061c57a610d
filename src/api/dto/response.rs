//! Response DTOs

use serde::{Deserialize, Serialize};

/// Message returned with every accepted packet
pub const INGEST_ACCEPTED_MESSAGE: &str = "Packet accepted for L2 batching";

/// Body of a successful POST /api/v1/ingest
///
/// Also parsed by the ground-station client, hence `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestAck {
    /// Always "success"
    pub status: String,

    /// Human-readable acknowledgement
    pub message: String,

    /// Echoed from the accepted packet
    pub sat_id: u32,
}

impl IngestAck {
    /// Acknowledge a packet from `sat_id`
    pub fn accepted(sat_id: u32) -> Self {
        Self {
            status: "success".to_string(),
            message: INGEST_ACCEPTED_MESSAGE.to_string(),
            sat_id,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
