//! Ground-station client for the ingest endpoint
//!
//! Pushes decoded invoice packets to a running gateway the way the ground
//! station bridge does: one JSON POST per packet, no retries.

use std::time::Duration;

use crate::api::dto::{ErrorResponse, IngestAck};
use crate::api::router::INGEST_PATH;
use crate::error::{ServerError, ServerResult};
use crate::packet::Packet;

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// HTTP client bound to one gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    /// HTTP client (reqwest with async runtime)
    client: reqwest::Client,
    ingest_url: String,
}

impl GatewayClient {
    /// Create a client for the gateway at `base_url` (e.g. "http://127.0.0.1:8080")
    pub fn new(base_url: &str, timeout_ms: u64) -> ServerResult<Self> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ServerError::Config("gateway URL must not be empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ServerError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            ingest_url: format!("{}{}", base_url, INGEST_PATH),
        })
    }

    /// Full URL packets are posted to
    pub fn ingest_url(&self) -> &str {
        &self.ingest_url
    }

    /// Push one packet and return the gateway's acknowledgement
    pub async fn push(&self, packet: &Packet) -> ServerResult<IngestAck> {
        tracing::debug!(url = %self.ingest_url, sat_id = packet.sat_id, "Pushing packet");

        let response = self.client.post(&self.ingest_url).json(packet).send().await?;
        let status = response.status();

        if status.is_success() {
            let ack: IngestAck = response.json().await?;
            return Ok(ack);
        }

        let reason = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };

        if status.is_client_error() {
            Err(ServerError::Rejected(reason))
        } else {
            Err(ServerError::Upstream(format!("{}: {}", status, reason)))
        }
    }

    /// Decode a raw invoice body and push it
    pub async fn push_invoice_body(&self, body: &[u8]) -> ServerResult<IngestAck> {
        let packet = Packet::from_invoice_body(body)?;
        self.push(&packet).await
    }
}
