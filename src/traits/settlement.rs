//! Settlement hand-off seam
//!
//! Validated packets leave the HTTP layer through `SettlementSink`. Nothing
//! downstream exists yet, so the only contract is that a sink accepts a
//! decoded `Packet`. The hand-off cannot fail: the ingest route answers 200
//! or 400 and nothing else.

use crate::packet::Packet;

/// Consumer of validated packets
pub trait SettlementSink: Send + Sync {
    /// Take ownership of one accepted packet
    fn accept(&self, packet: Packet);
}

/// Sink that drops every packet
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl SettlementSink for DiscardSink {
    fn accept(&self, packet: Packet) {
        tracing::debug!(sat_id = packet.sat_id, "No settlement backend, packet dropped");
    }
}
