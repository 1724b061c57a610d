//! Invoice packet model
//!
//! A `Packet` is the decrypted invoice a satellite emits and a ground station
//! relays to the gateway. It lives for one request and is never persisted.

use serde::Serialize;
use thiserror::Error;

/// Size of the raw invoice body emitted by the satellite
pub const INVOICE_BODY_SIZE: usize = 62;

// Little-endian field offsets inside the invoice body. Bytes 8..44 carry
// position/velocity telemetry and 58..62 a CRC32; neither is decoded.
const EPOCH_TS_OFFSET: usize = 0;
const SAT_ID_OFFSET: usize = 44;
const AMOUNT_OFFSET: usize = 48;
const ASSET_ID_OFFSET: usize = 56;

/// Decoded inbound invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Packet {
    /// Satellite epoch timestamp
    pub epoch_ts: u64,

    /// Origin satellite identifier
    pub sat_id: u32,

    /// Invoiced quantity
    pub amount: u64,

    /// Denomination of `amount`
    pub asset_id: u16,
}

/// Raw invoice body could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceDecodeError {
    #[error("invoice body too short: expected {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
}

impl Packet {
    /// Decode the fields the gateway cares about from a raw invoice body
    ///
    /// Bytes past `INVOICE_BODY_SIZE` are ignored.
    pub fn from_invoice_body(body: &[u8]) -> Result<Self, InvoiceDecodeError> {
        if body.len() < INVOICE_BODY_SIZE {
            return Err(InvoiceDecodeError::TooShort {
                expected: INVOICE_BODY_SIZE,
                actual: body.len(),
            });
        }

        Ok(Self {
            epoch_ts: u64::from_le_bytes(read_array(body, EPOCH_TS_OFFSET)),
            sat_id: u32::from_le_bytes(read_array(body, SAT_ID_OFFSET)),
            amount: u64::from_le_bytes(read_array(body, AMOUNT_OFFSET)),
            asset_id: u16::from_le_bytes(read_array(body, ASSET_ID_OFFSET)),
        })
    }
}

/// Copy `N` bytes at `offset`; caller has checked the length
fn read_array<const N: usize>(body: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&body[offset..offset + N]);
    out
}
