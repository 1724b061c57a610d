//! Packet schema validation
//!
//! Decoding is split from the HTTP layer: handlers hand over raw body bytes
//! and get back either a `Packet` or the reason it was rejected. New rules
//! belong here, not in the handlers.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::packet::Packet;

/// Why a payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is empty or not JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// Top-level value is not an object
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// Required field absent
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Field present but not an unsigned integer
    #[error("field {0} must be an unsigned integer")]
    WrongType(&'static str),

    /// Field does not fit its declared width
    #[error("field {field} exceeds maximum {max}")]
    OutOfRange { field: &'static str, max: u64 },
}

/// Validate a raw request body into a `Packet`
pub fn validate_packet(body: &[u8]) -> Result<Packet, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    validate_value(&value)
}

/// Validate an already-parsed JSON value into a `Packet`
pub fn validate_value(value: &Value) -> Result<Packet, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(Packet {
        epoch_ts: unsigned_field(object, "epoch_ts", u64::MAX)?,
        sat_id: unsigned_field(object, "sat_id", u32::MAX.into())?,
        amount: unsigned_field(object, "amount", u64::MAX)?,
        asset_id: unsigned_field(object, "asset_id", u16::MAX.into())?,
    })
}

/// Extract `field` as an unsigned integer of width `T`
///
/// `max` is `T::MAX` widened to u64, reported when the value does not fit.
fn unsigned_field<T>(
    object: &Map<String, Value>,
    field: &'static str,
    max: u64,
) -> Result<T, ValidationError>
where
    T: TryFrom<u64>,
{
    let raw = object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?
        .as_u64()
        .ok_or(ValidationError::WrongType(field))?;

    T::try_from(raw).map_err(|_| ValidationError::OutOfRange { field, max })
}
