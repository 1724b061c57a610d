//! Data Transfer Objects (DTOs)

mod response;

pub use response::{ErrorResponse, HealthResponse, IngestAck, INGEST_ACCEPTED_MESSAGE};
