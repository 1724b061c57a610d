//! HTTP request handlers

mod health;
mod ingest;

pub use health::health_check;
pub use ingest::ingest_packet;
