//! void-gateway library exports (for testing)

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod packet;
pub mod server;
pub mod traits;
pub mod validation;

// Re-exports
pub use client::GatewayClient;
pub use error::{ServerError, ServerResult};
pub use packet::Packet;
pub use traits::{DiscardSink, SettlementSink};
