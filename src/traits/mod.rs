//! Trait definitions for downstream collaborators

pub mod settlement;

pub use settlement::{DiscardSink, SettlementSink};
