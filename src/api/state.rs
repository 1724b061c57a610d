//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::traits::{DiscardSink, SettlementSink};

/// Application state shared across handlers
///
/// Immutable after startup; handlers never lock.
#[derive(Clone)]
pub struct AppState {
    /// Receiver of accepted packets
    pub settlement: Arc<dyn SettlementSink>,
}

impl AppState {
    /// State handing packets to `settlement`
    pub fn new(settlement: Arc<dyn SettlementSink>) -> Self {
        Self { settlement }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(DiscardSink))
    }
}
