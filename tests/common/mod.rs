//! Common test utilities and fixtures
//!
//! This module provides shared test infrastructure including:
//! - Test app setup with a recording settlement sink
//! - Packet payload builders
//! - Response helpers and assertions

#![allow(dead_code, unused_imports)]

pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;

// Re-export frequently used external types for convenience
pub use axum::body::Body;
pub use axum::http::{Request, StatusCode};
pub use std::sync::Arc;
pub use tower::ServiceExt;
