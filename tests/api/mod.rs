//! API integration tests
//!
//! Tests for HTTP endpoints:
//! - POST /api/v1/ingest
//! - GET /health

pub mod health_test;
