//! Interface layer - External interfaces
//!
//! This layer handles:
//! - The HTTP invocation endpoint fed by the platform runtime
//! - Health and Prometheus metrics endpoints
//! - Request/response formatting

pub mod api;
