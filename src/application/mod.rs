//! Application layer - Use cases and application services
//!
//! This layer orchestrates domain objects to fulfill use cases.
//! It's responsible for:
//! - Routing platform events to the right call phase handler
//! - Recovering from any failure with a well-formed response

pub mod call_control;

pub use call_control::{CallController, Dispatch};
