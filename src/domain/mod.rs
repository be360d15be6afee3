//! Domain layer - Core call control rules
//!
//! This layer contains:
//! - Call events and participants as delivered by the platform
//! - Call phase inference
//! - The action catalog and response envelope

pub mod action;
pub mod call;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
