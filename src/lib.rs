//! VoiceFocus PSTN - call control for a two-party bridging service
//!
//! Every lifecycle event of a call (new inbound call, ringing, action
//! completed, digits entered, hangup) is turned into the next ordered list of
//! actions for the telephony platform. No call state is kept between events.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use application::{CallController, Dispatch};
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
