//! Action bounded context - instructions sent back to the telephony platform

pub mod audio;
pub mod catalog;
pub mod response;

pub use audio::{AudioAssets, AudioSource};
pub use catalog::{error_sequence, Action};
pub use response::{ActionResponse, SCHEMA_VERSION};
