//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - DTMF keypad decoding and the in-call control menu

pub mod ivr;
