//! Prompt audio sources
//!
//! Prompts live in an object store bucket configured at startup. Actions only
//! name them; the platform fetches the audio itself.

use serde::{Deserialize, Serialize};

/// Greeting that asks for the destination number
pub const WELCOME_PROMPT: &str = "welcome_vf_demo.wav";
/// Played when the keyed digits do not match the dial plan
pub const INVALID_ENTRY_PROMPT: &str = "invalid_entry.wav";
/// Played before hanging up on any failure
pub const CALL_FAILED_PROMPT: &str = "unable_to_connect_your_call.wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioSourceType {
    S3,
}

/// Location of one audio file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioSource {
    #[serde(rename = "Type")]
    pub source_type: AudioSourceType,
    pub bucket_name: String,
    pub key: String,
}

/// Resolves prompt names against the configured bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAssets {
    bucket: String,
}

impl AudioAssets {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn source(&self, key: &str) -> AudioSource {
        AudioSource {
            source_type: AudioSourceType::S3,
            bucket_name: self.bucket.clone(),
            key: key.to_string(),
        }
    }
}
