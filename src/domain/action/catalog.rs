//! Action catalog
//!
//! One constructor per platform action. Constructors never branch: they take
//! explicit parameters and fill in the fixed policy defaults below.

use super::audio::{AudioAssets, AudioSource, CALL_FAILED_PROMPT};
use super::response::ActionResponse;
use crate::domain::call::ActionType;
use crate::domain::shared::value_objects::{CallId, DestinationNumber};
use serde::{Deserialize, Serialize};

pub const PAUSE_DURATION_MS: u32 = 3000;
pub const DESTINATION_DIGITS: u32 = 11;
pub const DESTINATION_TERMINATOR: &str = "#";
pub const DESTINATION_DIGIT_GAP_MS: u32 = 5000;
pub const DESTINATION_REPEAT: u32 = 2;
pub const DESTINATION_REPEAT_GAP_MS: u32 = 10000;
pub const BRIDGE_TIMEOUT_SECONDS: u32 = 30;
/// Only `0` and `1` are collected once DTMF control is armed
pub const CONTROL_DIGITS_REGEX: &str = "[0-1]$";
pub const CONTROL_DIGIT_GAP_MS: u32 = 1000;
pub const CONTROL_FLUSH_MS: u32 = 10000;
pub const HANGUP_SIP_RESPONSE_CODE: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PauseParameters {
    pub call_id: CallId,
    pub duration_in_milliseconds: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayAudioAndGetDigitsParameters {
    pub call_id: CallId,
    pub input_digits_regex: String,
    pub audio_source: AudioSource,
    pub failure_audio_source: AudioSource,
    pub min_number_of_digits: u32,
    pub max_number_of_digits: u32,
    pub terminator_digits: Vec<String>,
    pub in_between_digits_duration_in_milliseconds: u32,
    pub repeat: u32,
    pub repeat_duration_in_milliseconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEndpointType {
    #[serde(rename = "PSTN")]
    Pstn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BridgeEndpoint {
    pub uri: String,
    pub bridge_endpoint_type: BridgeEndpointType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallAndBridgeParameters {
    pub call_timeout_seconds: u32,
    pub caller_id_number: String,
    pub endpoints: Vec<BridgeEndpoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceFocusParameters {
    pub enable: bool,
    pub call_id: CallId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiveDigitsParameters {
    pub call_id: CallId,
    pub input_digits_regex: String,
    pub in_between_digits_duration_in_milliseconds: u32,
    pub flush_digits_duration_in_milliseconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayAudioParameters {
    pub call_id: CallId,
    pub audio_source: AudioSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HangupParameters {
    pub call_id: CallId,
    pub sip_response_code: String,
}

/// A declarative instruction for the telephony platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type", content = "Parameters")]
pub enum Action {
    Pause(PauseParameters),
    PlayAudioAndGetDigits(PlayAudioAndGetDigitsParameters),
    CallAndBridge(CallAndBridgeParameters),
    VoiceFocus(VoiceFocusParameters),
    ReceiveDigits(ReceiveDigitsParameters),
    PlayAudio(PlayAudioParameters),
    Hangup(HangupParameters),
}

impl Action {
    pub fn pause(call_id: &CallId) -> Self {
        Action::Pause(PauseParameters {
            call_id: call_id.clone(),
            duration_in_milliseconds: PAUSE_DURATION_MS.to_string(),
        })
    }

    /// Play `prompt` and collect an eleven digit destination matching `regex`.
    pub fn play_audio_and_get_digits(
        call_id: &CallId,
        regex: &str,
        prompt: AudioSource,
        failure_prompt: AudioSource,
    ) -> Self {
        Action::PlayAudioAndGetDigits(PlayAudioAndGetDigitsParameters {
            call_id: call_id.clone(),
            input_digits_regex: regex.to_string(),
            audio_source: prompt,
            failure_audio_source: failure_prompt,
            min_number_of_digits: DESTINATION_DIGITS,
            max_number_of_digits: DESTINATION_DIGITS,
            terminator_digits: vec![DESTINATION_TERMINATOR.to_string()],
            in_between_digits_duration_in_milliseconds: DESTINATION_DIGIT_GAP_MS,
            repeat: DESTINATION_REPEAT,
            repeat_duration_in_milliseconds: DESTINATION_REPEAT_GAP_MS,
        })
    }

    pub fn call_and_bridge(caller_id: &str, destination: &DestinationNumber) -> Self {
        Action::CallAndBridge(CallAndBridgeParameters {
            call_timeout_seconds: BRIDGE_TIMEOUT_SECONDS,
            caller_id_number: caller_id.to_string(),
            endpoints: vec![BridgeEndpoint {
                uri: destination.to_string(),
                bridge_endpoint_type: BridgeEndpointType::Pstn,
            }],
        })
    }

    pub fn voice_focus(call_id: &CallId, enable: bool) -> Self {
        Action::VoiceFocus(VoiceFocusParameters {
            enable,
            call_id: call_id.clone(),
        })
    }

    pub fn receive_digits(call_id: &CallId) -> Self {
        Action::ReceiveDigits(ReceiveDigitsParameters {
            call_id: call_id.clone(),
            input_digits_regex: CONTROL_DIGITS_REGEX.to_string(),
            in_between_digits_duration_in_milliseconds: CONTROL_DIGIT_GAP_MS,
            flush_digits_duration_in_milliseconds: CONTROL_FLUSH_MS,
        })
    }

    pub fn play_audio(call_id: &CallId, source: AudioSource) -> Self {
        Action::PlayAudio(PlayAudioParameters {
            call_id: call_id.clone(),
            audio_source: source,
        })
    }

    pub fn hangup(call_id: &CallId) -> Self {
        Action::Hangup(HangupParameters {
            call_id: call_id.clone(),
            sip_response_code: HANGUP_SIP_RESPONSE_CODE.to_string(),
        })
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Pause(_) => ActionType::Pause,
            Action::PlayAudioAndGetDigits(_) => ActionType::PlayAudioAndGetDigits,
            Action::CallAndBridge(_) => ActionType::CallAndBridge,
            Action::VoiceFocus(_) => ActionType::VoiceFocus,
            Action::ReceiveDigits(_) => ActionType::ReceiveDigits,
            Action::PlayAudio(_) => ActionType::PlayAudio,
            Action::Hangup(_) => ActionType::Hangup,
        }
    }

    /// Leg targeted by this action. `CallAndBridge` creates a new leg instead.
    pub fn call_id(&self) -> Option<&CallId> {
        match self {
            Action::Pause(p) => Some(&p.call_id),
            Action::PlayAudioAndGetDigits(p) => Some(&p.call_id),
            Action::CallAndBridge(_) => None,
            Action::VoiceFocus(p) => Some(&p.call_id),
            Action::ReceiveDigits(p) => Some(&p.call_id),
            Action::PlayAudio(p) => Some(&p.call_id),
            Action::Hangup(p) => Some(&p.call_id),
        }
    }
}

/// Apologise to the caller and hang up.
pub fn error_sequence(call_id: &CallId, assets: &AudioAssets) -> ActionResponse {
    ActionResponse::new(vec![
        Action::play_audio(call_id, assets.source(CALL_FAILED_PROMPT)),
        Action::hangup(call_id),
    ])
}
