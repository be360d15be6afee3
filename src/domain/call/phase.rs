//! Call phase inference
//!
//! No phase is ever stored. Each event carries enough context (event kind,
//! the type of the action that just completed, the participants) for the
//! phase to be re-derived on every invocation.

use crate::domain::call::event::{ActionData, ActionType, CallEvent, InvocationEventType};
use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use serde::{Deserialize, Serialize};

/// Where a call is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallPhase {
    /// New inbound call, destination digits not yet collected
    AwaitingDestination,
    /// Platform is alerting; nothing to do
    Ringing,
    /// Destination digits collected, outbound leg must be bridged
    Bridging,
    /// Both legs are bridged, noise suppression not yet enabled
    BridgeEstablished,
    /// Noise suppression confirmed, DTMF control must be armed
    FeatureEnabling,
    /// A leg pressed a control digit
    DtmfControlActive,
    /// An action completed that needs no follow-up
    ActionCompleted,
    /// A leg hung up
    Terminated,
}

impl CallPhase {
    /// Derive the phase from an incoming event.
    pub fn classify(event: &CallEvent) -> Result<Self> {
        match event.kind() {
            InvocationEventType::NewInboundCall => Ok(Self::AwaitingDestination),
            InvocationEventType::Ringing => Ok(Self::Ringing),
            InvocationEventType::ActionSuccessful => Self::after_success(event.action_data()?),
            InvocationEventType::DigitsReceived => Ok(Self::DtmfControlActive),
            InvocationEventType::Hangup => Ok(Self::Terminated),
            InvocationEventType::ActionFailed | InvocationEventType::InvalidLambdaResponse => {
                Err(event.reported_error())
            }
            InvocationEventType::Unknown(raw) => Err(DomainError::UnsupportedEvent(raw.clone())),
        }
    }

    /// Phase reached once the action described by `data` succeeded.
    pub fn after_success(data: &ActionData) -> Result<Self> {
        match &data.action_type {
            ActionType::PlayAudioAndGetDigits => Ok(Self::Bridging),
            ActionType::CallAndBridge => Ok(Self::BridgeEstablished),
            ActionType::VoiceFocus => Ok(Self::FeatureEnabling),
            ActionType::Pause
            | ActionType::ReceiveDigits
            | ActionType::PlayAudio
            | ActionType::Hangup => Ok(Self::ActionCompleted),
            ActionType::Unrecognized(raw) => {
                Err(DomainError::UnrecognizedActionResult(raw.clone()))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingDestination => "awaiting_destination",
            Self::Ringing => "ringing",
            Self::Bridging => "bridging",
            Self::BridgeEstablished => "bridge_established",
            Self::FeatureEnabling => "feature_enabling",
            Self::DtmfControlActive => "dtmf_control_active",
            Self::ActionCompleted => "action_completed",
            Self::Terminated => "terminated",
        }
    }
}
