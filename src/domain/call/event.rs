//! Call lifecycle events delivered by the telephony platform

use crate::domain::call::entity::Participant;
use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::CallId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of lifecycle notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvocationEventType {
    NewInboundCall,
    Ringing,
    ActionSuccessful,
    DigitsReceived,
    Hangup,
    ActionFailed,
    InvalidLambdaResponse,
    /// Anything the platform sends that this service does not know
    Unknown(String),
}

impl InvocationEventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NewInboundCall => "NEW_INBOUND_CALL",
            Self::Ringing => "RINGING",
            Self::ActionSuccessful => "ACTION_SUCCESSFUL",
            Self::DigitsReceived => "DIGITS_RECEIVED",
            Self::Hangup => "HANGUP",
            Self::ActionFailed => "ACTION_FAILED",
            Self::InvalidLambdaResponse => "INVALID_LAMBDA_RESPONSE",
            Self::Unknown(raw) => raw,
        }
    }
}

impl Default for InvocationEventType {
    fn default() -> Self {
        Self::Unknown("NO-EVENT".to_string())
    }
}

impl From<String> for InvocationEventType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NEW_INBOUND_CALL" => Self::NewInboundCall,
            "RINGING" => Self::Ringing,
            "ACTION_SUCCESSFUL" => Self::ActionSuccessful,
            "DIGITS_RECEIVED" => Self::DigitsReceived,
            "HANGUP" => Self::Hangup,
            "ACTION_FAILED" => Self::ActionFailed,
            "INVALID_LAMBDA_RESPONSE" => Self::InvalidLambdaResponse,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<InvocationEventType> for String {
    fn from(kind: InvocationEventType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InvocationEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a platform action, as reported back in `ActionData.Type`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    Pause,
    PlayAudioAndGetDigits,
    CallAndBridge,
    VoiceFocus,
    ReceiveDigits,
    PlayAudio,
    Hangup,
    Unrecognized(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pause => "Pause",
            Self::PlayAudioAndGetDigits => "PlayAudioAndGetDigits",
            Self::CallAndBridge => "CallAndBridge",
            Self::VoiceFocus => "VoiceFocus",
            Self::ReceiveDigits => "ReceiveDigits",
            Self::PlayAudio => "PlayAudio",
            Self::Hangup => "Hangup",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ActionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Pause" => Self::Pause,
            "PlayAudioAndGetDigits" => Self::PlayAudioAndGetDigits,
            "CallAndBridge" => Self::CallAndBridge,
            "VoiceFocus" => Self::VoiceFocus,
            "ReceiveDigits" => Self::ReceiveDigits,
            "PlayAudio" => Self::PlayAudio,
            "Hangup" => Self::Hangup,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<ActionType> for String {
    fn from(kind: ActionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of the echoed action parameters this service reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionDataParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<CallId>,
}

/// Result metadata of the action that triggered this event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionData {
    #[serde(rename = "Type")]
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ActionDataParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_digits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// One lifecycle notification for an in-progress call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallEvent {
    #[serde(default)]
    pub invocation_event_type: InvocationEventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_details: Option<CallDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_data: Option<ActionData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CallEvent {
    pub fn kind(&self) -> &InvocationEventType {
        &self.invocation_event_type
    }

    pub fn participants(&self) -> &[Participant] {
        self.call_details
            .as_ref()
            .map(|details| details.participants.as_slice())
            .unwrap_or_default()
    }

    pub fn first_participant(&self) -> Result<&Participant> {
        self.participants()
            .first()
            .ok_or(DomainError::MissingField("CallDetails.Participants"))
    }

    pub fn action_data(&self) -> Result<&ActionData> {
        self.action_data
            .as_ref()
            .ok_or(DomainError::MissingField("ActionData"))
    }

    pub fn received_digits(&self) -> Result<&str> {
        self.action_data()?
            .received_digits
            .as_deref()
            .ok_or(DomainError::MissingField("ActionData.ReceivedDigits"))
    }

    /// Leg the completed action ran on, when the platform echoed it.
    pub fn reporting_call_id(&self) -> Option<&CallId> {
        self.action_data
            .as_ref()
            .and_then(|data| data.parameters.as_ref())
            .and_then(|params| params.call_id.as_ref())
    }

    /// Error reported by the platform, from `ActionData` or the event itself.
    pub fn reported_error(&self) -> DomainError {
        let data = self.action_data.as_ref();
        let error_type = data
            .and_then(|d| d.error_type.clone())
            .or_else(|| self.error_type.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let message = data
            .and_then(|d| d.error_message.clone())
            .or_else(|| self.error_message.clone())
            .unwrap_or_default();
        DomainError::ActionFailed {
            error_type,
            message,
        }
    }
}
