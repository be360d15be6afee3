//! Call entities

use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::CallId;
use serde::{Deserialize, Serialize};

/// Connection status of a call leg as reported by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantStatus {
    Connected,
    Disconnected,
    /// Any other platform-defined state
    #[serde(other)]
    Other,
}

/// One leg of a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Participant {
    pub call_id: CallId,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ParticipantStatus>,
}

impl Participant {
    pub fn new(call_id: CallId, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            call_id,
            to: to.into(),
            from: from.into(),
            status: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == Some(ParticipantStatus::Connected)
    }
}

/// Number of legs on a bridged call
pub const BRIDGED_LEG_COUNT: usize = 2;

/// Require the participant list of a bridged call.
pub fn bridged_legs(participants: &[Participant]) -> Result<&[Participant]> {
    if participants.len() != BRIDGED_LEG_COUNT {
        return Err(DomainError::UnexpectedParticipantCount {
            expected: BRIDGED_LEG_COUNT,
            found: participants.len(),
        });
    }
    Ok(participants)
}

/// Resolve the leg opposite to `reporting` on a bridged call.
///
/// Only participants[0] is compared: a reporting id equal to it selects
/// participants[1], anything else selects participants[0].
pub fn other_leg<'a>(reporting: &CallId, participants: &'a [Participant]) -> Result<&'a Participant> {
    match participants {
        [first, second] if first.call_id == *reporting => Ok(second),
        [first, _] => Ok(first),
        _ => Err(DomainError::UnexpectedParticipantCount {
            expected: BRIDGED_LEG_COUNT,
            found: participants.len(),
        }),
    }
}
