//! Per-invocation diagnostic context

use crate::domain::call::CallEvent;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::CallId;
use std::fmt;

/// Identifies the call an event belongs to in every log line.
///
/// Built once per event from participants[0] and passed by reference to the
/// handlers; it never outlives the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub call_id: CallId,
    pub event_type: String,
    pub from: String,
    pub to: String,
}

impl CallContext {
    pub fn from_event(event: &CallEvent) -> Result<Self> {
        let first = event.first_participant()?;
        Ok(Self {
            call_id: first.call_id.clone(),
            event_type: event.kind().to_string(),
            from: first.from.clone(),
            to: first.to.clone(),
        })
    }
}

impl fmt::Display for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Call-ID:{} {} From:[{}] To:[{}]:",
            self.call_id, self.event_type, self.from, self.to
        )
    }
}
