//! Response envelope returned to the platform for every event

use super::catalog::Action;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: &str = "1.0";

/// Ordered list of actions plus the schema version marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionResponse {
    pub schema_version: String,
    pub actions: Vec<Action>,
}

impl ActionResponse {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            actions,
        }
    }

    /// Acknowledge the event without doing anything
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionResponse {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Action> for ActionResponse {
    fn from(action: Action) -> Self {
        Self::new(vec![action])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::CallId;
    use serde_json::json;

    #[test]
    fn test_empty_response_is_schema_valid() {
        assert_eq!(
            serde_json::to_value(ActionResponse::empty()).unwrap(),
            json!({ "SchemaVersion": "1.0", "Actions": [] })
        );
    }

    #[test]
    fn test_single_action_response() {
        let response: ActionResponse = Action::hangup(&CallId::new("leg-a")).into();
        assert_eq!(response.schema_version, SCHEMA_VERSION);
        assert_eq!(response.actions.len(), 1);
        assert!(!response.is_empty());
    }
}
