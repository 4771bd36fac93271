//! Wire DTOs for the todo API and the client-side view model.
//!
//! # Design
//! These types mirror the server's envelope shape but are defined
//! independently; the integration test catches drift between the crates.
//! `TodoItem` is the flattened form the page keeps in its list.

use serde::{Deserialize, Serialize};

/// Field values of a stored todo as they appear on the wire.
///
/// `completed` is optional so a partial attribute set still parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoAttributes {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// `{id, attributes}` wrapper returned by every todo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoEnvelope {
    pub id: String,
    pub attributes: TodoAttributes,
}

/// A todo as held in the page's local list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub item: String,
    pub completed: bool,
}

impl From<TodoEnvelope> for TodoItem {
    fn from(envelope: TodoEnvelope) -> Self {
        Self {
            id: envelope.id,
            item: envelope.attributes.item,
            completed: envelope.attributes.completed.unwrap_or(false),
        }
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub item: String,
}

/// Request payload for updating an existing todo. The server only writes
/// `completed` when it is `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_ignores_extra_fields() {
        let envelope: TodoEnvelope = serde_json::from_str(
            r#"{"id":"1","type":"todo","attributes":{"item":"buy milk","completed":false}}"#,
        )
        .unwrap();
        assert_eq!(envelope.id, "1");
        assert_eq!(envelope.attributes.completed, Some(false));
    }

    #[test]
    fn missing_completed_flattens_to_false() {
        let envelope: TodoEnvelope =
            serde_json::from_str(r#"{"id":"1","attributes":{"item":"x"}}"#).unwrap();
        assert_eq!(envelope.attributes.completed, None);
        let item = TodoItem::from(envelope);
        assert!(!item.completed);
    }

    #[test]
    fn update_omits_unset_completed() {
        let input = UpdateTodo {
            item: "x".into(),
            completed: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("completed").is_none());
    }
}
