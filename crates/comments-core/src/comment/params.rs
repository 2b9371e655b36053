//! Request bodies for creating and updating comments

use super::enums::CommentState;
use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// Body of a create-comment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateParameters {
    pub text: String,
    /// Set to reply to an existing comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}

impl CommentCreateParameters {
    /// Top-level comment
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parent_id: None,
        }
    }

    /// Reply to `parent_id`
    pub fn reply(parent_id: CommentId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parent_id: Some(parent_id),
        }
    }
}

/// Body of an update-comment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateParameters {
    pub text: String,
    pub state: CommentState,
}

impl CommentUpdateParameters {
    pub fn new(text: impl Into<String>, state: CommentState) -> Self {
        Self {
            text: text.into(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_omits_absent_parent() {
        let json = serde_json::to_string(&CommentCreateParameters::new("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);
    }

    #[test]
    fn test_reply_encodes_parent() {
        let params = CommentCreateParameters::reply(CommentId(12), "agreed");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"text":"agreed","parentId":12}"#);
        let decoded: CommentCreateParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_update_encodes_numeric_state() {
        let params = CommentUpdateParameters::new("done", CommentState::Resolved);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"text":"done","state":1}"#);
    }
}
