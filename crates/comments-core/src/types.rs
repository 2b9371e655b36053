//! Shared identifier and reference types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier the service assigns to a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub i32);

impl CommentId {
    /// Raw wire value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for CommentId {
    fn from(id: i32) -> Self {
        CommentId(id)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the artifact (work item, wiki page, ...) hosting a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId(pub String);

impl ArtifactId {
    /// Create an ArtifactId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        ArtifactId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base field set shared by every linkable comment resource.
///
/// Embedded with `#[serde(flatten)]` so `url` sits at the top level of each payload.
/// An empty `url` is left out when encoding, so payloads without one keep their shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResourceReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl CommentResourceReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Identity of a user as reported by the service (`createdBy`, `modifiedBy`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_aad_identity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deactivated_in_hosting_account: Option<bool>,
}

impl IdentityRef {
    /// Identity carrying only an id and display name
    pub fn named(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    /// Best human-readable label: display name, then unique name, then id
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.unique_name.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("<unknown>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_is_bare_number_on_wire() {
        assert_eq!(serde_json::to_string(&CommentId(42)).unwrap(), "42");
        let id: CommentId = serde_json::from_str("7").unwrap();
        assert_eq!(id, CommentId(7));
    }

    #[test]
    fn test_empty_url_omitted() {
        let json = serde_json::to_string(&CommentResourceReference::default()).unwrap();
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&CommentResourceReference::new("https://x/c/1")).unwrap();
        assert_eq!(json, r#"{"url":"https://x/c/1"}"#);
    }

    #[test]
    fn test_identity_omits_absent_fields() {
        let identity = IdentityRef::named("b5f1", "Ada Lovelace");
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, r#"{"displayName":"Ada Lovelace","id":"b5f1"}"#);
    }

    #[test]
    fn test_identity_decodes_camel_case() {
        let identity: IdentityRef = serde_json::from_str(
            r#"{"uniqueName":"ada@example.com","isAadIdentity":true,"imageUrl":"https://x/avatar"}"#,
        )
        .unwrap();
        assert_eq!(identity.unique_name.as_deref(), Some("ada@example.com"));
        assert_eq!(identity.is_aad_identity, Some(true));
        assert_eq!(identity.label(), "ada@example.com");
    }

    #[test]
    fn test_identity_label_fallback() {
        assert_eq!(IdentityRef::default().label(), "<unknown>");
    }
}
