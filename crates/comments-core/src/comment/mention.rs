//! Mentions parsed out of comment text

use super::enums::CommentMentionType;
use crate::error::{CommentsError, Result};
use crate::types::{ArtifactId, CommentId, CommentResourceReference};
use serde::{Deserialize, Serialize};

/// An artifact mentioned in a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentMention {
    #[serde(flatten)]
    pub reference: CommentResourceReference,
    /// Artifact the mentioning comment belongs to
    pub artifact_id: ArtifactId,
    /// Owning comment. Legacy mentions may not carry one.
    #[serde(default)]
    pub comment_id: Option<CommentId>,
    /// Raw mention value; its meaning depends on `kind`
    pub mentioned_artifact: String,
    #[serde(rename = "type")]
    pub kind: CommentMentionType,
}

/// Typed reading of `mentioned_artifact`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionTarget {
    /// VSID of the mentioned identity
    Person(String),
    WorkItem(i32),
    PullRequest(i32),
}

impl CommentMention {
    /// Interpret the mentioned artifact according to the mention type.
    ///
    /// Work item and pull request ids must be numeric; they are never coerced.
    pub fn target(&self) -> Result<MentionTarget> {
        let raw = self.mentioned_artifact.trim();
        match self.kind {
            CommentMentionType::Person => Ok(MentionTarget::Person(raw.to_string())),
            CommentMentionType::WorkItem => parse_numeric(raw, self.kind).map(MentionTarget::WorkItem),
            CommentMentionType::PullRequest => {
                parse_numeric(raw, self.kind).map(MentionTarget::PullRequest)
            }
        }
    }

    /// Whether this mention predates per-comment tracking
    pub fn is_legacy(&self) -> bool {
        self.comment_id.is_none()
    }
}

fn parse_numeric(raw: &str, kind: CommentMentionType) -> Result<i32> {
    raw.parse::<i32>().map_err(|_| CommentsError::MentionTarget {
        mention_type: kind.name(),
        value: raw.to_string(),
    })
}

impl std::fmt::Display for MentionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MentionTarget::Person(vsid) => write!(f, "@<{}>", vsid),
            MentionTarget::WorkItem(id) => write!(f, "#{}", id),
            MentionTarget::PullRequest(id) => write!(f, "!{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(kind: CommentMentionType, value: &str) -> CommentMention {
        CommentMention {
            reference: CommentResourceReference::default(),
            artifact_id: ArtifactId::from_string("299"),
            comment_id: Some(CommentId(5)),
            mentioned_artifact: value.to_string(),
            kind,
        }
    }

    #[test]
    fn test_missing_comment_id_stays_absent() {
        let mention: CommentMention = serde_json::from_str(
            r#"{"artifactId":"299","mentionedArtifact":"1234","type":1}"#,
        )
        .unwrap();
        assert_eq!(mention.comment_id, None);
        assert!(mention.is_legacy());
        assert_eq!(mention.kind, CommentMentionType::WorkItem);
    }

    #[test]
    fn test_comment_id_zero_is_present() {
        let mention: CommentMention = serde_json::from_str(
            r#"{"artifactId":"299","commentId":0,"mentionedArtifact":"x","type":0}"#,
        )
        .unwrap();
        assert_eq!(mention.comment_id, Some(CommentId(0)));
    }

    #[test]
    fn test_type_field_on_wire() {
        let json = serde_json::to_value(mention(CommentMentionType::PullRequest, "17")).unwrap();
        assert_eq!(json["type"], 2);
        assert_eq!(json["commentId"], 5);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            mention(CommentMentionType::Person, "b5f1-77").target().unwrap(),
            MentionTarget::Person("b5f1-77".to_string())
        );
        assert_eq!(
            mention(CommentMentionType::WorkItem, "1234").target().unwrap(),
            MentionTarget::WorkItem(1234)
        );
        let target = mention(CommentMentionType::PullRequest, "88").target().unwrap();
        assert_eq!(target.to_string(), "!88");
    }

    #[test]
    fn test_non_numeric_work_item_rejected() {
        let err = mention(CommentMentionType::WorkItem, "abc").target().unwrap_err();
        assert!(matches!(err, CommentsError::MentionTarget { .. }));
    }
}
