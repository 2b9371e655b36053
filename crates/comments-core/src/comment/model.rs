//! Comment, version, attachment and list shapes

use super::enums::{CommentReactionType, CommentState};
use super::mention::CommentMention;
use super::reaction::CommentReaction;
use crate::types::{ArtifactId, CommentId, CommentResourceReference, IdentityRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on an artifact such as a work item or wiki page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(flatten)]
    pub reference: CommentResourceReference,
    pub id: CommentId,
    /// Artifact this comment belongs to
    pub artifact_id: ArtifactId,
    /// Plaintext/markdown body
    pub text: String,
    /// Rendered HTML, present only when requested through the expand options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_text: Option<String>,
    pub state: CommentState,
    pub version: i32,
    pub created_by: IdentityRef,
    pub created_date: DateTime<Utc>,
    pub modified_by: IdentityRef,
    pub modified_date: DateTime<Utc>,
    pub is_deleted: bool,
    /// Parent comment when this is a reply
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    #[serde(default)]
    pub mentions: Vec<CommentMention>,
    #[serde(default)]
    pub reactions: Vec<CommentReaction>,
    /// Replies, present only when children were expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<CommentList>,
}

impl Comment {
    /// Check whether this comment is a reply to another comment
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Replies in the current batch, empty when children were not expanded
    pub fn reply_comments(&self) -> &[Comment] {
        self.replies
            .as_ref()
            .map(|list| list.comments.as_slice())
            .unwrap_or(&[])
    }

    /// Reaction entry for a given type, if any
    pub fn reaction(&self, kind: CommentReactionType) -> Option<&CommentReaction> {
        self.reactions.iter().find(|r| r.kind == kind)
    }
}

/// A comment as it looked at one version number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentVersion {
    #[serde(flatten)]
    pub reference: CommentResourceReference,
    pub id: CommentId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_text: Option<String>,
    pub state: CommentState,
    pub version: i32,
    pub created_by: IdentityRef,
    pub created_date: DateTime<Utc>,
    /// Who modified the comment at this version
    pub modified_by: IdentityRef,
    pub modified_date: DateTime<Utc>,
    /// Whether the comment was deleted at this version
    pub is_deleted: bool,
}

/// A file attached to a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAttachment {
    #[serde(flatten)]
    pub reference: CommentResourceReference,
    pub id: String,
    pub created_by: IdentityRef,
    pub created_date: DateTime<Utc>,
}

/// One page of comments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentList {
    #[serde(flatten)]
    pub reference: CommentResourceReference,
    /// Comments in the current batch
    pub comments: Vec<Comment>,
    /// Size of the current batch
    pub count: u32,
    /// Total comments across all pages
    pub total_count: u32,
    /// Opaque cursor for the next page
    #[serde(default)]
    pub continuation_token: Option<String>,
    /// URI of the next page
    #[serde(default)]
    pub next_page: Option<String>,
}

impl CommentList {
    /// Build a page whose `count` matches its batch size
    pub fn new(comments: Vec<Comment>, total_count: u32) -> Self {
        let count = u32::try_from(comments.len()).unwrap_or(u32::MAX);
        Self {
            reference: CommentResourceReference::default(),
            comments,
            count,
            total_count,
            continuation_token: None,
            next_page: None,
        }
    }

    /// Attach pagination cursors
    pub fn with_continuation(
        mut self,
        continuation_token: impl Into<String>,
        next_page: Option<String>,
    ) -> Self {
        self.continuation_token = Some(continuation_token.into());
        self.next_page = next_page;
        self
    }

    /// Whether the service offered another page
    pub fn has_more(&self) -> bool {
        self.continuation_token.is_some() || self.next_page.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Depth-first walk over comments and their expanded replies
    pub fn iter_threads(&self) -> impl Iterator<Item = (usize, &Comment)> {
        let mut stack: Vec<(usize, &Comment)> =
            self.comments.iter().rev().map(|c| (0, c)).collect();
        std::iter::from_fn(move || {
            let (depth, comment) = stack.pop()?;
            stack.extend(comment.reply_comments().iter().rev().map(|c| (depth + 1, c)));
            Some((depth, comment))
        })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::comment::{CommentMentionType, CommentReactionType};
    use pretty_assertions::assert_eq;

    const COMMENT_JSON: &str = r#"{
        "url": "https://dev.example.com/_apis/wit/workItems/299/comments/5",
        "id": 5,
        "artifactId": "299",
        "text": "Looks good @<b5f1>",
        "parentId": null,
        "version": 1,
        "state": 0,
        "createdBy": {"displayName": "Ada", "id": "u-1"},
        "createdDate": "2024-03-01T09:30:00Z",
        "modifiedBy": {"displayName": "Ada", "id": "u-1"},
        "modifiedDate": "2024-03-01T09:30:00Z",
        "isDeleted": false,
        "mentions": [
            {"artifactId": "299", "commentId": 5, "mentionedArtifact": "b5f1", "type": 0}
        ],
        "reactions": [
            {"commentId": 5, "type": 5, "count": 3, "isCurrentUserEngaged": true}
        ]
    }"#;

    #[test]
    fn test_decode_comment_payload() {
        let comment: Comment = serde_json::from_str(COMMENT_JSON).unwrap();
        assert_eq!(comment.id, CommentId(5));
        assert_eq!(comment.parent_id, None);
        assert_eq!(comment.state, CommentState::Active);
        assert_eq!(comment.reference.url, "https://dev.example.com/_apis/wit/workItems/299/comments/5");
        assert_eq!(comment.mentions[0].kind, CommentMentionType::Person);
        assert_eq!(comment.reactions[0].kind, CommentReactionType::Confused);
        assert!(comment.replies.is_none());
        assert!(!comment.is_reply());
    }

    #[test]
    fn test_parent_zero_is_not_absent() {
        let mut value: serde_json::Value = serde_json::from_str(COMMENT_JSON).unwrap();
        value["parentId"] = serde_json::json!(0);
        let comment: Comment = serde_json::from_value(value).unwrap();
        assert_eq!(comment.parent_id, Some(CommentId(0)));
    }

    #[test]
    fn test_comment_round_trip_with_replies() {
        let mut parent = comment(1, None);
        parent.rendered_text = Some("<p>comment 1</p>".to_string());
        parent.replies = Some(CommentList::new(vec![comment(2, Some(1))], 1));

        let json = serde_json::to_string(&parent).unwrap();
        let decoded: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, parent);
    }

    #[test]
    fn test_empty_list_round_trip() {
        let list = CommentList::new(Vec::new(), 0);
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains(r#""continuationToken":null"#));
        let decoded: CommentList = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, list);
        assert!(decoded.is_empty());
        assert!(!decoded.has_more());
    }

    #[test]
    fn test_list_count_matches_batch() {
        let list = CommentList::new(vec![comment(1, None), comment(2, None)], 40)
            .with_continuation("opaque+token/==", None);
        assert_eq!(list.count as usize, list.comments.len());
        assert!(list.total_count > list.count);
        assert!(list.has_more());
    }

    #[test]
    fn test_iter_threads_depth_first() {
        let mut first = comment(1, None);
        first.replies = Some(CommentList::new(vec![comment(3, Some(1))], 1));
        let list = CommentList::new(vec![first, comment(2, None)], 2);

        let order: Vec<(usize, i32)> = list.iter_threads().map(|(d, c)| (d, c.id.0)).collect();
        assert_eq!(order, vec![(0, 1), (1, 3), (0, 2)]);
    }

    #[test]
    fn test_version_round_trip() {
        let snapshot = version(5, 3);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("mentions"));
        let decoded: CommentVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_attachment_string_id() {
        let attachment: CommentAttachment = serde_json::from_str(
            r#"{"url":"https://x/att/1","id":"e3b0c442-98fc","createdBy":{"id":"u-1"},"createdDate":"2024-03-01T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(attachment.id, "e3b0c442-98fc");
        assert_eq!(attachment.created_date, timestamp());
    }
}
