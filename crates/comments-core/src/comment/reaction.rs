//! Aggregate reaction counts

use super::enums::CommentReactionType;
use crate::types::{CommentId, CommentResourceReference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reaction count for one reaction type on a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReaction {
    #[serde(flatten)]
    pub reference: CommentResourceReference,
    pub comment_id: CommentId,
    #[serde(rename = "type")]
    pub kind: CommentReactionType,
    /// Total reactions of this type
    pub count: u32,
    /// Whether the calling user is one of the reactors
    pub is_current_user_engaged: bool,
}

impl CommentReaction {
    pub fn new(comment_id: CommentId, kind: CommentReactionType, count: u32) -> Self {
        Self {
            reference: CommentResourceReference::default(),
            comment_id,
            kind,
            count,
            is_current_user_engaged: false,
        }
    }
}

/// Sum reaction counts per type, preserving wire-code order.
///
/// Produces at most one entry per type even when the input repeats a type.
pub fn tally(comment_id: CommentId, reactions: &[CommentReaction]) -> Vec<CommentReaction> {
    let mut by_kind: BTreeMap<CommentReactionType, CommentReaction> = BTreeMap::new();
    for reaction in reactions {
        by_kind
            .entry(reaction.kind)
            .and_modify(|r| {
                r.count += reaction.count;
                r.is_current_user_engaged |= reaction.is_current_user_engaged;
            })
            .or_insert_with(|| CommentReaction {
                comment_id,
                ..reaction.clone()
            });
    }
    by_kind.into_values().collect()
}
