//! Invariant checks for decoded comment payloads
//!
//! Decoding never runs these. Callers opt in when they want to know whether
//! a payload from the service is internally consistent.

use super::model::{Comment, CommentList, CommentVersion};
use crate::error::{CommentsError, Result};
use crate::types::CommentId;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A single broken invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `count` disagrees with the batch length
    CountMismatch { declared: u32, actual: usize },
    /// More than one reaction entry for the same type
    DuplicateReaction { comment: CommentId, kind: &'static str },
    /// Reaction points at a different comment than the one holding it
    ForeignReaction { comment: CommentId, reaction_comment: CommentId },
    /// Mention carries a comment id other than its owner's
    ForeignMention { comment: CommentId, mention_comment: CommentId },
    /// Reply whose `parentId` is not the comment it is nested under
    OrphanReply { parent: CommentId, reply: CommentId, declared_parent: Option<CommentId> },
    /// Version number went backwards
    VersionRegression { comment: CommentId, previous: i32, next: i32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::CountMismatch { declared, actual } => {
                write!(f, "count is {} but the batch holds {} comments", declared, actual)
            }
            Violation::DuplicateReaction { comment, kind } => {
                write!(f, "comment {} has more than one '{}' reaction", comment, kind)
            }
            Violation::ForeignReaction { comment, reaction_comment } => write!(
                f,
                "comment {} holds a reaction for comment {}",
                comment, reaction_comment
            ),
            Violation::ForeignMention { comment, mention_comment } => write!(
                f,
                "comment {} holds a mention for comment {}",
                comment, mention_comment
            ),
            Violation::OrphanReply { parent, reply, declared_parent } => match declared_parent {
                Some(declared) => write!(
                    f,
                    "reply {} under comment {} declares parent {}",
                    reply, parent, declared
                ),
                None => write!(f, "reply {} under comment {} has no parent", reply, parent),
            },
            Violation::VersionRegression { comment, previous, next } => write!(
                f,
                "comment {} goes from version {} back to {}",
                comment, previous, next
            ),
        }
    }
}

/// Checker for comment payload invariants
#[derive(Debug, Clone)]
pub struct CommentValidator {
    check_replies: bool,
}

impl CommentValidator {
    /// Create a validator that also descends into expanded replies
    pub fn new() -> Self {
        Self { check_replies: true }
    }

    /// Only check the top level of each list
    pub fn shallow() -> Self {
        Self { check_replies: false }
    }

    /// Collect every violation in a list, including nested reply pages
    pub fn check_list(&self, list: &CommentList) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.walk_list(list, None, &mut violations);
        violations
    }

    /// Collect violations for a single comment and its replies
    pub fn check_comment(&self, comment: &Comment) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.walk_comment(comment, &mut violations);
        violations
    }

    /// Check that versions never decrease per comment id, in the given order
    pub fn check_versions(&self, versions: &[CommentVersion]) -> Vec<Violation> {
        let mut last: HashMap<CommentId, i32> = HashMap::new();
        let mut violations = Vec::new();
        for version in versions {
            if let Some(&previous) = last.get(&version.id) {
                if version.version < previous {
                    violations.push(Violation::VersionRegression {
                        comment: version.id,
                        previous,
                        next: version.version,
                    });
                    continue;
                }
            }
            last.insert(version.id, version.version);
        }
        violations
    }

    /// Fail on the first violation in a list
    pub fn validate_list(&self, list: &CommentList) -> Result<()> {
        first_error(self.check_list(list))
    }

    /// Fail on the first violation in a version history
    pub fn validate_versions(&self, versions: &[CommentVersion]) -> Result<()> {
        first_error(self.check_versions(versions))
    }

    fn walk_list(&self, list: &CommentList, parent: Option<CommentId>, out: &mut Vec<Violation>) {
        if list.count as usize != list.comments.len() {
            out.push(Violation::CountMismatch {
                declared: list.count,
                actual: list.comments.len(),
            });
        }

        for comment in &list.comments {
            if let Some(parent) = parent {
                if comment.parent_id != Some(parent) {
                    out.push(Violation::OrphanReply {
                        parent,
                        reply: comment.id,
                        declared_parent: comment.parent_id,
                    });
                }
            }
            self.walk_comment(comment, out);
        }
    }

    fn walk_comment(&self, comment: &Comment, out: &mut Vec<Violation>) {
        let mut seen = HashSet::new();
        for reaction in &comment.reactions {
            if reaction.comment_id != comment.id {
                out.push(Violation::ForeignReaction {
                    comment: comment.id,
                    reaction_comment: reaction.comment_id,
                });
            }
            if !seen.insert(reaction.kind) {
                out.push(Violation::DuplicateReaction {
                    comment: comment.id,
                    kind: reaction.kind.name(),
                });
            }
        }

        for mention in &comment.mentions {
            // Legacy mentions have no comment id to compare.
            if let Some(mention_comment) = mention.comment_id {
                if mention_comment != comment.id {
                    out.push(Violation::ForeignMention {
                        comment: comment.id,
                        mention_comment,
                    });
                }
            }
        }

        if self.check_replies {
            if let Some(replies) = &comment.replies {
                self.walk_list(replies, Some(comment.id), out);
            }
        }
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn first_error(violations: Vec<Violation>) -> Result<()> {
    match violations.into_iter().next() {
        Some(violation) => Err(CommentsError::Validation(violation.to_string())),
        None => Ok(()),
    }
}
