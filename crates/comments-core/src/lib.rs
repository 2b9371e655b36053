//! comments-core - Wire model for artifact comments
//!
//! Types for comments attached to work items, wiki pages and similar
//! artifacts, as exchanged with the comments service: comments, versions,
//! attachments, mentions, reactions, list pages and request bodies. Also
//! the JSON codec, listing query parameters and an opt-in invariant checker.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod codec;
pub mod query;

pub use error::{CommentsError, DecodeErrorKind, Result};
pub use types::*;
pub use comment::*;
pub use codec::{decode, encode, encode_pretty, WireEntity};
pub use query::CommentQuery;
