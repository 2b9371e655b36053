//! Comment wire model
//!
//! Shapes exchanged with the comments service, plus the opt-in invariant checker.

pub mod enums;
pub mod expand;
pub mod mention;
pub mod model;
pub mod params;
pub mod reaction;
pub mod validator;

pub use enums::{CommentFormat, CommentMentionType, CommentReactionType, CommentSortOrder, CommentState};
pub use expand::CommentExpandOptions;
pub use mention::{CommentMention, MentionTarget};
pub use model::{Comment, CommentAttachment, CommentList, CommentVersion};
pub use params::{CommentCreateParameters, CommentUpdateParameters};
pub use reaction::CommentReaction;
pub use validator::{CommentValidator, Violation};
