//! Numeric wire enumerations
//!
//! Every enum here travels as its integer code. Decoding an integer outside
//! the known set fails with [`CommentsError::UnknownEnumValue`].

use crate::error::CommentsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants in wire-code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric wire code
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Lowercase name used in config files and CLI flags
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = CommentsError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(CommentsError::UnknownEnumValue {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl FromStr for $name {
            type Err = CommentsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| CommentsError::UnknownName {
                        kind: stringify!($name),
                        name: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

wire_enum! {
    /// Lifecycle state of a comment. The service enforces no transition order.
    CommentState {
        Active = 0 => "active",
        Resolved = 1 => "resolved",
        Closed = 2 => "closed",
    }
}

impl Default for CommentState {
    fn default() -> Self {
        CommentState::Active
    }
}

wire_enum! {
    /// Format of the comment text
    CommentFormat {
        Markdown = 0 => "markdown",
        Html = 1 => "html",
    }
}

wire_enum! {
    /// What kind of artifact a mention points at
    CommentMentionType {
        /// An identity, written as `@<VSID>`
        Person = 0 => "person",
        /// A work item, written as `#<id>`
        WorkItem = 1 => "workitem",
        /// A pull request, written as `!<id>`
        PullRequest = 2 => "pullrequest",
    }
}

wire_enum! {
    /// Emoji-style reaction kinds
    CommentReactionType {
        Like = 0 => "like",
        Dislike = 1 => "dislike",
        Heart = 2 => "heart",
        Hooray = 3 => "hooray",
        Smile = 4 => "smile",
        Confused = 5 => "confused",
    }
}

wire_enum! {
    /// Sort order for comment listings
    CommentSortOrder {
        Asc = 1 => "asc",
        Desc = 2 => "desc",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes() {
        assert_eq!(serde_json::to_string(&CommentState::Active).unwrap(), "0");
        assert_eq!(serde_json::to_string(&CommentState::Closed).unwrap(), "2");
        let state: CommentState = serde_json::from_str("1").unwrap();
        assert_eq!(state, CommentState::Resolved);
    }

    #[test]
    fn test_sort_order_starts_at_one() {
        assert_eq!(CommentSortOrder::Asc.code(), 1);
        assert_eq!(CommentSortOrder::Desc.code(), 2);
        assert!(serde_json::from_str::<CommentSortOrder>("0").is_err());
    }

    #[test]
    fn test_reaction_codes_cover_all_variants() {
        let codes: Vec<i32> = CommentReactionType::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
        let confused: CommentReactionType = serde_json::from_str("5").unwrap();
        assert_eq!(confused, CommentReactionType::Confused);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = CommentMentionType::try_from(3).unwrap_err();
        assert!(matches!(
            err,
            CommentsError::UnknownEnumValue {
                kind: "CommentMentionType",
                value: 3
            }
        ));

        let err = serde_json::from_str::<CommentFormat>("7").unwrap_err();
        assert!(err.to_string().contains("unknown CommentFormat value 7"));
    }

    #[test]
    fn test_names_never_used_on_wire() {
        assert!(serde_json::from_str::<CommentState>("\"active\"").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("DESC".parse::<CommentSortOrder>().unwrap(), CommentSortOrder::Desc);
        assert_eq!("workitem".parse::<CommentMentionType>().unwrap(), CommentMentionType::WorkItem);
        assert!("sideways".parse::<CommentSortOrder>().is_err());
    }
}
