//! Error types for the comment wire model

use std::fmt;
use thiserror::Error;

/// How a payload failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A required field was absent
    MissingField,
    /// An enum carried a numeric value outside its known set
    UnknownEnumValue,
    /// Anything else: bad syntax, wrong types, trailing data
    Malformed,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::MissingField => write!(f, "missing field"),
            DecodeErrorKind::UnknownEnumValue => write!(f, "unknown enum value"),
            DecodeErrorKind::Malformed => write!(f, "malformed payload"),
        }
    }
}

/// Main error type for comment payload handling
#[derive(Debug, Error)]
pub enum CommentsError {
    /// Payload could not be decoded into the named entity
    #[error("Failed to decode {entity} ({kind}) at {path} (line {line}, column {column}): {source}")]
    Decode {
        entity: &'static str,
        kind: DecodeErrorKind,
        /// Field path of the failure, e.g. `comments[0].reactions[1].type`
        path: String,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Entity could not be encoded
    #[error("Failed to encode {entity}: {source}")]
    Encode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Numeric value outside an enum's wire set
    #[error("unknown {kind} value {value}")]
    UnknownEnumValue { kind: &'static str, value: i32 },

    /// Unrecognized name for an enum or flag
    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: &'static str, name: String },

    /// Mentioned artifact does not match its mention type
    #[error("Invalid {mention_type} mention target '{value}'")]
    MentionTarget {
        mention_type: &'static str,
        value: String,
    },

    /// Payload violates a model invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommentsError {
    /// Decode failure kind, if this is a decode error
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            CommentsError::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for comment payload handling
pub type Result<T> = std::result::Result<T, CommentsError>;
