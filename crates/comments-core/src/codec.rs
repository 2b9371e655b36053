//! JSON encoding and decoding of wire entities

use crate::comment::{
    Comment, CommentAttachment, CommentCreateParameters, CommentList, CommentMention,
    CommentReaction, CommentUpdateParameters, CommentVersion,
};
use crate::error::{CommentsError, DecodeErrorKind, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

/// A type exchanged with the comments service
pub trait WireEntity: Serialize + DeserializeOwned {
    /// Entity name used in diagnostics
    const NAME: &'static str;
}

impl WireEntity for Comment {
    const NAME: &'static str = "Comment";
}

impl WireEntity for CommentList {
    const NAME: &'static str = "CommentList";
}

impl WireEntity for CommentVersion {
    const NAME: &'static str = "CommentVersion";
}

impl WireEntity for Vec<CommentVersion> {
    const NAME: &'static str = "CommentVersion[]";
}

impl WireEntity for CommentAttachment {
    const NAME: &'static str = "CommentAttachment";
}

impl WireEntity for CommentMention {
    const NAME: &'static str = "CommentMention";
}

impl WireEntity for CommentReaction {
    const NAME: &'static str = "CommentReaction";
}

impl WireEntity for CommentCreateParameters {
    const NAME: &'static str = "CommentCreateParameters";
}

impl WireEntity for CommentUpdateParameters {
    const NAME: &'static str = "CommentUpdateParameters";
}

/// Decode a JSON payload into a wire entity
pub fn decode<T: WireEntity>(json: &str) -> Result<T> {
    trace!("Decoding {} from {} bytes", T::NAME, json.len());
    decode_from(serde_json::Deserializer::from_str(json))
}

/// Decode from raw bytes, e.g. a response body
pub fn decode_slice<T: WireEntity>(bytes: &[u8]) -> Result<T> {
    trace!("Decoding {} from {} bytes", T::NAME, bytes.len());
    decode_from(serde_json::Deserializer::from_slice(bytes))
}

fn decode_from<'de, R, T>(mut de: serde_json::Deserializer<R>) -> Result<T>
where
    R: serde_json::de::Read<'de>,
    T: WireEntity,
{
    let value = serde_path_to_error::deserialize(&mut de)
        .map_err(|err| decode_error::<T>(err.path().to_string(), err.into_inner()))?;
    de.end()
        .map_err(|source| decode_error::<T>(".".to_string(), source))?;
    Ok(value)
}

fn decode_error<T: WireEntity>(path: String, source: serde_json::Error) -> CommentsError {
    let kind = classify(&source);
    debug!("Failed to decode {} at {}: {}", T::NAME, path, source);
    CommentsError::Decode {
        entity: T::NAME,
        kind,
        path,
        line: source.line(),
        column: source.column(),
        source,
    }
}

/// Encode a wire entity as compact JSON
pub fn encode<T: WireEntity>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| CommentsError::Encode {
        entity: T::NAME,
        source,
    })
}

/// Encode a wire entity as indented JSON
pub fn encode_pretty<T: WireEntity>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| CommentsError::Encode {
        entity: T::NAME,
        source,
    })
}

// serde_json only exposes the message text for data errors; enum rejections
// come from the TryFrom impls and carry their "unknown <Enum> value" wording.
fn classify(err: &serde_json::Error) -> DecodeErrorKind {
    if !err.is_data() {
        return DecodeErrorKind::Malformed;
    }
    let message = err.to_string();
    if message.starts_with("missing field") {
        DecodeErrorKind::MissingField
    } else if message.starts_with("unknown Comment") && message.contains(" value ") {
        DecodeErrorKind::UnknownEnumValue
    } else {
        DecodeErrorKind::Malformed
    }
}
