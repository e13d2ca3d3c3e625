//! Error types for wire decoding and encoding.

use thiserror::Error;

/// Error while decoding a JSON tree into an entity.
///
/// Shape mismatches on individual property alternatives are never
/// surfaced here: they fall through to the next alternative and
/// eventually to unknown-value capture. A `DecodeError` means the call
/// as a whole failed and the partially built entity must be discarded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Parse(String),

    #[error("document root is not a JSON object")]
    RootNotObject,

    #[error("document has no type discriminator")]
    MissingType,

    #[error("no registered type for any of {names:?}")]
    UnresolvedType { names: Vec<String> },

    #[error("language map property {property:?} is not a JSON object")]
    InvalidLanguageMap { property: String },

    #[error("nesting depth exceeds maximum {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Parse(err.to_string())
    }
}

/// Error while encoding an entity into a JSON tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("float value {value} is not representable in JSON")]
    NonFiniteFloat { value: f64 },
}
