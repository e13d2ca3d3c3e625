//! JSON wire serialization for vocabulary entities.
//!
//! The wire format is a generic JSON tree. Reserved keys:
//! - `"id"` — identity, a bare IRI string;
//! - `"type"` — the type discriminator, a string or array of strings;
//! - `"@context"` — schema-level metadata, consumed on read and never
//!   re-emitted.

pub mod entity;
pub mod scalar;
pub mod value;

pub use entity::{
    decode_entity, decode_entity_as, decode_entity_str, encode_entity, encode_entity_string,
};
pub use scalar::{decode_scalar, encode_scalar};
pub use value::{decode_property_value, encode_property_value};

/// Wire key carrying the identity reference.
pub const ID_KEY: &str = "id";

/// Wire key carrying the type discriminator.
pub const TYPE_KEY: &str = "type";

/// Reserved metadata key, consumed on read and never re-emitted.
pub const CONTEXT_KEY: &str = "@context";

/// Wire key carrying the text of a language-tagged value object.
pub const VALUE_KEY: &str = "@value";

/// Wire key carrying the tag of a language-tagged value object.
pub const LANGUAGE_KEY: &str = "@language";
