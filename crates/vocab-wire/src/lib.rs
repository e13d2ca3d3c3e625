//! vocab-wire: typed-vocabulary entity model with lossless JSON wire
//! serialization.
//!
//! This crate models a large, extensible vocabulary of typed entities
//! (documents, objects, links, collections) exchanged as JSON trees.
//! Each vocabulary type declares an ordered property table; each
//! property declares the ordered list of alternative shapes its values
//! may take (a nested typed entity, a bare IRI reference, a scalar, a
//! language-tagged string). The codec converts between the in-memory
//! model and a generic JSON tree while preserving fields unknown to the
//! schema, so a read-then-write cycle never drops data it did not
//! understand.
//!
//! # Quick Start
//!
//! ```rust
//! use vocab_wire::{EntityBuilder, Registry, vocab};
//! use vocab_wire::codec::{decode_entity, encode_entity};
//!
//! // Build an entity over the core vocabulary
//! let note = EntityBuilder::new(vocab::NOTE.clone())
//!     .id("https://example.com/notes/1")
//!     .text("name", "Minimal note")
//!     .lang("contentMap", "en", "hello world")
//!     .build();
//!
//! // Encode to a JSON tree
//! let tree = encode_entity(&note).unwrap();
//! assert_eq!(tree["type"], serde_json::json!("Note"));
//!
//! // Decode back
//! let registry = Registry::core();
//! let decoded = decode_entity(&registry, &tree).unwrap();
//! assert_eq!(
//!     decoded.language_map("contentMap").unwrap().get("en"),
//!     "hello world"
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Entity, PropertyValue, slots, Iri)
//! - [`schema`]: Declared schema tables (TypeSchema, PropertySpec, Shape)
//! - [`registry`]: Type-name resolution partitioned by capability
//! - [`codec`]: JSON wire serialization/deserialization
//! - [`vocab`]: The built-in core vocabulary
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//! - [`util`]: ISO 8601 duration helpers
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Recursion into nested entities is depth-limited
//! - Discriminator lists are length-limited
//! - Anything it cannot interpret is captured, bounded by input size,
//!   rather than reinterpreted
//!
//! # Wire Format
//!
//! A generic JSON tree with three structural conventions: a repeatable
//! property with exactly one value is emitted bare (readers accept both
//! forms), the `"type"` discriminator is a string or array of strings,
//! and the reserved `"@context"` metadata key is consumed on read and
//! never re-emitted.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod registry;
pub mod schema;
pub mod util;
pub mod vocab;

// Re-export commonly used types at crate root
pub use codec::{
    decode_entity, decode_entity_as, decode_entity_str, encode_entity, encode_entity_string,
};
pub use error::{DecodeError, EncodeError};
pub use model::{
    Entity, EntityBuilder, FunctionalSlot, Iri, IriParseError, LanguageMapSlot, PropertySlot,
    PropertyValue, RepeatedSlot, ScalarValue,
};
pub use registry::Registry;
pub use schema::{Capability, PropertySpec, Shape, SlotKind, TypeSchema};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
