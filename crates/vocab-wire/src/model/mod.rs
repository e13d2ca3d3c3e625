//! In-memory data model for vocabulary entities.
//!
//! - Identifiers (IRIs)
//! - Scalar values (typed leaves)
//! - Property values (the per-occurrence tagged union)
//! - Property slots (functional, repeated, language map)
//! - Entities (open records over a declared schema)
//! - Builder (ergonomic construction)

pub mod builder;
pub mod entity;
pub mod iri;
pub mod scalar;
pub mod slot;
pub mod value;

pub use builder::EntityBuilder;
pub use entity::Entity;
pub use iri::{Iri, IriParseError};
pub use scalar::ScalarValue;
pub use slot::{FunctionalSlot, LanguageMapSlot, PropertySlot, RepeatedSlot};
pub use value::PropertyValue;
