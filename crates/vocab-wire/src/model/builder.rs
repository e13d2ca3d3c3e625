//! Builder API for ergonomic entity construction.
//!
//! Provides a fluent interface over [`Entity`]'s slot machinery.
//!
//! # Example
//!
//! ```rust
//! use vocab_wire::{EntityBuilder, vocab};
//!
//! let note = EntityBuilder::new(vocab::NOTE.clone())
//!     .id("https://example.com/notes/1")
//!     .text("name", "A note")
//!     .lang("contentMap", "en", "hello")
//!     .lang("contentMap", "fr", "bonjour")
//!     .build();
//! assert!(note.repeated("name").unwrap().len() == 1);
//! ```
//!
//! Builder methods treat misuse as a programming error: writing to a
//! property the schema does not declare, or with the wrong slot kind,
//! panics.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::model::{Entity, Iri, PropertyValue};
use crate::schema::{Capability, Shape, TypeSchema};

/// Builder for constructing an [`Entity`].
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Creates a builder over the given schema.
    pub fn new(schema: Arc<TypeSchema>) -> Self {
        Self {
            entity: Entity::new(schema),
        }
    }

    /// Sets the identity reference.
    ///
    /// Panics if `id` is not a valid IRI reference.
    pub fn id(mut self, id: &str) -> Self {
        let iri = Iri::new(id).unwrap_or_else(|e| panic!("invalid id: {}", e));
        self.entity.set_id(iri);
        self
    }

    /// Appends a type name to the entity's declared type list.
    pub fn kind(mut self, name: &str) -> Self {
        self.entity.add_type(name);
        self
    }

    /// Stores a plain text occurrence.
    pub fn text(self, property: &str, value: impl Into<String>) -> Self {
        self.push(property, PropertyValue::text(value))
    }

    /// Stores a language-tagged text occurrence.
    pub fn lang_text(
        self,
        property: &str,
        language: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.push(property, PropertyValue::lang_text(language, value))
    }

    /// Stores an IRI reference occurrence.
    ///
    /// Panics if `value` is not a valid IRI reference.
    pub fn iri(self, property: &str, value: &str) -> Self {
        let iri = Iri::new(value).unwrap_or_else(|e| panic!("invalid {}: {}", property, e));
        self.push(property, PropertyValue::iri(iri))
    }

    /// Stores a float occurrence.
    pub fn float(self, property: &str, value: f64) -> Self {
        self.push(property, PropertyValue::float(value))
    }

    /// Stores a boolean occurrence.
    pub fn boolean(self, property: &str, value: bool) -> Self {
        self.push(property, PropertyValue::boolean(value))
    }

    /// Stores a timestamp occurrence.
    pub fn timestamp(self, property: &str, value: DateTime<FixedOffset>) -> Self {
        self.push(property, PropertyValue::timestamp(value))
    }

    /// Stores a duration occurrence.
    pub fn duration(self, property: &str, value: TimeDelta) -> Self {
        self.push(property, PropertyValue::duration(value))
    }

    /// Stores a nested entity occurrence under the property's first
    /// declared entity capability.
    ///
    /// Panics if the property declares no entity-shaped alternative.
    pub fn child(self, property: &str, child: Entity) -> Self {
        let capability = self
            .entity
            .schema()
            .property(property)
            .and_then(|spec| {
                spec.shapes.iter().find_map(|shape| match shape {
                    Shape::Entity(cap) => Some(*cap),
                    _ => None,
                })
            })
            .unwrap_or_else(|| {
                panic!("property {:?} declares no entity alternative", property)
            });
        self.push(property, PropertyValue::entity(capability, child))
    }

    /// Stores a nested entity occurrence under an explicit capability.
    pub fn child_as(self, property: &str, capability: Capability, child: Entity) -> Self {
        self.push(property, PropertyValue::entity(capability, child))
    }

    /// Sets a language-map entry on a language-map property.
    ///
    /// Panics if the property is undeclared or not a language map.
    pub fn lang(mut self, property: &str, tag: &str, text: impl Into<String>) -> Self {
        self.entity
            .slot_mut(property)
            .and_then(|slot| slot.as_language_map_mut())
            .unwrap_or_else(|| panic!("property {:?} is not a declared language map", property))
            .set(tag, text);
        self
    }

    /// Records an unrecognized top-level field, carried through
    /// serialization verbatim.
    pub fn unknown_field(mut self, key: &str, value: serde_json::Value) -> Self {
        self.entity.set_unknown_field(key, value);
        self
    }

    /// Finishes the entity.
    pub fn build(self) -> Entity {
        self.entity
    }

    fn push(mut self, property: &str, value: PropertyValue) -> Self {
        if !self.entity.push_value(property, value) {
            panic!("property {:?} is not declared as functional or repeated", property);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySpec, SlotKind};

    fn schema() -> Arc<TypeSchema> {
        TypeSchema::new(
            "Sample",
            vec![
                PropertySpec::repeated("name", [Shape::Text]),
                PropertySpec::language_map("nameMap"),
                PropertySpec::functional("count", [Shape::Float]),
                PropertySpec::repeated(
                    "attachment",
                    [Shape::Entity(Capability::Object), Shape::Iri],
                ),
            ],
        )
        .shared()
    }

    #[test]
    fn test_builds_slots_by_kind() {
        let child = EntityBuilder::new(schema()).text("name", "inner").build();
        let entity = EntityBuilder::new(schema())
            .id("https://example.com/1")
            .kind("Custom")
            .text("name", "a")
            .text("name", "b")
            .float("count", 3.0)
            .lang("nameMap", "en", "a")
            .child("attachment", child)
            .unknown_field("ext", serde_json::json!(true))
            .build();

        assert_eq!(entity.id().unwrap().as_str(), "https://example.com/1");
        assert_eq!(entity.type_names(), ["Custom"]);
        assert_eq!(entity.repeated("name").unwrap().len(), 2);
        assert!(entity.functional("count").unwrap().is_set());
        assert_eq!(entity.language_map("nameMap").unwrap().get("en"), "a");
        assert_eq!(
            entity.repeated("attachment").unwrap().get(0).capability(),
            Some(Capability::Object)
        );
        assert_eq!(entity.unknown_field("ext"), Some(&serde_json::json!(true)));
    }

    #[test]
    #[should_panic(expected = "not declared")]
    fn test_undeclared_property_panics() {
        let _ = EntityBuilder::new(schema()).text("missing", "x");
    }

    #[test]
    fn test_schema_kinds_exposed() {
        // Guards the fixture against drifting away from what the
        // builder tests assume.
        let schema = schema();
        assert_eq!(schema.property("name").unwrap().kind, SlotKind::Repeated);
        assert_eq!(schema.property("count").unwrap().kind, SlotKind::Functional);
    }
}
