//! The open, extensible entity record.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::model::slot::{FunctionalSlot, LanguageMapSlot, PropertySlot, RepeatedSlot};
use crate::model::{Iri, PropertyValue};
use crate::schema::{SlotKind, TypeSchema};

/// An entity: a named set of property slots over a declared schema,
/// plus an identity, an ordered type-name list, and a bag of
/// unrecognized top-level fields preserved for round-tripping.
///
/// Slots are materialized lazily on first write; an entity fresh from
/// [`Entity::new`] owns no slot storage. Undeclared top-level keys live
/// in the unknown bag only — a declared property's unmatched input is
/// carried per-occurrence inside its own slot, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    schema: Arc<TypeSchema>,
    id: Option<Iri>,
    types: Vec<String>,
    slots: FxHashMap<String, PropertySlot>,
    unknown: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    /// Creates an empty entity over the given schema.
    pub fn new(schema: Arc<TypeSchema>) -> Self {
        Self {
            schema,
            id: None,
            types: Vec::new(),
            slots: FxHashMap::default(),
            unknown: serde_json::Map::new(),
        }
    }

    /// The schema this entity is an instance of.
    pub fn schema(&self) -> &Arc<TypeSchema> {
        &self.schema
    }

    /// The identity reference, if set.
    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    /// Sets the identity reference.
    pub fn set_id(&mut self, id: Iri) {
        self.id = Some(id);
    }

    /// Clears the identity reference.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// The declared type names, in declaration order.
    ///
    /// The schema's own type name is appended at serialization time if
    /// absent here; it is not implicitly present in this list.
    pub fn type_names(&self) -> &[String] {
        &self.types
    }

    /// Appends a type name if not already declared.
    pub fn add_type(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.types.iter().any(|t| *t == name) {
            self.types.push(name);
        }
    }

    /// Returns true if the given type name is declared on this entity.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    /// Returns the slot for a property, if it has been materialized.
    ///
    /// An unmaterialized slot is observationally an empty one.
    pub fn slot(&self, name: &str) -> Option<&PropertySlot> {
        self.slots.get(name)
    }

    /// Returns the slot for a declared property, materializing it on
    /// first access. Returns `None` for undeclared names.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut PropertySlot> {
        if !self.slots.contains_key(name) {
            let kind = self.schema.property(name)?.kind;
            let slot = match kind {
                SlotKind::Functional => PropertySlot::Functional(FunctionalSlot::new()),
                SlotKind::Repeated => PropertySlot::Repeated(RepeatedSlot::new()),
                SlotKind::LanguageMap => PropertySlot::LanguageMap(LanguageMapSlot::new()),
            };
            self.slots.insert(name.to_string(), slot);
        }
        self.slots.get_mut(name)
    }

    /// Functional read view for a property; `None` when the property is
    /// undeclared, not functional, or never written.
    pub fn functional(&self, name: &str) -> Option<&FunctionalSlot> {
        self.slot(name).and_then(PropertySlot::as_functional)
    }

    /// Repeated read view for a property; `None` when the property is
    /// undeclared, not repeated, or never written.
    pub fn repeated(&self, name: &str) -> Option<&RepeatedSlot> {
        self.slot(name).and_then(PropertySlot::as_repeated)
    }

    /// Language-map read view for a property; `None` when the property
    /// is undeclared, not a language map, or never written.
    pub fn language_map(&self, name: &str) -> Option<&LanguageMapSlot> {
        self.slot(name).and_then(PropertySlot::as_language_map)
    }

    /// Stores one occurrence on a declared property: `set` for a
    /// functional slot, `append` for a repeated slot.
    ///
    /// Returns false (without storing) when the property is undeclared
    /// or is a language map.
    pub fn push_value(&mut self, name: &str, value: PropertyValue) -> bool {
        match self.slot_mut(name) {
            Some(PropertySlot::Functional(slot)) => {
                slot.set(value);
                true
            }
            Some(PropertySlot::Repeated(slot)) => {
                slot.append(value);
                true
            }
            _ => false,
        }
    }

    /// The unrecognized top-level fields, keyed by wire key.
    pub fn unknown_fields(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.unknown
    }

    /// Returns one unrecognized field's value, if present.
    pub fn unknown_field(&self, key: &str) -> Option<&serde_json::Value> {
        self.unknown.get(key)
    }

    /// Inserts or overwrites an unrecognized top-level field.
    pub fn set_unknown_field(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.unknown.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySpec, Shape};

    fn schema() -> Arc<TypeSchema> {
        TypeSchema::new(
            "Sample",
            vec![
                PropertySpec::functional("published", [Shape::Timestamp]),
                PropertySpec::repeated("name", [Shape::Text]),
                PropertySpec::language_map("nameMap"),
            ],
        )
        .shared()
    }

    #[test]
    fn test_slots_absent_until_written() {
        let mut entity = Entity::new(schema());
        assert!(entity.slot("published").is_none());
        assert!(entity.functional("published").is_none());

        entity
            .slot_mut("published")
            .unwrap()
            .as_functional_mut()
            .unwrap()
            .set_unknown(serde_json::json!(null));
        assert!(entity.functional("published").unwrap().is_set());
    }

    #[test]
    fn test_slot_mut_rejects_undeclared() {
        let mut entity = Entity::new(schema());
        assert!(entity.slot_mut("missing").is_none());
        assert!(!entity.push_value("missing", PropertyValue::text("x")));
    }

    #[test]
    fn test_push_value_dispatches_on_kind() {
        let mut entity = Entity::new(schema());
        assert!(entity.push_value("name", PropertyValue::text("a")));
        assert!(entity.push_value("name", PropertyValue::text("b")));
        assert_eq!(entity.repeated("name").unwrap().len(), 2);

        // Language maps are written through their own view, not push_value.
        assert!(!entity.push_value("nameMap", PropertyValue::text("x")));
    }

    #[test]
    fn test_add_type_dedupes_preserving_order() {
        let mut entity = Entity::new(schema());
        entity.add_type("Sample");
        entity.add_type("Custom");
        entity.add_type("Sample");
        assert_eq!(entity.type_names(), ["Sample", "Custom"]);
        assert!(entity.has_type("Custom"));
        assert!(!entity.has_type("Other"));
    }

    #[test]
    fn test_unknown_bag() {
        let mut entity = Entity::new(schema());
        entity.set_unknown_field("foo", serde_json::json!([1, 2, 3]));
        assert_eq!(
            entity.unknown_field("foo"),
            Some(&serde_json::json!([1, 2, 3]))
        );
        assert_eq!(entity.unknown_fields().len(), 1);
    }
}
