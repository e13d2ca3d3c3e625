//! The per-occurrence property value union.

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::model::{Entity, Iri, ScalarValue};
use crate::schema::Capability;

/// One occurrence of a property value.
///
/// Exactly one variant is populated by construction. Input that matched
/// none of a property's declared alternatives is carried verbatim in
/// [`PropertyValue::Unknown`] so a read-then-write cycle never drops
/// data.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A nested entity that resolved under the given capability.
    Entity {
        capability: Capability,
        entity: Box<Entity>,
    },

    /// A scalar leaf.
    Scalar(ScalarValue),

    /// Input that matched no declared alternative, preserved verbatim.
    Unknown(serde_json::Value),
}

impl PropertyValue {
    /// Wraps an entity under the given capability.
    pub fn entity(capability: Capability, entity: Entity) -> Self {
        PropertyValue::Entity {
            capability,
            entity: Box::new(entity),
        }
    }

    /// Wraps a plain text scalar.
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Scalar(ScalarValue::Text(value.into()))
    }

    /// Wraps a language-tagged text scalar.
    pub fn lang_text(language: impl Into<String>, value: impl Into<String>) -> Self {
        PropertyValue::Scalar(ScalarValue::LangText {
            language: language.into(),
            value: value.into(),
        })
    }

    /// Wraps a float scalar.
    pub fn float(value: f64) -> Self {
        PropertyValue::Scalar(ScalarValue::Float(value))
    }

    /// Wraps a boolean scalar.
    pub fn boolean(value: bool) -> Self {
        PropertyValue::Scalar(ScalarValue::Bool(value))
    }

    /// Wraps a timestamp scalar.
    pub fn timestamp(value: DateTime<FixedOffset>) -> Self {
        PropertyValue::Scalar(ScalarValue::Timestamp(value))
    }

    /// Wraps a duration scalar.
    pub fn duration(value: TimeDelta) -> Self {
        PropertyValue::Scalar(ScalarValue::Duration(value))
    }

    /// Wraps an IRI reference scalar.
    pub fn iri(value: Iri) -> Self {
        PropertyValue::Scalar(ScalarValue::Iri(value))
    }

    /// Wraps raw unmatched input.
    pub fn unknown(value: serde_json::Value) -> Self {
        PropertyValue::Unknown(value)
    }

    /// Returns true if a nested entity is populated.
    pub fn is_entity(&self) -> bool {
        matches!(self, PropertyValue::Entity { .. })
    }

    /// Returns the nested entity, if populated.
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            PropertyValue::Entity { entity, .. } => Some(entity),
            _ => None,
        }
    }

    /// Returns the capability the nested entity resolved under.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            PropertyValue::Entity { capability, .. } => Some(*capability),
            _ => None,
        }
    }

    /// Returns true if a scalar is populated.
    pub fn is_scalar(&self) -> bool {
        matches!(self, PropertyValue::Scalar(_))
    }

    /// Returns the scalar, if populated.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the unknown fallback is populated.
    pub fn is_unknown(&self) -> bool {
        matches!(self, PropertyValue::Unknown(_))
    }

    /// Returns the raw unmatched input, if populated.
    pub fn as_unknown(&self) -> Option<&serde_json::Value> {
        match self {
            PropertyValue::Unknown(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_variant_observable() {
        let value = PropertyValue::text("hi");
        assert!(value.is_scalar());
        assert!(!value.is_entity());
        assert!(!value.is_unknown());
        assert_eq!(value.as_scalar().unwrap().as_text(), Some("hi"));
        assert!(value.as_entity().is_none());
        assert!(value.as_unknown().is_none());
    }

    #[test]
    fn test_unknown_preserves_input() {
        let raw = serde_json::json!({"foo": [1, 2, 3]});
        let value = PropertyValue::unknown(raw.clone());
        assert!(value.is_unknown());
        assert_eq!(value.as_unknown(), Some(&raw));
    }
}
