//! Property value decoding: alternative precedence and unknown capture.

use serde_json::Value;
use tracing::trace;

use crate::codec::entity::decode_entity_map;
use crate::codec::scalar::{decode_scalar, encode_scalar};
use crate::codec::{encode_entity, TYPE_KEY};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_TYPE_NAMES;
use crate::model::PropertyValue;
use crate::registry::Registry;
use crate::schema::Shape;

/// Extracts the declared type names from a wire map's discriminator.
///
/// A string discriminator yields one name; an array yields its string
/// elements in order (non-strings are skipped). An absent discriminator
/// or one with no string names yields an empty list, which classifies
/// the map as unknown/opaque rather than typed.
pub(crate) fn discriminator_names(
    map: &serde_json::Map<String, Value>,
) -> Result<Vec<String>, DecodeError> {
    match map.get(TYPE_KEY) {
        None => Ok(Vec::new()),
        Some(Value::String(name)) => Ok(vec![name.clone()]),
        Some(Value::Array(entries)) => {
            if entries.len() > MAX_TYPE_NAMES {
                return Err(DecodeError::LengthExceedsLimit {
                    field: "type",
                    len: entries.len(),
                    max: MAX_TYPE_NAMES,
                });
            }
            Ok(entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect())
        }
        Some(_) => Ok(Vec::new()),
    }
}

/// Decodes one property occurrence by trying the declared alternatives
/// in precedence order.
///
/// 1. A map with a type discriminator resolves each structural
///    alternative in declared order against the registry; the first
///    resolution commits, and failures inside the committed nested
///    entity propagate unchanged.
/// 2. A map without a discriminator is opaque: unknown capture (except
///    a JSON-LD value object on a property declaring the language-text
///    alternative).
/// 3. A bare value tries each non-structural alternative in declared
///    order; the first match wins.
/// 4. Exhaustion stores the raw input verbatim in the unknown slot.
///
/// The only terminal failure at this layer is a discriminated map on a
/// property whose alternatives are all structural when no declared name
/// resolves.
pub fn decode_property_value(
    registry: &Registry,
    shapes: &[Shape],
    input: &Value,
    depth: usize,
) -> Result<PropertyValue, DecodeError> {
    let Some(map) = input.as_object() else {
        // Bare value: first matching non-structural alternative wins.
        for &shape in shapes {
            if let Some(scalar) = decode_scalar(shape, input) {
                return Ok(PropertyValue::Scalar(scalar));
            }
        }
        trace!("bare value matched no declared alternative");
        return Ok(PropertyValue::Unknown(input.clone()));
    };

    let names = discriminator_names(map)?;
    if names.is_empty() {
        // Opaque map. A value object may still match a declared
        // language-text alternative.
        if shapes.contains(&Shape::LangText) {
            if let Some(scalar) = decode_scalar(Shape::LangText, input) {
                return Ok(PropertyValue::Scalar(scalar));
            }
        }
        trace!("map without type discriminator captured as unknown");
        return Ok(PropertyValue::Unknown(input.clone()));
    }

    for &shape in shapes {
        let Shape::Entity(capability) = shape else {
            continue;
        };
        if let Some(schema) = registry.resolve_first(capability, &names) {
            // Committed: nested decode failures propagate.
            let entity = decode_entity_map(registry, &schema, map, depth + 1)?;
            return Ok(PropertyValue::Entity {
                capability,
                entity: Box::new(entity),
            });
        }
    }

    if shapes.iter().any(|shape| !shape.is_structural()) {
        trace!(?names, "unresolved typed map captured as unknown");
        Ok(PropertyValue::Unknown(input.clone()))
    } else {
        Err(DecodeError::UnresolvedType { names })
    }
}

/// Encodes one property occurrence as its wire value.
pub fn encode_property_value(value: &PropertyValue) -> Result<Value, EncodeError> {
    match value {
        PropertyValue::Entity { entity, .. } => encode_entity(entity),
        PropertyValue::Scalar(scalar) => encode_scalar(scalar),
        PropertyValue::Unknown(raw) => Ok(raw.clone()),
    }
}
