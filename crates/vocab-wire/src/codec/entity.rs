//! Entity serialization and deserialization.
//!
//! Serialization walks the schema's declared property order and is
//! deterministic for a given entity. Deserialization claims each input
//! key exactly once: reserved keys first, then declared properties,
//! with everything else preserved verbatim in the unknown bag.

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::codec::value::{decode_property_value, discriminator_names, encode_property_value};
use crate::codec::{CONTEXT_KEY, ID_KEY, TYPE_KEY};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_NESTING_DEPTH, MAX_TYPE_NAMES};
use crate::model::{Entity, Iri, PropertySlot};
use crate::registry::Registry;
use crate::schema::{SlotKind, TypeSchema};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a top-level document into an entity.
///
/// The root must be a JSON object carrying a type discriminator that
/// resolves under some capability (tried in fixed priority order).
pub fn decode_entity(registry: &Registry, input: &Value) -> Result<Entity, DecodeError> {
    let map = input.as_object().ok_or(DecodeError::RootNotObject)?;
    let names = discriminator_names(map)?;
    if names.is_empty() {
        return Err(DecodeError::MissingType);
    }
    let (_, schema) = registry
        .resolve_document(&names)
        .ok_or(DecodeError::UnresolvedType { names })?;
    decode_entity_map(registry, &schema, map, 0)
}

/// Decodes a document against a caller-chosen schema, bypassing
/// discriminator resolution for the root.
pub fn decode_entity_as(
    registry: &Registry,
    schema: &Arc<TypeSchema>,
    input: &Value,
) -> Result<Entity, DecodeError> {
    let map = input.as_object().ok_or(DecodeError::RootNotObject)?;
    decode_entity_map(registry, schema, map, 0)
}

/// Parses a JSON string and decodes the resulting document.
pub fn decode_entity_str(registry: &Registry, input: &str) -> Result<Entity, DecodeError> {
    let tree: Value = serde_json::from_str(input)?;
    decode_entity(registry, &tree)
}

/// Decodes an already-validated wire map into an entity.
pub(crate) fn decode_entity_map(
    registry: &Registry,
    schema: &Arc<TypeSchema>,
    map: &serde_json::Map<String, Value>,
    depth: usize,
) -> Result<Entity, DecodeError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(DecodeError::DepthLimitExceeded {
            limit: MAX_NESTING_DEPTH,
        });
    }

    let mut entity = Entity::new(schema.clone());

    for (key, value) in map {
        // Schema-level metadata, not data: consumed and never re-emitted.
        if key == CONTEXT_KEY {
            continue;
        }

        if key == ID_KEY {
            match value.as_str().and_then(|s| Iri::new(s).ok()) {
                Some(iri) => entity.set_id(iri),
                // A malformed identity is still someone's data.
                None => entity.set_unknown_field(key.clone(), value.clone()),
            }
            continue;
        }

        if key == TYPE_KEY {
            decode_type_list(&mut entity, value)?;
            continue;
        }

        match schema.property(key) {
            Some(spec) => match spec.kind {
                SlotKind::LanguageMap => {
                    decode_language_map(&mut entity, key, value)?;
                }
                SlotKind::Functional => {
                    let occurrence =
                        decode_property_value(registry, &spec.shapes, value, depth)?;
                    entity.push_value(key, occurrence);
                }
                SlotKind::Repeated => match value.as_array() {
                    Some(elements) => {
                        for element in elements {
                            let occurrence =
                                decode_property_value(registry, &spec.shapes, element, depth)?;
                            entity.push_value(key, occurrence);
                        }
                    }
                    // A bare value for a repeatable property is a
                    // one-element sequence.
                    None => {
                        let occurrence =
                            decode_property_value(registry, &spec.shapes, value, depth)?;
                        entity.push_value(key, occurrence);
                    }
                },
            },
            None => {
                trace!(%key, "undeclared key preserved in unknown bag");
                entity.set_unknown_field(key.clone(), value.clone());
            }
        }
    }

    Ok(entity)
}

fn decode_type_list(entity: &mut Entity, value: &Value) -> Result<(), DecodeError> {
    match value {
        Value::String(name) => entity.add_type(name.clone()),
        Value::Array(entries) => {
            if entries.len() > MAX_TYPE_NAMES {
                return Err(DecodeError::LengthExceedsLimit {
                    field: "type",
                    len: entries.len(),
                    max: MAX_TYPE_NAMES,
                });
            }
            for entry in entries {
                if let Some(name) = entry.as_str() {
                    entity.add_type(name);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn decode_language_map(
    entity: &mut Entity,
    key: &str,
    value: &Value,
) -> Result<(), DecodeError> {
    let entries = value
        .as_object()
        .ok_or_else(|| DecodeError::InvalidLanguageMap {
            property: key.to_string(),
        })?;
    let slot = entity
        .slot_mut(key)
        .and_then(PropertySlot::as_language_map_mut)
        .expect("declared language map property materializes a language map slot");
    for (tag, text) in entries {
        // Non-string values are skipped, not captured.
        if let Some(text) = text.as_str() {
            slot.set(tag, text);
        }
    }
    Ok(())
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes an entity as its wire tree.
///
/// Properties are walked in the schema's declared order; empty slots
/// emit no key. A repeated slot with exactly one occurrence collapses
/// to a bare value; language maps never collapse. The entity's own
/// type name is appended to the emitted type list if absent.
pub fn encode_entity(entity: &Entity) -> Result<Value, EncodeError> {
    let mut out = serde_json::Map::new();

    if let Some(id) = entity.id() {
        out.insert(ID_KEY.to_string(), Value::String(id.as_str().to_string()));
    }

    let mut types: Vec<String> = entity.type_names().to_vec();
    let own = entity.schema().name();
    if !types.iter().any(|t| t == own) {
        types.push(own.to_string());
    }
    out.insert(TYPE_KEY.to_string(), collapse_strings(types));

    for spec in entity.schema().properties() {
        let Some(slot) = entity.slot(&spec.name) else {
            continue;
        };
        match slot {
            PropertySlot::Functional(slot) => {
                if let Some(value) = slot.get() {
                    out.insert(spec.name.clone(), encode_property_value(value)?);
                }
            }
            PropertySlot::Repeated(slot) => match slot.len() {
                0 => {}
                1 => {
                    out.insert(spec.name.clone(), encode_property_value(slot.get(0))?);
                }
                _ => {
                    let elements = slot
                        .iter()
                        .map(encode_property_value)
                        .collect::<Result<Vec<_>, _>>()?;
                    out.insert(spec.name.clone(), Value::Array(elements));
                }
            },
            PropertySlot::LanguageMap(slot) => {
                if !slot.is_empty() {
                    let entries = slot
                        .iter()
                        .map(|(tag, text)| (tag.to_string(), Value::String(text.to_string())))
                        .collect();
                    out.insert(spec.name.clone(), Value::Object(entries));
                }
            }
        }
    }

    for (key, value) in entity.unknown_fields() {
        // Declared output wins if a caller managed to collide a key.
        out.entry(key.clone()).or_insert_with(|| value.clone());
    }

    Ok(Value::Object(out))
}

/// Encodes an entity directly to a JSON string.
pub fn encode_entity_string(entity: &Entity) -> Result<String, EncodeError> {
    Ok(encode_entity(entity)?.to_string())
}

fn collapse_strings(mut values: Vec<String>) -> Value {
    if values.len() == 1 {
        Value::String(values.remove(0))
    } else {
        Value::Array(values.into_iter().map(Value::String).collect())
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::EntityBuilder;
    use crate::vocab;

    proptest! {
        #[test]
        fn roundtrip_generated_collections(
            names in proptest::collection::vec("\\PC*", 0..4),
            total in proptest::option::of(0u32..10_000),
        ) {
            let registry = Registry::core();

            let mut builder = EntityBuilder::new(vocab::COLLECTION.clone())
                .kind("Collection");
            for name in &names {
                builder = builder.text("name", name.clone());
            }
            if let Some(total) = total {
                builder = builder.float("totalItems", f64::from(total));
            }
            let entity = builder.build();

            let tree = encode_entity(&entity).unwrap();
            let decoded = decode_entity(&registry, &tree).unwrap();
            prop_assert_eq!(entity, decoded);
        }
    }
}
