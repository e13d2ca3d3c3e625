//! The built-in core vocabulary.
//!
//! Vocabulary content is data: this module only declares schema tables
//! and wires them into a registry. The codec never special-cases a
//! type name. Consumers with extension vocabularies build their own
//! [`TypeSchema`] values and register them alongside (or instead of)
//! these.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::registry::Registry;
use crate::schema::{Capability, PropertySpec, Shape, TypeSchema};

/// Shapes for properties holding an object, a link, or a bare reference.
fn object_or_link() -> [Shape; 3] {
    [
        Shape::Entity(Capability::Object),
        Shape::Entity(Capability::Link),
        Shape::Iri,
    ]
}

/// Shapes for properties referencing a collection.
fn collection_ref() -> [Shape; 3] {
    [
        Shape::Entity(Capability::Collection),
        Shape::Entity(Capability::Link),
        Shape::Iri,
    ]
}

/// The property table shared by all object-shaped types.
fn object_properties() -> Vec<PropertySpec> {
    vec![
        PropertySpec::repeated("name", [Shape::Text, Shape::LangText]),
        PropertySpec::language_map("nameMap"),
        PropertySpec::repeated("summary", [Shape::Text, Shape::LangText]),
        PropertySpec::language_map("summaryMap"),
        PropertySpec::repeated("content", [Shape::Text, Shape::LangText]),
        PropertySpec::language_map("contentMap"),
        PropertySpec::functional("mediaType", [Shape::Text]),
        PropertySpec::functional("published", [Shape::Timestamp]),
        PropertySpec::functional("updated", [Shape::Timestamp]),
        PropertySpec::functional("startTime", [Shape::Timestamp]),
        PropertySpec::functional("endTime", [Shape::Timestamp]),
        PropertySpec::functional("duration", [Shape::Duration]),
        PropertySpec::repeated("url", [Shape::Entity(Capability::Link), Shape::Iri]),
        PropertySpec::repeated("attachment", object_or_link()),
        PropertySpec::repeated("attributedTo", object_or_link()),
        PropertySpec::repeated("audience", object_or_link()),
        PropertySpec::repeated("to", object_or_link()),
        PropertySpec::repeated("cc", object_or_link()),
        PropertySpec::repeated("bto", object_or_link()),
        PropertySpec::repeated("bcc", object_or_link()),
        PropertySpec::repeated("inReplyTo", object_or_link()),
        PropertySpec::repeated("tag", object_or_link()),
        PropertySpec::repeated("icon", object_or_link()),
        PropertySpec::repeated("image", object_or_link()),
        PropertySpec::repeated("location", object_or_link()),
        PropertySpec::repeated("generator", object_or_link()),
        PropertySpec::repeated("preview", object_or_link()),
    ]
}

/// The property table for link-shaped types.
fn link_properties() -> Vec<PropertySpec> {
    vec![
        PropertySpec::functional("href", [Shape::Iri]),
        PropertySpec::repeated("rel", [Shape::Text]),
        PropertySpec::functional("mediaType", [Shape::Text]),
        PropertySpec::repeated("name", [Shape::Text, Shape::LangText]),
        PropertySpec::language_map("nameMap"),
        PropertySpec::functional("hreflang", [Shape::Text]),
        PropertySpec::functional("height", [Shape::Float]),
        PropertySpec::functional("width", [Shape::Float]),
        PropertySpec::repeated("preview", object_or_link()),
    ]
}

/// Object table plus the collection-specific properties.
fn collection_properties() -> Vec<PropertySpec> {
    let mut properties = object_properties();
    properties.extend([
        PropertySpec::repeated("items", object_or_link()),
        PropertySpec::repeated("orderedItems", object_or_link()),
        PropertySpec::functional("totalItems", [Shape::Float]),
        PropertySpec::functional("first", collection_ref()),
        PropertySpec::functional("last", collection_ref()),
        PropertySpec::functional("current", collection_ref()),
    ]);
    properties
}

/// Object table plus the question-specific properties.
fn question_properties() -> Vec<PropertySpec> {
    let mut properties = object_properties();
    properties.push(PropertySpec::repeated(
        "closed",
        [
            Shape::Entity(Capability::Object),
            Shape::Entity(Capability::Link),
            Shape::Timestamp,
            Shape::Bool,
        ],
    ));
    properties
}

lazy_static! {
    /// The base object type.
    pub static ref OBJECT: Arc<TypeSchema> =
        TypeSchema::new("Object", object_properties()).shared();

    /// A short written note.
    pub static ref NOTE: Arc<TypeSchema> =
        TypeSchema::new("Note", object_properties()).shared();

    /// A multi-paragraph written work.
    pub static ref ARTICLE: Arc<TypeSchema> =
        TypeSchema::new("Article", object_properties()).shared();

    /// An individual actor.
    pub static ref PERSON: Arc<TypeSchema> =
        TypeSchema::new("Person", object_properties()).shared();

    /// A question; `closed` mixes entity, timestamp and boolean shapes.
    pub static ref QUESTION: Arc<TypeSchema> =
        TypeSchema::new("Question", question_properties()).shared();

    /// An indirect reference to a resource.
    pub static ref LINK: Arc<TypeSchema> =
        TypeSchema::new("Link", link_properties()).shared();

    /// An @-mention link.
    pub static ref MENTION: Arc<TypeSchema> =
        TypeSchema::new("Mention", link_properties()).shared();

    /// An unordered set of entities.
    pub static ref COLLECTION: Arc<TypeSchema> =
        TypeSchema::new("Collection", collection_properties()).shared();

    /// An ordered set of entities.
    pub static ref ORDERED_COLLECTION: Arc<TypeSchema> =
        TypeSchema::new("OrderedCollection", collection_properties()).shared();
}

impl Registry {
    /// A registry preloaded with the core vocabulary.
    pub fn core() -> Registry {
        let mut registry = Registry::new();

        for schema in [
            &*OBJECT,
            &*NOTE,
            &*ARTICLE,
            &*PERSON,
            &*QUESTION,
            &*COLLECTION,
            &*ORDERED_COLLECTION,
        ] {
            registry.register(Capability::Object, schema.clone());
        }

        for schema in [&*LINK, &*MENTION] {
            registry.register(Capability::Link, schema.clone());
        }

        for schema in [&*COLLECTION, &*ORDERED_COLLECTION] {
            registry.register(Capability::Collection, schema.clone());
        }

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SlotKind;

    #[test]
    fn test_core_registry_partitions() {
        let registry = Registry::core();
        assert!(registry.resolve(Capability::Object, "Note").is_some());
        assert!(registry.resolve(Capability::Object, "Person").is_some());
        assert!(registry.resolve(Capability::Link, "Mention").is_some());
        assert!(registry.resolve(Capability::Link, "Note").is_none());
        assert!(registry
            .resolve(Capability::Collection, "OrderedCollection")
            .is_some());
        // Collections are also object-capable.
        assert!(registry.resolve(Capability::Object, "Collection").is_some());
    }

    #[test]
    fn test_object_table_shape() {
        assert_eq!(
            NOTE.property("nameMap").unwrap().kind,
            SlotKind::LanguageMap
        );
        assert_eq!(
            NOTE.property("published").unwrap().kind,
            SlotKind::Functional
        );
        assert_eq!(NOTE.property("to").unwrap().kind, SlotKind::Repeated);
        assert!(NOTE.property("href").is_none());
        assert!(LINK.property("href").is_some());
    }

    #[test]
    fn test_question_closed_mixes_shapes() {
        let closed = QUESTION.property("closed").unwrap();
        assert_eq!(
            closed.shapes,
            [
                Shape::Entity(Capability::Object),
                Shape::Entity(Capability::Link),
                Shape::Timestamp,
                Shape::Bool,
            ]
        );
    }

    #[test]
    fn test_collection_extends_object_table() {
        assert!(COLLECTION.declares("items"));
        assert!(COLLECTION.declares("content"));
        assert!(!NOTE.declares("items"));
    }
}
