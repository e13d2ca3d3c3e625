//! Schema tables the codec is parameterized over.
//!
//! A [`TypeSchema`] declares, for one vocabulary type, the ordered list
//! of properties it carries. Each [`PropertySpec`] declares the slot
//! kind (functional, repeated, language map) and the ordered list of
//! [`Shape`] alternatives a value for that property may take. The
//! declaration order of both lists is significant: properties serialize
//! in declared order, and value alternatives are tried in declared
//! precedence order.

use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A structural contract a vocabulary type may satisfy.
///
/// Eligibility of a nested value for a property alternative is decided
/// by resolving its declared type name under the capability the
/// alternative expects, not by subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Usable wherever an Object-shaped value is expected.
    Object,
    /// Usable wherever a Link-shaped value is expected.
    Link,
    /// Usable wherever a Collection-shaped value is expected.
    Collection,
}

impl Capability {
    /// Fixed priority order used when no property context declares one,
    /// e.g. when resolving a top-level document.
    pub const PRIORITY: [Capability; 3] =
        [Capability::Object, Capability::Link, Capability::Collection];

    /// Returns the capability name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Object => "Object",
            Capability::Link => "Link",
            Capability::Collection => "Collection",
        }
    }
}

/// One alternative shape a property value may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A nested entity whose declared type resolves under the given
    /// capability.
    Entity(Capability),
    /// A bare IRI reference string.
    Iri,
    /// A plain string.
    Text,
    /// A language-tagged string.
    LangText,
    /// A JSON number.
    Float,
    /// A JSON boolean.
    Bool,
    /// An RFC 3339 timestamp string.
    Timestamp,
    /// An ISO 8601 duration string.
    Duration,
}

impl Shape {
    /// Returns true for alternatives that match structured (map) input.
    pub fn is_structural(&self) -> bool {
        matches!(self, Shape::Entity(_))
    }
}

/// How many occurrences a property holds, and in what arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// At most one occurrence.
    Functional,
    /// An ordered sequence of occurrences.
    Repeated,
    /// A language-tag to text mapping.
    LanguageMap,
}

/// Declares one property of a vocabulary type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// The wire key for this property.
    pub name: String,
    /// The slot kind materialized for this property.
    pub kind: SlotKind,
    /// Alternative value shapes in declared precedence order.
    /// Empty for language map properties.
    pub shapes: Vec<Shape>,
}

impl PropertySpec {
    /// Declares a functional property (0 or 1 occurrence).
    pub fn functional(name: &str, shapes: impl Into<Vec<Shape>>) -> Self {
        Self {
            name: name.to_string(),
            kind: SlotKind::Functional,
            shapes: shapes.into(),
        }
    }

    /// Declares a repeated property (ordered sequence of occurrences).
    pub fn repeated(name: &str, shapes: impl Into<Vec<Shape>>) -> Self {
        Self {
            name: name.to_string(),
            kind: SlotKind::Repeated,
            shapes: shapes.into(),
        }
    }

    /// Declares a language-map property (tag to text).
    pub fn language_map(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SlotKind::LanguageMap,
            shapes: Vec::new(),
        }
    }
}

/// The declared property table for one vocabulary type.
#[derive(Debug, PartialEq)]
pub struct TypeSchema {
    name: String,
    properties: Vec<PropertySpec>,
    index: FxHashMap<String, usize>,
}

impl TypeSchema {
    /// Creates a schema from a type name and its ordered property list.
    ///
    /// Later duplicates of a property name are ignored; the first
    /// declaration wins.
    pub fn new(name: &str, properties: Vec<PropertySpec>) -> Self {
        let mut index = FxHashMap::default();
        for (i, spec) in properties.iter().enumerate() {
            index.entry(spec.name.clone()).or_insert(i);
        }
        Self {
            name: name.to_string(),
            properties,
            index,
        }
    }

    /// The vocabulary type name this schema declares.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a property declaration by wire key.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.index.get(name).map(|&i| &self.properties[i])
    }

    /// Returns true if the given wire key is declared.
    pub fn declares(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates property declarations in declared (serialization) order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertySpec> {
        self.properties.iter()
    }

    /// Wraps the schema for shared ownership.
    pub fn shared(self) -> Arc<TypeSchema> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeSchema {
        TypeSchema::new(
            "Sample",
            vec![
                PropertySpec::repeated("name", [Shape::Text]),
                PropertySpec::language_map("nameMap"),
                PropertySpec::functional("published", [Shape::Timestamp]),
            ],
        )
    }

    #[test]
    fn test_property_lookup() {
        let schema = sample();
        assert_eq!(schema.name(), "Sample");
        assert!(schema.declares("name"));
        assert!(!schema.declares("missing"));
        assert_eq!(
            schema.property("published").unwrap().kind,
            SlotKind::Functional
        );
        assert_eq!(
            schema.property("nameMap").unwrap().kind,
            SlotKind::LanguageMap
        );
    }

    #[test]
    fn test_declared_order_preserved() {
        let schema = sample();
        let order: Vec<&str> = schema.properties().map(|p| p.name.as_str()).collect();
        assert_eq!(order, ["name", "nameMap", "published"]);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let schema = TypeSchema::new(
            "Dup",
            vec![
                PropertySpec::functional("a", [Shape::Text]),
                PropertySpec::repeated("a", [Shape::Float]),
            ],
        );
        assert_eq!(schema.property("a").unwrap().kind, SlotKind::Functional);
    }
}
