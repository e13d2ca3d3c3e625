//! Property slots: functional, repeated, and language map.
//!
//! A slot holds the occurrences of one property on one entity. Slots
//! are materialized lazily by the entity on first write; an absent slot
//! and an empty slot are observationally equivalent.

use std::collections::BTreeMap;

use crate::model::PropertyValue;

/// Holds 0 or 1 occurrence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionalSlot {
    value: Option<PropertyValue>,
}

impl FunctionalSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a value is present.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value, if present.
    pub fn get(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }

    /// Replaces the slot outright, discarding any prior value
    /// including an unknown payload.
    pub fn set(&mut self, value: PropertyValue) {
        self.value = Some(value);
    }

    /// Removes and returns the value.
    pub fn take(&mut self) -> Option<PropertyValue> {
        self.value.take()
    }

    /// Clears the slot.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Returns true if the stored occurrence is an unknown payload.
    pub fn has_unknown(&self) -> bool {
        self.value.as_ref().is_some_and(PropertyValue::is_unknown)
    }

    /// Returns the unknown payload, if that is what is stored.
    pub fn unknown(&self) -> Option<&serde_json::Value> {
        self.value.as_ref().and_then(PropertyValue::as_unknown)
    }

    /// Stores raw input in the unknown fallback, replacing any prior value.
    pub fn set_unknown(&mut self, raw: serde_json::Value) {
        self.value = Some(PropertyValue::Unknown(raw));
    }
}

/// Holds an ordered sequence of occurrences.
///
/// Indices are positions, not stable identities: removal shifts every
/// later element down by one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatedSlot {
    values: Vec<PropertyValue>,
}

impl RepeatedSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no occurrences.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the occurrence at `index`.
    ///
    /// Panics if `index >= len()`; out-of-range access is a programming
    /// error, not a recoverable condition.
    pub fn get(&self, index: usize) -> &PropertyValue {
        &self.values[index]
    }

    /// Iterates occurrences in order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyValue> {
        self.values.iter()
    }

    /// Adds an occurrence at the end.
    pub fn append(&mut self, value: PropertyValue) {
        self.values.push(value);
    }

    /// Inserts an occurrence at index 0, shifting all others up.
    pub fn prepend(&mut self, value: PropertyValue) {
        self.values.insert(0, value);
    }

    /// Deletes the occurrence at `index`, shifting later elements down.
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> PropertyValue {
        self.values.remove(index)
    }

    /// Returns true if ANY occurrence in the sequence is an unknown
    /// payload.
    pub fn has_unknown(&self) -> bool {
        self.values.iter().any(PropertyValue::is_unknown)
    }
}

/// Maps language tags to text. Keys are unique; insertion order is not
/// significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LanguageMapSlot {
    entries: BTreeMap<String, String>,
}

impl LanguageMapSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tags present, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the text for a tag, or `""` if the tag is absent.
    pub fn get(&self, tag: &str) -> &str {
        self.entries.get(tag).map_or("", String::as_str)
    }

    /// Inserts or overwrites the text for a tag.
    pub fn set(&mut self, tag: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(tag.into(), text.into());
    }

    /// Number of tags present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tags are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (tag, text) pairs in sorted tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The slot materialized for one declared property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySlot {
    Functional(FunctionalSlot),
    Repeated(RepeatedSlot),
    LanguageMap(LanguageMapSlot),
}

impl PropertySlot {
    /// Returns true if the slot holds no occurrences at all.
    pub fn is_empty(&self) -> bool {
        match self {
            PropertySlot::Functional(slot) => !slot.is_set(),
            PropertySlot::Repeated(slot) => slot.is_empty(),
            PropertySlot::LanguageMap(slot) => slot.is_empty(),
        }
    }

    /// Returns the functional view, if this is a functional slot.
    pub fn as_functional(&self) -> Option<&FunctionalSlot> {
        match self {
            PropertySlot::Functional(slot) => Some(slot),
            _ => None,
        }
    }

    /// Mutable functional view.
    pub fn as_functional_mut(&mut self) -> Option<&mut FunctionalSlot> {
        match self {
            PropertySlot::Functional(slot) => Some(slot),
            _ => None,
        }
    }

    /// Returns the repeated view, if this is a repeated slot.
    pub fn as_repeated(&self) -> Option<&RepeatedSlot> {
        match self {
            PropertySlot::Repeated(slot) => Some(slot),
            _ => None,
        }
    }

    /// Mutable repeated view.
    pub fn as_repeated_mut(&mut self) -> Option<&mut RepeatedSlot> {
        match self {
            PropertySlot::Repeated(slot) => Some(slot),
            _ => None,
        }
    }

    /// Returns the language-map view, if this is a language-map slot.
    pub fn as_language_map(&self) -> Option<&LanguageMapSlot> {
        match self {
            PropertySlot::LanguageMap(slot) => Some(slot),
            _ => None,
        }
    }

    /// Mutable language-map view.
    pub fn as_language_map_mut(&mut self) -> Option<&mut LanguageMapSlot> {
        match self {
            PropertySlot::LanguageMap(slot) => Some(slot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functional_set_overwrites_unknown() {
        let mut slot = FunctionalSlot::new();
        assert!(!slot.is_set());
        assert!(slot.get().is_none());

        slot.set_unknown(serde_json::json!({"x": 1}));
        assert!(slot.is_set());
        assert!(slot.has_unknown());

        slot.set(PropertyValue::text("hi"));
        assert!(!slot.has_unknown());
        assert!(slot.unknown().is_none());
        assert_eq!(slot.get().unwrap().as_scalar().unwrap().as_text(), Some("hi"));
    }

    #[test]
    fn test_repeated_append_law() {
        let mut slot = RepeatedSlot::new();
        slot.append(PropertyValue::text("a"));
        slot.append(PropertyValue::text("b"));
        assert_eq!(slot.len(), 2);
        assert_eq!(
            slot.get(slot.len() - 1).as_scalar().unwrap().as_text(),
            Some("b")
        );
    }

    #[test]
    fn test_repeated_prepend_shifts_up() {
        let mut slot = RepeatedSlot::new();
        slot.append(PropertyValue::text("b"));
        slot.append(PropertyValue::text("c"));
        slot.prepend(PropertyValue::text("a"));

        let order: Vec<_> = slot
            .iter()
            .map(|v| v.as_scalar().unwrap().as_text().unwrap().to_string())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn test_repeated_remove_shifts_down() {
        let mut slot = RepeatedSlot::new();
        for s in ["a", "b", "c"] {
            slot.append(PropertyValue::text(s));
        }
        slot.remove(1);
        assert_eq!(slot.len(), 2);
        assert_eq!(slot.get(0).as_scalar().unwrap().as_text(), Some("a"));
        assert_eq!(slot.get(1).as_scalar().unwrap().as_text(), Some("c"));
    }

    #[test]
    fn test_repeated_has_unknown_scans_whole_sequence() {
        let mut slot = RepeatedSlot::new();
        slot.append(PropertyValue::text("a"));
        assert!(!slot.has_unknown());

        // The unknown occurrence is NOT at index 0.
        slot.append(PropertyValue::unknown(serde_json::json!(42)));
        assert!(slot.has_unknown());
    }

    #[test]
    fn test_language_map_laws() {
        let mut slot = LanguageMapSlot::new();
        slot.set("en", "hello");
        assert_eq!(slot.get("en"), "hello");
        assert_eq!(slot.get("fr"), "");

        slot.set("fr", "bonjour");
        slot.set("en", "hi");
        assert_eq!(slot.get("en"), "hi");

        let tags: Vec<_> = slot.languages().collect();
        assert_eq!(tags, ["en", "fr"]);
    }

    #[test]
    fn test_slot_empty_views() {
        let slot = PropertySlot::Functional(FunctionalSlot::new());
        assert!(slot.is_empty());
        assert!(slot.as_functional().is_some());
        assert!(slot.as_repeated().is_none());
    }
}
