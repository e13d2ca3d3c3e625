//! Scalar values for vocabulary properties.
//!
//! Scalars are the non-structural leaves a property value may hold.
//! They are immutable once constructed; mutation replaces the whole
//! value through the owning slot.

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::model::Iri;

/// A typed scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Plain text.
    Text(String),

    /// A language-tagged string.
    LangText {
        /// BCP 47 language tag; empty when the tag is unspecified.
        language: String,
        value: String,
    },

    /// 64-bit IEEE 754 float. JSON integers decode into this variant.
    Float(f64),

    /// Boolean value.
    Bool(bool),

    /// RFC 3339 timestamp with its original UTC offset.
    Timestamp(DateTime<FixedOffset>),

    /// Signed duration, millisecond precision.
    Duration(TimeDelta),

    /// A bare IRI reference.
    Iri(Iri),
}

impl ScalarValue {
    /// Returns the text value, if this is a `Text` scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the (language, value) pair, if this is a `LangText` scalar.
    pub fn as_lang_text(&self) -> Option<(&str, &str)> {
        match self {
            ScalarValue::LangText { language, value } => Some((language, value)),
            _ => None,
        }
    }

    /// Returns the float value, if this is a `Float` scalar.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a `Bool` scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a `Timestamp` scalar.
    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            ScalarValue::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the duration, if this is a `Duration` scalar.
    pub fn as_duration(&self) -> Option<TimeDelta> {
        match self {
            ScalarValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the IRI, if this is an `Iri` scalar.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            ScalarValue::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let text = ScalarValue::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_float(), None);

        let lang = ScalarValue::LangText {
            language: "en".to_string(),
            value: "hello".to_string(),
        };
        assert_eq!(lang.as_lang_text(), Some(("en", "hello")));
        assert_eq!(lang.as_text(), None);

        let num = ScalarValue::Float(2.5);
        assert_eq!(num.as_float(), Some(2.5));
        assert_eq!(num.as_bool(), None);
    }
}
