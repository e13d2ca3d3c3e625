//! Scalar codecs: wire leaves to typed scalars and back.
//!
//! Each decoder either produces a value or reports "does not match" by
//! returning `None`; the caller tries the property's next declared
//! alternative. Encoding is total except for non-finite floats, which
//! JSON cannot represent.

use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use crate::codec::{LANGUAGE_KEY, VALUE_KEY};
use crate::error::EncodeError;
use crate::model::{Iri, ScalarValue};
use crate::schema::Shape;

// =============================================================================
// DECODING
// =============================================================================

/// Attempts to decode a wire value as the given scalar shape.
///
/// Structural shapes never match here; they are resolved by the value
/// codec against the registry.
pub fn decode_scalar(shape: Shape, input: &Value) -> Option<ScalarValue> {
    match shape {
        Shape::Entity(_) => None,
        Shape::Iri => decode_iri(input),
        Shape::Text => decode_text(input),
        Shape::LangText => decode_lang_text(input),
        Shape::Float => decode_float(input),
        Shape::Bool => decode_bool(input),
        Shape::Timestamp => decode_timestamp(input),
        Shape::Duration => decode_duration(input),
    }
}

fn decode_text(input: &Value) -> Option<ScalarValue> {
    input.as_str().map(|s| ScalarValue::Text(s.to_string()))
}

/// Matches a JSON-LD-style value object: `{"@value": "...",
/// "@language": "..."}`. The language tag is optional.
fn decode_lang_text(input: &Value) -> Option<ScalarValue> {
    let map = input.as_object()?;
    let value = map.get(VALUE_KEY)?.as_str()?;
    let language = map
        .get(LANGUAGE_KEY)
        .and_then(Value::as_str)
        .unwrap_or("");
    Some(ScalarValue::LangText {
        language: language.to_string(),
        value: value.to_string(),
    })
}

fn decode_float(input: &Value) -> Option<ScalarValue> {
    input.as_f64().map(ScalarValue::Float)
}

fn decode_bool(input: &Value) -> Option<ScalarValue> {
    input.as_bool().map(ScalarValue::Bool)
}

fn decode_timestamp(input: &Value) -> Option<ScalarValue> {
    let s = input.as_str()?;
    DateTime::parse_from_rfc3339(s).ok().map(ScalarValue::Timestamp)
}

fn decode_duration(input: &Value) -> Option<ScalarValue> {
    let s = input.as_str()?;
    crate::util::parse_duration(s).ok().map(ScalarValue::Duration)
}

fn decode_iri(input: &Value) -> Option<ScalarValue> {
    let s = input.as_str()?;
    Iri::new(s).ok().map(ScalarValue::Iri)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a scalar as its wire leaf.
pub fn encode_scalar(scalar: &ScalarValue) -> Result<Value, EncodeError> {
    match scalar {
        ScalarValue::Text(s) => Ok(Value::String(s.clone())),
        ScalarValue::LangText { language, value } => {
            let mut map = serde_json::Map::new();
            map.insert(VALUE_KEY.to_string(), Value::String(value.clone()));
            if !language.is_empty() {
                map.insert(LANGUAGE_KEY.to_string(), Value::String(language.clone()));
            }
            Ok(Value::Object(map))
        }
        ScalarValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or(EncodeError::NonFiniteFloat { value: *f }),
        ScalarValue::Bool(b) => Ok(Value::Bool(*b)),
        ScalarValue::Timestamp(t) => Ok(Value::String(
            t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )),
        ScalarValue::Duration(d) => Ok(Value::String(crate::util::format_duration(*d))),
        ScalarValue::Iri(iri) => Ok(Value::String(iri.as_str().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use serde_json::json;

    #[test]
    fn test_text_matches_strings_only() {
        assert_eq!(
            decode_scalar(Shape::Text, &json!("hi")),
            Some(ScalarValue::Text("hi".to_string()))
        );
        assert_eq!(decode_scalar(Shape::Text, &json!(5)), None);
        assert_eq!(decode_scalar(Shape::Text, &json!({"a": 1})), None);
    }

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(
            decode_scalar(Shape::Float, &json!(4)),
            Some(ScalarValue::Float(4.0))
        );
        assert_eq!(
            decode_scalar(Shape::Float, &json!(2.5)),
            Some(ScalarValue::Float(2.5))
        );
        assert_eq!(decode_scalar(Shape::Float, &json!("4")), None);
    }

    #[test]
    fn test_bool() {
        assert_eq!(
            decode_scalar(Shape::Bool, &json!(true)),
            Some(ScalarValue::Bool(true))
        );
        assert_eq!(decode_scalar(Shape::Bool, &json!(1)), None);
    }

    #[test]
    fn test_timestamp_requires_rfc3339() {
        assert!(decode_scalar(Shape::Timestamp, &json!("2026-01-02T03:04:05Z")).is_some());
        assert!(decode_scalar(Shape::Timestamp, &json!("2026-01-02T03:04:05+05:30")).is_some());
        assert!(decode_scalar(Shape::Timestamp, &json!("January 2nd")).is_none());
        assert!(decode_scalar(Shape::Timestamp, &json!(1735787045)).is_none());
    }

    #[test]
    fn test_duration() {
        assert_eq!(
            decode_scalar(Shape::Duration, &json!("PT2H")),
            Some(ScalarValue::Duration(TimeDelta::hours(2)))
        );
        assert!(decode_scalar(Shape::Duration, &json!("2 hours")).is_none());
    }

    #[test]
    fn test_iri_rejects_whitespace() {
        assert!(decode_scalar(Shape::Iri, &json!("https://example.com/a")).is_some());
        assert!(decode_scalar(Shape::Iri, &json!("not an iri")).is_none());
        assert!(decode_scalar(Shape::Iri, &json!("")).is_none());
    }

    #[test]
    fn test_lang_text_value_object() {
        let tagged = decode_scalar(
            Shape::LangText,
            &json!({"@value": "bonjour", "@language": "fr"}),
        )
        .unwrap();
        assert_eq!(tagged.as_lang_text(), Some(("fr", "bonjour")));

        // Language tag is optional.
        let untagged = decode_scalar(Shape::LangText, &json!({"@value": "x"})).unwrap();
        assert_eq!(untagged.as_lang_text(), Some(("", "x")));

        assert!(decode_scalar(Shape::LangText, &json!({"other": "x"})).is_none());
        assert!(decode_scalar(Shape::LangText, &json!("bare")).is_none());
    }

    #[test]
    fn test_encode_decode_symmetry() {
        let scalars = [
            ScalarValue::Text("hi".to_string()),
            ScalarValue::Float(2.5),
            ScalarValue::Bool(false),
            ScalarValue::Duration(TimeDelta::minutes(90)),
            ScalarValue::Iri(Iri::new("https://example.com/x").unwrap()),
            ScalarValue::LangText {
                language: "en".to_string(),
                value: "hello".to_string(),
            },
        ];
        for scalar in scalars {
            let shape = match scalar {
                ScalarValue::Text(_) => Shape::Text,
                ScalarValue::LangText { .. } => Shape::LangText,
                ScalarValue::Float(_) => Shape::Float,
                ScalarValue::Bool(_) => Shape::Bool,
                ScalarValue::Timestamp(_) => Shape::Timestamp,
                ScalarValue::Duration(_) => Shape::Duration,
                ScalarValue::Iri(_) => Shape::Iri,
            };
            let wire = encode_scalar(&scalar).unwrap();
            assert_eq!(decode_scalar(shape, &wire), Some(scalar));
        }
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        assert!(matches!(
            encode_scalar(&ScalarValue::Float(f64::NAN)),
            Err(EncodeError::NonFiniteFloat { .. })
        ));
        assert!(matches!(
            encode_scalar(&ScalarValue::Float(f64::INFINITY)),
            Err(EncodeError::NonFiniteFloat { .. })
        ));
    }
}
