//! Value Coercion Protocol
//!
//! Every property surface stores strings. `encode` turns a typed value
//! into its string form, `decode` recovers the typed value. Encoding may
//! fail on unrepresentable values; decoding never fails and falls back
//! to plain text.

use serde_json::Value as JsonValue;

use crate::error::SerializationError;
use crate::value::{PropertyInput, PropertyValue};

/// Encode a setter input to its stored string form.
///
/// `Absent` encodes to `None` (do not set the property), `Empty` to the
/// empty string (property present with no value).
pub fn encode(input: &PropertyInput) -> Result<Option<String>, SerializationError> {
    match input {
        PropertyInput::Absent => Ok(None),
        PropertyInput::Empty => Ok(Some(String::new())),
        PropertyInput::Value(value) => Ok(Some(encode_value(value)?)),
    }
}

/// Encode a typed value to its stored string form.
///
/// Booleans, numbers, and text use their natural text form. Lists and
/// maps use the structured-text (JSON) form and round-trip exactly
/// through [`decode_str`]. A non-finite number anywhere in the value is
/// unrepresentable and fails.
pub fn encode_value(value: &PropertyValue) -> Result<String, SerializationError> {
    match value {
        PropertyValue::Bool(b) => Ok(b.to_string()),
        PropertyValue::Number(n) => {
            if !n.is_finite() {
                return Err(SerializationError::NonFiniteNumber { value: *n });
            }
            Ok(format_number(*n))
        }
        PropertyValue::Text(s) => Ok(s.clone()),
        PropertyValue::List(_) | PropertyValue::Map(_) => {
            let json = to_json(value)?;
            serde_json::to_string(&json)
                .map_err(|e| SerializationError::Structured { message: e.to_string() })
        }
    }
}

/// Decode a stored string, `None` meaning the property is absent.
pub fn decode(raw: Option<&str>) -> Option<PropertyValue> {
    raw.map(decode_str)
}

/// Decode a stored string to its typed value. Never fails.
///
/// Interpretations are tried in a fixed order: empty string (marker
/// present, no value) as `Bool(true)`; the literals `true`/`false`;
/// a strict full-string finite number; a structured-text document;
/// finally the raw string as `Text`. The order is load-bearing: a bare
/// numeric document must decode as a number, and the literal text
/// `"true"` is indistinguishable from the boolean (a known ambiguity
/// of the stored form, kept as-is).
pub fn decode_str(raw: &str) -> PropertyValue {
    if raw.is_empty() {
        return PropertyValue::Bool(true);
    }
    match raw {
        "true" => return PropertyValue::Bool(true),
        "false" => return PropertyValue::Bool(false),
        _ => {}
    }
    // Strict parse: "4abc" is text, not the number 4.
    if let Ok(n) = raw.parse::<f64>() {
        if n.is_finite() {
            return PropertyValue::Number(n);
        }
    }
    if let Ok(json) = serde_json::from_str::<JsonValue>(raw) {
        if let Some(value) = from_json(&json) {
            return value;
        }
    }
    PropertyValue::Text(raw.to_string())
}

/// Render a finite f64 the way the stored form expects: integral values
/// without a fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn to_json(value: &PropertyValue) -> Result<JsonValue, SerializationError> {
    match value {
        PropertyValue::Bool(b) => Ok(JsonValue::Bool(*b)),
        PropertyValue::Number(n) => {
            if !n.is_finite() {
                return Err(SerializationError::NonFiniteNumber { value: *n });
            }
            if n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
                Ok(JsonValue::from(*n as i64))
            } else {
                Ok(JsonValue::from(*n))
            }
        }
        PropertyValue::Text(s) => Ok(JsonValue::String(s.clone())),
        PropertyValue::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(to_json(item)?);
            }
            Ok(JsonValue::Array(out))
        }
        PropertyValue::Map(entries) => {
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (key, item) in entries {
                out.insert(key.clone(), to_json(item)?);
            }
            Ok(JsonValue::Object(out))
        }
    }
}

/// Map a JSON document into the value union.
///
/// JSON `null` has no rendering in `PropertyValue`; a document containing
/// one anywhere is rejected so the caller falls back to plain text.
fn from_json(json: &JsonValue) -> Option<PropertyValue> {
    match json {
        JsonValue::Null => None,
        JsonValue::Bool(b) => Some(PropertyValue::Bool(*b)),
        JsonValue::Number(n) => n.as_f64().map(PropertyValue::Number),
        JsonValue::String(s) => Some(PropertyValue::Text(s.clone())),
        JsonValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_json(item)?);
            }
            Some(PropertyValue::List(out))
        }
        JsonValue::Object(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                out.push((key.clone(), from_json(item)?));
            }
            Some(PropertyValue::Map(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let values = [
            PropertyValue::Bool(true),
            PropertyValue::Bool(false),
            PropertyValue::Number(0.0),
            PropertyValue::Number(42.0),
            PropertyValue::Number(-3.5),
            PropertyValue::Text("text".to_string()),
            PropertyValue::list([1, 2, 3]),
            PropertyValue::map([("a", "b")]),
        ];
        for value in values {
            let encoded = encode_value(&value).unwrap();
            assert_eq!(decode_str(&encoded), value, "round-trip of {encoded:?}");
        }
    }

    #[test]
    fn test_encode_input_three_way() {
        assert_eq!(encode(&PropertyInput::Absent).unwrap(), None);
        assert_eq!(encode(&PropertyInput::Empty).unwrap(), Some(String::new()));
        assert_eq!(
            encode(&PropertyInput::from(5)).unwrap(),
            Some("5".to_string())
        );
    }

    #[test]
    fn test_empty_decodes_to_marker_true() {
        // A present-but-empty attribute reads back as boolean true.
        assert_eq!(decode_str(""), PropertyValue::Bool(true));
    }

    #[test]
    fn test_absent_decodes_to_none() {
        assert_eq!(decode(None), None);
        assert_eq!(decode(Some("x")), Some(PropertyValue::Text("x".to_string())));
    }

    #[test]
    fn test_strict_numeric_decode() {
        assert_eq!(decode_str("4"), PropertyValue::Number(4.0));
        assert_eq!(decode_str("-3.5"), PropertyValue::Number(-3.5));
        assert_eq!(decode_str("1e3"), PropertyValue::Number(1000.0));
        // Partial numeric prefixes stay text.
        assert_eq!(decode_str("4abc"), PropertyValue::Text("4abc".to_string()));
        assert_eq!(decode_str("NaN"), PropertyValue::Text("NaN".to_string()));
        assert_eq!(decode_str("inf"), PropertyValue::Text("inf".to_string()));
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(decode_str("true"), PropertyValue::Bool(true));
        assert_eq!(decode_str("false"), PropertyValue::Bool(false));
        // "True" is not a literal.
        assert_eq!(decode_str("True"), PropertyValue::Text("True".to_string()));
    }

    #[test]
    fn test_structured_decode() {
        assert_eq!(
            decode_str("[1,2,3]"),
            PropertyValue::list([1, 2, 3])
        );
        assert_eq!(
            decode_str(r#"{"a":"b"}"#),
            PropertyValue::map([("a", "b")])
        );
        assert_eq!(
            decode_str(r#"{"n":{"deep":true}}"#),
            PropertyValue::map([("n", PropertyValue::map([("deep", true)]))])
        );
        // A quoted JSON string decodes to its contents.
        assert_eq!(decode_str(r#""hi""#), PropertyValue::Text("hi".to_string()));
    }

    #[test]
    fn test_json_null_falls_back_to_text() {
        assert_eq!(decode_str("null"), PropertyValue::Text("null".to_string()));
        assert_eq!(
            decode_str("[1,null]"),
            PropertyValue::Text("[1,null]".to_string())
        );
    }

    #[test]
    fn test_malformed_structured_falls_back_to_text() {
        assert_eq!(
            decode_str("{not json"),
            PropertyValue::Text("{not json".to_string())
        );
    }

    #[test]
    fn test_structured_integral_numbers_have_no_fraction() {
        let encoded = encode_value(&PropertyValue::list([1, 2, 3])).unwrap();
        assert_eq!(encoded, "[1,2,3]");
        let encoded = encode_value(&PropertyValue::map([("thisIs", "object")])).unwrap();
        assert_eq!(encoded, r#"{"thisIs":"object"}"#);
    }

    #[test]
    fn test_non_finite_number_fails_to_encode() {
        let top = PropertyValue::Number(f64::NAN);
        assert!(matches!(
            encode_value(&top),
            Err(SerializationError::NonFiniteNumber { .. })
        ));

        let nested = PropertyValue::list([f64::INFINITY]);
        assert!(matches!(
            encode_value(&nested),
            Err(SerializationError::NonFiniteNumber { .. })
        ));
    }
}
