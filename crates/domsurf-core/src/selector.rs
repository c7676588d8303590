//! Selector Synthesis
//!
//! Builds CSS attribute-selector fragments: `[name]` for presence,
//! `[name="value"]` with structured-text quoting for a value constraint,
//! optionally prefixed with an element tag.

use crate::coerce::encode_value;
use crate::error::SelectorError;
use crate::value::PropertyValue;

/// Build a selector fragment for one property.
///
/// `None` produces a presence-only fragment. A value is encoded and then
/// quoted like a JSON string so embedded quotes, backslashes, and control
/// characters cannot break out of the fragment. Encoding failure
/// propagates; a silently degraded fragment could match the wrong
/// elements.
pub fn select_property(
    name: &str,
    value: Option<&PropertyValue>,
    tag: Option<&str>,
) -> Result<String, SelectorError> {
    let fragment = match value {
        None => format!("[{name}]"),
        Some(value) => {
            let encoded = encode_value(value).map_err(|source| SelectorError::Encode {
                name: name.to_string(),
                source,
            })?;
            format!("[{name}={}]", quote(&encoded))
        }
    };
    match tag {
        Some(tag) => Ok(format!("{tag}{fragment}")),
        None => Ok(fragment),
    }
}

/// Build a compound selector from ordered name/value pairs.
///
/// Fragments are concatenated in pair order; the tag is prepended once,
/// not per fragment.
pub fn select_properties(
    filter: &[(String, Option<PropertyValue>)],
    tag: Option<&str>,
) -> Result<String, SelectorError> {
    let mut out = String::new();
    if let Some(tag) = tag {
        out.push_str(tag);
    }
    for (name, value) in filter {
        out.push_str(&select_property(name, value.as_ref(), None)?);
    }
    Ok(out)
}

/// Quote an encoded value as a double-quoted, escaped string literal.
fn quote(encoded: &str) -> String {
    // Serializing a plain string cannot fail.
    serde_json::to_string(encoded).expect("string quoting is infallible")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializationError;
    use crate::value::PropertyValue;

    #[test]
    fn test_presence_only_fragment() {
        assert_eq!(select_property("inert", None, None).unwrap(), "[inert]");
    }

    #[test]
    fn test_value_fragment_with_tag() {
        let sel =
            select_property("aria-hidden", Some(&PropertyValue::Bool(true)), Some("button"))
                .unwrap();
        assert_eq!(sel, r#"button[aria-hidden="true"]"#);
    }

    #[test]
    fn test_structured_value_is_escaped() {
        let value = PropertyValue::map([("thisIs", "object")]);
        let sel = select_property("data-object", Some(&value), None).unwrap();
        assert_eq!(sel, r#"[data-object="{\"thisIs\":\"object\"}"]"#);
    }

    #[test]
    fn test_text_with_quotes_is_escaped() {
        let value = PropertyValue::Text(r#"say "hi""#.to_string());
        let sel = select_property("title", Some(&value), None).unwrap();
        assert_eq!(sel, r#"[title="say \"hi\""]"#);
    }

    #[test]
    fn test_multi_property_selector_order_and_tag() {
        let filter = vec![
            ("role".to_string(), Some(PropertyValue::Text("tab".to_string()))),
            ("aria-selected".to_string(), Some(PropertyValue::Bool(true))),
            ("inert".to_string(), None),
        ];
        let sel = select_properties(&filter, Some("li")).unwrap();
        assert_eq!(sel, r#"li[role="tab"][aria-selected="true"][inert]"#);
    }

    #[test]
    fn test_empty_filter_yields_bare_tag() {
        assert_eq!(select_properties(&[], Some("div")).unwrap(), "div");
        assert_eq!(select_properties(&[], None).unwrap(), "");
    }

    #[test]
    fn test_encoding_failure_propagates() {
        let value = PropertyValue::Number(f64::NAN);
        let err = select_property("data-count", Some(&value), None).unwrap_err();
        match err {
            SelectorError::Encode { ref name, ref source } => {
                assert_eq!(name, "data-count");
                assert!(matches!(source, SerializationError::NonFiniteNumber { .. }));
            }
        }
        assert_eq!(err.property_name(), "data-count");
    }
}
