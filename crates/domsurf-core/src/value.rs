//! Typed Property Values
//!
//! The typed value union carried by attributes, dataset entries,
//! CSS custom properties, and inline style declarations.

/// A typed value stored behind a string-valued DOM property.
///
/// `Map` keeps insertion order so that encoded documents and selector
/// fragments are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropertyValue>),
    Map(Vec<(String, PropertyValue)>),
}

impl PropertyValue {
    /// Build a `Map` value from ordered key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        PropertyValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a `List` value from an iterator of values.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<PropertyValue>,
        I: IntoIterator<Item = V>,
    {
        PropertyValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Number(v as f64)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(v: Vec<PropertyValue>) -> Self {
        PropertyValue::List(v)
    }
}

/// Setter-side input for a property write.
///
/// String DOM properties distinguish three states on write: leave the
/// property untouched, set it present with no value (the boolean-attribute
/// marker), or set it to a concrete value. Collapsing the first two into
/// one `Option` loses the marker case, so the distinction is explicit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropertyInput {
    /// Do not set the property at all.
    #[default]
    Absent,
    /// Set the property present with an empty value.
    Empty,
    /// Set the property to a typed value.
    Value(PropertyValue),
}

impl PropertyInput {
    /// The value carried by `Value`, if any.
    pub fn value(&self) -> Option<&PropertyValue> {
        match self {
            PropertyInput::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<PropertyValue> for PropertyInput {
    fn from(v: PropertyValue) -> Self {
        PropertyInput::Value(v)
    }
}

impl From<bool> for PropertyInput {
    fn from(v: bool) -> Self {
        PropertyInput::Value(v.into())
    }
}

impl From<f64> for PropertyInput {
    fn from(v: f64) -> Self {
        PropertyInput::Value(v.into())
    }
}

impl From<i32> for PropertyInput {
    fn from(v: i32) -> Self {
        PropertyInput::Value(v.into())
    }
}

impl From<&str> for PropertyInput {
    fn from(v: &str) -> Self {
        PropertyInput::Value(v.into())
    }
}

impl From<String> for PropertyInput {
    fn from(v: String) -> Self {
        PropertyInput::Value(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
        assert_eq!(PropertyValue::from(42), PropertyValue::Number(42.0));
        assert_eq!(
            PropertyValue::from("hi"),
            PropertyValue::Text("hi".to_string())
        );
    }

    #[test]
    fn test_map_builder_preserves_order() {
        let map = PropertyValue::map([("b", 1), ("a", 2)]);
        match map {
            PropertyValue::Map(entries) => {
                assert_eq!(entries[0].0, "b");
                assert_eq!(entries[1].0, "a");
            }
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn test_input_from_value() {
        let input = PropertyInput::from(7);
        assert_eq!(input.value(), Some(&PropertyValue::Number(7.0)));
        assert_eq!(PropertyInput::Absent.value(), None);
        assert_eq!(PropertyInput::Empty.value(), None);
    }
}
