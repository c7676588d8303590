//! CSS Custom Property Surface
//!
//! Typed accessors over `--*` custom properties on the inline style.
//! Unmarked names are hyphenated and prefixed (`mainColor` ->
//! `--main-color`); marked names pass through untouched.

use domsurf_core::{
    decode, encode, is_css_variable_name, matches_all, matches_some, to_attribute_case,
    PropertyFilter, PropertyInput, PropertyValue, SerializationError, CSS_VARIABLE_PREFIX,
};

use crate::element::Element;

fn css_variable_key(name: &str) -> String {
    to_attribute_case(name, CSS_VARIABLE_PREFIX)
}

impl Element {
    /// Decoded custom property value, `None` when unset.
    pub fn get_css_variable(&self, name: &str) -> Option<PropertyValue> {
        decode(self.style.get(&css_variable_key(name)))
    }

    /// Set a custom property from a typed input. `Absent` is a no-op.
    pub fn set_css_variable(
        &mut self,
        name: &str,
        input: impl Into<PropertyInput>,
    ) -> Result<(), SerializationError> {
        if let Some(encoded) = encode(&input.into())? {
            self.style.set(&css_variable_key(name), &encoded);
        }
        Ok(())
    }

    /// Set several custom properties in order.
    pub fn set_css_variables<I, S>(&mut self, entries: I) -> Result<(), SerializationError>
    where
        I: IntoIterator<Item = (S, PropertyInput)>,
        S: AsRef<str>,
    {
        for (name, input) in entries {
            self.set_css_variable(name.as_ref(), input)?;
        }
        Ok(())
    }

    pub fn has_css_variable(&self, name: &str) -> bool {
        self.style.has(&css_variable_key(name))
    }

    /// Remove a custom property, returning its decoded value.
    pub fn remove_css_variable(&mut self, name: &str) -> Option<PropertyValue> {
        self.style
            .remove(&css_variable_key(name))
            .map(|raw| domsurf_core::decode_str(&raw))
    }

    /// Snapshot of every custom property, marker-prefixed names, in
    /// declaration order.
    pub fn css_variables(&self) -> Vec<(String, PropertyValue)> {
        self.style
            .iter()
            .filter(|(name, _)| is_css_variable_name(name))
            .map(|(name, value)| (name.to_string(), domsurf_core::decode_str(value)))
            .collect()
    }

    /// True iff every filter entry matches this element's custom
    /// properties.
    pub fn matches_all_css_variables(&self, filter: &PropertyFilter) -> bool {
        matches_all(filter, |name, value| self.css_variable_matches(name, value))
    }

    /// True iff at least one filter entry matches this element's custom
    /// properties.
    pub fn matches_some_css_variables(&self, filter: &PropertyFilter) -> bool {
        matches_some(filter, |name, value| self.css_variable_matches(name, value))
    }

    fn css_variable_matches(&self, name: &str, want: Option<&PropertyValue>) -> bool {
        let key = css_variable_key(name);
        match want {
            None => self.style.has(&key),
            Some(want) => decode(self.style.get(&key)).as_ref() == Some(want),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_names_get_the_marker() {
        let mut el = Element::new("div");
        el.set_css_variable("mainColor", "#fff").unwrap();

        assert_eq!(el.style.get("--main-color"), Some("#fff"));
        assert_eq!(
            el.get_css_variable("--main-color"),
            Some(PropertyValue::Text("#fff".to_string()))
        );
        assert_eq!(
            el.get_css_variable("mainColor"),
            Some(PropertyValue::Text("#fff".to_string()))
        );
    }

    #[test]
    fn test_marked_names_pass_through() {
        let mut el = Element::new("div");
        el.set_css_variable("--gap", 4).unwrap();

        assert_eq!(el.style.get("--gap"), Some("4"));
        assert_eq!(el.get_css_variable("--gap"), Some(PropertyValue::Number(4.0)));
    }

    #[test]
    fn test_snapshot_only_sees_custom_properties() {
        let mut el = Element::new("div");
        el.style.set("color", "red");
        el.set_css_variable("gap", 4).unwrap();

        let vars = el.css_variables();
        assert_eq!(vars, vec![("--gap".to_string(), PropertyValue::Number(4.0))]);
    }

    #[test]
    fn test_remove_and_matching() {
        let mut el = Element::new("div");
        el.set_css_variables([("gap", PropertyInput::from(4)), ("mainColor", "#fff".into())])
            .unwrap();

        let filter = PropertyFilter::pairs([("gap", Some(PropertyValue::Number(4.0)))]);
        assert!(el.matches_all_css_variables(&filter));
        assert!(el.matches_some_css_variables(&PropertyFilter::names(["mainColor", "nope"])));
        assert!(!el.matches_all_css_variables(&PropertyFilter::names(["mainColor", "nope"])));

        assert_eq!(el.remove_css_variable("gap"), Some(PropertyValue::Number(4.0)));
        assert!(!el.has_css_variable("gap"));
    }
}
