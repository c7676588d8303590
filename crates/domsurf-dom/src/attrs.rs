//! Attribute Surface
//!
//! Typed accessors over element attributes. Names are hyphenated on the
//! way in (`ariaHidden` -> `aria-hidden`); values go through the
//! coercion protocol in both directions.

use domsurf_core::{
    decode, encode, matches_all, matches_some, select_properties, select_property,
    to_attribute_case, PropertyFilter, PropertyInput, PropertyValue, SelectorError,
    SerializationError,
};

use crate::element::Element;

fn attribute_key(name: &str) -> String {
    to_attribute_case(name, "")
}

impl Element {
    /// Decoded attribute value, `None` when absent.
    pub fn get_attribute(&self, name: &str) -> Option<PropertyValue> {
        decode(self.attributes.get(&attribute_key(name)))
    }

    /// Set an attribute from a typed input.
    ///
    /// `Absent` input leaves the element untouched; `Empty` stores the
    /// bare marker. Unencodable values propagate the failure without
    /// touching the element.
    pub fn set_attribute(
        &mut self,
        name: &str,
        input: impl Into<PropertyInput>,
    ) -> Result<(), SerializationError> {
        if let Some(encoded) = encode(&input.into())? {
            self.attributes.set(&attribute_key(name), &encoded);
        }
        Ok(())
    }

    /// Set several attributes in order. Fails on the first unencodable
    /// value; earlier entries stay applied.
    pub fn set_attributes<I, S>(&mut self, entries: I) -> Result<(), SerializationError>
    where
        I: IntoIterator<Item = (S, PropertyInput)>,
        S: AsRef<str>,
    {
        for (name, input) in entries {
            self.set_attribute(name.as_ref(), input)?;
        }
        Ok(())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(&attribute_key(name))
    }

    /// Remove an attribute, returning its decoded value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<PropertyValue> {
        self.attributes
            .remove(&attribute_key(name))
            .map(|raw| domsurf_core::decode_str(&raw))
    }

    /// Toggle a marker attribute; see [`crate::AttributeMap::toggle`].
    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        self.attributes.toggle(&attribute_key(name), force)
    }

    /// True iff every filter entry matches this element's attributes.
    pub fn matches_all_attributes(&self, filter: &PropertyFilter) -> bool {
        matches_all(filter, |name, value| self.attribute_matches(name, value))
    }

    /// True iff at least one filter entry matches this element's
    /// attributes.
    pub fn matches_some_attributes(&self, filter: &PropertyFilter) -> bool {
        matches_some(filter, |name, value| self.attribute_matches(name, value))
    }

    fn attribute_matches(&self, name: &str, want: Option<&PropertyValue>) -> bool {
        let key = attribute_key(name);
        match want {
            None => self.attributes.has(&key),
            Some(want) => decode(self.attributes.get(&key)).as_ref() == Some(want),
        }
    }
}

/// Selector fragment for one attribute.
pub fn select_attribute(
    name: &str,
    value: Option<&PropertyValue>,
    tag: Option<&str>,
) -> Result<String, SelectorError> {
    select_property(&attribute_key(name), value, tag)
}

/// Compound selector over several attributes, in filter order.
pub fn select_attributes(
    filter: &[(String, Option<PropertyValue>)],
    tag: Option<&str>,
) -> Result<String, SelectorError> {
    let normalized: Vec<(String, Option<PropertyValue>)> = filter
        .iter()
        .map(|(name, value)| (attribute_key(name), value.clone()))
        .collect();
    select_properties(&normalized, tag)
}
