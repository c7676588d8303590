//! Dataset Surface
//!
//! Typed accessors over `data-*` entries. Callers use property-case
//! names (`userId`); storage uses the `data-user-id` attribute form.

use domsurf_core::{
    decode, encode, matches_all, matches_some, select_properties, select_property,
    to_attribute_case, to_property_case, PropertyFilter, PropertyInput, PropertyValue,
    SelectorError, SerializationError,
};

use crate::element::Element;

/// Attribute-case prefix of dataset entries.
pub const DATA_PREFIX: &str = "data-";

fn data_key(name: &str) -> String {
    to_attribute_case(name, DATA_PREFIX)
}

impl Element {
    /// Decoded dataset entry, `None` when absent.
    pub fn get_data(&self, name: &str) -> Option<PropertyValue> {
        decode(self.attributes.get(&data_key(name)))
    }

    /// Set a dataset entry from a typed input. `Absent` is a no-op.
    pub fn set_data(
        &mut self,
        name: &str,
        input: impl Into<PropertyInput>,
    ) -> Result<(), SerializationError> {
        if let Some(encoded) = encode(&input.into())? {
            self.attributes.set(&data_key(name), &encoded);
        }
        Ok(())
    }

    /// Set several dataset entries in order.
    pub fn set_dataset<I, S>(&mut self, entries: I) -> Result<(), SerializationError>
    where
        I: IntoIterator<Item = (S, PropertyInput)>,
        S: AsRef<str>,
    {
        for (name, input) in entries {
            self.set_data(name.as_ref(), input)?;
        }
        Ok(())
    }

    pub fn has_data(&self, name: &str) -> bool {
        self.attributes.has(&data_key(name))
    }

    /// Remove a dataset entry, returning its decoded value.
    pub fn remove_data(&mut self, name: &str) -> Option<PropertyValue> {
        self.attributes
            .remove(&data_key(name))
            .map(|raw| domsurf_core::decode_str(&raw))
    }

    /// Snapshot of every dataset entry, property-case keys, in document
    /// order.
    pub fn dataset(&self) -> Vec<(String, PropertyValue)> {
        self.attributes
            .iter()
            .filter(|attr| attr.name.starts_with(DATA_PREFIX))
            .map(|attr| {
                (
                    to_property_case(&attr.name, DATA_PREFIX),
                    domsurf_core::decode_str(&attr.value),
                )
            })
            .collect()
    }

    /// True iff every filter entry matches this element's dataset.
    pub fn matches_all_data(&self, filter: &PropertyFilter) -> bool {
        matches_all(filter, |name, value| self.data_matches(name, value))
    }

    /// True iff at least one filter entry matches this element's dataset.
    pub fn matches_some_data(&self, filter: &PropertyFilter) -> bool {
        matches_some(filter, |name, value| self.data_matches(name, value))
    }

    fn data_matches(&self, name: &str, want: Option<&PropertyValue>) -> bool {
        let key = data_key(name);
        match want {
            None => self.attributes.has(&key),
            Some(want) => decode(self.attributes.get(&key)).as_ref() == Some(want),
        }
    }
}

/// Selector fragment for one dataset entry (property-case name).
pub fn select_data(
    name: &str,
    value: Option<&PropertyValue>,
    tag: Option<&str>,
) -> Result<String, SelectorError> {
    select_property(&data_key(name), value, tag)
}

/// Compound selector over several dataset entries, in filter order.
pub fn select_dataset(
    filter: &[(String, Option<PropertyValue>)],
    tag: Option<&str>,
) -> Result<String, SelectorError> {
    let normalized: Vec<(String, Option<PropertyValue>)> = filter
        .iter()
        .map(|(name, value)| (data_key(name), value.clone()))
        .collect();
    select_properties(&normalized, tag)
}
