//! Inline Style Surface
//!
//! Typed accessors over inline style declarations. Property names are
//! hyphenated on the way in (`backgroundColor` -> `background-color`).

use domsurf_core::{
    decode, encode, matches_all, matches_some, to_attribute_case, PropertyFilter, PropertyInput,
    PropertyValue, SerializationError,
};

use crate::element::Element;

fn style_key(name: &str) -> String {
    to_attribute_case(name, "")
}

impl Element {
    /// Decoded style declaration value, `None` when unset.
    pub fn get_style(&self, name: &str) -> Option<PropertyValue> {
        decode(self.style.get(&style_key(name)))
    }

    /// Set a style declaration from a typed input. `Absent` is a no-op.
    pub fn set_style(
        &mut self,
        name: &str,
        input: impl Into<PropertyInput>,
    ) -> Result<(), SerializationError> {
        if let Some(encoded) = encode(&input.into())? {
            self.style.set(&style_key(name), &encoded);
        }
        Ok(())
    }

    /// Set several style declarations in order.
    pub fn set_styles<I, S>(&mut self, entries: I) -> Result<(), SerializationError>
    where
        I: IntoIterator<Item = (S, PropertyInput)>,
        S: AsRef<str>,
    {
        for (name, input) in entries {
            self.set_style(name.as_ref(), input)?;
        }
        Ok(())
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.style.has(&style_key(name))
    }

    /// Remove a style declaration, returning its decoded value.
    pub fn remove_style(&mut self, name: &str) -> Option<PropertyValue> {
        self.style
            .remove(&style_key(name))
            .map(|raw| domsurf_core::decode_str(&raw))
    }

    /// True iff every filter entry matches this element's style block.
    pub fn matches_all_styles(&self, filter: &PropertyFilter) -> bool {
        matches_all(filter, |name, value| self.style_matches(name, value))
    }

    /// True iff at least one filter entry matches this element's style
    /// block.
    pub fn matches_some_styles(&self, filter: &PropertyFilter) -> bool {
        matches_some(filter, |name, value| self.style_matches(name, value))
    }

    fn style_matches(&self, name: &str, want: Option<&PropertyValue>) -> bool {
        let key = style_key(name);
        match want {
            None => self.style.has(&key),
            Some(want) => decode(self.style.get(&key)).as_ref() == Some(want),
        }
    }
}
