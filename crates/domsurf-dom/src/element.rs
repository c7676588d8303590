//! Element Model
//!
//! An element carrying an ordered attribute collection and an inline
//! style block. This is the raw string layer; the typed surfaces build
//! on top of it.

use std::collections::HashMap;

use tracing::trace;

use crate::style::StyleDeclaration;

/// A single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered attribute collection with by-name lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    attributes: Vec<Attribute>,
    by_name: HashMap<String, usize>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Raw attribute value, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Set a raw attribute value, replacing any existing one in place.
    pub fn set(&mut self, name: &str, value: &str) {
        trace!(name, value, "set attribute");
        if let Some(&index) = self.by_name.get(name) {
            self.attributes[index].value = value.to_string();
        } else {
            self.by_name.insert(name.to_string(), self.attributes.len());
            self.attributes.push(Attribute::new(name, value));
        }
    }

    /// Remove an attribute, returning its raw value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.by_name.remove(name)?;
        trace!(name, "remove attribute");
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index).value)
    }

    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Toggle a marker attribute, following the DOM `toggleAttribute`
    /// force-flag contract. Returns whether the attribute is present
    /// afterwards.
    pub fn toggle(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = self.has(name);
        match force {
            Some(true) => {
                if !present {
                    self.set(name, "");
                }
                true
            }
            Some(false) => {
                self.remove(name);
                false
            }
            None => {
                if present {
                    self.remove(name);
                    false
                } else {
                    self.set(name, "");
                    true
                }
            }
        }
    }

    /// Attribute names in document order.
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }
}

/// An element: tag name, attributes, inline style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub attributes: AttributeMap,
    pub style: StyleDeclaration,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: AttributeMap::new(),
            style: StyleDeclaration::new(),
        }
    }
}
