//! Inline Style Declarations
//!
//! An ordered declaration block (`name: value; ...`) with by-name
//! lookup. Property names are stored hyphenated; the typed style and
//! CSS-variable surfaces normalize before reaching this layer.

use std::collections::HashMap;

use tracing::trace;

/// Ordered inline-style declaration block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclaration {
    declarations: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Raw declaration value, if the property is set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.declarations.get(i))
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration, replacing any existing one in place.
    pub fn set(&mut self, name: &str, value: &str) {
        trace!(name, value, "set style property");
        if let Some(&index) = self.by_name.get(name) {
            self.declarations[index].1 = value.to_string();
        } else {
            self.by_name.insert(name.to_string(), self.declarations.len());
            self.declarations.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove a declaration, returning its raw value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.by_name.remove(name)?;
        trace!(name, "remove style property");
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.declarations.remove(index).1)
    }

    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Property names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.declarations.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render the block as `name: value; ...` in declaration order.
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.declarations {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}
