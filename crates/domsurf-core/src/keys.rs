//! Key Normalization
//!
//! Property names come in two shapes: attribute-case (`data-some-thing`)
//! and property-case (`someThing`). Both directions are pure string
//! transforms; neither validates or rejects names.

/// Marker prefix of a CSS custom property name.
pub const CSS_VARIABLE_PREFIX: &str = "--";

/// Convert a property-case name to attribute-case with the given prefix.
///
/// A name already carrying a non-empty `prefix` is returned unchanged.
/// With an empty `prefix` this is a plain camel-to-kebab transform
/// (`ariaHidden` -> `aria-hidden`), which is how the attribute and style
/// surfaces hyphenate without prefixing.
pub fn to_attribute_case(name: &str, prefix: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if !prefix.is_empty() && name.starts_with(prefix) {
        return name.to_string();
    }

    let mut out = String::with_capacity(prefix.len() + name.len() + 4);
    out.push_str(prefix);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert an attribute-case name back to property-case.
///
/// A name not carrying `prefix` is returned unchanged. Otherwise the
/// prefix is stripped, hyphen-separated segments are rejoined with the
/// first segment lowercased and every later segment capitalized.
pub fn to_property_case(name: &str, prefix: &str) -> String {
    if name.is_empty() || !name.starts_with(prefix) {
        return name.to_string();
    }

    let rest = &name[prefix.len()..];
    let mut out = String::with_capacity(rest.len());
    for (i, segment) in rest.split('-').enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i == 0 {
            out.push_str(&segment.to_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Check whether a name has the CSS custom property marker.
pub fn is_css_variable_name(name: &str) -> bool {
    name.starts_with(CSS_VARIABLE_PREFIX)
}
