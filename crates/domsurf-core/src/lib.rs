//! domsurf core - Typed DOM Property Foundation
//!
//! Value coercion, key normalization, selector synthesis, and property
//! matching shared by every accessor surface.

mod coerce;
mod error;
mod keys;
mod search;
mod selector;
mod value;

pub use coerce::{decode, decode_str, encode, encode_value};
pub use error::{SelectorError, SerializationError};
pub use keys::{is_css_variable_name, to_attribute_case, to_property_case, CSS_VARIABLE_PREFIX};
pub use search::{matches_all, matches_some, PropertyFilter};
pub use selector::{select_properties, select_property};
pub use value::{PropertyInput, PropertyValue};
