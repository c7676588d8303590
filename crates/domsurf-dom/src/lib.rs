//! domsurf DOM - Element Model & Accessor Surfaces
//!
//! An in-memory element with an ordered attribute collection and inline
//! style block, plus the four typed accessor surfaces: attributes,
//! dataset entries, CSS custom properties, and inline style
//! declarations.

mod attrs;
mod css_vars;
mod dataset;
mod element;
mod style;
mod style_props;

pub use attrs::{select_attribute, select_attributes};
pub use dataset::{select_data, select_dataset, DATA_PREFIX};
pub use element::{Attribute, AttributeMap, Element};
pub use style::StyleDeclaration;
