//! Document tree model shared by the feed normalization crates.
//!
//! Trees arrive from an upstream XML or JSON parser that has already
//! lowercased tag and attribute names. Every crate in the workspace works on
//! the same [`Node`] type:
//!
//! - **Elements** are object keys (`title`, `dc:creator`)
//! - **Attributes** are object keys carrying the [`ATTRIBUTE_PREFIX`] (`@href`)
//! - **Text content** lives under [`TEXT_KEY`] (`#text`)
//! - **Repeated elements** are arrays, but only for tags the parser was told
//!   about; a single occurrence is a bare object
//!
//! Object key order is insertion order and survives every transformation.

mod node;
mod predicates;

pub use node::{
    ATTRIBUTE_PREFIX, CDATA_KEY, Map, NULL, Node, TEXT_KEY, XMLNS, is_reserved_key, number_to_string,
    split_prefix,
};
pub use predicates::{
    has_all_props, has_any_props, is_non_empty_string, is_non_empty_string_or_number, is_object,
    is_present, retrieve_text,
};
