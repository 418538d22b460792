//! XML document assembly for generated feed trees.
//!
//! A feed generator builds a plain tree with the generation helpers of
//! `feed-normalize`, adds namespace declarations with `feed-namespace`, and
//! renders it here:
//!
//! - [`XmlBuilder`]: tree to markup, with [`TreeBuilder`] as the quick-xml
//!   implementation
//! - [`generate_xml`] / [`generate_xml_with`]: declaration, stylesheet
//!   instructions and output cleanup around the builder's markup

pub mod builder;
pub mod document;
pub mod error;
pub mod options;

pub use builder::{DEFAULT_INDENT, TreeBuilder, XmlBuilder};
pub use document::{XML_DECLARATION, generate_xml, generate_xml_with};
pub use error::{Result, XmlError};
pub use options::{Stylesheet, XmlOptions};
