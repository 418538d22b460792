//! Namespace detection and canonicalization for parsed feed trees.
//!
//! Feed authors bind namespaces to whatever prefixes they like. Extractors
//! downstream expect one fixed vocabulary (`dc:creator`, `media:content`,
//! ...). This crate bridges the two:
//!
//! - [`NamespaceRegistry`]: canonical prefix to URI table, with the standard
//!   table available through [`NamespaceRegistry::standard`]
//! - [`detect_namespaces`] / [`generate_namespace_attrs`]: find the prefixes
//!   a tree uses and synthesize `@xmlns:*` declarations for them
//! - [`NamespaceNormalizer`]: scoped, pure rewrite of namespaced keys

pub mod detect;
pub mod error;
pub mod normalizer;
pub mod options;
pub mod registry;
mod standard;

pub use detect::{detect_namespaces, generate_namespace_attrs};
pub use error::{RegistryError, Result};
pub use normalizer::{NamespaceNormalizer, NormalizeReport};
pub use options::NormalizeOptions;
pub use registry::{NamespaceEntry, NamespaceRegistry, normalize_uri};
