//! Error types for namespace registry construction.

use thiserror::Error;

/// Errors raised while building a [`NamespaceRegistry`](crate::NamespaceRegistry).
///
/// Normalization itself never fails; only a malformed registry is an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A registry entry has an empty prefix.
    #[error("Namespace prefix must not be empty")]
    EmptyPrefix,

    /// The prefix cannot appear before a colon in a key.
    #[error("Invalid namespace prefix '{prefix}': must not contain ':' or whitespace")]
    InvalidPrefix { prefix: String },

    /// A registry entry has an empty or whitespace-only URI.
    #[error("Namespace URI for prefix '{prefix}' must not be empty")]
    EmptyUri { prefix: String },

    /// The same prefix was registered twice with different URIs.
    #[error("Prefix '{prefix}' is already bound to '{existing}', cannot rebind to '{uri}'")]
    DuplicatePrefix {
        prefix: String,
        existing: String,
        uri: String,
    },

    /// An alternate URI was added for a prefix that is not registered.
    #[error("Cannot add alternate URI '{uri}' for unregistered prefix '{prefix}'")]
    UnknownPrefix { prefix: String, uri: String },

    /// A registry document could not be parsed.
    #[error("Invalid registry document: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
