//! Configuration options for namespace normalization.

use serde::{Deserialize, Serialize};

/// Options for [`NamespaceNormalizer`](crate::NamespaceNormalizer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Namespace whose elements are emitted without a prefix.
    ///
    /// Typically the root format's own namespace, e.g. Atom for an
    /// Atom-rooted document.
    pub primary_uri: Option<String>,

    /// Rewrite unprefixed elements that live in a registered default
    /// namespace (`@xmlns`) to `canonical:name`.
    ///
    /// Default: false (unprefixed keys are never touched).
    pub promote_default_namespace: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_primary_uri(mut self, uri: impl Into<String>) -> Self {
        self.primary_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_default_promotion(mut self, enable: bool) -> Self {
        self.promote_default_namespace = enable;
        self
    }
}
