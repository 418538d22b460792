//! Prefix to URI registry with a derived reverse index.

use std::collections::HashMap;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{RegistryError, Result};
use crate::standard::STANDARD_NAMESPACES;

/// Canonical URI of a prefix plus any alternate spellings found in the wild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    pub uri: String,
    pub aliases: Vec<String>,
}

/// Mapping from canonical prefix to canonical URI.
///
/// A reverse index from URI to prefix is kept alongside. Lookups by URI
/// ignore surrounding whitespace and ASCII case, and also match alternate
/// URIs registered with [`add_alias`](Self::add_alias).
///
/// Iteration follows registration order. Once built, a registry is only read,
/// so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    entries: IndexMap<String, NamespaceEntry>,
    uris: HashMap<String, String>,
}

/// One registry document value: a single URI or `[canonical, alias...]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UriSpec {
    Single(String),
    Multiple(Vec<String>),
}

static STANDARD_REGISTRY: OnceLock<NamespaceRegistry> = OnceLock::new();

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(prefix, uri)` pairs.
    pub fn from_entries<I, P, U>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        let mut registry = Self::new();
        for (prefix, uri) in entries {
            registry.register(prefix, uri)?;
        }
        Ok(registry)
    }

    /// Build a registry from a JSON document.
    ///
    /// ```
    /// use feed_namespace::NamespaceRegistry;
    ///
    /// let registry = NamespaceRegistry::from_json_str(
    ///     r#"{ "dc": "http://purl.org/dc/elements/1.1/", "geo": ["http://a/", "http://b/"] }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(registry.prefix_for("HTTP://B/"), Some("geo"));
    /// ```
    pub fn from_json_str(document: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.extend_from_json_str(document)?;
        Ok(registry)
    }

    /// Add the entries of a JSON document to this registry.
    ///
    /// The document maps each prefix to a URI, or to a list whose first
    /// element is the canonical URI and whose rest are aliases.
    pub fn extend_from_json_str(&mut self, document: &str) -> Result<()> {
        let specs: IndexMap<String, UriSpec> = serde_json::from_str(document)
            .map_err(|source| RegistryError::Json { source })?;

        for (prefix, spec) in specs {
            match spec {
                UriSpec::Single(uri) => self.register(prefix, uri)?,
                UriSpec::Multiple(uris) => {
                    let mut uris = uris.into_iter();
                    let Some(canonical) = uris.next() else {
                        return Err(RegistryError::EmptyUri { prefix });
                    };
                    self.register(prefix.clone(), canonical)?;
                    for alias in uris {
                        self.add_alias(prefix.clone(), alias)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// The process-wide registry of namespaces the system understands.
    ///
    /// Built on first access and cached.
    pub fn standard() -> &'static NamespaceRegistry {
        STANDARD_REGISTRY.get_or_init(build_standard_registry)
    }

    /// Bind `prefix` to `uri`.
    ///
    /// Registering the same binding twice is a no-op; rebinding a prefix to a
    /// different URI is an error. When a URI is already claimed by another
    /// prefix, the earlier prefix keeps the reverse mapping.
    pub fn register(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        let uri = uri.into();
        validate_prefix(&prefix)?;
        let uri = validate_uri(&prefix, &uri)?;

        if let Some(existing) = self.entries.get(&prefix) {
            if normalize_uri(&existing.uri) == normalize_uri(&uri) {
                return Ok(());
            }
            return Err(RegistryError::DuplicatePrefix {
                prefix,
                existing: existing.uri.clone(),
                uri,
            });
        }

        self.index_uri(&prefix, &uri);
        self.entries.insert(
            prefix,
            NamespaceEntry {
                uri,
                aliases: Vec::new(),
            },
        );
        Ok(())
    }

    /// Add an alternate URI that also resolves to `prefix`.
    pub fn add_alias(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        let uri = uri.into();
        let uri = validate_uri(&prefix, &uri)?;

        if !self.entries.contains_key(&prefix) {
            return Err(RegistryError::UnknownPrefix { prefix, uri });
        }

        self.index_uri(&prefix, &uri);
        if let Some(entry) = self.entries.get_mut(&prefix) {
            entry.aliases.push(uri);
        }
        Ok(())
    }

    fn index_uri(&mut self, prefix: &str, uri: &str) {
        let key = normalize_uri(uri);
        if let Some(owner) = self.uris.get(&key) {
            tracing::debug!(uri, owner = %owner, prefix, "URI already indexed, keeping first prefix");
            return;
        }
        self.uris.insert(key, prefix.to_string());
    }

    /// Canonical URI bound to `prefix`.
    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(|entry| entry.uri.as_str())
    }

    /// Canonical prefix for a URI (canonical or alias).
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.uris.get(&normalize_uri(uri)).map(String::as_str)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    /// Full entry for `prefix`, including aliases.
    pub fn entry(&self, prefix: &str) -> Option<&NamespaceEntry> {
        self.entries.get(prefix)
    }

    /// `(prefix, canonical uri)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(prefix, entry)| (prefix.as_str(), entry.uri.as_str()))
    }

    /// `(prefix, entry)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &NamespaceEntry)> + '_ {
        self.entries
            .iter()
            .map(|(prefix, entry)| (prefix.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key used for URI comparisons: trimmed, ASCII lowercase.
pub fn normalize_uri(uri: &str) -> String {
    uri.trim().to_ascii_lowercase()
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(RegistryError::EmptyPrefix);
    }
    if prefix.contains(':') || prefix.chars().any(char::is_whitespace) {
        return Err(RegistryError::InvalidPrefix {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

fn validate_uri(prefix: &str, uri: &str) -> Result<String> {
    let trimmed = uri.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::EmptyUri {
            prefix: prefix.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Builds the standard registry from the static table.
///
/// # Panics
///
/// Panics if the table is malformed. The table is compiled in, so this is a
/// programming error caught by the test suite.
fn build_standard_registry() -> NamespaceRegistry {
    let mut registry = NamespaceRegistry::new();
    for namespace in STANDARD_NAMESPACES {
        registry
            .register(namespace.prefix, namespace.uri)
            .expect("standard namespace table must be well-formed");
        for alias in namespace.aliases {
            registry
                .add_alias(namespace.prefix, *alias)
                .expect("standard namespace aliases must be well-formed");
        }
    }
    tracing::debug!(namespaces = registry.len(), "built standard namespace registry");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let registry =
            NamespaceRegistry::from_entries([("dc", "http://purl.org/dc/elements/1.1/")]).unwrap();

        assert_eq!(registry.uri("dc"), Some("http://purl.org/dc/elements/1.1/"));
        assert_eq!(registry.prefix_for("http://purl.org/dc/elements/1.1/"), Some("dc"));
        assert_eq!(registry.prefix_for("  HTTP://PURL.ORG/DC/ELEMENTS/1.1/ "), Some("dc"));
        assert_eq!(registry.prefix_for("http://purl.org/dc/elements/1.1"), None);
        assert_eq!(registry.uri("atom"), None);
    }

    #[test]
    fn duplicate_prefix_with_same_uri_is_ignored() {
        let mut registry = NamespaceRegistry::new();
        registry.register("dc", "http://a/").unwrap();
        registry.register("dc", " http://a/ ").unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_prefix_with_different_uri_fails() {
        let mut registry = NamespaceRegistry::new();
        registry.register("dc", "http://a/").unwrap();
        let err = registry.register("dc", "http://b/").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicatePrefix { .. }));
        assert_eq!(
            err.to_string(),
            "Prefix 'dc' is already bound to 'http://a/', cannot rebind to 'http://b/'"
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        let mut registry = NamespaceRegistry::new();
        assert!(matches!(registry.register("", "http://a/"), Err(RegistryError::EmptyPrefix)));
        assert!(matches!(
            registry.register("a:b", "http://a/"),
            Err(RegistryError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            registry.register("a b", "http://a/"),
            Err(RegistryError::InvalidPrefix { .. })
        ));
        assert!(matches!(registry.register("a", "  "), Err(RegistryError::EmptyUri { .. })));
        assert!(matches!(
            registry.add_alias("missing", "http://a/"),
            Err(RegistryError::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn first_prefix_keeps_shared_uri() {
        let registry =
            NamespaceRegistry::from_entries([("first", "http://same/"), ("second", "http://same/")])
                .unwrap();
        assert_eq!(registry.prefix_for("http://same/"), Some("first"));
        assert_eq!(registry.uri("second"), Some("http://same/"));
    }

    #[test]
    fn aliases_feed_reverse_index_only() {
        let mut registry = NamespaceRegistry::new();
        registry.register("georss", "http://www.georss.org/georss").unwrap();
        registry.add_alias("georss", "http://www.georss.org/georss/").unwrap();

        assert_eq!(registry.prefix_for("http://www.georss.org/georss/"), Some("georss"));
        assert_eq!(registry.uri("georss"), Some("http://www.georss.org/georss"));
        assert_eq!(
            registry.entry("georss").map(|entry| entry.aliases.clone()),
            Some(vec!["http://www.georss.org/georss/".to_string()])
        );
    }

    #[test]
    fn json_document_preserves_order() {
        let registry = NamespaceRegistry::from_json_str(
            r#"{ "z": "http://z/", "a": ["http://a/", "http://a2/"], "m": "http://m/" }"#,
        )
        .unwrap();

        let prefixes: Vec<&str> = registry.iter().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes, vec!["z", "a", "m"]);
        assert_eq!(registry.prefix_for("http://a2/"), Some("a"));
    }

    #[test]
    fn json_document_errors() {
        assert!(matches!(
            NamespaceRegistry::from_json_str("not json"),
            Err(RegistryError::Json { .. })
        ));
        assert!(matches!(
            NamespaceRegistry::from_json_str(r#"{ "a": [] }"#),
            Err(RegistryError::EmptyUri { .. })
        ));
        assert!(matches!(
            NamespaceRegistry::from_json_str(r#"{ "a": 1 }"#),
            Err(RegistryError::Json { .. })
        ));
    }

    #[test]
    fn extend_standard_registry() {
        let mut registry = NamespaceRegistry::standard().clone();
        registry
            .extend_from_json_str(r#"{ "custom": "http://example.com/custom" }"#)
            .unwrap();
        assert_eq!(registry.prefix_for("http://example.com/custom"), Some("custom"));
        assert_eq!(registry.len(), NamespaceRegistry::standard().len() + 1);
    }
}
