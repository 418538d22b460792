//! Scoped namespace prefix canonicalization.
//!
//! Documents bind arbitrary prefixes to namespace URIs. The normalizer walks
//! a tree, tracks which declarations are visible at each node, and rewrites
//! every `prefix:local` key to the registry's canonical prefix for the URI
//! the prefix is bound to.
//!
//! # Scoping
//!
//! Declarations (`@xmlns` and `@xmlns:<prefix>` attributes) apply to the
//! declaring object and its descendants. Because an element's attributes sit
//! inside its value, the key naming that element is resolved with them too:
//! `{"x:creator": {"@xmlns:x": DC}}` becomes `dc:creator`. A nested
//! declaration shadows an outer one for its own subtree only; siblings never
//! see each other's declarations. Repeated elements share one key, so a key
//! holding an array is resolved against the enclosing scope. The active scope is an immutable map handed down the walk
//! and copied only when a node declares something.
//!
//! # Passthrough
//!
//! Keys are left untouched when their prefix is not declared, when it is
//! bound to a URI the registry does not know, or when it is bound to a
//! blank URI. Declarations are copied to the output verbatim.

use std::borrow::Cow;
use std::collections::HashMap;

use feed_model::{ATTRIBUTE_PREFIX, Map, Node, XMLNS, is_reserved_key, split_prefix};

use crate::options::NormalizeOptions;
use crate::registry::{NamespaceRegistry, normalize_uri};

/// Local prefix (as written in the document) to normalized URI.
///
/// The default namespace is stored under the empty prefix.
type Scope = HashMap<String, String>;

const DEFAULT_PREFIX: &str = "";

/// Counters collected during one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Keys whose name changed.
    pub rewritten: usize,
    /// Prefixed keys whose name did not change.
    pub passthrough: usize,
    /// Keys folded into an existing key after rewriting.
    pub merged: usize,
}

/// Rewrites namespaced keys to canonical prefixes.
///
/// Holds the registry by reference, so building one is cheap and a single
/// normalizer can be reused for any number of documents.
///
/// ```
/// use feed_namespace::{NamespaceNormalizer, NamespaceRegistry};
/// use serde_json::json;
///
/// let registry = NamespaceRegistry::standard();
/// let normalizer = NamespaceNormalizer::new(registry, None);
///
/// let tree = json!({
///     "rss": {
///         "@xmlns:dublin": "http://purl.org/dc/elements/1.1/",
///         "channel": { "dublin:creator": "Jane" },
///     },
/// });
///
/// assert_eq!(
///     normalizer.normalize(&tree),
///     json!({
///         "rss": {
///             "@xmlns:dublin": "http://purl.org/dc/elements/1.1/",
///             "channel": { "dc:creator": "Jane" },
///         },
///     })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NamespaceNormalizer<'r> {
    registry: &'r NamespaceRegistry,
    primary_uri: Option<String>,
    promote_default: bool,
}

impl<'r> NamespaceNormalizer<'r> {
    /// Create a normalizer; keys in `primary_uri` lose their prefix.
    pub fn new(registry: &'r NamespaceRegistry, primary_uri: Option<&str>) -> Self {
        Self {
            registry,
            primary_uri: primary_uri.map(normalize_uri),
            promote_default: false,
        }
    }

    pub fn with_options(registry: &'r NamespaceRegistry, options: &NormalizeOptions) -> Self {
        Self::new(registry, options.primary_uri.as_deref())
            .with_default_promotion(options.promote_default_namespace)
    }

    #[must_use]
    pub fn with_default_promotion(mut self, enable: bool) -> Self {
        self.promote_default = enable;
        self
    }

    pub fn registry(&self) -> &'r NamespaceRegistry {
        self.registry
    }

    /// Return a copy of `value` with canonical namespace prefixes.
    ///
    /// Scalars are returned unchanged. The input is never modified.
    pub fn normalize(&self, value: &Node) -> Node {
        self.normalize_with_report(value).0
    }

    /// Like [`normalize`](Self::normalize), also returning what was changed.
    pub fn normalize_with_report(&self, value: &Node) -> (Node, NormalizeReport) {
        let mut report = NormalizeReport::default();
        let normalized = self.normalize_node(value, &Scope::new(), &mut report);
        tracing::debug!(
            rewritten = report.rewritten,
            passthrough = report.passthrough,
            merged = report.merged,
            "normalized namespaces"
        );
        (normalized, report)
    }

    fn normalize_node(&self, value: &Node, scope: &Scope, report: &mut NormalizeReport) -> Node {
        match value {
            Node::Object(map) => self.normalize_object(map, scope, report),
            Node::Array(items) => Node::Array(
                items
                    .iter()
                    .map(|item| self.normalize_node(item, scope, report))
                    .collect(),
            ),
            _ => value.clone(),
        }
    }

    fn normalize_object(&self, map: &Map, parent: &Scope, report: &mut NormalizeReport) -> Node {
        let scope = extend_scope(map, parent);
        self.normalize_entries(map, &scope, report)
    }

    /// Rewrite the entries of an object whose declarations are in `scope`.
    fn normalize_entries(&self, map: &Map, scope: &Scope, report: &mut NormalizeReport) -> Node {
        let mut output = Map::new();

        for (key, value) in map {
            if is_declaration(key) {
                output.insert(key.clone(), value.clone());
                continue;
            }

            // An element's own declarations apply to its name.
            let element_scope = match value {
                Node::Object(element) => extend_scope(element, scope),
                _ => Cow::Borrowed(scope),
            };

            let new_key = match self.rewrite_key(key, &element_scope) {
                Some(rewritten) => {
                    report.rewritten += 1;
                    rewritten
                }
                None => key.clone(),
            };
            if new_key == *key && has_prefix(key) {
                report.passthrough += 1;
            }

            let new_value = match value {
                Node::Object(element) => self.normalize_entries(element, &element_scope, report),
                _ => self.normalize_node(value, scope, report),
            };
            match output.get_mut(&new_key) {
                Some(existing) => {
                    tracing::trace!(key = %new_key, "merging colliding keys");
                    report.merged += 1;
                    merge_values(existing, new_value);
                }
                None => {
                    output.insert(new_key, new_value);
                }
            }
        }

        Node::Object(output)
    }

    /// New name for `key`, or `None` when it stays as is.
    fn rewrite_key(&self, key: &str, scope: &Scope) -> Option<String> {
        let (marker, name) = match key.strip_prefix(ATTRIBUTE_PREFIX) {
            Some(name) => (Some(ATTRIBUTE_PREFIX), name),
            None => (None, key),
        };

        let canonical = match split_prefix(name) {
            Some((prefix, local)) => self.canonical_name(prefix, local, scope)?,
            None if marker.is_none() => self.promoted_name(name, scope)?,
            None => return None,
        };

        if canonical == name {
            return None;
        }
        Some(match marker {
            Some(marker) => format!("{marker}{canonical}"),
            None => canonical,
        })
    }

    fn canonical_name(&self, prefix: &str, local: &str, scope: &Scope) -> Option<String> {
        if local.is_empty() {
            return None;
        }
        let Some(uri) = scope.get(prefix) else {
            tracing::trace!(prefix, "undeclared prefix, key left unchanged");
            return None;
        };

        if self.is_primary(uri) {
            return Some(local.to_string());
        }
        match self.registry.prefix_for(uri) {
            Some(canonical) => Some(format!("{canonical}:{local}")),
            None => {
                tracing::trace!(prefix, uri = %uri, "unknown namespace, key left unchanged");
                None
            }
        }
    }

    /// Prefix an unprefixed element in a registered default namespace.
    fn promoted_name(&self, name: &str, scope: &Scope) -> Option<String> {
        if !self.promote_default || is_reserved_key(name) {
            return None;
        }
        let uri = scope.get(DEFAULT_PREFIX)?;
        if self.is_primary(uri) {
            return None;
        }
        let canonical = self.registry.prefix_for(uri)?;
        Some(format!("{canonical}:{name}"))
    }

    fn is_primary(&self, uri: &str) -> bool {
        self.primary_uri.as_deref() == Some(uri)
    }
}

/// Overlay the declarations of `map` on the inherited scope.
fn extend_scope<'s>(map: &Map, parent: &'s Scope) -> Cow<'s, Scope> {
    let mut scope = Cow::Borrowed(parent);

    for (key, value) in map {
        let Some(prefix) = declared_prefix(key) else {
            continue;
        };
        let Some(uri) = value.as_str() else {
            tracing::trace!(key = %key, "non-string namespace declaration ignored");
            continue;
        };
        if uri.trim().is_empty() {
            tracing::trace!(key = %key, "blank namespace declaration ignored");
            continue;
        }
        scope.to_mut().insert(prefix.to_string(), normalize_uri(uri));
    }

    scope
}

/// Local prefix declared by a key: `""` for `@xmlns`, `p` for `@xmlns:p`.
///
/// The `xmlns` token is matched case-insensitively.
fn declared_prefix(key: &str) -> Option<&str> {
    let name = key.strip_prefix(ATTRIBUTE_PREFIX)?;
    let token = name.get(..XMLNS.len())?;
    if !token.eq_ignore_ascii_case(XMLNS) {
        return None;
    }
    match &name[XMLNS.len()..] {
        "" => Some(DEFAULT_PREFIX),
        rest => rest.strip_prefix(':').filter(|prefix| !prefix.is_empty()),
    }
}

fn is_declaration(key: &str) -> bool {
    declared_prefix(key).is_some()
}

fn has_prefix(key: &str) -> bool {
    split_prefix(key.strip_prefix(ATTRIBUTE_PREFIX).unwrap_or(key)).is_some()
}

/// Fold `incoming` into `existing` as a list in encounter order.
fn merge_values(existing: &mut Node, incoming: Node) {
    if !existing.is_array() {
        let first = existing.take();
        *existing = Node::Array(vec![first]);
    }
    if let Node::Array(items) = existing {
        match incoming {
            Node::Array(more) => items.extend(more),
            other => items.push(other),
        }
    }
}
