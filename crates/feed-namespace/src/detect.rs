//! Namespace prefix detection and declaration synthesis.

use std::collections::HashSet;

use feed_model::{ATTRIBUTE_PREFIX, Map, Node, XMLNS, split_prefix};
use indexmap::IndexSet;

use crate::registry::NamespaceRegistry;

/// Collect the namespace prefixes used by the keys of a node.
///
/// A key `prefix:rest` contributes `prefix`; attribute keys are inspected
/// without their `@` marker. With `recursive` set, every nested object and
/// array is scanned too, each object at most once.
///
/// Prefixes are returned in first-seen order.
pub fn detect_namespaces(value: &Node, recursive: bool) -> IndexSet<String> {
    let mut prefixes = IndexSet::new();

    if !recursive {
        if let Node::Object(map) = value {
            collect_prefixes(map, &mut prefixes);
        }
        return prefixes;
    }

    let mut seen: HashSet<*const Map> = HashSet::new();
    let mut pending = vec![value];

    while let Some(node) = pending.pop() {
        match node {
            Node::Object(map) => {
                if !seen.insert(std::ptr::from_ref(map)) {
                    continue;
                }
                collect_prefixes(map, &mut prefixes);
                // Reversed so children are scanned in document order.
                pending.extend(map.values().rev());
            }
            Node::Array(items) => pending.extend(items.iter().rev()),
            _ => {}
        }
    }

    prefixes
}

fn collect_prefixes(map: &Map, prefixes: &mut IndexSet<String>) {
    for key in map.keys() {
        let name = key.strip_prefix(ATTRIBUTE_PREFIX).unwrap_or(key);
        if let Some((prefix, _)) = split_prefix(name)
            && !prefixes.contains(prefix)
        {
            prefixes.insert(prefix.to_string());
        }
    }
}

/// Namespace declarations for every registered prefix used in a tree.
///
/// Returns `@xmlns:<prefix>` attributes with canonical URIs, in registry
/// order, or `None` when the tree uses no registered namespace.
pub fn generate_namespace_attrs(value: &Node, registry: &NamespaceRegistry) -> Option<Map> {
    let detected = detect_namespaces(value, true);

    let attrs: Map = registry
        .iter()
        .filter(|(prefix, _)| detected.contains(*prefix))
        .map(|(prefix, uri)| {
            (
                format!("{ATTRIBUTE_PREFIX}{XMLNS}:{prefix}"),
                Node::String(uri.to_string()),
            )
        })
        .collect();

    tracing::trace!(
        detected = detected.len(),
        declared = attrs.len(),
        "generated namespace attributes"
    );

    (!attrs.is_empty()).then_some(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sorted(set: IndexSet<String>) -> Vec<String> {
        let mut prefixes: Vec<String> = set.into_iter().collect();
        prefixes.sort();
        prefixes
    }

    #[test]
    fn detects_immediate_prefixes() {
        let value = json!({ "atom:link": 1, "dc:creator": 2, "title": 3 });
        assert_eq!(sorted(detect_namespaces(&value, false)), vec!["atom", "dc"]);
    }

    #[test]
    fn recursive_mode_descends() {
        let value = json!({ "top:a": 1, "nested": { "inner:b": 2 } });
        assert_eq!(sorted(detect_namespaces(&value, true)), vec!["inner", "top"]);
        assert_eq!(sorted(detect_namespaces(&value, false)), vec!["top"]);
    }

    #[test]
    fn recursive_mode_scans_arrays_and_attributes() {
        let value = json!({
            "item": [
                { "media:content": { "@media:medium": "image" } },
                { "enclosure": { "@itunes:duration": "10" } },
            ],
            "leading": { ":colon": 1, "plain": 2 },
        });
        assert_eq!(
            detect_namespaces(&value, true).into_iter().collect::<Vec<_>>(),
            vec!["media", "itunes"]
        );
    }

    #[test]
    fn non_objects_have_no_prefixes() {
        assert!(detect_namespaces(&json!("dc:creator"), true).is_empty());
        assert!(detect_namespaces(&json!(null), false).is_empty());
        assert!(detect_namespaces(&json!([{ "dc:a": 1 }]), false).is_empty());
        assert_eq!(sorted(detect_namespaces(&json!([{ "dc:a": 1 }]), true)), vec!["dc"]);
    }

    #[test]
    fn generates_known_declarations_in_registry_order() {
        let registry = NamespaceRegistry::from_entries([
            ("atom", "http://www.w3.org/2005/Atom"),
            ("dc", "http://purl.org/dc/elements/1.1/"),
            ("media", "http://search.yahoo.com/mrss/"),
        ])
        .unwrap();
        let value = json!({
            "rss": {
                "channel": {
                    "dc:creator": "x",
                    "unknown:thing": "y",
                    "atom:link": { "@href": "https://example.com/feed" },
                },
            },
        });

        let attrs = generate_namespace_attrs(&value, &registry).unwrap();
        assert_eq!(
            Node::Object(attrs),
            json!({
                "@xmlns:atom": "http://www.w3.org/2005/Atom",
                "@xmlns:dc": "http://purl.org/dc/elements/1.1/",
            })
        );
    }

    #[test]
    fn no_known_namespace_yields_none() {
        let registry = NamespaceRegistry::standard();
        assert_eq!(generate_namespace_attrs(&json!({ "title": "x" }), registry), None);
        assert_eq!(generate_namespace_attrs(&json!({ "foo:bar": 1 }), registry), None);
    }

    #[test]
    fn generation_is_stable() {
        let value = json!({ "media:a": 1, "dc:b": { "itunes:c": 2 } });
        let registry = NamespaceRegistry::standard();
        let first = generate_namespace_attrs(&value, registry);
        let second = generate_namespace_attrs(&value, registry);
        assert_eq!(first, second);
        let keys: Vec<String> = first.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["@xmlns:dc", "@xmlns:media", "@xmlns:itunes"]);
    }
}
