//! Properties of namespace canonicalization over generated prefixes.

use feed_namespace::{NamespaceNormalizer, NamespaceRegistry};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

const DC: &str = "http://purl.org/dc/elements/1.1/";

fn tree(entries: &[(&str, Value)]) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map)
}

proptest! {
    #[test]
    fn declared_prefix_maps_to_canonical(prefix in "[a-m]{1,6}", local in "[a-z]{1,8}", text in ".*") {
        let registry = NamespaceRegistry::standard();
        let normalizer = NamespaceNormalizer::new(registry, None);

        let declaration = format!("@xmlns:{prefix}");
        let input = tree(&[
            (declaration.as_str(), json!(DC)),
            (format!("{prefix}:{local}").as_str(), json!(text)),
        ]);
        let expected = tree(&[
            (declaration.as_str(), json!(DC)),
            (format!("dc:{local}").as_str(), json!(text)),
        ]);

        prop_assert_eq!(normalizer.normalize(&input), expected);
    }

    #[test]
    fn undeclared_prefixes_are_untouched(prefix in "[a-m]{1,6}", local in "[a-z]{1,8}") {
        let registry = NamespaceRegistry::standard();
        let normalizer = NamespaceNormalizer::new(registry, None);

        let input = json!({ "item": { format!("{prefix}:{local}"): [1, 2, { "title": local.clone() }] } });
        prop_assert_eq!(normalizer.normalize(&input), input);
    }

    #[test]
    fn normalization_is_idempotent(prefix in "[a-m]{1,6}", local in "[a-z]{1,8}") {
        let registry = NamespaceRegistry::standard();
        let normalizer = NamespaceNormalizer::new(registry, None);

        let input = json!({
            "rss": {
                format!("@xmlns:{prefix}"): DC,
                "channel": { format!("{prefix}:{local}"): "value", "title": "T" },
            },
        });
        let once = normalizer.normalize(&input);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }
}
