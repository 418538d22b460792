//! End-to-end namespace canonicalization over realistic feed trees.

use feed_namespace::{
    NamespaceNormalizer, NamespaceRegistry, NormalizeOptions, detect_namespaces,
    generate_namespace_attrs,
};
use serde_json::json;

const URI_DC: &str = "http://purl.org/dc/elements/1.1/";
const URI_A: &str = "http://example.com/a";
const ATOM: &str = "http://www.w3.org/2005/Atom";

#[test]
fn sibling_declarations_do_not_leak() {
    let registry = NamespaceRegistry::from_entries([("dc", URI_DC)]).unwrap();
    let normalizer = NamespaceNormalizer::new(&registry, None);

    let input = json!({
        "v1:el": "outer",
        "child": { "v1:el": "inner", "@xmlns:v1": URI_DC },
        "sibling": { "v1:el": "sibling" },
        "@xmlns:v1": URI_A,
    });

    let output = normalizer.normalize(&input);

    assert_eq!(output["v1:el"], json!("outer"));
    assert_eq!(output["child"]["dc:el"], json!("inner"));
    assert_eq!(output["sibling"]["v1:el"], json!("sibling"));
    assert_eq!(output["@xmlns:v1"], json!(URI_A));
    assert_eq!(output["child"]["@xmlns:v1"], json!(URI_DC));
}

#[test]
fn sibling_order_does_not_matter() {
    let registry = NamespaceRegistry::standard();
    let normalizer = NamespaceNormalizer::new(registry, None);

    let first = json!({ "@xmlns:m": "http://search.yahoo.com/mrss/", "m:title": "A" });
    let second = json!({ "@xmlns:m": "http://purl.org/dc/elements/1.1/", "m:title": "B" });

    let forward = normalizer.normalize(&json!({ "item": [first.clone(), second.clone()] }));
    let backward = normalizer.normalize(&json!({ "item": [second, first] }));

    assert_eq!(forward["item"][0], backward["item"][1]);
    assert_eq!(forward["item"][1], backward["item"][0]);
    assert_eq!(forward["item"][0]["media:title"], json!("A"));
    assert_eq!(forward["item"][1]["dc:title"], json!("B"));
}

#[test]
fn unknown_namespace_passes_through_with_declaration() {
    let registry = NamespaceRegistry::standard();
    let normalizer = NamespaceNormalizer::new(registry, None);
    let input = json!({
        "rss": {
            "@xmlns:foo": "http://example.com/foo",
            "channel": { "foo:bar": "baz" },
        },
    });

    assert_eq!(normalizer.normalize(&input), input);
}

#[test]
fn atom_document_with_primary_namespace() {
    let registry = NamespaceRegistry::standard();
    let options = NormalizeOptions::new().with_primary_uri(ATOM);
    let normalizer = NamespaceNormalizer::with_options(registry, &options);

    let input = json!({
        "feed": {
            "@xmlns": ATOM,
            "@xmlns:media": "http://search.yahoo.com/mrss/",
            "title": "Example",
            "entry": {
                "title": "Entry",
                "media:thumbnail": { "@url": "https://example.com/a.png" },
            },
        },
    });

    assert_eq!(normalizer.normalize(&input), input);
}

#[test]
fn root_element_declaring_its_own_prefix() {
    let registry = NamespaceRegistry::standard();
    let options = NormalizeOptions::new().with_primary_uri(ATOM);
    let normalizer = NamespaceNormalizer::with_options(registry, &options);

    let input = json!({
        "a:feed": {
            "@xmlns:a": ATOM,
            "a:title": "T",
            "a:author": { "a:name": "Jane", "x:creator": { "@xmlns:x": URI_DC, "#text": "J" } },
        },
    });

    assert_eq!(
        normalizer.normalize(&input),
        json!({
            "feed": {
                "@xmlns:a": ATOM,
                "title": "T",
                "author": { "name": "Jane", "dc:creator": { "@xmlns:x": URI_DC, "#text": "J" } },
            },
        })
    );
}

#[test]
fn prefixed_atom_inside_rss_is_canonicalized() {
    let registry = NamespaceRegistry::standard();
    let normalizer = NamespaceNormalizer::new(registry, None);

    let input = json!({
        "rss": {
            "@version": "2.0",
            "@xmlns:a10": "http://www.w3.org/2005/Atom",
            "@xmlns:itunesu": "http://www.itunes.com/dtds/podcast-1.0.dtd",
            "channel": {
                "title": "Podcast",
                "a10:link": { "@href": "https://example.com/feed.xml", "@rel": "self" },
                "itunesu:explicit": "no",
                "item": [
                    { "title": "One", "itunesu:duration": "10:00" },
                    { "title": "Two", "itunesu:duration": "12:00" },
                ],
            },
        },
    });

    insta::assert_json_snapshot!(normalizer.normalize(&input), @r#"
    {
      "rss": {
        "@version": "2.0",
        "@xmlns:a10": "http://www.w3.org/2005/Atom",
        "@xmlns:itunesu": "http://www.itunes.com/dtds/podcast-1.0.dtd",
        "channel": {
          "title": "Podcast",
          "atom:link": {
            "@href": "https://example.com/feed.xml",
            "@rel": "self"
          },
          "itunes:explicit": "no",
          "item": [
            {
              "title": "One",
              "itunes:duration": "10:00"
            },
            {
              "title": "Two",
              "itunes:duration": "12:00"
            }
          ]
        }
      }
    }
    "#);
}

#[test]
fn normalization_leaves_input_untouched() {
    let registry = NamespaceRegistry::standard();
    let normalizer = NamespaceNormalizer::new(registry, None);
    let input = json!({ "@xmlns:d": URI_DC, "d:creator": "A" });
    let snapshot = input.clone();

    let _ = normalizer.normalize(&input);
    assert_eq!(input, snapshot);
}

#[test]
fn normalized_tree_yields_canonical_declarations() {
    let registry = NamespaceRegistry::standard();
    let normalizer = NamespaceNormalizer::new(registry, None);
    let input = json!({
        "rss": {
            "@xmlns:d": URI_DC,
            "@xmlns:m": "http://search.yahoo.com/mrss/",
            "channel": { "d:creator": "A", "m:content": { "@url": "x" } },
        },
    });

    let normalized = normalizer.normalize(&input);
    let detected: Vec<String> = detect_namespaces(&normalized, true).into_iter().collect();
    assert_eq!(detected, vec!["xmlns", "dc", "media"]);

    let attrs = generate_namespace_attrs(&normalized, registry).unwrap();
    assert_eq!(
        serde_json::Value::Object(attrs),
        json!({
            "@xmlns:dc": URI_DC,
            "@xmlns:media": "http://search.yahoo.com/mrss/",
        })
    );
}

#[test]
fn normalizer_is_shareable_across_threads() {
    let registry = NamespaceRegistry::standard();
    let normalizer = NamespaceNormalizer::new(registry, None);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|index| {
                let normalizer = &normalizer;
                scope.spawn(move || {
                    let input = json!({ "@xmlns:x": URI_DC, "x:identifier": index });
                    normalizer.normalize(&input)
                })
            })
            .collect();

        for (index, handle) in handles.into_iter().enumerate() {
            let output = handle.join().unwrap();
            assert_eq!(output["dc:identifier"], json!(index));
        }
    });
}
