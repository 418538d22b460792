//! Command implementations. Each returns the text to print on stdout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use feed_model::{ATTRIBUTE_PREFIX, Map, Node, TEXT_KEY, XMLNS};
use feed_namespace::{
    NamespaceNormalizer, NamespaceRegistry, NormalizeOptions, detect_namespaces,
    generate_namespace_attrs,
};
use feed_xml::{TreeBuilder, XmlOptions, generate_xml_with};
use tracing::{debug, info, warn};

use crate::cli::{NamespacesArgs, NormalizeArgs, RegistryArgs, RenderArgs};

/// Standard registry, extended with the bindings of `--registry` when given.
pub fn load_registry(args: &RegistryArgs) -> Result<NamespaceRegistry> {
    let mut registry = NamespaceRegistry::standard().clone();
    if let Some(path) = &args.registry {
        let document = fs::read_to_string(path)
            .with_context(|| format!("read registry {}", path.display()))?;
        registry
            .extend_from_json_str(&document)
            .with_context(|| format!("load registry {}", path.display()))?;
        debug!(path = %path.display(), entries = registry.len(), "extended namespace registry");
    }
    Ok(registry)
}

pub fn read_tree(path: &Path) -> Result<Node> {
    let document =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&document).with_context(|| format!("parse {} as JSON", path.display()))
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<String> {
    let registry = load_registry(&args.registry)?;
    let tree = read_tree(&args.input)?;

    let mut options = NormalizeOptions::new().with_default_promotion(args.promote_default);
    if let Some(uri) = &args.primary_uri {
        options = options.with_primary_uri(uri.as_str());
    }
    let normalizer = NamespaceNormalizer::with_options(&registry, &options);
    let (normalized, report) = normalizer.normalize_with_report(&tree);
    info!(
        rewritten = report.rewritten,
        passthrough = report.passthrough,
        merged = report.merged,
        "normalized {}",
        args.input.display()
    );

    let output = if args.compact {
        serde_json::to_string(&normalized)
    } else {
        serde_json::to_string_pretty(&normalized)
    };
    output.context("serialize normalized tree")
}

pub fn run_namespaces(args: &NamespacesArgs) -> Result<String> {
    let registry = load_registry(&args.registry)?;
    let tree = read_tree(&args.input)?;
    Ok(namespace_table(&tree, &registry, !args.shallow).to_string())
}

pub fn run_render(args: &RenderArgs) -> Result<String> {
    let registry = load_registry(&args.registry)?;
    let mut tree = read_tree(&args.input)?;
    if args.declare_namespaces {
        declare_namespaces(&mut tree, &registry);
    }

    let options = XmlOptions {
        stylesheets: args.stylesheets.clone(),
    };
    let builder = TreeBuilder::new(args.indent);
    generate_xml_with(&builder, &tree, &options)
        .with_context(|| format!("render {}", args.input.display()))
}

pub fn run_registry(args: &RegistryArgs) -> Result<String> {
    let registry = load_registry(args)?;
    Ok(registry_table(&registry).to_string())
}

/// Prefixes used by `tree`, with the URI each is registered under.
pub fn namespace_table(tree: &Node, registry: &NamespaceRegistry, recursive: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Prefix", "URI", "Status"]);
    apply_table_style(&mut table);
    for prefix in detect_namespaces(tree, recursive) {
        let (uri, status) = if prefix == XMLNS {
            (String::new(), "declaration")
        } else if let Some(uri) = registry.uri(&prefix) {
            (uri.to_string(), "known")
        } else {
            (String::new(), "unknown")
        };
        table.add_row(vec![prefix, uri, status.to_string()]);
    }
    table
}

pub fn registry_table(registry: &NamespaceRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Prefix", "URI", "Aliases"]);
    apply_table_style(&mut table);
    for (prefix, entry) in registry.entries() {
        table.add_row(vec![
            prefix.to_string(),
            entry.uri.clone(),
            entry.aliases.join("\n"),
        ]);
    }
    table
}

/// Add `@xmlns:*` declarations for every known prefix to the root element.
///
/// Declarations already present on the root element are left as they are.
pub fn declare_namespaces(tree: &mut Node, registry: &NamespaceRegistry) {
    let Some(attrs) = generate_namespace_attrs(tree, registry) else {
        return;
    };
    let Some(root) = root_element(tree) else {
        warn!("document has no element root; namespace declarations skipped");
        return;
    };
    for (key, uri) in attrs {
        root.entry(key).or_insert(uri);
    }
}

fn root_element(tree: &mut Node) -> Option<&mut Map> {
    let Node::Object(document) = tree else {
        return None;
    };
    let (_, root) = document
        .iter_mut()
        .find(|(key, _)| !key.starts_with(ATTRIBUTE_PREFIX) && !key.starts_with('#'))?;
    if let Node::String(text) = root {
        let mut element = Map::new();
        element.insert(TEXT_KEY.to_string(), Node::String(std::mem::take(text)));
        *root = Node::Object(element);
    } else if root.is_null() {
        *root = Node::Object(Map::new());
    }
    root.as_object_mut()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
