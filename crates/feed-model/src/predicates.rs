//! Structural predicates over raw tree nodes.

use crate::node::{Map, Node, TEXT_KEY};

/// True if the node is an object (arrays are not objects).
pub fn is_object(value: &Node) -> bool {
    matches!(value, Node::Object(_))
}

/// True if a value exists and is not null.
pub fn is_present(value: Option<&Node>) -> bool {
    !matches!(value, None | Some(Node::Null))
}

/// True for a string with at least one character.
pub fn is_non_empty_string(value: &Node) -> bool {
    matches!(value, Node::String(text) if !text.is_empty())
}

/// True for a non-empty string or any number.
pub fn is_non_empty_string_or_number(value: &Node) -> bool {
    match value {
        Node::String(text) => !text.is_empty(),
        Node::Number(_) => true,
        _ => false,
    }
}

/// True if at least one of `props` exists in the object.
///
/// A property explicitly set to null still counts as existing.
pub fn has_any_props(value: &Map, props: &[&str]) -> bool {
    props.iter().any(|prop| value.contains_key(*prop))
}

/// True if every one of `props` exists in the object.
///
/// A property explicitly set to null still counts as existing.
pub fn has_all_props(value: &Map, props: &[&str]) -> bool {
    props.iter().all(|prop| value.contains_key(*prop))
}

/// Unwrap `{ "#text": value, ...attributes }` to its text payload.
///
/// Any other node, including an object whose text key is missing or null,
/// is returned unchanged.
pub fn retrieve_text(value: &Node) -> &Node {
    match value {
        Node::Object(map) => match map.get(TEXT_KEY) {
            Some(Node::Null) | None => value,
            Some(text) => text,
        },
        _ => value,
    }
}
