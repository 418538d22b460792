//! Tree node type and reserved key conventions.

/// A node of a parsed document tree.
///
/// Objects keep insertion order (`serde_json` is built with `preserve_order`),
/// which keeps re-serialization deterministic.
pub type Node = serde_json::Value;

/// Ordered object map used by [`Node::Object`].
pub type Map = serde_json::Map<String, Node>;

/// Key holding the text content of an element.
pub const TEXT_KEY: &str = "#text";

/// Key holding CDATA content on the generation side.
pub const CDATA_KEY: &str = "#cdata";

/// Marker prefix distinguishing attributes from child elements.
pub const ATTRIBUTE_PREFIX: char = '@';

/// Namespace declaration attribute name (without the attribute marker).
pub const XMLNS: &str = "xmlns";

/// Shared null node, used where a borrowed "absent" element is needed.
pub static NULL: Node = Node::Null;

/// Split a key of the form `prefix:rest` at its first colon.
///
/// Returns `None` when the key has no colon or starts with one, because an
/// empty prefix is not a namespace prefix.
pub fn split_prefix(key: &str) -> Option<(&str, &str)> {
    match key.find(':') {
        Some(0) | None => None,
        Some(index) => Some((&key[..index], &key[index + 1..])),
    }
}

/// True for keys with a reserved meaning (`#text`, `#cdata`, ...).
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with('#')
}

/// Decimal string form of a number node.
///
/// Integral floats print without a fractional part (`1.0` becomes `"1"`),
/// so a value reads the same whether the parser produced an integer or a float.
pub fn number_to_string(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < 1e21 => format!("{value:.0}"),
        Some(value) => value.to_string(),
        None => number.to_string(),
    }
}
