//! Shape normalization.
//!
//! Tree producers emit a repeated element as an array but a single occurrence
//! as a bare node. These helpers reconcile the two shapes and prune nullish
//! entries so that "absent" and "empty" read the same to callers.

use feed_model::{Map, NULL, Node};

/// Largest `length` accepted from an array-like object.
const MAX_ARRAY_LIKE_LENGTH: usize = 1 << 16;

/// View a node as a sequence.
///
/// Arrays pass through. Objects are treated as array-like when either
///
/// - they carry a non-zero numeric `length`: the result has that many slots,
///   filled from the object's index keys, with missing indices as null; or
/// - their keys are exactly the integers `0..n` in any order: the result
///   holds the values in index order.
///
/// A `length` is truncated toward zero; negative lengths give an empty
/// sequence. Lengths above 65 536 (`MAX_ARRAY_LIKE_LENGTH`) yield `None`
/// rather than allocating that many null slots.
///
/// Anything else yields `None`.
pub fn parse_array(value: &Node) -> Option<Vec<&Node>> {
    match value {
        Node::Array(items) => Some(items.iter().collect()),
        Node::Object(map) => match array_like_length(map) {
            Some(length) => from_length(map, length),
            None => from_index_keys(map),
        },
        _ => None,
    }
}

fn array_like_length(map: &Map) -> Option<f64> {
    map.get("length")
        .and_then(Node::as_f64)
        .filter(|length| *length != 0.0 && !length.is_nan())
}

fn from_length(map: &Map, length: f64) -> Option<Vec<&Node>> {
    let length = length.trunc().max(0.0);
    if length > MAX_ARRAY_LIKE_LENGTH as f64 {
        return None;
    }

    let slots = (0..length as usize)
        .map(|index| map.get(&index.to_string()).unwrap_or(&NULL))
        .collect();
    Some(slots)
}

fn from_index_keys(map: &Map) -> Option<Vec<&Node>> {
    if map.is_empty() {
        return None;
    }

    let mut slots: Vec<Option<&Node>> = vec![None; map.len()];
    for (key, item) in map {
        let index = parse_index(key)?;
        let slot = slots.get_mut(index)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(item);
    }

    slots.into_iter().collect()
}

/// Canonical decimal index: digits only, no sign, no leading zeros.
fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

/// Parse every element of a sequence, or a lone node as a one-element list.
///
/// Elements that fail to parse are dropped. A lone node that fails to parse
/// yields `None`.
pub fn parse_array_of<T, F>(value: &Node, parse: F) -> Option<Vec<T>>
where
    F: Fn(&Node) -> Option<T>,
{
    match parse_array(value) {
        Some(items) => Some(items.into_iter().filter_map(parse).collect()),
        None => parse(value).map(|parsed| vec![parsed]),
    }
}

/// First element of an array, or the node itself.
pub fn parse_singular(value: &Node) -> Option<&Node> {
    match value {
        Node::Array(items) => items.first(),
        _ => Some(value),
    }
}

/// [`parse_singular`] followed by `parse`.
pub fn parse_singular_of<T, F>(value: &Node, parse: F) -> Option<T>
where
    F: Fn(&Node) -> Option<T>,
{
    parse_singular(value).and_then(parse)
}

/// Split a comma-separated string and parse each trimmed segment.
///
/// Segments are handed to `parse` as string nodes so that the regular
/// coercion primitives apply. Returns `None` for non-string input or when no
/// segment survives.
pub fn parse_csv_of<T, F>(value: &Node, parse: F) -> Option<Vec<T>>
where
    F: Fn(&Node) -> Option<T>,
{
    let text = value.as_str()?;
    let parsed: Vec<T> = text
        .split(',')
        .map(|segment| Node::String(segment.trim().to_string()))
        .filter_map(|segment| parse(&segment))
        .collect();

    (!parsed.is_empty()).then_some(parsed)
}

/// Join generated values with commas.
///
/// Values whose generated form is missing or blank are skipped. Returns
/// `None` when nothing is left to join.
pub fn generate_csv_of<T, F>(values: &[T], generate: F) -> Option<String>
where
    F: Fn(&T) -> Option<String>,
{
    let segments: Vec<String> = values
        .iter()
        .filter_map(generate)
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect();

    (!segments.is_empty()).then(|| segments.join(","))
}

/// [`generate_csv_of`] over plain strings.
pub fn generate_csv<S: AsRef<str>>(values: &[S]) -> Option<String> {
    generate_csv_of(values, |value| Some(value.as_ref().to_string()))
}

/// Remove null elements; an array left empty becomes `None`.
pub fn trim_array(values: Vec<Node>) -> Option<Vec<Node>> {
    trim_array_of(values, |value| (!value.is_null()).then_some(value))
}

/// Map elements through `parse`, dropping failures; an empty result becomes
/// `None`.
pub fn trim_array_of<T, R, I, F>(values: I, parse: F) -> Option<Vec<R>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Option<R>,
{
    let trimmed: Vec<R> = values.into_iter().filter_map(parse).collect();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Remove null properties; an object left empty becomes `None`.
///
/// Falsy values (`0`, `false`, `""`) are kept.
pub fn trim_object(mut object: Map) -> Option<Map> {
    object.retain(|_, value| !value.is_null());
    (!object.is_empty()).then_some(object)
}
