//! Generation-side inverses of the coercion primitives.

use feed_model::{CDATA_KEY, Map, Node, TEXT_KEY};
use serde_json::Number;

/// Characters that force text into a CDATA section.
const MARKUP_CHARS: [char; 3] = ['<', '>', '&'];

pub fn generate_boolean(value: Option<bool>) -> Option<Node> {
    value.map(Node::Bool)
}

/// Render a flag as `yes`/`no`.
pub fn generate_yes_no_boolean(value: Option<bool>) -> Option<String> {
    value.map(|flag| if flag { "yes" } else { "no" }.to_string())
}

/// Number node for a finite value; `NaN` and infinities yield `None`.
pub fn generate_number(value: Option<f64>) -> Option<Node> {
    value.and_then(Number::from_f64).map(Node::Number)
}

/// Trimmed text, or `None` when nothing is left.
pub fn generate_plain_string(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Text node that is wrapped as CDATA when it contains markup characters.
///
/// Plain text stays a bare string; text with `<`, `>` or `&` becomes
/// `{ "#cdata": text }` so the builder emits it unescaped.
pub fn generate_cdata_string(value: Option<&str>) -> Option<Node> {
    let text = generate_plain_string(value)?;
    if needs_cdata(&text) {
        Some(single_key(CDATA_KEY, text))
    } else {
        Some(Node::String(text))
    }
}

/// Like [`generate_cdata_string`], but plain text becomes `{ "#text": text }`.
///
/// Used for elements that also carry attributes, where the text has to live
/// next to `@` keys in the same object.
pub fn generate_text_or_cdata_string(value: Option<&str>) -> Option<Node> {
    let text = generate_plain_string(value)?;
    let key = if needs_cdata(&text) { CDATA_KEY } else { TEXT_KEY };
    Some(single_key(key, text))
}

fn needs_cdata(text: &str) -> bool {
    text.contains(MARKUP_CHARS)
}

fn single_key(key: &str, text: String) -> Node {
    let mut map = Map::new();
    map.insert(key.to_string(), Node::String(text));
    Node::Object(map)
}
