//! Scalar coercion primitives.
//!
//! Each primitive accepts any node and returns `None` when the node does not
//! represent a value of the requested type.

use feed_model::{Node, number_to_string, retrieve_text};

use crate::text::{decode_entities, strip_cdata};

/// Coerce a node to a trimmed, entity-decoded string.
///
/// - Numbers convert to their decimal form.
/// - Strings are entity-decoded; text fully wrapped in CDATA markers has the
///   markers stripped. The result is trimmed.
/// - Empty results and every other node type yield `None`.
pub fn parse_string(value: &Node) -> Option<String> {
    match value {
        Node::Number(number) => Some(number_to_string(number)),
        Node::String(text) => normalize_text(text),
        _ => None,
    }
}

fn normalize_text(raw: &str) -> Option<String> {
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();

    let text = if is_cdata_wrapped(trimmed) {
        strip_cdata(trimmed).trim().to_string()
    } else {
        trimmed.to_string()
    };

    (!text.is_empty()).then_some(text)
}

fn is_cdata_wrapped(text: &str) -> bool {
    text.starts_with("<![CDATA[") && text.ends_with("]]>")
}

/// Coerce a node to a number.
///
/// Numbers pass through. Strings are trimmed and parsed as decimal numbers;
/// empty strings, unparseable text and non-finite results (`NaN`, `inf`)
/// yield `None`.
pub fn parse_number(value: &Node) -> Option<f64> {
    match value {
        Node::Number(number) => number.as_f64(),
        Node::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Coerce a node to a boolean.
///
/// Booleans pass through; strings match `true`/`false` case-insensitively
/// after trimming.
pub fn parse_boolean(value: &Node) -> Option<bool> {
    match value {
        Node::Bool(flag) => Some(*flag),
        Node::String(text) => {
            let trimmed = text.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Some(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Coerce a yes/no flag (iTunes-style `explicit`, `block`, ...).
///
/// `yes` and `true` are true; any other non-empty string is false. Empty
/// strings and non-string, non-boolean nodes yield `None`.
pub fn parse_yes_no_boolean(value: &Node) -> Option<bool> {
    match value {
        Node::Bool(flag) => Some(*flag),
        Node::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(trimmed.eq_ignore_ascii_case("yes") || trimmed.eq_ignore_ascii_case("true"))
        }
        _ => None,
    }
}

/// Normalize a date string without validating it.
///
/// Runs the same decode/CDATA/trim pipeline as [`parse_string`]; calendar
/// validity is left to the caller.
pub fn parse_date(value: &Node) -> Option<String> {
    parse_string(value)
}

/// [`parse_string`] applied to the text payload of an element.
pub fn parse_text_string(value: &Node) -> Option<String> {
    parse_string(retrieve_text(value))
}

/// [`parse_number`] applied to the text payload of an element.
pub fn parse_text_number(value: &Node) -> Option<f64> {
    parse_number(retrieve_text(value))
}

/// [`parse_boolean`] applied to the text payload of an element.
pub fn parse_text_boolean(value: &Node) -> Option<bool> {
    parse_boolean(retrieve_text(value))
}

/// [`parse_yes_no_boolean`] applied to the text payload of an element.
pub fn parse_text_yes_no_boolean(value: &Node) -> Option<bool> {
    parse_yes_no_boolean(retrieve_text(value))
}

/// [`parse_date`] applied to the text payload of an element.
pub fn parse_text_date(value: &Node) -> Option<String> {
    parse_date(retrieve_text(value))
}
