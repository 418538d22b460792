//! CDATA stripping and entity decoding.
//!
//! Both helpers return `Cow::Borrowed` when the input needs no work, so the
//! common case of plain text does not allocate.

use std::borrow::Cow;

use quick_xml::escape::resolve_html5_entity;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Longest reference body considered (`&CounterClockwiseContourIntegral;`).
const MAX_REFERENCE_LEN: usize = 32;

/// Replace every CDATA section with its inner content.
///
/// Each section runs from an open marker to the nearest following close
/// marker. Matching is non-greedy and non-recursive: for nested or malformed
/// markers the leftmost-shortest match wins. An open marker with no close
/// marker after it is left as is.
pub fn strip_cdata(text: &str) -> Cow<'_, str> {
    if !text.contains(CDATA_OPEN) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(CDATA_OPEN) {
        let content_start = open + CDATA_OPEN.len();
        let Some(close) = rest[content_start..].find(CDATA_CLOSE) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&rest[content_start..content_start + close]);
        rest = &rest[content_start + close + CDATA_CLOSE.len()..];
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// True if the text has an ampersand followed somewhere later by a semicolon.
///
/// A structural heuristic that decides whether decoding is worth attempting;
/// it does not validate references.
pub fn has_entities(text: &str) -> bool {
    text.find('&')
        .is_some_and(|index| text[index + 1..].contains(';'))
}

/// Decode HTML character references the way an HTML5 parser reads text.
///
/// Handles named HTML5 entities and decimal/hexadecimal numeric references.
/// Legacy named entities (`&amp`, `&copy`, `&eacute`, ...) and numeric
/// references are also decoded without their semicolon, and numeric
/// references in `0x80..=0x9F` map through Windows-1252. Unknown or
/// malformed references are kept verbatim.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        match decode_reference(tail) {
            Some((replacement, consumed)) => {
                replacement.push_to(&mut out);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Named entities HTML5 also recognizes without a trailing semicolon.
const LEGACY_ENTITIES: [&str; 106] = [
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Longest name in [`LEGACY_ENTITIES`].
const MAX_LEGACY_LEN: usize = 6;

/// Windows-1252 characters for numeric references `0x80..=0x9F`.
///
/// Code points Windows-1252 leaves undefined map to themselves.
const WINDOWS_1252_C1: [char; 32] = [
    '\u{20AC}', '\u{81}', '\u{201A}', '\u{192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2C6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8D}', '\u{17D}', '\u{8F}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2DC}', '\u{2122}', '\u{161}', '\u{203A}', '\u{153}', '\u{9D}', '\u{17E}', '\u{178}',
];

enum Replacement {
    Entity(&'static str),
    Char(char),
}

impl Replacement {
    fn push_to(&self, out: &mut String) {
        match self {
            Replacement::Entity(value) => out.push_str(value),
            Replacement::Char(ch) => out.push(*ch),
        }
    }
}

/// Decode the reference at the start of `tail` (the text after `&`).
///
/// Returns the replacement and the number of bytes consumed, including the
/// terminating semicolon when there is one.
fn decode_reference(tail: &str) -> Option<(Replacement, usize)> {
    match tail.strip_prefix('#') {
        Some(number) => {
            let (ch, consumed) = decode_char_reference(number)?;
            Some((Replacement::Char(ch), consumed + 1))
        }
        None => decode_named_reference(tail),
    }
}

fn decode_named_reference(tail: &str) -> Option<(Replacement, usize)> {
    let name_len = tail
        .bytes()
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if name_len == 0 {
        return None;
    }

    let name = &tail[..name_len];
    if name_len <= MAX_REFERENCE_LEN
        && tail[name_len..].starts_with(';')
        && let Some(value) = resolve_html5_entity(name)
    {
        return Some((Replacement::Entity(value), name_len + 1));
    }

    // Longest legacy name the text starts with: `&copy2024` is `©2024`.
    (1..=name_len.min(MAX_LEGACY_LEN))
        .rev()
        .map(|len| &name[..len])
        .find(|candidate| LEGACY_ENTITIES.contains(candidate))
        .and_then(|legacy| {
            let value = resolve_html5_entity(legacy)?;
            Some((Replacement::Entity(value), legacy.len()))
        })
}

/// Decode the text after `&#`, returning the character and bytes consumed.
fn decode_char_reference(number: &str) -> Option<(char, usize)> {
    let (digits, radix, prefix_len) = match number.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, 1),
        None => (number, 10, 0),
    };
    let digit_len = digits
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digit_len == 0 {
        return None;
    }
    let terminated = digits[digit_len..].starts_with(';');
    let consumed = prefix_len + digit_len + usize::from(terminated);

    // Out-of-range, surrogate and NUL references decode to U+FFFD.
    let code = u32::from_str_radix(&digits[..digit_len], radix).unwrap_or(u32::MAX);
    let ch = match code {
        0x80..=0x9F => WINDOWS_1252_C1[(code - 0x80) as usize],
        _ => match char::from_u32(code) {
            Some('\0') | None => char::REPLACEMENT_CHARACTER,
            Some(ch) => ch,
        },
    };
    Some((ch, consumed))
}
