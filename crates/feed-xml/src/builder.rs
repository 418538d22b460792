//! Tree to markup rendering.
//!
//! Trees follow the same conventions the parser side produces:
//!
//! | Key       | Rendered as                                    |
//! |-----------|------------------------------------------------|
//! | `@name`   | attribute `name` on the enclosing element      |
//! | `#text`   | escaped text content                           |
//! | `#cdata`  | CDATA section(s)                               |
//! | `name`    | child element; an array repeats the element   |
//!
//! Null values are skipped. An element with neither content nor children is
//! written self-closing.

use feed_model::{ATTRIBUTE_PREFIX, CDATA_KEY, Map, Node, TEXT_KEY, number_to_string};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Result, XmlError};

/// Default indentation width in spaces.
pub const DEFAULT_INDENT: usize = 2;

const CDATA_CLOSE: &str = "]]>";

/// Renders a tree to markup, without the XML declaration.
pub trait XmlBuilder {
    fn build(&self, value: &Node) -> Result<String>;
}

/// [`XmlBuilder`] over quick-xml's indenting writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    indent: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl TreeBuilder {
    /// Builder indenting each level by `indent` spaces; `0` disables
    /// pretty-printing.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl XmlBuilder for TreeBuilder {
    fn build(&self, value: &Node) -> Result<String> {
        let Node::Object(root) = value else {
            return Err(XmlError::UnsupportedRoot {
                kind: node_kind(value),
            });
        };

        let mut writer = if self.indent == 0 {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), b' ', self.indent)
        };

        for (name, child) in root {
            if name.starts_with(ATTRIBUTE_PREFIX) || name.starts_with('#') {
                tracing::trace!(key = %name, "skipping non-element key at document root");
                continue;
            }
            write_element(&mut writer, name, child)?;
        }

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Node) -> Result<()> {
    match value {
        Node::Null => Ok(()),
        Node::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Node::Object(map) => write_object(writer, name, map),
        scalar => {
            let text = scalar_text(scalar).unwrap_or_default();
            if text.is_empty() {
                writer.write_event(Event::Empty(BytesStart::new(name)))?;
            } else {
                writer.write_event(Event::Start(BytesStart::new(name)))?;
                writer.write_event(Event::Text(BytesText::new(&text)))?;
                writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
            Ok(())
        }
    }
}

fn write_object(writer: &mut Writer<Vec<u8>>, name: &str, map: &Map) -> Result<()> {
    let mut start = BytesStart::new(name);
    let mut text = None;
    let mut cdata = None;
    let mut children = Vec::new();

    for (key, value) in map {
        if let Some(attribute) = key.strip_prefix(ATTRIBUTE_PREFIX) {
            if let Some(attribute_value) = scalar_text(value) {
                start.push_attribute((attribute, attribute_value.as_str()));
            }
        } else if key == TEXT_KEY {
            text = scalar_text(value).filter(|text| !text.is_empty());
        } else if key == CDATA_KEY {
            cdata = scalar_text(value).filter(|cdata| !cdata.is_empty());
        } else if !value.is_null() {
            children.push((key.as_str(), value));
        }
    }

    if text.is_none() && cdata.is_none() && children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    if let Some(cdata) = &cdata {
        for section in cdata_sections(cdata) {
            writer.write_event(Event::CData(BytesCData::new(section)))?;
        }
    }
    for (child_name, child) in children {
        write_element(writer, child_name, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Text form of a scalar; `None` for null, arrays and objects.
fn scalar_text(value: &Node) -> Option<String> {
    match value {
        Node::String(text) => Some(text.clone()),
        Node::Number(number) => Some(number_to_string(number)),
        Node::Bool(flag) => Some(flag.to_string()),
        Node::Null | Node::Array(_) | Node::Object(_) => None,
    }
}

/// Split text so that no section contains a literal `]]>`.
///
/// `a]]>b` becomes `a]]` and `>b`, which concatenate back to the original.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(index) = rest.find(CDATA_CLOSE) {
        let split = index + 2;
        sections.push(&rest[..split]);
        rest = &rest[split..];
    }
    sections.push(rest);
    sections
}

fn node_kind(value: &Node) -> &'static str {
    match value {
        Node::Null => "null",
        Node::Bool(_) => "boolean",
        Node::Number(_) => "number",
        Node::String(_) => "string",
        Node::Array(_) => "array",
        Node::Object(_) => "object",
    }
}
