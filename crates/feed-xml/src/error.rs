//! Error types for XML document assembly.

use thiserror::Error;

/// Errors that can occur while rendering a tree to XML.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlError {
    /// The tree root is not an object of root elements.
    #[error("unsupported document root: {kind} (expected an object)")]
    UnsupportedRoot { kind: &'static str },

    /// Writing to the output buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML writer rejected an event.
    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Rendered output is not valid UTF-8.
    #[error("rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for XML rendering.
pub type Result<T> = std::result::Result<T, XmlError>;
