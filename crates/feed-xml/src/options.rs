//! Rendering options and stylesheet processing instructions.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

/// Options controlling document assembly.
///
/// Markup layout, indentation included, is configured on the
/// [`XmlBuilder`](crate::XmlBuilder) itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlOptions {
    /// `<?xml-stylesheet?>` instructions emitted after the declaration.
    pub stylesheets: Vec<Stylesheet>,
}

impl XmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheets.push(stylesheet);
        self
    }
}

/// An `<?xml-stylesheet?>` processing instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<bool>,
}

impl Stylesheet {
    pub fn new(kind: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            href: href.into(),
            title: None,
            media: None,
            charset: None,
            alternate: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    #[must_use]
    pub fn with_alternate(mut self, alternate: bool) -> Self {
        self.alternate = Some(alternate);
        self
    }

    /// Render as a processing instruction line (without newline).
    ///
    /// Pseudo-attributes appear in a fixed order: type, href, title, media,
    /// charset, alternate.
    pub fn to_processing_instruction(&self) -> String {
        let mut attributes = vec![("type", self.kind.as_str()), ("href", self.href.as_str())];
        if let Some(title) = &self.title {
            attributes.push(("title", title.as_str()));
        }
        if let Some(media) = &self.media {
            attributes.push(("media", media.as_str()));
        }
        if let Some(charset) = &self.charset {
            attributes.push(("charset", charset.as_str()));
        }
        if let Some(alternate) = self.alternate {
            attributes.push(("alternate", if alternate { "yes" } else { "no" }));
        }

        let rendered: Vec<String> = attributes
            .into_iter()
            .map(|(name, value)| format!("{name}=\"{}\"", escape(value)))
            .collect();
        format!("<?xml-stylesheet {}?>", rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_have_no_stylesheets() {
        assert!(XmlOptions::default().stylesheets.is_empty());

        let options: XmlOptions =
            serde_json::from_str(r#"{ "stylesheets": [{ "type": "text/xsl", "href": "/a.xsl" }] }"#)
                .unwrap();
        assert_eq!(options, XmlOptions::new().with_stylesheet(Stylesheet::new("text/xsl", "/a.xsl")));
    }

    #[test]
    fn minimal_stylesheet() {
        let stylesheet = Stylesheet::new("text/xsl", "/feed.xsl");
        assert_eq!(
            stylesheet.to_processing_instruction(),
            r#"<?xml-stylesheet type="text/xsl" href="/feed.xsl"?>"#
        );
    }

    #[test]
    fn full_stylesheet() {
        let stylesheet = Stylesheet::new("text/css", "/style.css?a=1&b=2")
            .with_title("Pretty")
            .with_media("screen")
            .with_charset("UTF-8")
            .with_alternate(true);
        assert_eq!(
            stylesheet.to_processing_instruction(),
            r#"<?xml-stylesheet type="text/css" href="/style.css?a=1&amp;b=2" title="Pretty" media="screen" charset="UTF-8" alternate="yes"?>"#
        );
    }

    #[test]
    fn stylesheet_deserializes_type_field() {
        let stylesheet: Stylesheet =
            serde_json::from_str(r#"{ "type": "text/xsl", "href": "/a.xsl" }"#).unwrap();
        assert_eq!(stylesheet, Stylesheet::new("text/xsl", "/a.xsl"));
    }
}
