//! Document assembly around a builder's markup.

use feed_model::Node;

use crate::builder::XmlBuilder;
use crate::error::Result;
use crate::options::XmlOptions;

/// Declaration line every generated document starts with.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Render a complete XML document.
///
/// Prepends the XML declaration to the builder's output, writes `&apos;` as
/// a literal apostrophe and ends the document with a newline.
///
/// ```
/// use feed_xml::{TreeBuilder, generate_xml};
/// use serde_json::json;
///
/// let xml = generate_xml(&TreeBuilder::default(), &json!({ "rss": { "@version": "2.0" } })).unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rss version=\"2.0\"/>\n");
/// ```
pub fn generate_xml<B>(builder: &B, value: &Node) -> Result<String>
where
    B: XmlBuilder + ?Sized,
{
    generate_xml_with(builder, value, &XmlOptions::default())
}

/// [`generate_xml`] with stylesheet instructions after the declaration.
///
/// The body is written exactly as `builder` lays it out; pass
/// [`TreeBuilder::new`](crate::TreeBuilder::new) to choose the indentation.
pub fn generate_xml_with<B>(builder: &B, value: &Node, options: &XmlOptions) -> Result<String>
where
    B: XmlBuilder + ?Sized,
{
    let body = builder.build(value)?;

    let mut document = String::with_capacity(body.len() + 128);
    document.push_str(XML_DECLARATION);
    document.push('\n');
    for stylesheet in &options.stylesheets {
        document.push_str(&stylesheet.to_processing_instruction());
        document.push('\n');
    }
    document.push_str(&body.replace("&apos;", "'"));
    if !document.ends_with('\n') {
        document.push('\n');
    }

    tracing::debug!(
        bytes = document.len(),
        stylesheets = options.stylesheets.len(),
        "generated XML document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use crate::options::Stylesheet;
    use serde_json::json;

    struct FixedBuilder(&'static str);

    impl XmlBuilder for FixedBuilder {
        fn build(&self, _value: &Node) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn prepends_declaration_and_restores_apostrophes() {
        let xml = generate_xml(&FixedBuilder("<a>it&apos;s</a>"), &json!({})).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a>it's</a>\n");
    }

    #[test]
    fn keeps_existing_trailing_newline() {
        let xml = generate_xml(&FixedBuilder("<a/>\n"), &json!({})).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a/>\n");
    }

    #[test]
    fn apostrophes_in_tree_render_literally() {
        let value = json!({ "title": { "@alt": "Bob's", "#text": "Rock 'n' roll" } });
        let xml = generate_xml(&TreeBuilder::default(), &value).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<title alt=\"Bob's\">Rock 'n' roll</title>\n"
        );
    }

    #[test]
    fn stylesheets_follow_declaration() {
        let options = XmlOptions::new()
            .with_stylesheet(Stylesheet::new("text/xsl", "/rss.xsl"))
            .with_stylesheet(Stylesheet::new("text/css", "/rss.css").with_media("screen"));
        let xml = generate_xml_with(&FixedBuilder("<rss/>"), &json!({}), &options).unwrap();
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
                "<?xml-stylesheet type=\"text/xsl\" href=\"/rss.xsl\"?>\n",
                "<?xml-stylesheet type=\"text/css\" href=\"/rss.css\" media=\"screen\"?>\n",
                "<rss/>\n",
            )
        );
    }

    #[test]
    fn builder_errors_propagate() {
        let err = generate_xml(&TreeBuilder::default(), &json!("text")).unwrap_err();
        assert!(matches!(err, crate::XmlError::UnsupportedRoot { kind: "string" }));
    }

    #[test]
    fn works_with_trait_objects() {
        let builder: Box<dyn XmlBuilder> = Box::new(TreeBuilder::new(4));
        let xml = generate_xml(builder.as_ref(), &json!({ "a": { "b": 1 } })).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a>\n    <b>1</b>\n</a>\n");
    }
}
