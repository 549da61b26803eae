//! Owned XML element tree
//!
//! Contour files are small enough to hold in memory, and contour parsing
//! needs random access to an element's attributes and ordered access to
//! its children. This module builds that tree from quick-xml's
//! namespace-resolved event stream.
//!
//! Element tags follow the `{namespace-uri}localname` convention when the
//! element is bound to a namespace, and are the bare local name otherwise.

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

use super::tag::raw_tag;
use crate::error::{Error, Result};

/// An XML element with its attributes and child elements
///
/// Text content is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element without attributes or children
    ///
    /// `tag` may be namespace qualified (`{uri}name`).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add or replace an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name.into(), value.into());
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a document and return its root element
    ///
    /// # Errors
    ///
    /// Fails on malformed XML, undeclared namespace prefixes, a missing root
    /// element, elements after the root element and unclosed elements.
    pub fn parse_str(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_resolved_event()? {
                (ns, Event::Start(e)) => {
                    let element = Self::from_start(&ns, &e)?;
                    if open.is_empty() && root.is_some() {
                        return Err(content_after_root(&element));
                    }
                    open.push(element);
                }
                (ns, Event::Empty(e)) => {
                    let element = Self::from_start(&ns, &e)?;
                    close_element(&mut open, &mut root, element)?;
                }
                (_, Event::End(_)) => {
                    let element = open.pop().ok_or_else(|| {
                        Error::InvalidXml("End tag without matching start tag".to_string())
                    })?;
                    close_element(&mut open, &mut root, element)?;
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(Error::InvalidXml(format!(
                "Element '<{}>' is not closed",
                unclosed.local_name()
            )));
        }

        root.ok_or_else(|| Error::InvalidXml("Document has no root element".to_string()))
    }

    fn from_start(ns: &ResolveResult<'_>, e: &BytesStart<'_>) -> Result<Self> {
        let local_name = e.local_name();
        let local = std::str::from_utf8(local_name.as_ref())
            .map_err(|e| Error::InvalidXml(e.to_string()))?;

        let tag = match ns {
            ResolveResult::Bound(namespace) => {
                let uri = std::str::from_utf8(namespace.as_ref())
                    .map_err(|e| Error::InvalidXml(e.to_string()))?;
                format!("{{{}}}{}", uri, local)
            }
            ResolveResult::Unbound => local.to_string(),
            ResolveResult::Unknown(prefix) => {
                return Err(Error::InvalidXml(format!(
                    "Element '<{}>' uses undeclared namespace prefix '{}'",
                    local,
                    String::from_utf8_lossy(prefix)
                )));
            }
        };

        let mut element = XmlElement::new(tag);
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::XmlAttr(e.to_string()))?;
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            let raw = std::str::from_utf8(&attr.value).map_err(|e| Error::XmlAttr(e.to_string()))?;
            let value = quick_xml::escape::unescape(raw)?;
            element.set_attribute(key.to_string(), value.into_owned());
        }
        Ok(element)
    }

    fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Tag as written in the tree, possibly `{uri}`-qualified
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Tag with any `{uri}` qualifier removed
    pub fn local_name(&self) -> &str {
        raw_tag(&self.tag)
    }

    /// Value of the attribute with exactly this name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Child elements in document order
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }
}

fn close_element(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(content_after_root(&element));
    }
    *root = Some(element);
    Ok(())
}

fn content_after_root(element: &XmlElement) -> Error {
    Error::InvalidXml(format!(
        "Element '<{}>' found after the root element",
        element.local_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace_qualifies_tags() {
        let root = XmlElement::parse_str(
            r#"<mbf xmlns="http://example.com/mbf"><contour name="a"/></mbf>"#,
        )
        .unwrap();
        assert_eq!(root.tag(), "{http://example.com/mbf}mbf");
        assert_eq!(root.local_name(), "mbf");
        assert_eq!(root.children()[0].tag(), "{http://example.com/mbf}contour");
        assert_eq!(root.children()[0].attribute("name"), Some("a"));
    }

    #[test]
    fn test_prefixed_namespace_and_bare_tags() {
        let root = XmlElement::parse_str(
            r#"<root xmlns:n="urn:n"><n:contour/><plain/></root>"#,
        )
        .unwrap();
        assert_eq!(root.tag(), "root");
        let tags: Vec<&str> = root.children().iter().map(XmlElement::tag).collect();
        assert_eq!(tags, vec!["{urn:n}contour", "plain"]);
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let root =
            XmlElement::parse_str(r#"<root xmlns="urn:a" xmlns:b="urn:b" id="1"/>"#).unwrap();
        let attrs: Vec<(&str, &str)> = root.attributes().collect();
        assert_eq!(attrs, vec![("id", "1")]);
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let root = XmlElement::parse_str(r#"<c name="A &amp; B"/>"#).unwrap();
        assert_eq!(root.attribute("name"), Some("A & B"));
    }

    #[test]
    fn test_children_keep_document_order() {
        let root =
            XmlElement::parse_str("<r><a/><b><x/></b>text<c></c><!-- note --></r>").unwrap();
        let names: Vec<&str> = root.children().iter().map(XmlElement::local_name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(root.children()[1].children().len(), 1);
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let err = XmlElement::parse_str(r#"<?xml version="1.0"?>"#).unwrap_err();
        assert!(err.to_string().contains("no root element"));
    }

    #[test]
    fn test_second_root_is_an_error() {
        assert!(XmlElement::parse_str("<a/><b/>").is_err());
        assert!(XmlElement::parse_str("<a></a><b></b>").is_err());
    }

    #[test]
    fn test_unclosed_element_is_an_error() {
        assert!(XmlElement::parse_str("<a><b></b>").is_err());
    }

    #[test]
    fn test_mismatched_end_tag_is_an_error() {
        assert!(XmlElement::parse_str("<a><b></a></b>").is_err());
    }

    #[test]
    fn test_undeclared_prefix_is_an_error() {
        assert!(XmlElement::parse_str("<x:a/>").is_err());
    }

    #[test]
    fn test_builder() {
        let element = XmlElement::new("{urn:x}point")
            .with_attribute("x", "1")
            .with_attribute("x", "2")
            .with_child(XmlElement::new("inner"));
        assert_eq!(element.local_name(), "point");
        assert_eq!(element.attribute("x"), Some("2"));
        assert_eq!(element.children().len(), 1);
    }
}
