//! Tag normalization and dispatch
//!
//! MBF files are usually written with a default namespace, so tags arrive
//! as `{namespace-uri}localname`. Dispatch only ever looks at the local
//! name; which namespace produced it is irrelevant.

/// Strip a `{namespace-uri}` qualifier from a tag
///
/// Everything after the first `}` is returned. Tags without a `}` are
/// returned unchanged.
///
/// # Examples
///
/// - `"{http://www.mbfbioscience.com/2007/neurolucida}contour"` returns `"contour"`
/// - `"{}point"` returns `"point"`
/// - `"point"` returns `"point"`
pub fn raw_tag(tag: &str) -> &str {
    match tag.split_once('}') {
        Some((_, local)) => local,
        None => tag,
    }
}

/// Children a `<contour>` element may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourChild<'a> {
    /// A traced point; the only child that carries data
    Point,
    /// Contour property, skipped
    Property,
    /// Image resolution record, skipped
    Resolution,
    /// Any other tag, a format violation
    Unknown(&'a str),
}

impl<'a> ContourChild<'a> {
    /// Classify a (possibly namespace qualified) child tag
    pub fn from_tag(tag: &'a str) -> Self {
        match raw_tag(tag) {
            "point" => ContourChild::Point,
            "property" => ContourChild::Property,
            "resolution" => ContourChild::Resolution,
            other => ContourChild::Unknown(other),
        }
    }
}

/// Top-level elements of an MBF document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentChild<'a> {
    /// A `<contour>` element
    Contour,
    /// Anything else; ignored
    Other(&'a str),
}

impl<'a> DocumentChild<'a> {
    /// Classify a (possibly namespace qualified) top-level tag
    pub fn from_tag(tag: &'a str) -> Self {
        match raw_tag(tag) {
            "contour" => DocumentChild::Contour,
            other => DocumentChild::Other(other),
        }
    }
}
