//! XML parsing for MBF contour files
//!
//! Parsing is a single pass over an in-memory element tree: top-level
//! `<contour>` elements are handed to the contour parser and every other
//! top-level element is skipped. Inside a contour the child vocabulary is
//! closed, so an unknown child aborts the whole parse.

mod contour;
mod tag;
mod tree;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::{Contour, ParserConfig};

pub use contour::{parse_contour, parse_point};
pub use tag::{ContourChild, DocumentChild, raw_tag};
pub use tree::XmlElement;

/// Parse an MBF file and return every point position in document order
///
/// Contour metadata is dropped; see [`parse_contours_file`] to keep it.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let coordinates = mbfxml::parse_file("tracing.xml")?;
/// for [x, y, z] in coordinates {
///     println!("{x} {y} {z}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<[f64; 3]>> {
    let contours = parse_contours_file(path)?;
    Ok(flatten_coordinates(&contours))
}

/// Parse an MBF file into its contours
pub fn parse_contours_file<P: AsRef<Path>>(path: P) -> Result<Vec<Contour>> {
    parse_contours_file_with_config(path, ParserConfig::default())
}

/// Parse an MBF file into its contours with custom configuration
pub fn parse_contours_file_with_config<P: AsRef<Path>>(
    path: P,
    config: ParserConfig,
) -> Result<Vec<Contour>> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path)?;
    log::debug!("Parsing MBF contours from {}", path.display());
    parse_contours_xml_with_config(&xml, config)
}

/// Parse MBF XML content into its contours
pub fn parse_contours_xml(xml: &str) -> Result<Vec<Contour>> {
    parse_contours_xml_with_config(xml, ParserConfig::default())
}

/// Parse MBF XML content into its contours with custom configuration
pub fn parse_contours_xml_with_config(xml: &str, config: ParserConfig) -> Result<Vec<Contour>> {
    let root = XmlElement::parse_str(xml)?;
    parse_document_with_config(&root, &config)
}

/// Extract the contours below an already parsed document root
pub fn parse_document(root: &XmlElement) -> Result<Vec<Contour>> {
    parse_document_with_config(root, &ParserConfig::default())
}

/// Extract the contours below an already parsed document root with custom configuration
pub fn parse_document_with_config(root: &XmlElement, config: &ParserConfig) -> Result<Vec<Contour>> {
    let mut contours = Vec::new();
    for child in root.children() {
        match DocumentChild::from_tag(child.tag()) {
            DocumentChild::Contour => contours.push(parse_contour(child, config)?),
            DocumentChild::Other(tag) => {
                log::trace!("Ignoring top-level <{}>", tag);
            }
        }
    }
    Ok(contours)
}

/// Flatten contour points into positions: contour order, then point order
pub fn flatten_coordinates(contours: &[Contour]) -> Vec<[f64; 3]> {
    contours
        .iter()
        .flat_map(|contour| contour.data.iter().map(|p| p.coordinates()))
        .collect()
}
