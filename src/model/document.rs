use std::fs;
use std::io::Read;
use std::path::Path;

use super::{Contour, ParserConfig};
use crate::error::Result;
use crate::parser;

/// All contours extracted from one MBF file, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourDocument {
    /// Contours in the order they appear at the document's top level
    pub contours: Vec<Contour>,
}

impl ContourDocument {
    /// Parse MBF XML held in memory
    pub fn parse_str(xml: &str) -> Result<Self> {
        Self::parse_str_with_config(xml, ParserConfig::default())
    }

    /// Parse MBF XML held in memory with custom configuration
    pub fn parse_str_with_config(xml: &str, config: ParserConfig) -> Result<Self> {
        let contours = parser::parse_contours_xml_with_config(xml, config)?;
        Ok(Self { contours })
    }

    /// Parse MBF XML from a reader
    ///
    /// The whole input is read into memory before parsing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mbfxml::ContourDocument;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("tracing.xml")?;
    /// let document = ContourDocument::from_reader(file)?;
    /// println!("{} contours", document.contours.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, ParserConfig::default())
    }

    /// Parse MBF XML from a reader with custom configuration
    pub fn from_reader_with_config<R: Read>(mut reader: R, config: ParserConfig) -> Result<Self> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        Self::parse_str_with_config(&xml, config)
    }

    /// Parse an MBF XML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_config(path, ParserConfig::default())
    }

    /// Parse an MBF XML file with custom configuration
    pub fn from_file_with_config<P: AsRef<Path>>(path: P, config: ParserConfig) -> Result<Self> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path)?;
        let document = Self::parse_str_with_config(&xml, config)?;
        log::debug!(
            "Read {} contours ({} points) from {}",
            document.contours.len(),
            document.point_count(),
            path.display()
        );
        Ok(document)
    }

    /// Flatten every point position: contour order first, then point order
    pub fn coordinates(&self) -> Vec<[f64; 3]> {
        parser::flatten_coordinates(&self.contours)
    }

    /// Total number of points across all contours
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// First contour with the given name
    pub fn contour_by_name(&self, name: &str) -> Option<&Contour> {
        self.contours.iter().find(|c| c.name == name)
    }

    /// Take ownership of the contour list
    pub fn into_contours(self) -> Vec<Contour> {
        self.contours
    }
}
