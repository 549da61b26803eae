//! # mbfxml
//!
//! A pure Rust reader for MBF contour-tracing XML files, as written by
//! neuron and vessel tracing software.
//!
//! An MBF file holds named, colored contours. Each contour is an ordered
//! list of traced points with a position and a diameter. This crate turns
//! such a file into plain data ready for downstream geometry work such as
//! building surface meshes or skeletons.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Namespace-agnostic tag dispatch
//! - Flat coordinate output or structured [`Contour`] records
//! - Typed errors with stable error codes
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Every point position, in document order
//! let coordinates = mbfxml::parse_file("tracing.xml")?;
//! println!("{} points", coordinates.len());
//!
//! // Or keep colors, names and radii
//! let document = mbfxml::ContourDocument::from_file("tracing.xml")?;
//! for contour in &document.contours {
//!     println!("{} {:?} closed={} points={}", contour.name, contour.rgb, contour.closed, contour.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Progress is reported through the [`log`] facade at `debug` and `trace`
//! level. No logger is installed by this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod error;
pub mod model;
pub mod parser;

pub use error::{Error, Result};
pub use model::{Contour, ContourDocument, ParserConfig, Point};
pub use parser::{
    XmlElement, flatten_coordinates, parse_contours_file, parse_contours_file_with_config,
    parse_contours_xml, parse_document, parse_file,
};
