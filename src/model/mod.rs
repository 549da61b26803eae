//! Data structures representing MBF contour tracings

// Declare all submodules
mod config;
mod contour;
mod document;
mod point;

pub use config::ParserConfig;
pub use contour::Contour;
pub use document::ContourDocument;
pub use point::Point;
