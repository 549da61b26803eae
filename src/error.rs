//! Error types for MBF contour XML parsing
//!
//! Every error message carries an error code so that failures can be
//! categorised without matching on the message text.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: XML parsing and tag vocabulary errors
//! - **E3xxx**: Malformed contour or point data
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E2001`: XML parsing error
//! - `E2002`: XML attribute error
//! - `E2003`: Invalid XML structure
//! - `E2004`: Format violation (unknown tag inside a contour)
//! - `E3001`: Missing required attribute
//! - `E3002`: Invalid numeric value
//! - `E3003`: Invalid color string
//! - `E3004`: Value rejected by a strict parser option
//! - `E3005`: Invalid transform arguments

use std::io;
use thiserror::Error;

/// Result type for MBF XML operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading MBF contour files
///
/// Any error aborts the whole conversion; no partial contour or document
/// is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// XML parsing error reported by the underlying XML reader
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Mismatched or unclosed tags
    /// - Invalid character encoding
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Duplicate attribute
    /// - Attribute value with an invalid escape sequence
    #[error("[E2002] XML attribute error: {0}")]
    XmlAttr(String),

    /// Invalid XML document structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Empty document without a root element
    /// - Elements after the root element
    /// - Undeclared namespace prefix
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// A contour contains a child element outside the known vocabulary
    ///
    /// **Error Code**: E2004
    ///
    /// Contours may only contain `point`, `property` and `resolution`
    /// children. Any other tag is fatal to the whole parse.
    #[error("[E2004] XML format violation unknown tag {tag}")]
    FormatViolation {
        /// Local name of the offending tag
        tag: String,
    },

    /// A required attribute is absent
    ///
    /// **Error Code**: E3001
    ///
    /// Contours require `color`, `closed` and `name`; points require
    /// `x`, `y`, `z` and `d`.
    #[error("[E3001] Element '<{element}>' is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Local name of the element
        element: String,
        /// Name of the missing attribute
        attribute: String,
    },

    /// A numeric attribute could not be parsed as a floating-point number
    ///
    /// **Error Code**: E3002
    ///
    /// **Suggestions**:
    /// - Verify numeric values use proper format (e.g., "1.5" not "1,5")
    #[error(
        "[E3002] Element '<{element}>' attribute '{attribute}': expected floating-point number, got '{value}'"
    )]
    InvalidNumber {
        /// Local name of the element
        element: String,
        /// Name of the attribute
        attribute: String,
        /// The raw attribute value
        value: String,
    },

    /// A color string is not six hexadecimal digits
    ///
    /// **Error Code**: E3003
    #[error("[E3003] Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The raw color string
        value: String,
        /// Why decoding failed
        reason: String,
    },

    /// A value parsed correctly but was rejected by a strict [`ParserConfig`] option
    ///
    /// **Error Code**: E3004
    ///
    /// [`ParserConfig`]: crate::ParserConfig
    #[error("[E3004] Element '<{element}>' attribute '{attribute}' value '{value}' rejected: {reason}")]
    InvalidValue {
        /// Local name of the element
        element: String,
        /// Name of the attribute
        attribute: String,
        /// The parsed value, formatted
        value: String,
        /// Which rule rejected it
        reason: String,
    },

    /// Transform arguments have too few components
    ///
    /// **Error Code**: E3005
    #[error("[E3005] Invalid transform: {0}")]
    InvalidTransform(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(format!("Attribute parsing failed: {}", err))
    }
}

impl From<quick_xml::escape::EscapeError> for Error {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        Error::XmlAttr(format!("Attribute value could not be unescaped: {}", err))
    }
}

impl Error {
    /// Create a [`Error::FormatViolation`] for an unknown contour child tag
    pub fn format_violation(tag: &str) -> Self {
        Error::FormatViolation {
            tag: tag.to_string(),
        }
    }

    /// Create a [`Error::MissingAttribute`]
    ///
    /// # Example
    /// ```
    /// use mbfxml::Error;
    ///
    /// let err = Error::missing_attribute("point", "d");
    /// assert!(err.to_string().contains("missing required attribute 'd'"));
    /// ```
    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        Error::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// Create a [`Error::InvalidNumber`]
    pub fn invalid_number(element: &str, attribute: &str, value: &str) -> Self {
        Error::InvalidNumber {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a [`Error::InvalidColor`]
    pub fn invalid_color(value: &str, reason: impl Into<String>) -> Self {
        Error::InvalidColor {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a [`Error::InvalidValue`]
    pub fn invalid_value(element: &str, attribute: &str, value: f64, reason: &str) -> Self {
        Error::InvalidValue {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The `Exxxx` code of this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "E1001",
            Error::Xml(_) => "E2001",
            Error::XmlAttr(_) => "E2002",
            Error::InvalidXml(_) => "E2003",
            Error::FormatViolation { .. } => "E2004",
            Error::MissingAttribute { .. } => "E3001",
            Error::InvalidNumber { .. } => "E3002",
            Error::InvalidColor { .. } => "E3003",
            Error::InvalidValue { .. } => "E3004",
            Error::InvalidTransform(_) => "E3005",
        }
    }

    /// Whether this error reports a tag outside the contour vocabulary
    pub fn is_format_violation(&self) -> bool {
        matches!(self, Error::FormatViolation { .. })
    }

    /// Whether this error reports a malformed contour or point record
    ///
    /// Covers missing attributes, unparseable numbers, bad colors and values
    /// rejected by strict parser options.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::MissingAttribute { .. }
                | Error::InvalidNumber { .. }
                | Error::InvalidColor { .. }
                | Error::InvalidValue { .. }
        )
    }
}
