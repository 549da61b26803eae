/// Configuration for parsing MBF contour files
///
/// The default configuration accepts every value the file format allows,
/// including negative diameters and non-finite numbers such as `nan` or
/// `inf`. The options only ever make the parser stricter.
///
/// # Example
///
/// ```
/// use mbfxml::ParserConfig;
///
/// let config = ParserConfig::new().with_reject_non_finite(true);
/// assert!(config.reject_non_finite());
/// assert!(!config.reject_negative_diameter());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    reject_non_finite: bool,
    reject_negative_diameter: bool,
}

impl ParserConfig {
    /// Create the default, lenient configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every strictness check enabled
    pub fn strict() -> Self {
        Self {
            reject_non_finite: true,
            reject_negative_diameter: true,
        }
    }

    /// Reject point values that are NaN or infinite
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Reject points whose diameter is negative
    pub fn with_reject_negative_diameter(mut self, reject: bool) -> Self {
        self.reject_negative_diameter = reject;
        self
    }

    /// Whether NaN and infinite point values are rejected
    pub fn reject_non_finite(&self) -> bool {
        self.reject_non_finite
    }

    /// Whether negative diameters are rejected
    pub fn reject_negative_diameter(&self) -> bool {
        self.reject_negative_diameter
    }
}
