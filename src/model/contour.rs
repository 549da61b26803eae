use super::Point;
use crate::error::Result;

/// One traced curve or region
///
/// Points are kept in document order, which defines the path along the
/// contour. When `closed` is set the last point implicitly connects back
/// to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Display color exactly as written in the file (e.g. `#00FF00`)
    pub colour: String,
    /// Display color as normalized `[r, g, b]` channels
    pub rgb: [f64; 3],
    /// Whether the curve is closed
    pub closed: bool,
    /// Contour name; not guaranteed unique within a document
    pub name: String,
    /// Traced points in document order
    pub data: Vec<Point>,
}

impl Contour {
    /// Number of points
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the contour has no points
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Positions of all points, in order
    pub fn coordinates(&self) -> Vec<[f64; 3]> {
        self.data.iter().map(Point::coordinates).collect()
    }

    /// Apply [`Point::scale`] to every point
    pub fn scale(&mut self, factors: &[f64]) -> Result<()> {
        self.data.iter_mut().try_for_each(|p| p.scale(factors))
    }

    /// Apply [`Point::offset`] to every point
    pub fn offset(&mut self, deltas: &[f64]) -> Result<()> {
        self.data.iter_mut().try_for_each(|p| p.offset(deltas))
    }
}
