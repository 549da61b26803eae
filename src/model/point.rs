//! Traced point model

use std::fmt;

use crate::error::{Error, Result};

/// A single sampled location along a traced contour
///
/// Files store the fibre or vessel thickness as a diameter; the point keeps
/// it as a radius (`diameter / 2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
    radius: f64,
}

impl Point {
    /// Names of the logical fields of [`Point::get`]
    ///
    /// `coordinates` maps to elements `[0..3]` and `radius` to element `[3]`.
    pub const FIELD_NAMES: [&'static str; 2] = ["coordinates", "radius"];

    /// Create a point with zero diameter
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_diameter(x, y, z, 0.0)
    }

    /// Create a point from its position and diameter
    pub fn with_diameter(x: f64, y: f64, z: f64, diameter: f64) -> Self {
        Self {
            x,
            y,
            z,
            radius: diameter / 2.0,
        }
    }

    /// X coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Position as `[x, y, z]`
    pub fn coordinates(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Half of the diameter read from the file
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Diameter, as it was written in the file
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Flat `[x, y, z, radius]` record for node-data consumers
    pub fn get(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.radius]
    }

    /// Multiply x by `factors[0]` and y by `factors[1]` in place
    ///
    /// Only the planar coordinates are scaled: z and the radius are left
    /// untouched. Use [`Point::scale_uniform`] to scale all three axes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransform`] if fewer than two factors are given.
    pub fn scale(&mut self, factors: &[f64]) -> Result<()> {
        let [sx, sy] = match factors {
            [sx, sy, ..] => [*sx, *sy],
            _ => {
                return Err(Error::InvalidTransform(format!(
                    "scale needs at least 2 factors, got {}",
                    factors.len()
                )));
            }
        };
        self.x *= sx;
        self.y *= sy;
        Ok(())
    }

    /// Add `deltas[0..3]` to x, y and z in place; the radius is unaffected
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransform`] if fewer than three deltas are given.
    pub fn offset(&mut self, deltas: &[f64]) -> Result<()> {
        let [dx, dy, dz] = match deltas {
            [dx, dy, dz, ..] => [*dx, *dy, *dz],
            _ => {
                return Err(Error::InvalidTransform(format!(
                    "offset needs 3 deltas, got {}",
                    deltas.len()
                )));
            }
        };
        self.x += dx;
        self.y += dy;
        self.z += dz;
        Ok(())
    }

    /// Copy of this point with [`Point::scale`] applied
    pub fn scaled(&self, factors: &[f64]) -> Result<Self> {
        let mut point = *self;
        point.scale(factors)?;
        Ok(point)
    }

    /// Copy of this point with [`Point::offset`] applied
    pub fn offset_by(&self, deltas: &[f64]) -> Result<Self> {
        let mut point = *self;
        point.offset(deltas)?;
        Ok(point)
    }

    /// Scale x, y and z in place; the radius is unaffected
    ///
    /// This is the three-axis counterpart of [`Point::scale`]. It is never
    /// applied by the parser.
    pub fn scale_uniform(&mut self, factors: &[f64; 3]) {
        self.x *= factors[0];
        self.y *= factors[1];
        self.z *= factors[2];
    }
}

impl From<Point> for [f64; 3] {
    fn from(point: Point) -> Self {
        point.coordinates()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x=\"{}\" y=\"{}\" z=\"{}\" r=\"{}\"",
            self.x, self.y, self.z, self.radius
        )
    }
}
