//! Contour element parsing
//!
//! A `<contour>` carries its color, closed flag and name as attributes and
//! its traced points as `<point>` children. `<property>` and `<resolution>`
//! children are recognised and skipped; any other child aborts the parse.

use super::tag::ContourChild;
use super::tree::XmlElement;
use crate::color::hex_to_rgb;
use crate::error::{Error, Result};
use crate::model::{Contour, ParserConfig, Point};

/// Build a [`Contour`] from a `<contour>` element
///
/// # Errors
///
/// - [`Error::MissingAttribute`] if `color`, `closed` or `name` is absent,
///   or a point lacks `x`, `y`, `z` or `d`
/// - [`Error::InvalidColor`] if `color` is not six hex digits
/// - [`Error::InvalidNumber`] if a point value is not a number
/// - [`Error::FormatViolation`] for a child outside `point`, `property`, `resolution`
/// - [`Error::InvalidValue`] for values rejected by `config`
pub fn parse_contour(contour_root: &XmlElement, config: &ParserConfig) -> Result<Contour> {
    let colour = required_attribute(contour_root, "color")?;
    let closed = required_attribute(contour_root, "closed")? == "true";
    let name = required_attribute(contour_root, "name")?;
    let rgb = hex_to_rgb(colour)?;

    let mut data = Vec::new();
    for child in contour_root.children() {
        match ContourChild::from_tag(child.tag()) {
            ContourChild::Point => data.push(parse_point(child, config)?),
            ContourChild::Property | ContourChild::Resolution => {
                log::trace!("Skipping <{}> in contour '{}'", child.local_name(), name);
            }
            ContourChild::Unknown(tag) => return Err(Error::format_violation(tag)),
        }
    }

    log::debug!(
        "Parsed contour '{}' ({} points, closed: {})",
        name,
        data.len(),
        closed
    );

    Ok(Contour {
        colour: colour.to_string(),
        rgb,
        closed,
        name: name.to_string(),
        data,
    })
}

/// Build a [`Point`] from a `<point x=".." y=".." z=".." d=".."/>` element
///
/// `d` is the diameter; the point stores half of it as its radius.
pub fn parse_point(element: &XmlElement, config: &ParserConfig) -> Result<Point> {
    let x = parse_f64_attribute(element, "x", config)?;
    let y = parse_f64_attribute(element, "y", config)?;
    let z = parse_f64_attribute(element, "z", config)?;
    let d = parse_f64_attribute(element, "d", config)?;

    if config.reject_negative_diameter() && d < 0.0 {
        return Err(Error::invalid_value(
            element.local_name(),
            "d",
            d,
            "diameter must not be negative",
        ));
    }

    Ok(Point::with_diameter(x, y, z, d))
}

fn required_attribute<'a>(element: &'a XmlElement, attribute: &str) -> Result<&'a str> {
    element
        .attribute(attribute)
        .ok_or_else(|| Error::missing_attribute(element.local_name(), attribute))
}

fn parse_f64_attribute(element: &XmlElement, attribute: &str, config: &ParserConfig) -> Result<f64> {
    let raw = required_attribute(element, attribute)?;
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::invalid_number(element.local_name(), attribute, raw))?;

    if config.reject_non_finite() && !value.is_finite() {
        return Err(Error::invalid_value(
            element.local_name(),
            attribute,
            value,
            "value must be finite",
        ));
    }
    Ok(value)
}
