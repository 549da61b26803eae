//! Property-based tests for mbfxml
//!
//! These tests use proptest to generate colors, tags, points and whole
//! documents and verify invariants hold across a wide range of inputs.

use mbfxml::color::{hex_to_rgb, rgb_to_hex};
use mbfxml::parser::{parse_contours_xml, raw_tag};
use mbfxml::{ContourDocument, Point};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Generate a finite coordinate that survives a text round trip
fn coordinate_strategy() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

/// Generate a (x, y, z, d) point record
fn point_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (
        coordinate_strategy(),
        coordinate_strategy(),
        coordinate_strategy(),
        0.0..100.0f64,
    )
}

/// Generate a contour as (name, closed, points)
fn contour_strategy() -> impl Strategy<Value = (String, bool, Vec<(f64, f64, f64, f64)>)> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,12}",
        any::<bool>(),
        prop::collection::vec(point_strategy(), 0..20),
    )
}

/// Serialize generated contours into an MBF document
fn document_xml(contours: &[(String, bool, Vec<(f64, f64, f64, f64)>)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<mbf version="4.0" xmlns="http://www.mbfbioscience.com/2007/neurolucida">
"#,
    );
    for (name, closed, points) in contours {
        xml.push_str(&format!(
            "  <contour color=\"#00FF00\" closed=\"{}\" name=\"{}\">\n",
            closed, name
        ));
        xml.push_str("    <property name=\"GUID\"><s>x</s></property>\n");
        for (x, y, z, d) in points {
            xml.push_str(&format!(
                "    <point x=\"{}\" y=\"{}\" z=\"{}\" d=\"{}\"/>\n",
                x, y, z, d
            ));
        }
        xml.push_str("  </contour>\n  <thumbnail/>\n");
    }
    xml.push_str("</mbf>\n");
    xml
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_color_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), hash in any::<bool>()) {
        let hex = format!("{}{:02x}{:02X}{:02x}", if hash { "#" } else { "" }, r, g, b);
        let rgb = hex_to_rgb(&hex).unwrap();

        let bytes: Vec<u8> = rgb.iter().map(|c| (c * 255.0).round() as u8).collect();
        prop_assert_eq!(bytes, vec![r, g, b]);
        prop_assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
        prop_assert_eq!(rgb_to_hex(rgb), format!("#{:02X}{:02X}{:02X}", r, g, b));
    }

    #[test]
    fn prop_color_rejects_wrong_length(digits in "[0-9a-fA-F]{0,12}") {
        prop_assume!(digits.len() != 6);
        prop_assert!(hex_to_rgb(&digits).is_err());
    }

    #[test]
    fn prop_raw_tag_strips_any_uri(uri in "[^}]{0,30}", tag in "[a-z][a-z-]{0,15}") {
        let qualified = format!("{{{}}}{}", uri, tag);
        prop_assert_eq!(raw_tag(&qualified), tag.as_str());
        prop_assert_eq!(raw_tag(&tag), tag.as_str());
    }

    #[test]
    fn prop_radius_is_half_diameter((x, y, z, d) in point_strategy()) {
        let p = Point::with_diameter(x, y, z, d);
        prop_assert_eq!(p.radius(), d / 2.0);
        prop_assert!(p.radius() >= 0.0);
        prop_assert_eq!(Point::new(x, y, z).radius(), 0.0);
    }

    #[test]
    fn prop_scale_keeps_z_and_radius((x, y, z, d) in point_strategy(), sx in -10.0..10.0f64, sy in -10.0..10.0f64) {
        let mut p = Point::with_diameter(x, y, z, d);
        p.scale(&[sx, sy]).unwrap();
        prop_assert_eq!(p.get(), [x * sx, y * sy, z, d / 2.0]);
    }

    #[test]
    fn prop_document_order_preserved(contours in prop::collection::vec(contour_strategy(), 0..8)) {
        let xml = document_xml(&contours);
        let document = ContourDocument::parse_str(&xml).unwrap();

        prop_assert_eq!(document.contours.len(), contours.len());
        for (parsed, (name, closed, points)) in document.contours.iter().zip(&contours) {
            prop_assert_eq!(&parsed.name, name);
            prop_assert_eq!(parsed.closed, *closed);
            let expected: Vec<[f64; 4]> = points.iter().map(|&(x, y, z, d)| [x, y, z, d / 2.0]).collect();
            let actual: Vec<[f64; 4]> = parsed.data.iter().map(Point::get).collect();
            prop_assert_eq!(actual, expected);
        }

        let flat: Vec<[f64; 3]> = contours
            .iter()
            .flat_map(|(_, _, points)| points.iter().map(|&(x, y, z, _)| [x, y, z]))
            .collect();
        prop_assert_eq!(document.coordinates(), flat);
    }

    #[test]
    fn prop_unknown_child_always_fails(tag in "[a-z][a-z-]{0,15}") {
        prop_assume!(!matches!(tag.as_str(), "point" | "property" | "resolution"));
        let xml = format!(
            r##"<mbf><contour color="#000000" closed="true" name="c"><{}/></contour></mbf>"##,
            tag
        );
        let err = parse_contours_xml(&xml).unwrap_err();
        prop_assert!(err.is_format_violation());
        prop_assert!(err.to_string().ends_with(&tag));
    }
}
