//! Hexadecimal color decoding
//!
//! Contours carry their display color as a `#RRGGBB` string. Downstream
//! consumers want normalized channels instead, so each byte is mapped
//! to `byte / 255.0`.

use crate::error::{Error, Result};

/// Number of hex digits in an `RRGGBB` color
const HEX_COLOR_LEN: usize = 6;

/// Decode a hexadecimal color string into normalized RGB channels
///
/// Any leading `#` characters are stripped. The remainder must be exactly
/// six hexadecimal digits.
///
/// # Example
///
/// ```
/// use mbfxml::color::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#00FF00").unwrap(), [0.0, 1.0, 0.0]);
/// assert_eq!(hex_to_rgb("ff0000").unwrap(), [1.0, 0.0, 0.0]);
/// assert!(hex_to_rgb("#abc").is_err());
/// ```
pub fn hex_to_rgb(hex_string: &str) -> Result<[f64; 3]> {
    let digits = hex_string.trim_start_matches('#');

    if digits.len() != HEX_COLOR_LEN {
        return Err(Error::invalid_color(
            hex_string,
            format!(
                "expected {} hexadecimal digits, got {}",
                HEX_COLOR_LEN,
                digits.len()
            ),
        ));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(
            hex_string,
            format!("'{}' is not a hexadecimal digit", bad),
        ));
    }

    let mut rgb = [0.0; 3];
    for (channel, start) in rgb.iter_mut().zip([0, 2, 4]) {
        let byte = u8::from_str_radix(&digits[start..start + 2], 16)
            .map_err(|e| Error::invalid_color(hex_string, e.to_string()))?;
        *channel = f64::from(byte) / 255.0;
    }
    Ok(rgb)
}

/// Encode normalized RGB channels back into an uppercase `#RRGGBB` string
///
/// Channels are clamped to `[0.0, 1.0]` and rounded to the nearest byte.
pub fn rgb_to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(channel_to_byte);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
