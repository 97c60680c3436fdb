//! Color utilities for portrait art
//!
//! - Hex parsing and formatting (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
//! - Exact-match color substitution used to recolor placeholder regions

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into an RGBA color.
///
/// Short forms double each digit (`#F00` is `#FF0000`); alpha defaults to 255
/// when omitted.
///
/// # Examples
///
/// ```
/// use genportrait::color::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_hex_color("#eec39a").unwrap(), image::Rgba([0xee, 0xc3, 0x9a, 255]));
/// assert_eq!(parse_hex_color("#00000000").unwrap(), image::Rgba([0, 0, 0, 0]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, lacks the leading `#`,
/// contains non-hex characters or has the wrong length.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    // All characters are ASCII hex digits past this point, so byte indexing is safe.
    let digits: Vec<u8> = hex.bytes().map(hex_value).collect();
    match digits.len() {
        3 => Ok(Rgba([digits[0] * 17, digits[1] * 17, digits[2] * 17, 255])),
        4 => Ok(Rgba([digits[0] * 17, digits[1] * 17, digits[2] * 17, digits[3] * 17])),
        6 => Ok(Rgba([
            digits[0] * 16 + digits[1],
            digits[2] * 16 + digits[3],
            digits[4] * 16 + digits[5],
            255,
        ])),
        8 => Ok(Rgba([
            digits[0] * 16 + digits[1],
            digits[2] * 16 + digits[3],
            digits[4] * 16 + digits[5],
            digits[6] * 16 + digits[7],
        ])),
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Value of a single ASCII hex digit. Callers have already validated the byte.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when it isn't fully opaque.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Replace every pixel exactly equal to `from` with `to`.
///
/// Equality covers all four channels; there is no tolerance. The input is
/// left untouched and a new buffer of the same size is returned.
///
/// # Examples
///
/// ```
/// use genportrait::color::replace_color;
/// use image::{Rgba, RgbaImage};
///
/// let placeholder = Rgba([0xee, 0xc3, 0x9a, 255]);
/// let pink = Rgba([255, 192, 203, 255]);
/// let img = RgbaImage::from_pixel(2, 2, placeholder);
///
/// let out = replace_color(&img, placeholder, pink);
/// assert!(out.pixels().all(|p| *p == pink));
/// assert!(img.pixels().all(|p| *p == placeholder));
/// ```
pub fn replace_color(img: &RgbaImage, from: Rgba<u8>, to: Rgba<u8>) -> RgbaImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        if *pixel == from {
            *pixel = to;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(img: &RgbaImage, color: Rgba<u8>) -> usize {
        img.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex_color("#0f0"), Ok(Rgba([0, 255, 0, 255])));
        assert_eq!(parse_hex_color("#0F08"), Ok(Rgba([0, 255, 0, 136])));
        assert_eq!(parse_hex_color("#8F563B"), Ok(Rgba([0x8f, 0x56, 0x3b, 255])));
        assert_eq!(parse_hex_color("#8f563b80"), Ok(Rgba([0x8f, 0x56, 0x3b, 0x80])));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex_color(""), Err(ColorError::Empty));
        assert_eq!(parse_hex_color("ff0000"), Err(ColorError::MissingHash));
        assert_eq!(parse_hex_color("#ff00"), Ok(Rgba([255, 255, 0, 0])));
        assert_eq!(parse_hex_color("#ff000"), Err(ColorError::InvalidLength(5)));
        assert_eq!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex('g')));
        assert_eq!(parse_hex_color("#ä00"), Err(ColorError::InvalidHex('ä')));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgba([255, 219, 172, 255])), "#FFDBAC");
        assert_eq!(to_hex(Rgba([0, 0, 0, 0])), "#00000000");
        assert_eq!(parse_hex_color(&to_hex(Rgba([1, 2, 3, 4]))), Ok(Rgba([1, 2, 3, 4])));
    }

    #[test]
    fn test_replace_only_exact_matches() {
        let from = Rgba([10, 20, 30, 255]);
        let near = Rgba([10, 20, 30, 254]);
        let to = Rgba([200, 0, 0, 255]);

        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, from);
        img.put_pixel(1, 0, near);
        img.put_pixel(2, 0, to);

        let out = replace_color(&img, from, to);
        assert_eq!(*out.get_pixel(0, 0), to);
        assert_eq!(*out.get_pixel(1, 0), near);
        assert_eq!(*out.get_pixel(2, 0), to);
    }

    #[test]
    fn test_replace_counts() {
        let from = Rgba([1, 1, 1, 255]);
        let to = Rgba([2, 2, 2, 255]);
        let other = Rgba([3, 3, 3, 255]);

        let mut img = RgbaImage::from_pixel(4, 4, other);
        for x in 0..4 {
            img.put_pixel(x, 0, from);
        }
        img.put_pixel(0, 3, to);

        let out = replace_color(&img, from, to);
        assert_eq!(count(&out, to), count(&img, from) + count(&img, to));
        assert_eq!(count(&out, from), 0);
        assert_eq!(count(&out, other), count(&img, other));
    }

    #[test]
    fn test_replace_absent_color_is_identity() {
        let img = RgbaImage::from_fn(5, 5, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let out = replace_color(&img, Rgba([9, 9, 9, 9]), Rgba([0, 0, 0, 255]));
        assert_eq!(out, img);
    }

    #[test]
    fn test_replace_does_not_mutate_input() {
        let from = Rgba([5, 5, 5, 255]);
        let img = RgbaImage::from_pixel(2, 2, from);
        let _ = replace_color(&img, from, Rgba([0, 0, 0, 0]));
        assert!(img.pixels().all(|p| *p == from));
    }
}
