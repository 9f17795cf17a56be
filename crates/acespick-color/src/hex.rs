//! Hex color string parsing and formatting.

use crate::error::{ColorError, ColorResult};

/// Parses a `#rrggbb` string into normalized display sRGB.
///
/// The leading `#` is optional; exactly six hex digits are required.
pub fn parse(hex: &str) -> ColorResult<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> ColorResult<f32> {
        let byte = u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
        Ok(byte as f32 / 255.0)
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Formats normalized display sRGB as `#rrggbb`.
///
/// Channels are clamped to [0, 1] and rounded to 8 bits.
pub fn format(rgb: [f32; 3]) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(rgb[0]), byte(rgb[1]), byte(rgb[2]))
}
