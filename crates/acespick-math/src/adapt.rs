//! Bradford chromatic adaptation.
//!
//! ACES color spaces are defined relative to a D60 white point while sRGB
//! is D65. Converting primaries between the two therefore needs a
//! chromatic adaptation transform; Bradford is the standard choice.

use crate::Mat3;

/// CIE Standard Illuminant D65 as XYZ (daylight, ~6500K).
///
/// Reference white of sRGB and Rec.709.
pub const D65: [f32; 3] = [0.95047, 1.0, 1.08883];

/// CIE Standard Illuminant D60 as XYZ (~6000K).
///
/// Reference white of the ACES color spaces.
pub const D60: [f32; 3] = [0.95265, 1.0, 1.00883];

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ into a "sharpened" cone response space where white
/// point scaling behaves well.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix transforms XYZ values adapted to `src_white`
/// into XYZ values adapted to `dst_white`.
///
/// # Example
///
/// ```rust
/// use acespick_math::{adapt_matrix, BRADFORD, D65, D60};
///
/// let d65_to_d60 = adapt_matrix(BRADFORD, D65, D60);
/// let white = d65_to_d60 * D65;
/// assert!((white[0] - D60[0]).abs() < 0.001);
/// ```
pub fn adapt_matrix(method: Mat3, src_white: [f32; 3], dst_white: [f32; 3]) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    // White points in cone space
    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone[0] / src_cone[0],
        dst_cone[1] / src_cone[1],
        dst_cone[2] / src_cone[2],
    );

    // M^-1 * S * M
    method_inv * scale * method
}
