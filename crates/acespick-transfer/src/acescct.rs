//! ACEScct log encoding.
//!
//! Same log segment as ACEScc but with a linear toe below 2^-7, which
//! keeps shadow grading controls usable. The two segments meet exactly
//! at the breakpoint.
//!
//! # Reference
//!
//! AMPAS S-2016-001 - ACEScct specification

/// Linear-side breakpoint between the toe and the log segment (2^-7).
pub const X_BRK: f32 = 0.0078125;
/// Encoded value at the breakpoint.
pub const Y_BRK: f32 = 0.155251141552511;
const A: f32 = 10.5402377416545;
const B: f32 = 0.0729055341958355;

/// ACEScct encode: converts linear AP1 to ACEScct.
///
/// # Formula
///
/// ```text
/// if linear <= 0.0078125:
///     ACEScct = 10.5402377416545 * linear + 0.0729055341958355
/// else:
///     ACEScct = (log2(linear) + 9.72) / 17.52
/// ```
///
/// # Example
///
/// ```rust
/// use acespick_transfer::acescct::encode;
///
/// let cct = encode(0.18);
/// assert!((cct - 0.4135).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear <= X_BRK {
        A * linear + B
    } else {
        (linear.log2() + 9.72) / 17.52
    }
}

/// ACEScct decode: converts ACEScct back to linear AP1.
#[inline]
pub fn decode(cct: f32) -> f32 {
    if cct <= Y_BRK {
        (cct - B) / A
    } else {
        2.0_f32.powf(cct * 17.52 - 9.72)
    }
}

/// Applies the ACEScct encode to an RGB triple.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies the ACEScct decode to an RGB triple.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}
