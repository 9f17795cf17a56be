//! ACEScc log encoding.
//!
//! Pure log2 grading space for ACES, no linear toe. Non-positive linear
//! values are pinned to the encoding of 2^-16 so log2 never sees zero.
//!
//! # Reference
//!
//! AMPAS S-2014-003 - ACEScc specification

/// Encoded value that all non-positive linear inputs map to.
///
/// Equals `(log2(2^-16) + 9.72) / 17.52`.
pub const ENCODE_FLOOR: f32 = -0.358_447_488_6;

/// ACEScc encode: converts linear AP1 to ACEScc.
///
/// # Formula
///
/// ```text
/// if linear <= 0:
///     ACEScc = (log2(2^-16) + 9.72) / 17.52   // = -0.3584474886
/// else:
///     ACEScc = (log2(linear) + 9.72) / 17.52
/// ```
///
/// # Example
///
/// ```rust
/// use acespick_transfer::acescc::encode;
///
/// let cc = encode(0.18);
/// assert!((cc - 0.4135).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear <= 0.0 {
        ENCODE_FLOOR
    } else {
        (linear.log2() + 9.72) / 17.52
    }
}

/// ACEScc decode: converts ACEScc back to linear AP1.
///
/// Values at or below [`ENCODE_FLOOR`] decode to 0.
#[inline]
pub fn decode(cc: f32) -> f32 {
    if cc <= ENCODE_FLOOR {
        0.0
    } else {
        2.0_f32.powf(cc * 17.52 - 9.72)
    }
}

/// Applies the ACEScc encode to an RGB triple.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies the ACEScc decode to an RGB triple.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_constant() {
        // (log2(2^-16) + 9.72) / 17.52
        let expected = (-16.0_f32 + 9.72) / 17.52;
        assert!((ENCODE_FLOOR - expected).abs() < 1e-7);
    }

    #[test]
    fn test_nonpositive_pins_to_floor() {
        assert_eq!(encode(0.0), ENCODE_FLOOR);
        assert_eq!(encode(-1.0), ENCODE_FLOOR);
    }

    #[test]
    fn test_monotonic_for_positive() {
        let mut prev = f32::NEG_INFINITY;
        let mut x = 1e-6;
        while x < 100.0 {
            let y = encode(x);
            assert!(y > prev, "not increasing at x={}", x);
            prev = y;
            x *= 1.5;
        }
    }

    #[test]
    fn test_midgray() {
        // 18% gray encodes to approximately 0.4135
        assert!((encode(0.18) - 0.4135).abs() < 0.001);
    }

    #[test]
    fn test_roundtrip() {
        for &v in &[0.001, 0.01, 0.18, 1.0, 10.0] {
            let back = decode(encode(v));
            assert!((v - back).abs() < 1e-4 * v.max(0.001));
        }
    }
}
