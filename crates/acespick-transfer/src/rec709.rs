//! Rec.709 (BT.709) camera OETF.
//!
//! The broadcast video encoding curve. Display decode in practice is
//! BT.1886 (gamma 2.4); the inverse OETF here is the exact mathematical
//! inverse of the camera curve, which is what the picker round-trips.

/// Rec.709 OETF: encodes linear light to video.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Inverse Rec.709 OETF: decodes video back to linear light.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Applies the Rec.709 OETF to an RGB triple.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

/// Applies the inverse Rec.709 OETF to an RGB triple.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-4, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_boundary_continuous() {
        let below = oetf(0.018 - 1e-6);
        let above = oetf(0.018 + 1e-6);
        assert!((below - above).abs() < 1e-3);
    }
}
