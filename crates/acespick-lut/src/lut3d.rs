//! 3-dimensional lookup table.
//!
//! Maps RGB input to RGB output through a cubic grid of color values.
//! The official ACES transform uses one of these to go from display
//! sRGB into the log shaper space.

use crate::{LutError, LutResult};

/// A cubic 3D lookup table with a trilinear sampler.
///
/// # Structure
///
/// - `size^3` grid nodes, each holding an RGB output triple
/// - Flat `f32` storage indexed `(b*size^2 + g*size + r)*3 + channel`,
///   so R varies fastest, then G, then B
///
/// # Example
///
/// ```rust
/// use acespick_lut::Lut3D;
///
/// let lut = Lut3D::identity(17);
/// let out = lut.sample(0.5, 0.3, 0.8);
/// assert!((out[0] - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct Lut3D {
    data: Vec<f32>,
    size: usize,
}

impl Lut3D {
    /// Creates an identity (pass-through) 3D LUT.
    ///
    /// Sizes below 2 cannot form an interpolation cell and are raised
    /// to 2.
    pub fn identity(size: usize) -> Self {
        let size = size.max(2);
        let n = (size - 1) as f32;
        let mut data = vec![0.0f32; size * size * size * 3];
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    let idx = (b * size * size + g * size + r) * 3;
                    data[idx] = r as f32 / n;
                    data[idx + 1] = g as f32 / n;
                    data[idx + 2] = b as f32 / n;
                }
            }
        }
        Self { data, size }
    }

    /// Creates a 3D LUT from flat data.
    ///
    /// `data` must hold exactly `size^3 * 3` floats in R-fastest order.
    pub fn from_data(data: Vec<f32>, size: usize) -> LutResult<Self> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!(
                "grid edge must be >= 2, got {size}"
            )));
        }
        let expected = size * size * size * 3;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} floats for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Edge length of the cubic grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw table data, R-fastest flat layout.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Flat index of the first channel at grid position (r, g, b).
    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        (b * self.size * self.size + g * self.size + r) * 3
    }

    /// Grid node value at (r, g, b).
    #[inline]
    fn get(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        let idx = self.index(r, g, b);
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Samples the LUT with trilinear interpolation.
    ///
    /// Inputs are clamped to [0, 1] before lookup. The output is not
    /// clamped; out-of-gamut results are expected and valid.
    ///
    /// Interpolation runs along the R axis first (4 blends), then G (2),
    /// then B (1), per channel independently.
    pub fn sample(&self, r: f32, g: f32, b: f32) -> [f32; 3] {
        let max_index = (self.size - 1) as f32;

        let rs = r.clamp(0.0, 1.0) * max_index;
        let gs = g.clamp(0.0, 1.0) * max_index;
        let bs = b.clamp(0.0, 1.0) * max_index;

        // Lower corner and clamped upper corner per axis
        let r0 = rs.floor() as usize;
        let g0 = gs.floor() as usize;
        let b0 = bs.floor() as usize;
        let r1 = (r0 + 1).min(self.size - 1);
        let g1 = (g0 + 1).min(self.size - 1);
        let b1 = (b0 + 1).min(self.size - 1);

        // Fractional interpolation weights
        let dr = rs - r0 as f32;
        let dg = gs - g0 as f32;
        let db = bs - b0 as f32;

        let c000 = self.get(r0, g0, b0);
        let c100 = self.get(r1, g0, b0);
        let c010 = self.get(r0, g1, b0);
        let c110 = self.get(r1, g1, b0);
        let c001 = self.get(r0, g0, b1);
        let c101 = self.get(r1, g0, b1);
        let c011 = self.get(r0, g1, b1);
        let c111 = self.get(r1, g1, b1);

        let mut result = [0.0f32; 3];
        for ch in 0..3 {
            // Along R
            let c00 = c000[ch] + dr * (c100[ch] - c000[ch]);
            let c01 = c010[ch] + dr * (c110[ch] - c010[ch]);
            let c10 = c001[ch] + dr * (c101[ch] - c001[ch]);
            let c11 = c011[ch] + dr * (c111[ch] - c011[ch]);

            // Along G
            let c0 = c00 + dg * (c01 - c00);
            let c1 = c10 + dg * (c11 - c10);

            // Along B
            result[ch] = c0 + db * (c1 - c0);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_midpoint() {
        let lut = Lut3D::identity(17);
        let result = lut.sample(0.5, 0.3, 0.8);
        assert_relative_eq!(result[0], 0.5, epsilon = 0.01);
        assert_relative_eq!(result[1], 0.3, epsilon = 0.01);
        assert_relative_eq!(result[2], 0.8, epsilon = 0.01);
    }

    #[test]
    fn test_exact_at_grid_nodes() {
        // 2x2x2 cube with distinct corner values: sampling at the node
        // coordinates must return the stored value exactly.
        let lut = Lut3D::identity(2);
        for &r in &[0.0f32, 1.0] {
            for &g in &[0.0f32, 1.0] {
                for &b in &[0.0f32, 1.0] {
                    let out = lut.sample(r, g, b);
                    assert_eq!(out, [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_ramp_cube_center() {
        let lut = Lut3D::identity(2);
        let out = lut.sample(0.5, 0.5, 0.5);
        for ch in 0..3 {
            assert_relative_eq!(out[ch], 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_clamp_out_of_range() {
        let lut = Lut3D::identity(8);
        assert_eq!(lut.sample(-0.5, -2.0, -0.1), lut.sample(0.0, 0.0, 0.0));
        assert_eq!(lut.sample(1.5, 2.0, 99.0), lut.sample(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_continuity() {
        let lut = Lut3D::identity(9);
        let eps = 1e-4;
        for i in 0..50 {
            let t = i as f32 / 50.0;
            let a = lut.sample(t, t, t);
            let b = lut.sample(t + eps, t + eps, t + eps);
            for ch in 0..3 {
                // Identity slope is 1, so the step is O(eps)
                assert!((a[ch] - b[ch]).abs() < 10.0 * eps);
            }
        }
    }

    #[test]
    fn test_identity_degenerate_sizes() {
        for s in [0, 1] {
            let lut = Lut3D::identity(s);
            assert_eq!(lut.size(), 2);
            assert!(lut.data().iter().all(|v| v.is_finite()));
            assert_eq!(lut.sample(1.0, 1.0, 1.0), [1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_from_data_rejects_bad_length() {
        assert!(Lut3D::from_data(vec![0.0; 23], 2).is_err());
        assert!(Lut3D::from_data(vec![0.0; 24], 2).is_ok());
    }
}
