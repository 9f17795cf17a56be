//! 1-dimensional lookup table.
//!
//! A per-channel curve over a declared input domain. In the official
//! ACES chain this is the shaper-to-linear curve that undoes the log
//! encoding the 3D LUT emits.

use crate::{LutError, LutResult};

/// A 1D lookup table with a linear sampler.
///
/// # Structure
///
/// - `size` sample points per component
/// - 1 component (one curve shared by all channels) or 3 components
///   (independent per-channel curves), stored interleaved in file order
/// - Input domain `[domain_min, domain_max]`, values outside clamp to
///   the boundary samples
///
/// # Example
///
/// ```rust
/// use acespick_lut::Lut1D;
///
/// let lut = Lut1D::identity(256);
/// assert!((lut.sample(0.5) - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct Lut1D {
    data: Vec<f32>,
    size: usize,
    components: usize,
    domain_min: f32,
    domain_max: f32,
}

impl Lut1D {
    /// Creates an identity (pass-through) single-component LUT over [0, 1].
    ///
    /// Sizes below 2 cannot form an interpolation segment and are
    /// raised to 2.
    pub fn identity(size: usize) -> Self {
        let size = size.max(2);
        let data = (0..size).map(|i| i as f32 / (size - 1) as f32).collect();
        Self {
            data,
            size,
            components: 1,
            domain_min: 0.0,
            domain_max: 1.0,
        }
    }

    /// Creates a LUT from parsed parts.
    ///
    /// `data` is interleaved in file order: `size` rows of `components`
    /// values each.
    pub fn from_parts(
        data: Vec<f32>,
        size: usize,
        components: usize,
        domain_min: f32,
        domain_max: f32,
    ) -> LutResult<Self> {
        if size == 0 {
            return Err(LutError::InvalidSize("LUT length must be > 0".into()));
        }
        if components != 1 && components != 3 {
            return Err(LutError::InvalidSize(format!(
                "components must be 1 or 3, got {components}"
            )));
        }
        if data.len() != size * components {
            return Err(LutError::InvalidSize(format!(
                "expected {} values ({} x {}), got {}",
                size * components,
                size,
                components,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            components,
            domain_min,
            domain_max,
        })
    }

    /// Number of sample points per component.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored components (1 or 3).
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Input domain bounds.
    #[inline]
    pub fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    /// Samples one component's curve with linear interpolation.
    ///
    /// The input is normalized against the domain, clamped to [0, 1],
    /// and blended between the two nearest samples.
    fn sample_component(&self, value: f32, component: usize) -> f32 {
        let range = self.domain_max - self.domain_min;
        let t = if range.abs() < 1e-10 {
            0.0
        } else {
            ((value - self.domain_min) / range).clamp(0.0, 1.0)
        };

        let scaled = t * (self.size - 1) as f32;
        let i0 = scaled.floor() as usize;
        let i1 = (i0 + 1).min(self.size - 1);
        let frac = scaled - i0 as f32;

        let a = self.data[i0 * self.components + component];
        let b = self.data[i1 * self.components + component];
        a + frac * (b - a)
    }

    /// Samples the curve for a scalar value.
    ///
    /// Uses the first component; for 3-component tables prefer
    /// [`Lut1D::sample_rgb`].
    #[inline]
    pub fn sample(&self, value: f32) -> f32 {
        self.sample_component(value, 0)
    }

    /// Applies the LUT to an RGB triple.
    ///
    /// Single-component tables apply the shared curve to each channel;
    /// 3-component tables use their per-channel curves.
    pub fn sample_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        if self.components == 1 {
            [
                self.sample_component(rgb[0], 0),
                self.sample_component(rgb[1], 0),
                self.sample_component(rgb[2], 0),
            ]
        } else {
            [
                self.sample_component(rgb[0], 0),
                self.sample_component(rgb[1], 1),
                self.sample_component(rgb[2], 2),
            ]
        }
    }
}
