//! The display-sRGB to target-space transform pipeline.
//!
//! Conversion always starts from an 8-bit display sRGB pick. The
//! ACEScg target runs the official OCIO chain: a 3D shaper LUT, a 1D
//! shaper-to-linear LUT, and the AP0 to AP1 matrix. Until the LUTs are
//! loaded (or if loading failed) an analytic approximation stands in,
//! so conversion never blocks and never errors. All other targets use
//! the registry's matrix on sRGB-decoded input, followed by the
//! target's encoding.

use acespick_lut::{Lut1D, Lut3D, parse_spi1d, parse_spi3d};
use acespick_transfer::{acescc, acescct, rec709, srgb};

use crate::error::LoadError;
use crate::loader::{LutResource, LutSource};
use crate::primaries::AP0_TO_AP1;
use crate::registry::{ColorSpace, ColorSpaceRegistry, Encoding};

/// Quadratic x^2.4 gamma-expansion fit, first coefficient.
const INVERSE_ODT_A: f32 = 0.947_867_298_6;
/// Quadratic x^2.4 gamma-expansion fit, second coefficient.
const INVERSE_ODT_B: f32 = 0.052_132_701_4;

/// Approximate inverse of the sRGB output display transform.
///
/// Quadratic fit to the display-to-scene mapping, used for the ACES
/// targets while the LUT chain is unavailable. Exact at 0 and 1,
/// monotonic on [0, 1].
#[inline]
pub fn nuke_inverse_odt(v: f32) -> f32 {
    v * (INVERSE_ODT_A * v + INVERSE_ODT_B)
}

/// LUT chain lifecycle.
///
/// Moves strictly forward: `Unloaded` to `Loading` to either `Ready`
/// or `Failed`. Terminal states are never left, so a failed load does
/// not retry and a completed one is never redone.
#[derive(Debug)]
pub enum LutState {
    /// No load attempted yet; ACES targets use the fallback.
    Unloaded,
    /// A load is in flight; ACES targets use the fallback.
    Loading,
    /// Both LUTs parsed; ACES targets use the full chain.
    Ready {
        /// Display sRGB to shaper space
        lut3d: Lut3D,
        /// Shaper space to linear ACES2065-1
        lut1d: Lut1D,
    },
    /// Loading or parsing failed; ACES targets use the fallback.
    Failed {
        /// Why the load failed, kept for diagnostics
        error: LoadError,
    },
}

/// Converts display sRGB colors into the registered target spaces.
pub struct TransformPipeline {
    state: LutState,
    registry: ColorSpaceRegistry,
}

impl TransformPipeline {
    /// Creates a pipeline in the `Unloaded` state.
    pub fn new() -> Self {
        Self {
            state: LutState::Unloaded,
            registry: ColorSpaceRegistry::new(),
        }
    }

    /// The color space registry backing this pipeline.
    pub fn registry(&self) -> &ColorSpaceRegistry {
        &self.registry
    }

    /// Whether the LUT chain is loaded and in use.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, LutState::Ready { .. })
    }

    /// The retained load error, if the last load failed.
    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.state {
            LutState::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Loads the LUT pair from `source`.
    ///
    /// Both resources are fetched concurrently and the result is
    /// all-or-nothing: only two successful parses reach `Ready`, any
    /// failure lands in `Failed` with the first error retained.
    /// Returns whether the chain is ready afterwards. Calling again
    /// after a terminal state reports the current readiness without
    /// reloading.
    pub async fn load<S: LutSource>(&mut self, source: &S) -> bool {
        match self.state {
            LutState::Unloaded => {}
            LutState::Loading | LutState::Ready { .. } | LutState::Failed { .. } => {
                return self.is_ready();
            }
        }
        self.state = LutState::Loading;

        self.state = match Self::fetch_and_parse(source).await {
            Ok((lut3d, lut1d)) => {
                tracing::debug!(
                    size_3d = lut3d.size(),
                    size_1d = lut1d.size(),
                    "LUT chain loaded"
                );
                LutState::Ready { lut3d, lut1d }
            }
            Err(error) => {
                tracing::warn!(%error, "LUT load failed, using analytic fallback");
                LutState::Failed { error }
            }
        };
        self.is_ready()
    }

    async fn fetch_and_parse<S: LutSource>(source: &S) -> Result<(Lut3D, Lut1D), LoadError> {
        let (text_3d, text_1d) = tokio::try_join!(
            source.fetch(LutResource::Shaper3d),
            source.fetch(LutResource::ShaperToLinear1d),
        )?;
        let lut3d = parse_spi3d(text_3d.as_bytes())?;
        let lut1d = parse_spi1d(text_1d.as_bytes())?;
        Ok((lut3d, lut1d))
    }

    /// Converts a display sRGB color into `target`.
    ///
    /// Input channels are nominally in [0, 1]; out-of-range values are
    /// clamped by the samplers on the LUT path. Conversion is total:
    /// it never fails and never blocks on loading.
    pub fn convert(&self, rgb: [f32; 3], target: ColorSpace) -> [f32; 3] {
        let descriptor = self.registry.get(target);

        // Only ACEScg runs the AP0 chain; every other target takes the
        // registry's matrix on linearized input.
        let linear_target = match target {
            ColorSpace::DisplaySrgb => return rgb,
            ColorSpace::AcesCg => self.display_to_ap1(rgb),
            _ => descriptor.to_target * srgb::eotf_rgb(rgb),
        };

        match descriptor.encoding {
            Encoding::Display | Encoding::Linear => linear_target,
            Encoding::LogCc => acescc::encode_rgb(linear_target),
            Encoding::LogCct => acescct::encode_rgb(linear_target),
            Encoding::VideoOetf => rec709::oetf_rgb(linear_target),
        }
    }

    /// Converts a color in `source` back to display sRGB.
    ///
    /// Inverse of the analytic side of [`TransformPipeline::convert`]:
    /// the encoding is decoded, the matrix inverted, and the sRGB OETF
    /// applied. The ACES direction uses the registry matrix rather
    /// than the LUT chain, which has no exact inverse.
    pub fn convert_back(&self, rgb: [f32; 3], source: ColorSpace) -> [f32; 3] {
        let descriptor = self.registry.get(source);

        let linear_source = match descriptor.encoding {
            Encoding::Display => return rgb,
            Encoding::Linear => rgb,
            Encoding::LogCc => acescc::decode_rgb(rgb),
            Encoding::LogCct => acescct::decode_rgb(rgb),
            Encoding::VideoOetf => rec709::eotf_rgb(rgb),
        };

        srgb::oetf_rgb(descriptor.to_display_linear * linear_source)
    }

    /// Display sRGB to linear AP1, through the LUT chain when ready.
    fn display_to_ap1(&self, rgb: [f32; 3]) -> [f32; 3] {
        match &self.state {
            LutState::Ready { lut3d, lut1d } => {
                let shaper = lut3d.sample(rgb[0], rgb[1], rgb[2]);
                let ap0 = lut1d.sample_rgb(shaper);
                AP0_TO_AP1 * ap0
            }
            _ => {
                let ap0 = [
                    nuke_inverse_odt(rgb[0]),
                    nuke_inverse_odt(rgb[1]),
                    nuke_inverse_odt(rgb[2]),
                ];
                AP0_TO_AP1 * ap0
            }
        }
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
