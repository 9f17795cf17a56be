//! Static table of named target color spaces.
//!
//! Each entry pairs a primaries matrix (linear sRGB to target) with the
//! encoding applied after it. The registry is built once and read-only
//! afterwards; the pipeline indexes into it on every conversion.

use crate::primaries::{self};
use acespick_math::Mat3;

/// Encoding applied after the primaries matrix, one tag per descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// No encoding; output is linear in the target primaries.
    Linear,
    /// ACEScc pure log2 encoding.
    LogCc,
    /// ACEScct log encoding with a linear toe.
    LogCct,
    /// Rec.709 camera OETF.
    VideoOetf,
    /// Passthrough; output equals the display sRGB input.
    Display,
}

/// Named target color spaces the engine can convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Display sRGB, the input encoding (identity conversion).
    DisplaySrgb,
    /// Linear light with sRGB primaries.
    LinearSrgb,
    /// Rec.709 video (sRGB primaries, camera OETF).
    Rec709,
    /// ACEScg: linear, AP1 primaries. The official transform target.
    AcesCg,
    /// ACEScc: log-encoded AP1.
    AcesCc,
    /// ACEScct: log-encoded AP1 with a linear toe.
    AcesCct,
}

impl ColorSpace {
    /// All registered spaces, in registry order.
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::DisplaySrgb,
        ColorSpace::LinearSrgb,
        ColorSpace::Rec709,
        ColorSpace::AcesCg,
        ColorSpace::AcesCc,
        ColorSpace::AcesCct,
    ];

    /// Human-readable name, matching the picker's labels.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::DisplaySrgb => "Display sRGB",
            ColorSpace::LinearSrgb => "Linear sRGB",
            ColorSpace::Rec709 => "Rec.709",
            ColorSpace::AcesCg => "ACEScg",
            ColorSpace::AcesCc => "ACEScc",
            ColorSpace::AcesCct => "ACEScct",
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            ColorSpace::DisplaySrgb => 0,
            ColorSpace::LinearSrgb => 1,
            ColorSpace::Rec709 => 2,
            ColorSpace::AcesCg => 3,
            ColorSpace::AcesCc => 4,
            ColorSpace::AcesCct => 5,
        }
    }
}

/// A registry entry: matrices plus the encoding tag.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpaceDescriptor {
    /// Space name (same as [`ColorSpace::name`]).
    pub name: &'static str,
    /// Linear sRGB to target primaries.
    pub to_target: Mat3,
    /// Target primaries back to linear sRGB (inverse of `to_target`).
    pub to_display_linear: Mat3,
    /// Encoding applied after the matrix.
    pub encoding: Encoding,
}

/// The static color space table.
///
/// Matrices are computed once from fixed chromaticity constants at
/// construction; descriptors never change afterwards.
#[derive(Debug, Clone)]
pub struct ColorSpaceRegistry {
    descriptors: [ColorSpaceDescriptor; 6],
}

impl ColorSpaceRegistry {
    /// Builds the registry.
    pub fn new() -> Self {
        let srgb_to_ap1 = primaries::srgb_to_ap1_matrix();
        let ap1_to_srgb = srgb_to_ap1.inverse().unwrap_or(Mat3::IDENTITY);

        let entry = |space: ColorSpace, to_target: Mat3, encoding: Encoding| {
            ColorSpaceDescriptor {
                name: space.name(),
                to_target,
                to_display_linear: to_target.inverse().unwrap_or(Mat3::IDENTITY),
                encoding,
            }
        };

        let ap1 = |space: ColorSpace, encoding: Encoding| ColorSpaceDescriptor {
            name: space.name(),
            to_target: srgb_to_ap1,
            to_display_linear: ap1_to_srgb,
            encoding,
        };

        Self {
            descriptors: [
                entry(ColorSpace::DisplaySrgb, Mat3::IDENTITY, Encoding::Display),
                entry(ColorSpace::LinearSrgb, Mat3::IDENTITY, Encoding::Linear),
                // Rec.709 shares the sRGB primaries; only the curve differs
                entry(ColorSpace::Rec709, Mat3::IDENTITY, Encoding::VideoOetf),
                ap1(ColorSpace::AcesCg, Encoding::Linear),
                ap1(ColorSpace::AcesCc, Encoding::LogCc),
                ap1(ColorSpace::AcesCct, Encoding::LogCct),
            ],
        }
    }

    /// Looks up the descriptor for a space.
    #[inline]
    pub fn get(&self, space: ColorSpace) -> &ColorSpaceDescriptor {
        &self.descriptors[space.index()]
    }
}

impl Default for ColorSpaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
