//! Color primaries and matrix generation.
//!
//! Defines the chromaticity coordinates of the color spaces the picker
//! targets and derives the 3x3 conversion matrices between them. The
//! ACES spaces are D60 referenced while sRGB is D65, so sRGB-to-ACES
//! matrices include a Bradford adaptation step.

use acespick_math::{BRADFORD, D60, D65, Mat3, adapt_matrix};

/// RGB color space primaries definition.
///
/// A color space's gamut given as CIE xy chromaticities for the three
/// primaries and the white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Color space name
    pub name: &'static str,
}

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

/// D60 white point chromaticity (~6000K, used by ACES).
pub const D60_XY: (f32, f32) = (0.32168, 0.33767);

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// ACES AP0 primaries (D60 white point).
///
/// Encoding primaries of ACES 2065-1; wider than the visual gamut.
pub const ACES_AP0: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.0000, 1.0000),
    b: (0.0001, -0.0770),
    w: D60_XY,
    name: "ACES AP0",
};

/// ACES AP1 primaries (D60 white point).
///
/// Working primaries of ACEScg, ACEScc, and ACEScct.
pub const ACES_AP1: Primaries = Primaries {
    r: (0.7130, 0.2930),
    g: (0.1650, 0.8300),
    b: (0.1280, 0.0440),
    w: D60_XY,
    name: "ACES AP1",
};

/// ACES2065-1 (AP0) to ACEScg (AP1) matrix.
///
/// Constants from the OpenColorIO ACES reference config; this is the
/// final step of the official LUT transform chain.
pub const AP0_TO_AP1: Mat3 = Mat3::from_rows([
    [1.4514393161, -0.2365107469, -0.2149285693],
    [-0.0765537734, 1.1762296998, -0.0996759264],
    [0.0083161484, -0.0060324498, 0.9977163014],
]);

/// Converts an xy chromaticity to XYZ with Y = 1.
fn xy_to_xyz(x: f32, y: f32) -> [f32; 3] {
    if y.abs() < 1e-10 {
        [0.0, 0.0, 0.0]
    } else {
        [x / y, 1.0, (1.0 - x - y) / y]
    }
}

fn scale(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Standard derivation: primaries as XYZ columns, scaled so that
/// RGB (1,1,1) lands on the white point.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    let m = Mat3::from_cols([r_xyz, g_xyz, b_xyz]);

    // Solve M * S = W for the per-primary scale factors
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_cols([scale(r_xyz, s[0]), scale(g_xyz, s[1]), scale(b_xyz, s[2])])
}

/// Computes the XYZ to RGB matrix for a set of primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Linear sRGB to ACES AP1 matrix, with D65 to D60 Bradford adaptation.
pub fn srgb_to_ap1_matrix() -> Mat3 {
    let srgb_to_xyz = rgb_to_xyz_matrix(&SRGB);
    let adapt = adapt_matrix(BRADFORD, D65, D60);
    let xyz_to_ap1 = xyz_to_rgb_matrix(&ACES_AP1);
    xyz_to_ap1 * adapt * srgb_to_xyz
}
