//! Color space conversion engine for display sRGB picks.
//!
//! Converts 8-bit display sRGB colors into ACES-family and video color
//! spaces. The ACES targets run the official OCIO LUT chain when the
//! shaper LUTs are loaded and an analytic approximation otherwise.
//!
//! # Target spaces
//!
//! | Space | Primaries | Encoding |
//! |-------|-----------|----------|
//! | Display sRGB | sRGB | passthrough |
//! | Linear sRGB | sRGB | linear |
//! | Rec.709 | sRGB | camera OETF |
//! | ACEScg | AP1 | linear |
//! | ACEScc | AP1 | log2 |
//! | ACEScct | AP1 | log2 + toe |
//!
//! # Example
//!
//! ```rust
//! use acespick_color::{ColorSpace, TransformPipeline, hex};
//!
//! let pipeline = TransformPipeline::new();
//! let rgb = hex::parse("#4080c0").unwrap();
//! let acescg = pipeline.convert(rgb, ColorSpace::AcesCg);
//! assert!(acescg.iter().all(|c| c.is_finite()));
//! ```

#![warn(missing_docs)]

mod error;
mod loader;
mod pipeline;
mod registry;

pub mod hex;
pub mod primaries;

pub use error::{ColorError, ColorResult, LoadError, ResourceError};
pub use loader::{FileLutSource, LutResource, LutSource};
pub use pipeline::{LutState, TransformPipeline, nuke_inverse_odt};
pub use primaries::AP0_TO_AP1;
pub use registry::{ColorSpace, ColorSpaceDescriptor, ColorSpaceRegistry, Encoding};
