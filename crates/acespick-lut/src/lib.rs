//! # acespick-lut
//!
//! Look-up tables for the acespick color engine: the Sony Pictures
//! Imageworks text formats (`.spi3d`, `.spi1d`) parsed into dense float
//! tables, plus the trilinear / linear samplers that read them.
//!
//! # LUT Types
//!
//! - [`Lut3D`] - cubic RGB grid, trilinear interpolation
//! - [`Lut1D`] - per-channel curve over a declared domain, linear
//!   interpolation
//!
//! # Usage
//!
//! ```rust
//! use acespick_lut::Lut3D;
//!
//! let lut = Lut3D::identity(33);
//! let rgb = lut.sample(0.5, 0.3, 0.2);
//! ```
//!
//! Tables are immutable once constructed; sampling takes `&self`, never
//! fails, and clamps its inputs, so tables can be shared freely across
//! threads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut1d;
mod lut3d;
pub mod spi;

pub use error::{LutError, LutResult};
pub use lut1d::Lut1D;
pub use lut3d::Lut3D;
pub use spi::{parse_spi1d, parse_spi3d, read_spi1d, read_spi3d};
