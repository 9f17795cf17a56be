//! # acespick-math
//!
//! Small linear-algebra layer for the acespick color engine: a row-major
//! 3x3 matrix applied to RGB triples, plus the Bradford chromatic
//! adaptation used when bridging D65 display spaces to D60 ACES spaces.
//!
//! Everything here is pure and allocation-free; matrices are built once
//! at registry construction and only read afterwards.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
pub mod adapt;

pub use mat3::Mat3;
pub use adapt::{BRADFORD, D60, D65, adapt_matrix};
