//! # acespick-transfer
//!
//! Transfer functions used by the acespick color pipeline.
//!
//! - **EOTF** (Electro-Optical Transfer Function): encoded -> linear
//! - **OETF** (Opto-Electronic Transfer Function): linear -> encoded
//!
//! | Function | Use | Range |
//! |----------|-----|-------|
//! | [`srgb`] | Display decode/encode | [0, 1] |
//! | [`rec709`] | Video OETF (BT.709 camera curve) | [0, 1] |
//! | [`acescc`] | ACES log grading space (pure log) | Scene-referred |
//! | [`acescct`] | ACES log grading space (linear toe) | Scene-referred |
//!
//! All functions are pure, stateless and applied per channel; none of
//! them can fail for finite inputs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
pub mod rec709;
pub mod acescc;
pub mod acescct;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use acescc::{decode as acescc_decode, encode as acescc_encode};
pub use acescct::{decode as acescct_decode, encode as acescct_encode};
