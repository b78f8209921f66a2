//! Palette-cycling color logic.
//!
//! The cycler interpolates linearly between consecutive palette entries,
//! advancing (and wrapping) as elapsed time crosses transition boundaries.

mod cycler;
mod error;
mod rgb;

pub use cycler::{ColorCycler, add_mod};
pub use error::CyclerConfigError;
pub use rgb::Rgb;
