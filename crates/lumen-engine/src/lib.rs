//! Lumen engine crate.
//!
//! Owns the platform + GPU runtime pieces (window loop, surface management)
//! and the palette-cycling color logic driven by elapsed time.

pub mod color;
pub mod core;
pub mod device;
pub mod logging;
pub mod time;
pub mod window;
