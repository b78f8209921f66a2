//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, translates platform events into
//! the small loop-event set, and drives one frame per redraw.

mod runtime;
mod state;

pub use runtime::{Runtime, RuntimeConfig};
pub use state::{Directive, LoopEvent, WindowState};
