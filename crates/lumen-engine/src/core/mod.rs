//! Engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: a per-frame callback plus a context exposing the one drawing
//! primitive the engine offers, a full-window fill.

mod app;
mod ctx;

pub use app::{App, Control};
pub use ctx::FrameCtx;
