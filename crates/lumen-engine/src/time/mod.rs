//! Time subsystem.
//!
//! Provides the monotonic time reading and the transition clock the color
//! cycler is driven by. The `TimeSource` seam keeps the clock deterministic
//! under test.

mod clock;
mod source;

pub use clock::TransitionClock;
pub use source::{ManualTime, MonotonicTime, TimeSource};
