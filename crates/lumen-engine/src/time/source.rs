use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic time reading in fractional seconds.
///
/// Implementations must be non-decreasing across calls, with millisecond
/// resolution or better.
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Wall-clock source backed by `Instant`, reading seconds since the source
/// was created.
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven time source, starting at 0.0.
///
/// Clones share the same underlying reading, so a test can hold one handle
/// while a clock owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTime(Rc<Cell<f64>>);

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the absolute reading.
    pub fn set(&self, seconds: f64) {
        self.0.set(seconds);
    }

    /// Moves the reading forward.
    pub fn advance(&self, seconds: f64) {
        self.0.set(self.0.get() + seconds);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.0.get()
    }
}
