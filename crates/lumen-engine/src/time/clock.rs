use super::TimeSource;

/// Elapsed-time clock for color transitions.
///
/// Holds one optional reference timestamp. An unstarted clock reads 0
/// elapsed seconds. The reference only moves forward, or is rewound by a
/// bounded remainder via [`rewind_by`](Self::rewind_by).
#[derive(Debug, Clone)]
pub struct TransitionClock<S> {
    source: S,
    reference: Option<f64>,
}

impl<S: TimeSource> TransitionClock<S> {
    /// Creates an unstarted clock reading through `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            reference: None,
        }
    }

    /// Sets the reference timestamp to the current time; elapsed becomes 0.
    pub fn reset(&mut self) {
        self.reference = Some(self.source.now());
    }

    /// Sets the reference to `now - seconds`, so the next [`elapsed`](Self::elapsed)
    /// reads at least `seconds`. Used to carry over the fractional remainder
    /// after a transition boundary is crossed.
    pub fn rewind_by(&mut self, seconds: f64) {
        debug_assert!(seconds >= 0.0);
        self.reference = Some(self.source.now() - seconds);
    }

    /// Seconds since the last reset, or 0.0 if the clock was never started.
    pub fn elapsed(&self) -> f64 {
        match self.reference {
            Some(reference) => self.source.now() - reference,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualTime;

    #[test]
    fn unstarted_clock_reads_zero() {
        let time = ManualTime::new();
        time.set(12.5);
        let clock = TransitionClock::new(time);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn reset_zeroes_elapsed() {
        let time = ManualTime::new();
        let mut clock = TransitionClock::new(time.clone());
        time.set(3.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);

        time.advance(1.25);
        assert_eq!(clock.elapsed(), 1.25);
    }

    #[test]
    fn rewind_preloads_elapsed() {
        let time = ManualTime::new();
        let mut clock = TransitionClock::new(time.clone());
        clock.reset();
        clock.rewind_by(0.4);
        assert_eq!(clock.elapsed(), 0.4);

        time.advance(0.1);
        assert!((clock.elapsed() - 0.5).abs() < 1e-12);
    }
}
