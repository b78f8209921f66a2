use crate::time::{MonotonicTime, TimeSource, TransitionClock};

use super::{CyclerConfigError, Rgb};

/// Returns `(var + add) % modulus`.
#[inline]
pub fn add_mod(var: usize, add: usize, modulus: usize) -> usize {
    (var + add) % modulus
}

/// Cycles through a fixed palette over time, one linear transition per
/// `duration` seconds, wrapping at the end.
///
/// The cycler stores the per-channel delta toward the next entry instead of
/// recomputing it every frame, and collapses any number of elapsed
/// transition periods into a single [`advance`](Self::advance) plus a
/// carried remainder, so sampling stays correct across arbitrary gaps
/// (minimized window, debugger pause).
#[derive(Debug, Clone)]
pub struct ColorCycler<S: TimeSource = MonotonicTime> {
    palette: Vec<Rgb>,
    duration: f64,
    index: usize,
    delta: [i16; 3],
    clock: TransitionClock<S>,
}

impl ColorCycler<MonotonicTime> {
    /// Creates a cycler driven by wall-clock time, starting at `palette[0]`.
    ///
    /// Fails if the palette is empty or `duration` is not strictly positive.
    /// A single-entry palette is accepted and produces a constant color.
    pub fn new(palette: Vec<Rgb>, duration: f64) -> Result<Self, CyclerConfigError> {
        Self::with_source(palette, duration, MonotonicTime::new())
    }
}

impl<S: TimeSource> ColorCycler<S> {
    /// Like [`ColorCycler::new`], but reading time through `source`.
    pub fn with_source(
        palette: Vec<Rgb>,
        duration: f64,
        source: S,
    ) -> Result<Self, CyclerConfigError> {
        if palette.is_empty() {
            return Err(CyclerConfigError::EmptyPalette);
        }
        if !(duration > 0.0) {
            return Err(CyclerConfigError::NonPositiveDuration);
        }

        let mut clock = TransitionClock::new(source);
        clock.reset();

        let mut cycler = Self {
            palette,
            duration,
            index: 0,
            delta: [0; 3],
            clock,
        };
        cycler.recompute_delta();
        Ok(cycler)
    }

    /// Index of the palette entry the current transition starts from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the current index forward by `steps`, wrapping, and recomputes
    /// the delta toward the new next entry. No timing side effects.
    pub fn advance(&mut self, steps: u64) {
        let n = self.palette.len();
        self.index = add_mod(self.index, (steps % n as u64) as usize, n);
        self.recompute_delta();
    }

    fn recompute_delta(&mut self) {
        let from = self.palette[self.index].channels();
        let to = self.palette[add_mod(self.index, 1, self.palette.len())].channels();
        for c in 0..3 {
            self.delta[c] = to[c] as i16 - from[c] as i16;
        }
    }

    /// Returns the color for the current instant.
    ///
    /// If elapsed time has passed the transition boundary, the crossed
    /// periods collapse into one index advance and the fractional remainder
    /// is carried over (floored division, so the remainder is always
    /// non-negative). Elapsed exactly at the boundary does not advance yet;
    /// it yields the next entry's color and the advance happens on the
    /// following call.
    ///
    /// Channel interpolation rounds half away from zero (`f64::round`) and
    /// is clamped to `[0, 255]` against floating-point drift near the
    /// boundaries.
    pub fn sample(&mut self) -> Rgb {
        let mut elapsed = self.clock.elapsed();
        if elapsed > self.duration {
            let steps = (elapsed / self.duration).floor() as u64;
            let remainder = elapsed.rem_euclid(self.duration);
            self.advance(steps);
            self.clock.rewind_by(remainder);
            elapsed = remainder;
        }

        let fraction = elapsed / self.duration;
        let base = self.palette[self.index].channels();
        let mut out = [0u8; 3];
        for c in 0..3 {
            let value = (base[c] as f64 + self.delta[c] as f64 * fraction).round();
            out[c] = value.clamp(0.0, 255.0) as u8;
        }
        Rgb::new(out[0], out[1], out[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualTime;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn cycler(palette: &[Rgb], duration: f64) -> (ManualTime, ColorCycler<ManualTime>) {
        let time = ManualTime::new();
        let cycler = ColorCycler::with_source(palette.to_vec(), duration, time.clone())
            .expect("valid test configuration");
        (time, cycler)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn starts_at_first_entry() {
        let (_, mut cycler) = cycler(&[Rgb::new(10, 20, 30), WHITE], 0.8);
        assert_eq!(cycler.sample(), Rgb::new(10, 20, 30));
        assert_eq!(cycler.index(), 0);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = ColorCycler::new(vec![], 0.8).unwrap_err();
        assert_eq!(err, CyclerConfigError::EmptyPalette);
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        for duration in [0.0, -1.0] {
            let err = ColorCycler::new(vec![BLACK, WHITE], duration).unwrap_err();
            assert_eq!(err, CyclerConfigError::NonPositiveDuration);
        }
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn midpoint_rounds_half_away_from_zero() {
        let (time, mut cycler) = cycler(&[BLACK, WHITE], 1.0);
        time.set(0.5);
        // 127.5 rounds away from zero.
        assert_eq!(cycler.sample(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn interpolates_linearly_within_first_transition() {
        let (time, mut cycler) = cycler(&[BLACK, WHITE], 1.0);
        for percent in 0..100 {
            let t = percent as f64 / 100.0;
            time.set(t);
            let sampled = cycler.sample();
            let expected = (255.0 * t).round() as i32;
            assert!((sampled.r as i32 - expected).abs() <= 1, "t={t}");
            assert_eq!(sampled.g, sampled.r);
            assert_eq!(sampled.b, sampled.r);
        }
    }

    #[test]
    fn boundary_sample_yields_next_color_without_advancing() {
        let (time, mut cycler) = cycler(&[BLACK, WHITE], 1.0);
        time.set(1.0);
        assert_eq!(cycler.sample(), WHITE);
        assert_eq!(cycler.index(), 0);

        // The first sample past the boundary advances and flips the delta.
        time.advance(0.0001);
        cycler.sample();
        assert_eq!(cycler.index(), 1);
        assert_eq!(cycler.delta, [-255, -255, -255]);
    }

    // ── advancing ─────────────────────────────────────────────────────────

    #[test]
    fn full_cycle_advance_is_identity() {
        let palette = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)];
        let (_, mut cycler) = cycler(&palette, 0.8);
        cycler.advance(1);
        let (index, delta) = (cycler.index(), cycler.delta);

        cycler.advance(palette.len() as u64);
        assert_eq!(cycler.index(), index);
        assert_eq!(cycler.delta, delta);
    }

    #[test]
    fn large_gap_collapses_into_one_advance() {
        let palette = [
            Rgb::new(0, 0, 0),
            Rgb::new(100, 0, 0),
            Rgb::new(0, 100, 0),
        ];
        let (time, mut cycler) = cycler(&palette, 1.0);

        // 5 full periods plus half a transition: index (0 + 5) % 3 = 2,
        // halfway from palette[2] toward palette[0].
        time.set(5.5);
        assert_eq!(cycler.sample(), Rgb::new(0, 50, 0));
        assert_eq!(cycler.index(), 2);
    }

    #[test]
    fn remainder_is_carried_after_crossing() {
        let (time, mut cycler) = cycler(&[BLACK, WHITE], 1.0);
        time.set(1.25);
        cycler.sample();

        // Clock was rewound to the 0.25 remainder; a further 0.25 lands at
        // the midpoint of the second transition (white back to black).
        time.advance(0.25);
        assert_eq!(cycler.sample(), Rgb::new(128, 128, 128));
        assert_eq!(cycler.index(), 1);
    }

    // ── degenerate palettes ───────────────────────────────────────────────

    #[test]
    fn single_entry_palette_is_constant() {
        let only = Rgb::new(12, 200, 34);
        let (time, mut cycler) = cycler(&[only], 0.5);
        for t in [0.0, 0.3, 0.5, 2.7, 1000.0] {
            time.set(t);
            assert_eq!(cycler.sample(), only);
        }
    }

    // ── add_mod ───────────────────────────────────────────────────────────

    #[test]
    fn add_mod_wraps() {
        assert_eq!(add_mod(6, 1, 7), 0);
        assert_eq!(add_mod(3, 10, 7), 6);
        assert_eq!(add_mod(0, 0, 1), 0);
    }
}
