/// Loop-relevant notifications, translated from the platform event stream.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopEvent {
    /// Window-close requested.
    Quit,
    /// New inner size in physical pixels.
    Resized(u32, u32),
    /// The fullscreen key was pressed.
    FullscreenToggleRequested,
}

/// What the runtime must do after applying a [`LoopEvent`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Directive {
    Exit,
    /// Reconfigure the surface to the clamped size.
    Reconfigure(u32, u32),
    EnterFullscreen,
    /// Restore the remembered windowed size.
    LeaveFullscreen(u32, u32),
}

/// Pure window bookkeeping: minimum-size clamping and the windowed size to
/// restore when leaving fullscreen.
///
/// Kept free of platform handles so the transitions are testable; the
/// runtime applies each returned [`Directive`] to the real window.
#[derive(Debug, Clone)]
pub struct WindowState {
    min_size: (u32, u32),
    windowed_size: (u32, u32),
    fullscreen: bool,
}

impl WindowState {
    pub fn new(initial_size: (u32, u32), min_size: (u32, u32)) -> Self {
        Self {
            min_size,
            windowed_size: (initial_size.0.max(min_size.0), initial_size.1.max(min_size.1)),
            fullscreen: false,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Applies one event and returns the runtime's next action.
    ///
    /// Each resize dimension is clamped up to its minimum independently.
    /// Resizes arriving while fullscreen (the mode switch itself reports
    /// one) do not overwrite the remembered windowed size.
    pub fn apply(&mut self, event: LoopEvent) -> Directive {
        match event {
            LoopEvent::Quit => Directive::Exit,

            LoopEvent::Resized(width, height) => {
                let width = width.max(self.min_size.0);
                let height = height.max(self.min_size.1);
                if !self.fullscreen {
                    self.windowed_size = (width, height);
                }
                Directive::Reconfigure(width, height)
            }

            LoopEvent::FullscreenToggleRequested => {
                self.fullscreen = !self.fullscreen;
                if self.fullscreen {
                    Directive::EnterFullscreen
                } else {
                    let (width, height) = self.windowed_size;
                    Directive::LeaveFullscreen(width, height)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: (u32, u32) = (480, 360);

    fn state() -> WindowState {
        WindowState::new(MIN, MIN)
    }

    // ── resize clamping ───────────────────────────────────────────────────

    #[test]
    fn resize_above_minimum_passes_through() {
        let mut state = state();
        assert_eq!(state.apply(LoopEvent::Resized(800, 600)), Directive::Reconfigure(800, 600));
    }

    #[test]
    fn resize_clamps_each_dimension_independently() {
        let mut state = state();
        assert_eq!(state.apply(LoopEvent::Resized(500, 100)), Directive::Reconfigure(500, 360));
        assert_eq!(state.apply(LoopEvent::Resized(100, 500)), Directive::Reconfigure(480, 500));
    }

    // ── fullscreen toggle ─────────────────────────────────────────────────

    #[test]
    fn toggle_enters_then_restores_last_windowed_size() {
        let mut state = state();
        state.apply(LoopEvent::Resized(800, 600));

        assert_eq!(state.apply(LoopEvent::FullscreenToggleRequested), Directive::EnterFullscreen);
        assert!(state.is_fullscreen());

        assert_eq!(
            state.apply(LoopEvent::FullscreenToggleRequested),
            Directive::LeaveFullscreen(800, 600)
        );
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn fullscreen_resize_does_not_clobber_windowed_size() {
        let mut state = state();
        state.apply(LoopEvent::Resized(640, 480));
        state.apply(LoopEvent::FullscreenToggleRequested);

        // The monitor-sized resize reported on entering fullscreen.
        assert_eq!(
            state.apply(LoopEvent::Resized(1920, 1080)),
            Directive::Reconfigure(1920, 1080)
        );

        assert_eq!(
            state.apply(LoopEvent::FullscreenToggleRequested),
            Directive::LeaveFullscreen(640, 480)
        );
    }

    // ── quit ──────────────────────────────────────────────────────────────

    #[test]
    fn quit_exits() {
        assert_eq!(state().apply(LoopEvent::Quit), Directive::Exit);
    }
}
