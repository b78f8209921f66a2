use anyhow::Result;

use lumen_engine::color::{ColorCycler, Rgb};
use lumen_engine::core::{App, Control, FrameCtx};
use lumen_engine::logging;
use lumen_engine::window::{Runtime, RuntimeConfig};

/// Spectral palette the background cycles through, red to violet.
const PALETTE: [Rgb; 7] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(75, 0, 130),
    Rgb::new(148, 0, 211),
];

/// Seconds to morph from one palette color to the next.
const TRANSITION_SECS: f64 = 0.8;

/// Minimum (and initial) window size, physical pixels.
const MIN_SIZE: (u32, u32) = (480, 360);

struct Rainbow {
    cycler: ColorCycler,
}

impl App for Rainbow {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Control {
        ctx.fill(self.cycler.sample())
    }
}

fn main() -> Result<()> {
    logging::init_logging();

    // Configuration errors abort here, before any window exists.
    let cycler = ColorCycler::new(PALETTE.to_vec(), TRANSITION_SECS)?;

    log::info!(
        "cycling {} colors, {TRANSITION_SECS}s per transition (F11 toggles fullscreen)",
        PALETTE.len()
    );

    let config = RuntimeConfig {
        title: "Rainbow :D".to_string(),
        initial_size: MIN_SIZE,
        min_size: MIN_SIZE,
    };

    Runtime::run(config, Rainbow { cycler })
}
