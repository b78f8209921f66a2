use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App, Control, FrameCtx};
use crate::device::Gpu;

use super::state::{Directive, LoopEvent, WindowState};

/// Window/runtime configuration, in physical pixels.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: (u32, u32),
    pub min_size: (u32, u32),
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lumen".to_string(),
            initial_size: (480, 360),
            min_size: (480, 360),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the event loop until a quit request or a
    /// fatal surface error. Returns once the loop has terminated and all
    /// display resources are released.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = Handler::new(config, app);

        event_loop
            .run_app(&mut handler)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Handler<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,
    state: WindowState,
    entry: Option<WindowEntry>,
    exit_requested: bool,
}

impl<A> Handler<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        let state = WindowState::new(config.initial_size, config.min_size);
        Self {
            config,
            app,
            state,
            entry: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        // Drop the window entry first so the surface and window are released
        // before the loop unwinds.
        self.entry = None;
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.config.initial_size;
        let (min_width, min_height) = self.config.min_size;

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_min_inner_size(PhysicalSize::new(min_width, min_height));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w)).expect("GPU initialization failed for window")
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }

    fn apply_directive(&mut self, event_loop: &ActiveEventLoop, directive: Directive) {
        if directive == Directive::Exit {
            self.request_exit(event_loop);
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        match directive {
            Directive::Exit => {}

            Directive::Reconfigure(width, height) => {
                entry.with_gpu_mut(|gpu| gpu.resize(PhysicalSize::new(width, height)));
                entry.with_window(|w| w.request_redraw());
            }

            Directive::EnterFullscreen => {
                // Borderless fullscreen on the current monitor, at its
                // native resolution.
                entry.with_window(|w| w.set_fullscreen(Some(Fullscreen::Borderless(None))));
            }

            Directive::LeaveFullscreen(width, height) => {
                entry.with_window(|w| {
                    w.set_fullscreen(None);
                    let _ = w.request_inner_size(PhysicalSize::new(width, height));
                });
            }
        }
    }
}

impl<A> ApplicationHandler for Handler<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit(event_loop);
            return;
        }

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces the loop to the
        // display refresh.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(id) = self.entry.as_ref().map(|e| e.with_window(|w| w.id())) else {
            return;
        };
        if id != window_id {
            return;
        }

        if let Some(loop_event) = translate_event(&event) {
            let directive = self.state.apply(loop_event);
            self.apply_directive(event_loop, directive);
            return;
        }

        match &event {
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                // Split borrows to avoid `self` capture inside `ouroboros`
                // closures.
                let (app, entry) = (&mut self.app, &mut self.entry);

                let mut control = Control::Continue;
                if let Some(entry) = entry {
                    entry.with_mut(|fields| {
                        let mut ctx = FrameCtx {
                            window: fields.window,
                            gpu: fields.gpu,
                        };
                        control = app.on_frame(&mut ctx);
                    });
                }

                if control == Control::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

/// Maps the raw platform event stream onto the loop-event set.
///
/// The fullscreen toggle is bound to F11, matching the original key binding;
/// key repeats are ignored so holding the key toggles once.
fn translate_event(event: &WindowEvent) -> Option<LoopEvent> {
    match event {
        WindowEvent::CloseRequested => Some(LoopEvent::Quit),

        WindowEvent::Resized(size) => Some(LoopEvent::Resized(size.width, size.height)),

        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed
                && !event.repeat
                && event.physical_key == PhysicalKey::Code(KeyCode::F11) =>
        {
            Some(LoopEvent::FullscreenToggleRequested)
        }

        _ => None,
    }
}
