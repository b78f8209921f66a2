use winit::window::Window;

use crate::color::Rgb;
use crate::device::{Gpu, SurfaceErrorAction};

use super::app::Control;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Fills the whole window with `color` and presents the frame.
    ///
    /// The fill is a single clear pass; the sRGB bytes are linearized for
    /// the clear value and the surface encodes them back on scanout.
    /// Transient surface errors skip the frame; a fatal one returns
    /// [`Control::Exit`].
    pub fn fill(&mut self, color: Rgb) -> Control {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Control::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        Control::Continue
                    }
                };
            }
        };

        let [r, g, b] = color.to_linear();

        // Clear pass — dropped before the encoder is moved into submit().
        {
            let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lumen fill"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a: 1.0 }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        Control::Continue
    }
}
