use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
    /// Aspect lock from `RuntimeConfig`.
    pub aspect_ratio: Option<f32>,
}

impl<'a> WindowCtx<'a> {
    /// Drawable area in logical pixels, letterboxed when an aspect is locked.
    ///
    /// Pointer positions map to NDC through this viewport, so they line up
    /// with what the renderer draws.
    pub fn viewport(&self) -> Viewport {
        let phys = self.window.inner_size();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(self.window.scale_factor());
        letterbox(
            Viewport::new(logi.width as f32, logi.height as f32),
            self.aspect_ratio,
        )
    }
}

fn letterbox(full: Viewport, aspect_ratio: Option<f32>) -> Viewport {
    match aspect_ratio {
        Some(aspect) => full.fit_aspect(aspect),
        None => full,
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    /// Held buttons and pointer position after this frame's events.
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// Surface errors skip the frame; only a fatal one returns `Exit`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.viewport();

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        // Try again on the next event.
                        self.window.window.request_redraw();
                        AppControl::Continue
                    }
                };
            }
        };

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
        );

        let texture = frame.surface_texture.texture.size();
        let surface_viewport = letterbox(
            Viewport::new(texture.width as f32, texture.height as f32),
            self.window.aspect_ratio,
        );

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, surface_viewport);
            target.clear(clear);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
