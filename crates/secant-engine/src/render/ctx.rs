use crate::coords::Viewport;
use crate::paint::Color;

/// What a renderer needs from the device for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical pixels; used to size screen-space primitives.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
        }
    }
}

/// The frame's encoder and color attachment.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    /// Drawable area in physical pixels. Clears cover the whole attachment;
    /// load passes are restricted to this rectangle.
    pub viewport: Viewport,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        viewport: Viewport,
    ) -> Self {
        Self {
            encoder,
            color_view,
            viewport,
        }
    }

    /// Records a pass that only clears the attachment.
    pub fn clear(&mut self, color: Color) {
        let _pass = self.begin_pass("secant clear", wgpu::LoadOp::Clear(color.to_wgpu()));
    }

    /// Begins a pass that draws over the existing contents, mapped onto `viewport`.
    pub fn load_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        let vp = self.viewport;
        let mut pass = self.begin_pass(label, wgpu::LoadOp::Load);
        if vp.is_valid() {
            pass.set_viewport(vp.x, vp.y, vp.width, vp.height, 0.0, 1.0);
        }
        pass
    }

    fn begin_pass(&mut self, label: &str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
