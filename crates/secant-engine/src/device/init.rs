/// Parameters for [`Gpu::new`](super::Gpu::new).
///
/// The defaults ask for nothing beyond what a downlevel adapter offers: the
/// renderer only draws colored lines and triangles.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when one exists. With `false`, a linear
    /// format is preferred so colors reach the display unconverted.
    pub prefer_srgb: bool,

    pub power_preference: wgpu::PowerPreference,
    pub present_mode: wgpu::PresentMode,

    /// Falls back to a supported mode when `None` or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    #[inline]
    pub fn with_srgb(mut self, prefer_srgb: bool) -> Self {
        self.prefer_srgb = prefer_srgb;
        self
    }
}
