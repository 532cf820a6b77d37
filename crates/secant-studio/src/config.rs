use secant_engine::paint::Color;
use secant_engine::window::RuntimeConfig;
use secant_geometry::DEFAULT_CIRCLE_SEGMENTS;
use winit::dpi::LogicalSize;

/// Colors for everything the studio draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub circle: Color,
    pub segment: Color,
    pub preview: Color,
    pub intersection: Color,
    pub x_axis: Color,
    pub y_axis: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            circle: Color::rgb(1.0, 0.0, 1.0),
            segment: Color::rgb(1.0, 1.0, 1.0),
            preview: Color::rgb(0.5, 0.5, 0.5),
            intersection: Color::rgb(1.0, 1.0, 0.0),
            x_axis: Color::rgb(1.0, 0.0, 0.0),
            y_axis: Color::rgb(0.0, 1.0, 0.0),
        }
    }
}

/// Studio settings. All values are compiled-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub title: String,
    /// Logical pixels.
    pub window_size: (f64, f64),
    pub clear: Color,

    /// Vertices in a drawn circle.
    pub circle_segments: usize,
    /// Half-length of the axes in NDC.
    pub axis_extent: f32,
    /// Intersection marker side, logical pixels.
    pub point_size: f32,

    pub palette: Palette,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Circle & Line Intersection".to_string(),
            window_size: (700.0, 700.0),
            clear: Color::rgb(0.1, 0.2, 0.3),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            axis_extent: 0.85,
            point_size: 10.0,
            palette: Palette::default(),
        }
    }
}

impl StudioConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        let (w, h) = self.window_size;
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(w, h),
            // Letterbox to the initial window shape.
            aspect_ratio: Some((w / h) as f32),
        }
    }
}
