use super::Point2;

/// Drawable rectangle inside a window, in pixels.
///
/// Screen space has its origin at the window's top-left with +Y down. NDC has
/// its origin at the viewport center with +Y up and spans `[-1, 1]` on both
/// axes. `x`/`y` place the viewport inside the window; they are zero unless
/// the viewport was letterboxed with [`fit_aspect`](Self::fit_aspect).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Largest centered sub-rectangle with `width / height == aspect`.
    ///
    /// The unused band is split evenly on both sides. A non-positive or
    /// non-finite `aspect` returns the viewport unchanged.
    pub fn fit_aspect(self, aspect: f32) -> Viewport {
        if !(aspect > 0.0 && aspect.is_finite()) || !self.is_valid() {
            return self;
        }

        let (width, height) = if self.width > self.height * aspect {
            (self.height * aspect, self.height)
        } else {
            (self.width, self.width / aspect)
        };

        Viewport {
            x: self.x + (self.width - width) * 0.5,
            y: self.y + (self.height - height) * 0.5,
            width,
            height,
        }
    }

    /// Screen position → NDC. Positions outside the viewport map outside
    /// `[-1, 1]` without clamping.
    #[inline]
    pub fn to_ndc(self, screen: Point2) -> Point2 {
        screen_to_ndc(screen.x - self.x, screen.y - self.y, self.width, self.height)
    }

}

/// Maps a pixel position to normalized device coordinates.
///
/// No bounds checking is performed; a zero-sized viewport yields non-finite
/// output (callers should check [`Viewport::is_valid`] first).
#[inline]
pub fn screen_to_ndc(
    screen_x: f32,
    screen_y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Point2 {
    Point2::new(
        (screen_x / viewport_width) * 2.0 - 1.0,
        -((screen_y / viewport_height) * 2.0 - 1.0),
    )
}

/// NDC → screen position. Inverse of [`Viewport::to_ndc`].
#[inline]
pub fn ndc_to_screen(ndc: Point2, viewport: Viewport) -> Point2 {
    Point2::new(
        viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
        viewport.y + (1.0 - ndc.y) * 0.5 * viewport.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn corners_map_to_ndc_corners() {
        let vp = Viewport::new(700.0, 700.0);
        assert_eq!(vp.to_ndc(Point2::new(0.0, 0.0)), Point2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Point2::new(700.0, 700.0)), Point2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(Point2::new(350.0, 350.0)), Point2::new(0.0, 0.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let top = screen_to_ndc(10.0, 0.0, 100.0, 200.0);
        let bottom = screen_to_ndc(10.0, 200.0, 100.0, 200.0);
        assert!(top.y > bottom.y);
    }

    #[test]
    fn outside_viewport_is_not_clamped() {
        let ndc = screen_to_ndc(-50.0, 250.0, 100.0, 200.0);
        assert_eq!(ndc, Point2::new(-2.0, -1.5));
    }

    #[test]
    fn round_trips_inside_viewport() {
        let vp = Viewport::new(640.0, 480.0);
        for &(x, y) in &[(0.0, 0.0), (1.0, 479.0), (320.0, 240.0), (639.5, 12.25), (100.0, 400.0)] {
            let screen = Point2::new(x, y);
            let back = ndc_to_screen(vp.to_ndc(screen), vp);
            assert!(back.distance(screen) <= EPS * 640.0, "{screen:?} -> {back:?}");
        }
    }

    #[test]
    fn zero_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 100.0).is_valid());
        assert!(!Viewport::new(100.0, f32::INFINITY).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }

    #[test]
    fn fit_aspect_letterboxes_wide_window() {
        let sq = Viewport::new(700.0, 350.0).fit_aspect(1.0);
        assert_eq!(
            sq,
            Viewport {
                x: 175.0,
                y: 0.0,
                width: 350.0,
                height: 350.0
            }
        );

        let tall = Viewport::new(300.0, 500.0).fit_aspect(1.0);
        assert_eq!((tall.x, tall.y, tall.width, tall.height), (0.0, 100.0, 300.0, 300.0));
    }

    #[test]
    fn fit_aspect_ignores_bad_ratio() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(vp.fit_aspect(0.0), vp);
        assert_eq!(vp.fit_aspect(f32::NAN), vp);
    }

    #[test]
    fn letterboxed_circle_stays_round_on_screen() {
        use crate::Circle;

        let vp = Viewport::new(700.0, 350.0).fit_aspect(1.0);
        let center_px = Point2::new(350.0, 175.0);
        let rim_px = Point2::new(450.0, 175.0);

        let circle = Circle::through(vp.to_ndc(center_px), vp.to_ndc(rim_px));
        let right = ndc_to_screen(circle.center + Point2::new(circle.radius, 0.0), vp);
        let top = ndc_to_screen(circle.center + Point2::new(0.0, circle.radius), vp);

        let horizontal = right.distance(center_px);
        let vertical = top.distance(center_px);
        assert!((horizontal - 100.0).abs() < 1e-3, "horizontal = {horizontal}");
        assert!((vertical - 100.0).abs() < 1e-3, "vertical = {vertical}");
    }

    #[test]
    fn offset_viewport_round_trips() {
        let vp = Viewport::new(900.0, 500.0).fit_aspect(1.0);
        let screen = Point2::new(420.0, 77.0);
        assert!(ndc_to_screen(vp.to_ndc(screen), vp).distance(screen) <= 1e-3);
        assert_eq!(vp.to_ndc(Point2::new(450.0, 250.0)), Point2::new(0.0, 0.0));
    }
}
