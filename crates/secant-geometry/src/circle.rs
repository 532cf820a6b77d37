use core::f32::consts::TAU;
use core::iter::FusedIterator;

use super::Point2;

/// Number of points used to approximate a circle when the caller has no preference.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 100;

/// Circle described by a center and a radius.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle centered on `center` passing through `rim`.
    #[inline]
    pub fn through(center: Point2, rim: Point2) -> Self {
        Self::new(center, center.distance(rim))
    }

    /// Polygonal approximation, see [`circle_points`].
    #[inline]
    pub fn points(self, segments: usize) -> CirclePoints {
        circle_points(self.center, self.radius, segments)
    }
}

/// Returns `segments` points evenly spaced by angle around `center`.
///
/// The first point sits at angle 0, i.e. `(center.x + radius, center.y)`.
/// The last point is not repeated; drawing a closed loop is up to the caller.
#[inline]
pub fn circle_points(center: Point2, radius: f32, segments: usize) -> CirclePoints {
    CirclePoints {
        center,
        radius,
        segments,
        index: 0,
    }
}

/// Lazy, one-shot iterator over the vertices of a tessellated circle.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    center: Point2,
    radius: f32,
    segments: usize,
    index: usize,
}

impl Iterator for CirclePoints {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.index >= self.segments {
            return None;
        }

        let theta = (self.index as f32 / self.segments as f32) * TAU;
        self.index += 1;

        Some(Point2::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y + self.radius * theta.sin(),
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.segments - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for CirclePoints {}

impl FusedIterator for CirclePoints {}
