use super::Point2;

/// Bounded line segment between two endpoints.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    #[inline]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    #[inline]
    pub fn direction(self) -> Point2 {
        self.end - self.start
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        let d = self.direction();
        d.dot(d)
    }

    /// Point at parameter `t` along `start + t * (end - start)`.
    ///
    /// `t` is not clamped.
    #[inline]
    pub fn point_at(self, t: f32) -> Point2 {
        self.start + self.direction() * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_endpoints_and_middle() {
        let s = LineSegment::new(Point2::new(-2.0, 1.0), Point2::new(2.0, 3.0));
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(1.0), s.end);
        assert_eq!(s.point_at(0.5), Point2::new(0.0, 2.0));
    }

    #[test]
    fn zero_segment_has_zero_length() {
        let p = Point2::new(1.0, 1.0);
        assert_eq!(LineSegment::new(p, p).length_squared(), 0.0);
    }

    #[test]
    fn length_squared_matches_distance() {
        let s = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(6.0, 8.0));
        assert_eq!(s.length_squared(), 100.0);
        assert_eq!(s.start.distance(s.end), 10.0);
    }
}
