use core::ops::Deref;

use super::{LineSegment, Point2};

/// Squared segment length below which a segment is treated as a point.
///
/// Solving the quadratic would divide by this value.
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Up to two intersection points, in root order (`t1` first, then `t2`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Intersections {
    points: [Point2; 2],
    len: usize,
}

impl Intersections {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            points: [Point2::origin(); 2],
            len: 0,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2] {
        &self.points[..self.len]
    }

    fn push(&mut self, p: Point2) {
        debug_assert!(self.len < 2, "a segment meets a circle at most twice");
        self.points[self.len] = p;
        self.len += 1;
    }
}

impl Deref for Intersections {
    type Target = [Point2];

    #[inline]
    fn deref(&self) -> &[Point2] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Intersections {
    type Item = &'a Point2;
    type IntoIter = core::slice::Iter<'a, Point2>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Intersects a bounded segment with a circle.
///
/// The segment is parametrized as `P(t) = start + t * (end - start)` for
/// `t` in `[0, 1]` and substituted into `|P(t) - center|^2 = radius^2`:
///
/// ```text
/// a = dx^2 + dy^2
/// b = 2 (fx dx + fy dy)      f = start - center
/// c = fx^2 + fy^2 - radius^2
/// ```
///
/// Roots are reported as `t1 = (-b + sqrt(disc)) / 2a` then
/// `t2 = (-b - sqrt(disc)) / 2a`, keeping only those inside `[0, 1]`.
/// A tangent (zero discriminant) reports its single touching point once.
///
/// A zero-length segment yields no intersections.
pub fn intersect_circle_segment(
    center: Point2,
    radius: f32,
    segment: LineSegment,
) -> Intersections {
    let mut out = Intersections::empty();

    let d = segment.direction();
    let f = segment.start - center;

    let a = segment.length_squared();
    if a < DEGENERATE_LENGTH_SQ {
        log::debug!("zero-length segment at {:?}; no intersections", segment.start);
        return out;
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let disc = b * b - 4.0 * a * c;

    // Cancellation in `b^2 - 4ac` leaves noise proportional to the larger term.
    let tol = (b * b).max((4.0 * a * c).abs()) * 4.0 * f32::EPSILON;

    if disc < -tol {
        return out;
    }

    let mut keep = |t: f32| {
        if (0.0..=1.0).contains(&t) {
            out.push(segment.point_at(t));
        }
    };

    if disc <= tol {
        keep(-b / (2.0 * a));
    } else {
        let sqrt_d = disc.sqrt();
        keep((-b + sqrt_d) / (2.0 * a));
        keep((-b - sqrt_d) / (2.0 * a));
    }

    out
}
