use super::{Circle, LineSegment, Point2};

/// Which kind of shape a pair of endpoints describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Segment,
}

/// A shape defined by two endpoints, tagged with how those endpoints are read.
///
/// - `Circle`: `center` plus a point on the rim; radius is their distance.
/// - `Segment`: a literal line segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeSpec {
    Circle { center: Point2, rim: Point2 },
    Segment(LineSegment),
}

impl ShapeSpec {
    #[inline]
    pub fn new(kind: ShapeKind, start: Point2, end: Point2) -> Self {
        match kind {
            ShapeKind::Circle => ShapeSpec::Circle { center: start, rim: end },
            ShapeKind::Segment => ShapeSpec::Segment(LineSegment::new(start, end)),
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Circle { .. } => ShapeKind::Circle,
            ShapeSpec::Segment(_) => ShapeKind::Segment,
        }
    }

    /// The two endpoints in the order they were drawn.
    #[inline]
    pub fn endpoints(&self) -> (Point2, Point2) {
        match *self {
            ShapeSpec::Circle { center, rim } => (center, rim),
            ShapeSpec::Segment(s) => (s.start, s.end),
        }
    }

    #[inline]
    pub fn circle(&self) -> Option<Circle> {
        match *self {
            ShapeSpec::Circle { center, rim } => Some(Circle::through(center, rim)),
            ShapeSpec::Segment(_) => None,
        }
    }

    #[inline]
    pub fn segment(&self) -> Option<LineSegment> {
        match *self {
            ShapeSpec::Segment(s) => Some(s),
            ShapeSpec::Circle { .. } => None,
        }
    }
}
