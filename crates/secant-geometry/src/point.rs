use core::ops::{Add, Mul, Sub};

/// 2D point (or displacement) with `f32` components.
///
/// The same type is used for screen space (logical pixels, +Y down) and for
/// normalized device coordinates (+Y up). Which space a value lives in is the
/// caller's business.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn dot(self, rhs: Point2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn distance_squared(self, other: Point2) -> f32 {
        let d = other - self;
        d.dot(d)
    }

    /// Euclidean distance. Never negative; zero iff both points are equal.
    #[inline]
    pub fn distance(self, other: Point2) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl From<Point2> for [f32; 2] {
    #[inline]
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, rhs: f32) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f32 {
    a.distance(b)
}
