use crate::coords::Point2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Square point markers.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub points: Vec<Point2>,
    /// Side length in logical pixels.
    pub size: f32,
    pub color: Color,
}

impl DrawList {
    /// Records point markers; an empty set or non-positive size records nothing.
    pub fn push_points<I>(&mut self, z: ZIndex, points: I, size: f32, color: Color)
    where
        I: IntoIterator<Item = Point2>,
    {
        let points: Vec<Point2> = points.into_iter().collect();
        if points.is_empty() || size <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Points(PointsCmd { points, size, color }));
    }
}
