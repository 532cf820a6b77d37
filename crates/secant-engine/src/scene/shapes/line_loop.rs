use crate::coords::Point2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Closed polyline: the last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLoopCmd {
    pub points: Vec<Point2>,
    pub color: Color,
}

impl DrawList {
    /// Records a closed loop through `points`. Fewer than two points draw nothing.
    pub fn push_line_loop<I>(&mut self, z: ZIndex, points: I, color: Color)
    where
        I: IntoIterator<Item = Point2>,
    {
        let points: Vec<Point2> = points.into_iter().collect();
        if points.len() < 2 {
            return;
        }
        self.push(z, DrawCmd::LineLoop(LineLoopCmd { points, color }));
    }
}
