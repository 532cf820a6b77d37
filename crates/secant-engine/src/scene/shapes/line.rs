use crate::coords::Point2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Single straight line between two NDC points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Point2,
    pub to: Point2,
    pub color: Color,
}

impl DrawList {
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Point2, to: Point2, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, color }));
    }
}
