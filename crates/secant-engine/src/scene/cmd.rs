use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::line_loop::LineLoopCmd;
use crate::scene::shapes::points::PointsCmd;

/// Renderer-agnostic draw command. Coordinates are NDC.
///
/// Extending the scene:
/// - add a shape module under `scene::shapes::*` with its push helper
/// - add a variant here
/// - teach `render::PrimitiveRenderer` to expand it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    LineLoop(LineLoopCmd),
    Points(PointsCmd),
}
