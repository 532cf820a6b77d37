//! Scene (draw stream) types.
//!
//! - renderer-agnostic draw commands in NDC
//! - deterministic ordering (z-index + insertion order)
//! - one file per shape under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::line::LineCmd;
pub use shapes::line_loop::LineLoopCmd;
pub use shapes::points::PointsCmd;
pub use z_index::{SortKey, ZIndex};
