//! Plane geometry for the **secant** circle/segment tool.
//!
//! Every function here is pure: no GPU, no window, no retained state. The
//! engine and studio crates call into it to convert pointer positions, build
//! circle outlines and find where a segment crosses a circle.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`point`] | `Point2`, `distance` |
//! | [`viewport`] | `Viewport`, screen ↔ NDC conversion |
//! | [`circle`] | `Circle`, `circle_points` tessellation |
//! | [`segment`] | `LineSegment` |
//! | [`intersect`] | `intersect_circle_segment`, `Intersections` |
//! | [`shape`] | `ShapeSpec` / `ShapeKind` tagged endpoint pairs |
//!
//! # Quick start
//!
//! ```rust
//! use secant_geometry::{LineSegment, Point2, intersect_circle_segment};
//!
//! let hits = intersect_circle_segment(
//!     Point2::new(0.0, 0.0),
//!     5.0,
//!     LineSegment::new(Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0)),
//! );
//! assert_eq!(hits.len(), 2);
//! ```

pub mod circle;
pub mod intersect;
pub mod point;
pub mod segment;
pub mod shape;
pub mod viewport;

pub use circle::{Circle, CirclePoints, DEFAULT_CIRCLE_SEGMENTS, circle_points};
pub use intersect::{DEGENERATE_LENGTH_SQ, Intersections, intersect_circle_segment};
pub use point::{Point2, distance};
pub use segment::LineSegment;
pub use shape::{ShapeKind, ShapeSpec};
pub use viewport::{Viewport, ndc_to_screen, screen_to_ndc};
