//! Coordinate types shared by the runtime, scene and renderer.
//!
//! Two spaces are in play:
//! - logical pixels: origin top-left, +X right, +Y down (pointer events)
//! - NDC: origin center, +X right, +Y up, `[-1, 1]` on both axes (draw list)
//!
//! The types themselves live in `secant-geometry`; this module re-exports the
//! ones the engine API is written against.

pub use secant_geometry::{Point2, Viewport};
