//! Paint model shared between the studio and the renderer.
//!
//! Only solid colors exist; geometry types live in `coords`.

pub mod color;

pub use color::Color;
