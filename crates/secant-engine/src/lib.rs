//! Secant engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the studio: a single-window
//! winit loop, a wgpu device, an input stream, and a small primitive renderer
//! for lines and points given in normalized device coordinates.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod render;
