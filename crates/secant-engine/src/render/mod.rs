//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention: draw-list geometry is already in NDC; only screen-space sizes
//! (point markers) consult the logical viewport.

mod ctx;
mod primitive;

pub use ctx::{RenderCtx, RenderTarget};
pub use primitive::PrimitiveRenderer;
