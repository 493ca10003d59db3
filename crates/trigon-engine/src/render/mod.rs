//! GPU rendering subsystem.
//!
//! The single renderer owns its GPU resources (pipeline state + three static
//! buffers) and records one indexed draw per frame. Failures are values:
//! every kind in [`RenderError`] is reportable to the caller instead of
//! aborting inside the draw path.
//!
//! Convention:
//! - vertex positions are already in clip space; no viewport uniform exists
//! - the color target format is the surface's forced format

mod ctx;
mod error;
mod shader;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use shader::ShaderLibrary;
pub use triangle::TriangleRenderer;
