//! Static triangle geometry.
//!
//! The geometry table is an explicitly constructed immutable value, built in
//! the application and handed to the renderer at initialization. This keeps
//! alternative tables expressible in tests without global state.
//!
//! Invariants:
//! - positions, colors, and indices always hold exactly [`VERTEX_COUNT`]
//!   elements each (encoded in the array types)
//! - every index references a vertex inside the table

mod float3;
mod triangle;

pub use float3::Float3;
pub use triangle::{GeometryError, TriangleGeometry, VERTEX_COUNT};
