use std::fmt;

use super::Float3;

/// Number of vertices (and indices) in the triangle table.
pub const VERTEX_COUNT: usize = 3;

/// A rejected geometry table.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An index referenced a vertex outside the table.
    IndexOutOfRange { index: u16 },
    /// A position or color component was NaN or infinite.
    NonFinite { attribute: &'static str, vertex: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IndexOutOfRange { index } => {
                write!(f, "index {index} out of range (vertex count is {VERTEX_COUNT})")
            }
            GeometryError::NonFinite { attribute, vertex } => {
                write!(f, "non-finite {attribute} component at vertex {vertex}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Immutable geometry table for one triangle.
///
/// Positions and colors are paired by shared index. The table is built once,
/// uploaded to GPU buffers once, and never mutated afterwards; accessors hand
/// out read-only views only.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleGeometry {
    positions: [Float3; VERTEX_COUNT],
    colors: [Float3; VERTEX_COUNT],
    indices: [u16; VERTEX_COUNT],
}

impl TriangleGeometry {
    /// The canonical full-screen triangle: bottom-left green, bottom-right
    /// blue, top red.
    pub const fn hello_triangle() -> Self {
        Self {
            positions: [
                Float3::new(-1.0, -1.0, 0.0),
                Float3::new(1.0, -1.0, 0.0),
                Float3::new(0.0, 1.0, 0.0),
            ],
            colors: [
                Float3::new(0.0, 1.0, 0.0),
                Float3::new(0.0, 0.0, 1.0),
                Float3::new(1.0, 0.0, 0.0),
            ],
            indices: [0, 1, 2],
        }
    }

    /// Builds a validated table from caller-supplied vertex data.
    ///
    /// Element counts are fixed by the array types; validation covers the
    /// remaining invariants (indices in range, all components finite).
    pub fn new(
        positions: [Float3; VERTEX_COUNT],
        colors: [Float3; VERTEX_COUNT],
        indices: [u16; VERTEX_COUNT],
    ) -> Result<Self, GeometryError> {
        for &index in &indices {
            if usize::from(index) >= VERTEX_COUNT {
                return Err(GeometryError::IndexOutOfRange { index });
            }
        }
        for (vertex, p) in positions.iter().enumerate() {
            if !p.is_finite() {
                return Err(GeometryError::NonFinite { attribute: "position", vertex });
            }
        }
        for (vertex, c) in colors.iter().enumerate() {
            if !c.is_finite() {
                return Err(GeometryError::NonFinite { attribute: "color", vertex });
            }
        }

        Ok(Self { positions, colors, indices })
    }

    pub fn positions(&self) -> &[Float3; VERTEX_COUNT] {
        &self.positions
    }

    pub fn colors(&self) -> &[Float3; VERTEX_COUNT] {
        &self.colors
    }

    pub fn indices(&self) -> &[u16; VERTEX_COUNT] {
        &self.indices
    }

    /// Number of indices submitted per draw call.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Position data as bytes for buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color data as bytes for buffer upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Index data as bytes for buffer upload (16-bit indices).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for TriangleGeometry {
    fn default() -> Self {
        Self::hello_triangle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── canonical table ───────────────────────────────────────────────────

    #[test]
    fn hello_triangle_has_identity_indices() {
        let g = TriangleGeometry::hello_triangle();
        assert_eq!(g.indices(), &[0, 1, 2]);
        assert_eq!(g.index_count(), 3);
    }

    #[test]
    fn hello_triangle_pairs_positions_and_colors() {
        let g = TriangleGeometry::hello_triangle();
        assert_eq!(g.positions().len(), g.colors().len());
        assert_eq!(g.positions()[2], Float3::new(0.0, 1.0, 0.0));
        assert_eq!(g.colors()[2], Float3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn default_is_the_canonical_table() {
        assert_eq!(TriangleGeometry::default(), TriangleGeometry::hello_triangle());
    }

    // ── byte views ────────────────────────────────────────────────────────

    #[test]
    fn byte_views_match_buffer_sizes() {
        let g = TriangleGeometry::hello_triangle();
        assert_eq!(g.position_bytes().len(), 36); // 3 vertices x 12 bytes
        assert_eq!(g.color_bytes().len(), 36);
        assert_eq!(g.index_bytes().len(), 6); // 3 indices x 2 bytes
    }

    #[test]
    fn index_bytes_are_little_endian_u16() {
        let g = TriangleGeometry::hello_triangle();
        assert_eq!(g.index_bytes(), &[0, 0, 1, 0, 2, 0]);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn new_accepts_reordered_indices() {
        let g = TriangleGeometry::hello_triangle();
        let reordered = TriangleGeometry::new(*g.positions(), *g.colors(), [2, 0, 1]);
        assert!(reordered.is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_index() {
        let g = TriangleGeometry::hello_triangle();
        let err = TriangleGeometry::new(*g.positions(), *g.colors(), [0, 1, 3]).unwrap_err();
        assert_eq!(err, GeometryError::IndexOutOfRange { index: 3 });
    }

    #[test]
    fn new_rejects_non_finite_position() {
        let g = TriangleGeometry::hello_triangle();
        let mut positions = *g.positions();
        positions[1] = Float3::new(f32::NAN, 0.0, 0.0);
        let err = TriangleGeometry::new(positions, *g.colors(), [0, 1, 2]).unwrap_err();
        assert_eq!(err, GeometryError::NonFinite { attribute: "position", vertex: 1 });
    }

    #[test]
    fn new_rejects_non_finite_color() {
        let g = TriangleGeometry::hello_triangle();
        let mut colors = *g.colors();
        colors[0] = Float3::new(0.0, f32::INFINITY, 0.0);
        let err = TriangleGeometry::new(*g.positions(), colors, [0, 1, 2]).unwrap_err();
        assert_eq!(err, GeometryError::NonFinite { attribute: "color", vertex: 0 });
    }
}
