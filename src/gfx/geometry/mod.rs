//! # Procedural Geometry Generation
//!
//! Functions that generate the primitive shapes of the scene procedurally, so
//! no model files are needed.
//!
//! ## Supported Primitives
//!
//! - **Disk**: fan of equal-angle rim samples, optionally hue-cycled
//! - **Cylinder**: strip side wall with a rainbow top cap and a white bottom cap
//! - **Quads**: the unit "square" and the larger "flat" used for the ground
//! - **Sphere**: UV sphere with configurable slices and stacks
//!
//! ## Usage
//!
//! ```rust
//! use pasture::gfx::geometry::{generate_disk, DiskStyle, RimWinding, Color};
//!
//! let spot = generate_disk(1.0, 64, -1.0, RimWinding::Clockwise, DiskStyle::Rainbow {
//!     center: Color::WHITE,
//! })
//! .unwrap();
//! assert_eq!(spot.vertex_count(), 66);
//! ```

pub mod color;
pub mod primitives;

pub use color::{hsb_to_rgb, Color};
pub use primitives::*;

/// How the vertex sequence of a mesh is assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// First vertex is the hub; every consecutive pair after it forms a triangle.
    TriangleFan,
    /// Every three consecutive vertices form a triangle.
    TriangleStrip,
}

/// Generated geometry in local coordinates, ready to be drawn under a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub topology: Topology,
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z), one per vertex
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex colors. `None` means the draw call's color applies to every vertex.
    pub colors: Option<Vec<Color>>,
}

impl Mesh {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            positions: Vec::new(),
            normals: Vec::new(),
            colors: None,
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles this mesh expands to
    pub fn triangle_count(&self) -> usize {
        self.positions.len().saturating_sub(2)
    }

    /// Vertex index triples of the triangles this mesh expands to.
    ///
    /// Strip triangles alternate their winding so that every triangle keeps
    /// the orientation of the first one.
    pub fn triangle_indices(&self) -> Vec<[usize; 3]> {
        let count = self.triangle_count();
        match self.topology {
            Topology::TriangleFan => (0..count).map(|i| [0, i + 1, i + 2]).collect(),
            Topology::TriangleStrip => (0..count)
                .map(|i| {
                    if i % 2 == 0 {
                        [i, i + 1, i + 2]
                    } else {
                        [i + 1, i, i + 2]
                    }
                })
                .collect(),
        }
    }

    /// Color of vertex `i`, falling back to `paint` for uncolored meshes.
    pub fn color_at(&self, i: usize, paint: Color) -> Color {
        self.colors
            .as_ref()
            .and_then(|colors| colors.get(i).copied())
            .unwrap_or(paint)
    }

    fn push(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.positions.push(position);
        self.normals.push(normal);
    }

    fn push_colored(&mut self, position: [f32; 3], normal: [f32; 3], color: Color) {
        self.push(position, normal);
        self.colors.get_or_insert_with(Vec::new).push(color);
    }
}
