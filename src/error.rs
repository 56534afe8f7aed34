//! Error types for scene construction
//!
//! Everything that can go wrong is detected when the scene is built. Drawing a
//! frame from an already validated scene cannot fail.

use thiserror::Error;

/// Invalid parameters handed to a parametric solid generator.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("segment count must be at least 1")]
    ZeroSegments,
    #[error("radius must be finite and positive, got {0}")]
    DegenerateRadius(f32),
}

/// Failure while assembling the scene's static content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("invalid face index: face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    InvalidFaceIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("face {face} has fewer than three vertices")]
    EmptyFace { face: usize },
    #[error("building has {faces} faces but {colors} face colors")]
    TableMismatch { faces: usize, colors: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
