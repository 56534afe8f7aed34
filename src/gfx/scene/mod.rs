//! # Scene Submission Module
//!
//! The vocabulary builders use to place and submit geometry: immutable
//! transforms, the render sink boundary, and the vertex formats a recorded
//! frame is turned into.
//!
//! ## Key Components
//!
//! - [`Transform`] - Immutable affine transform composed functionally
//! - [`RenderSink`] - Receiver of mesh and sphere submissions
//! - [`DrawList`] - Recording sink consumed by the renderer and by tests
//! - [`SceneVertex`] / [`SphereInstance`] - GPU-ready vertex formats
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use pasture::gfx::geometry::{generate_square, Color};
//! use pasture::gfx::scene::{DrawList, RenderSink, Transform};
//!
//! let square = Arc::new(generate_square());
//! let mut list = DrawList::new();
//! let leg = Transform::identity().translate(-0.8, -1.8, -1.8).scale(1.0, 2.3, 1.0);
//! list.draw_mesh(&leg, &square, Color::WHITE, "leg");
//! assert_eq!(list.len(), 1);
//! ```

pub mod draw_list;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use draw_list::{DrawCommand, DrawList, DrawStats, RenderSink};
pub use transform::Transform;
pub use vertex::{SceneVertex, SphereInstance, SphereVertex};
