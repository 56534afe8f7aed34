// src/lib.rs
//! Pasture
//!
//! A pastoral 3D scene built procedurally from parametric solids, nested
//! under hierarchical transforms and animated by a looping frame clock.
//! Rendered with wgpu inside a winit window.
//!
//! The core (`animation`, `objects`, `world` and the CPU side of `gfx`)
//! never touches the GPU: a frame is recorded into a
//! [`DrawList`](gfx::scene::DrawList) which the renderer then draws.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod objects;
pub mod wgpu_utils;
pub mod world;

// Re-export main types for convenience
pub use app::PastureApp;
pub use config::AppConfig;
pub use error::{GeometryError, SceneError};
pub use world::Scene;
