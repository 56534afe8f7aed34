//! # Graphics Module
//!
//! Everything between the scene description and pixels on screen.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Parametric solid generators and colors
//! - **Scene submission** ([`scene`]) - Transforms, the render sink and recorded draw lists
//! - **Camera System** ([`camera`]) - Tracking look-at camera with trackball orbit
//! - **Rendering Pipeline** ([`rendering`]) - wgpu renderer for draw lists
//! - **Resource Management** ([`resources`]) - Depth texture and frame uniforms
//!
//! Only [`rendering`] and [`resources`] need a GPU; the other modules are
//! plain CPU code and are exercised directly by tests.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
