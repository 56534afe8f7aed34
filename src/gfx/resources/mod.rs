// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles the depth texture and the per-frame uniform bind group.

pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{FrameBindings, FrameUniform, FrameUniformBuffer};
pub use texture_resource::TextureResource;
