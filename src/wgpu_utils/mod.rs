// src/wgpu_utils/mod.rs
//! WGPU utility functions and helpers
//!
//! Typed wrappers over uniform and per-frame vertex buffers.

pub mod uniform_buffer;

// Re-export main types
pub use uniform_buffer::{GrowableBuffer, UniformBuffer};
