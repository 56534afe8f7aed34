// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Turns a recorded [`DrawList`](crate::gfx::scene::DrawList) into a lit,
//! depth-tested frame on the window surface.

pub mod instanced_renderer;
pub mod pipeline_manager;
pub mod render_engine;

// Re-export main types
pub use instanced_renderer::InstancedRenderer;
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::{FrameOutcome, RenderEngine};
