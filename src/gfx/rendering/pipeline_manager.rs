//! Render pipeline management for wgpu
//!
//! Every pipeline shares one shader module, the frame bind group layout, the
//! surface color target and the depth buffer. They differ in entry point and
//! vertex buffer layouts only.

use std::collections::HashMap;
use wgpu::*;

use crate::gfx::resources::TextureResource;

/// Configuration for creating a render pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub buffers: Vec<VertexBufferLayout<'static>>,
    pub cull_mode: Option<Face>,
}

impl PipelineConfig {
    pub fn new(label: &str, vertex_entry: &'static str) -> Self {
        Self {
            label: label.to_owned(),
            vertex_entry,
            fragment_entry: "fs_main",
            buffers: Vec::new(),
            // fans and strips are not wound consistently, so nothing is culled
            cull_mode: None,
        }
    }

    pub fn with_buffer(mut self, layout: VertexBufferLayout<'static>) -> Self {
        self.buffers.push(layout);
        self
    }
}

/// Owns the shared shader module and the pipelines built from it, by name.
pub struct PipelineManager {
    shader: ShaderModule,
    layout: PipelineLayout,
    surface_format: TextureFormat,
    pipelines: HashMap<String, RenderPipeline>,
}

impl PipelineManager {
    /// # Arguments
    /// * `source` - WGSL source of the shared shader module
    /// * `bind_group_layouts` - Layouts in group order
    /// * `surface_format` - Format of the single color target
    pub fn new(
        device: &Device,
        source: &str,
        bind_group_layouts: &[&BindGroupLayout],
        surface_format: TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Pasture Shader"),
            source: ShaderSource::Wgsl(source.into()),
        });
        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Pasture Pipeline Layout"),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

        Self {
            shader,
            layout,
            surface_format,
            pipelines: HashMap::new(),
        }
    }

    /// Builds the pipeline described by `config` and stores it under `name`.
    pub fn register_pipeline(&mut self, device: &Device, name: &str, config: &PipelineConfig) {
        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some(&config.label),
            layout: Some(&self.layout),
            vertex: VertexState {
                module: &self.shader,
                entry_point: Some(config.vertex_entry),
                buffers: &config.buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &self.shader,
                entry_point: Some(config.fragment_entry),
                targets: &[Some(ColorTargetState {
                    format: self.surface_format,
                    blend: Some(BlendState::REPLACE),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: config.cull_mode,
                unclipped_depth: false,
                polygon_mode: PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(DepthStencilState {
                format: TextureResource::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: CompareFunction::Less,
                stencil: StencilState::default(),
                bias: DepthBiasState::default(),
            }),
            multisample: MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::debug!("created pipeline '{}' ({})", name, config.label);
        self.pipelines.insert(name.to_string(), pipeline);
    }

    pub fn get_pipeline(&self, name: &str) -> Option<&RenderPipeline> {
        self.pipelines.get(name)
    }

    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{SceneVertex, SphereInstance, SphereVertex};

    #[test]
    fn configs_default_to_two_sided_fill() {
        let config = PipelineConfig::new("Mesh Pipeline", "vs_mesh")
            .with_buffer(SceneVertex::desc());
        assert_eq!(config.cull_mode, None);
        assert_eq!(config.fragment_entry, "fs_main");
        assert_eq!(config.buffers.len(), 1);

        let sphere = PipelineConfig::new("Sphere Pipeline", "vs_sphere")
            .with_buffer(SphereVertex::desc())
            .with_buffer(SphereInstance::desc());
        assert_eq!(sphere.buffers[1].step_mode, VertexStepMode::Instance);
        assert_eq!(sphere.cull_mode, None);
    }
}
