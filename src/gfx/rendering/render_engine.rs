//! WGPU-based renderer for recorded frames
//!
//! Draws a [`DrawList`] in a single depth-tested pass: every mesh is
//! expanded into one world-space triangle list, every sphere becomes an
//! instance of a shared unit sphere. Both pipelines light fragments from the
//! same per-frame uniform.

use anyhow::Context;

use crate::animation::LightRig;
use crate::gfx::{
    camera::camera_utils::CameraUniform,
    resources::{FrameBindings, FrameUniform, FrameUniformBuffer, TextureResource},
    scene::{DrawList, SceneVertex, SphereInstance, SphereVertex},
};
use crate::wgpu_utils::GrowableBuffer;

use super::instanced_renderer::InstancedRenderer;
use super::pipeline_manager::{PipelineConfig, PipelineManager};

const MESH_PIPELINE: &str = "Mesh";
const SPHERE_PIPELINE: &str = "Sphere";
const INITIAL_MESH_VERTICES: usize = 16 * 1024;
const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// Outcome of one [`RenderEngine::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The surface was lost or outdated and has been reconfigured.
    Reconfigured,
    /// No surface texture became available in time.
    Skipped,
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pipeline_manager: PipelineManager,
    frame_ubo: FrameUniformBuffer,
    frame_bindings: FrameBindings,
    mesh_vertices: GrowableBuffer<SceneVertex>,
    spheres: InstancedRenderer,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no graphics adapter can present to this window")?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to request a device")?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .context("the surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let frame_ubo = FrameUniformBuffer::new(&device);
        let frame_bindings = FrameBindings::new(&device, &frame_ubo);

        let mut pipeline_manager = PipelineManager::new(
            &device,
            include_str!("pasture.wgsl"),
            &[frame_bindings.layout()],
            format,
        );
        pipeline_manager.register_pipeline(
            &device,
            MESH_PIPELINE,
            &PipelineConfig::new("Mesh Pipeline", "vs_mesh").with_buffer(SceneVertex::desc()),
        );
        pipeline_manager.register_pipeline(
            &device,
            SPHERE_PIPELINE,
            &PipelineConfig::new("Sphere Pipeline", "vs_sphere")
                .with_buffer(SphereVertex::desc())
                .with_buffer(SphereInstance::desc()),
        );

        let mesh_vertices = GrowableBuffer::new(&device, "Mesh Vertices", INITIAL_MESH_VERTICES);

        log::info!(
            "renderer ready: {}x{} {:?}, {} pipelines",
            config.width,
            config.height,
            format,
            pipeline_manager.pipeline_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            pipeline_manager,
            frame_ubo,
            frame_bindings,
            mesh_vertices,
            spheres: InstancedRenderer::new(),
        })
    }

    /// Uploads and draws one recorded frame.
    ///
    /// Lost or outdated surfaces are reconfigured and the frame is dropped.
    /// Only unrecoverable surface errors are returned.
    pub fn render(
        &mut self,
        list: &DrawList,
        camera: &CameraUniform,
        lights: &LightRig,
    ) -> anyhow::Result<FrameOutcome> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("surface {err}, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(FrameOutcome::Reconfigured);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("timed out waiting for a surface texture, frame skipped");
                return Ok(FrameOutcome::Skipped);
            }
            Err(err) => return Err(err).context("failed to acquire the surface texture"),
        };

        self.frame_ubo
            .update_content(&self.queue, FrameUniform::new(camera, lights));
        self.mesh_vertices
            .write(&self.device, &self.queue, &list.triangle_vertices());
        self.spheres
            .update_instances(&self.device, &self.queue, &list.sphere_batches());

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.frame_bindings.bind_group(), &[]);

            if !self.mesh_vertices.is_empty() {
                if let Some(pipeline) = self.pipeline_manager.get_pipeline(MESH_PIPELINE) {
                    render_pass.set_pipeline(pipeline);
                    render_pass.set_vertex_buffer(0, self.mesh_vertices.slice());
                    render_pass.draw(0..self.mesh_vertices.len() as u32, 0..1);
                }
            }

            if let Some(pipeline) = self.pipeline_manager.get_pipeline(SPHERE_PIPELINE) {
                render_pass.set_pipeline(pipeline);
                self.spheres.render(&mut render_pass);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        log::trace!(
            "rendered {} mesh vertices, {} sphere instances in {} batches",
            self.mesh_vertices.len(),
            self.spheres.instance_count(),
            self.spheres.mesh_count()
        );
        Ok(FrameOutcome::Presented)
    }

    /// Resizes the surface and recreates the depth texture
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }
}
