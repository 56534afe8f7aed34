//! Global uniform bindings for camera and lighting data
//!
//! One uniform buffer, bound to group 0 in every pipeline, carries the camera
//! and the full light rig for the frame being drawn.

use crate::{
    animation::LightRig, gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::uniform_buffer::UniformBuffer,
};

/// Per-frame uniform content.
///
/// MUST match the `FrameUniform` struct in `pasture.wgsl`. Every member is
/// vec4-sized so the Rust and WGSL layouts agree without explicit padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    /// Camera position (homogeneous coordinates)
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
    /// rgb: global ambient, w: headlight intensity
    pub ambient_headlight: [f32; 4],
    /// rgb: material emission
    pub emission: [f32; 4],
    pub light_position: [[f32; 4]; 3],
    pub light_diffuse: [[f32; 4]; 3],
    pub light_ambient: [[f32; 4]; 3],
}

fn rgb(color: crate::gfx::geometry::Color, w: f32) -> [f32; 4] {
    [color.r, color.g, color.b, w]
}

impl FrameUniform {
    pub fn new(camera: &CameraUniform, lights: &LightRig) -> Self {
        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            ambient_headlight: rgb(lights.global_ambient, lights.headlight),
            emission: rgb(lights.emission, 0.0),
            light_position: lights.points.map(|l| {
                let [x, y, z] = l.position;
                [x, y, z, 1.0]
            }),
            light_diffuse: lights.points.map(|l| rgb(l.diffuse, 0.0)),
            light_ambient: lights.points.map(|l| rgb(l.ambient, 0.0)),
        }
    }
}

/// Type alias for the frame uniform buffer
pub type FrameUniformBuffer = UniformBuffer<FrameUniform>;

/// Layout and bind group exposing the frame uniform at group 0, binding 0.
pub struct FrameBindings {
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl FrameBindings {
    pub fn new(device: &wgpu::Device, ubo: &FrameUniformBuffer) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self { layout, bind_group }
    }

    /// Used when creating render pipelines that read the frame uniform.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameTime;

    #[test]
    fn uniform_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<FrameUniform>(), 16 + 64 + 16 + 16 + 3 * 48);
    }

    #[test]
    fn light_rig_is_packed_per_channel() {
        let lights = LightRig::at(FrameTime::new(0));
        let uniform = FrameUniform::new(&CameraUniform::default(), &lights);

        assert_eq!(uniform.ambient_headlight, [0.15, 0.15, 0.15, 0.5]);
        assert_eq!(uniform.emission, [0.0, 0.0, 0.5, 0.0]);
        assert_eq!(uniform.light_diffuse[0], [0.5, 0.0, 0.0, 0.0]);
        assert_eq!(uniform.light_ambient[1], [0.0, 0.1, 0.0, 0.0]);
        // the red light starts on its base position
        let [x, y, z, w] = uniform.light_position[0];
        assert!((x - 10.0).abs() < 1e-5 && (y - 7.0).abs() < 1e-5 && z.abs() < 1e-5);
        assert_eq!(w, 1.0);
    }
}
