//! Instanced sphere rendering
//!
//! Every recorded sphere is an instance of a shared unit-sphere mesh. Meshes
//! are created on first use per `(slices, stacks)` pair and kept for the
//! lifetime of the renderer; instance buffers are rewritten each frame.

use std::collections::{BTreeMap, HashMap};

use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device, Queue, RenderPass};

use crate::gfx::geometry::generate_sphere;
use crate::gfx::scene::{SphereInstance, SphereVertex};
use crate::wgpu_utils::GrowableBuffer;

const INITIAL_INSTANCES: usize = 64;

/// Unit sphere resident on the GPU
pub struct SphereMesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl SphereMesh {
    /// Returns `None` for subdivisions the generator rejects.
    pub fn new(device: &Device, slices: u32, stacks: u32) -> Option<Self> {
        let geometry = match generate_sphere(slices, stacks) {
            Ok(geometry) => geometry,
            Err(err) => {
                log::warn!("skipping sphere batch {slices}x{stacks}: {err}");
                return None;
            }
        };
        let vertices: Vec<SphereVertex> = geometry
            .positions
            .iter()
            .zip(&geometry.normals)
            .map(|(&position, &normal)| SphereVertex { position, normal })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Sphere {slices}x{stacks} Vertex Buffer")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Sphere {slices}x{stacks} Index Buffer")),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        })
    }
}

struct SphereBatch {
    mesh: SphereMesh,
    instances: GrowableBuffer<SphereInstance>,
}

/// Draws sphere batches with one instanced call per subdivision pair.
#[derive(Default)]
pub struct InstancedRenderer {
    batches: HashMap<(u32, u32), SphereBatch>,
    /// Keys uploaded for the current frame, in draw order
    active: Vec<(u32, u32)>,
}

impl InstancedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads this frame's instances. Batches absent from `frame` are not drawn.
    pub fn update_instances(
        &mut self,
        device: &Device,
        queue: &Queue,
        frame: &BTreeMap<(u32, u32), Vec<SphereInstance>>,
    ) {
        self.active.clear();
        for (&key, instances) in frame {
            if instances.is_empty() {
                continue;
            }
            if !self.batches.contains_key(&key) {
                let Some(mesh) = SphereMesh::new(device, key.0, key.1) else {
                    continue;
                };
                let buffer = GrowableBuffer::new(device, "Sphere Instances", INITIAL_INSTANCES);
                self.batches.insert(
                    key,
                    SphereBatch {
                        mesh,
                        instances: buffer,
                    },
                );
            }
            if let Some(batch) = self.batches.get_mut(&key) {
                batch.instances.write(device, queue, instances);
                self.active.push(key);
            }
        }
    }

    /// Issues one draw per active batch. The sphere pipeline must be bound.
    pub fn render(&self, render_pass: &mut RenderPass<'_>) {
        for key in &self.active {
            let Some(batch) = self.batches.get(key) else {
                continue;
            };
            render_pass.set_vertex_buffer(0, batch.mesh.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, batch.instances.slice());
            render_pass.set_index_buffer(batch.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(
                0..batch.mesh.index_count,
                0,
                0..batch.instances.len() as u32,
            );
        }
    }

    /// Number of distinct unit-sphere meshes resident on the GPU
    pub fn mesh_count(&self) -> usize {
        self.batches.len()
    }

    pub fn instance_count(&self) -> usize {
        self.active
            .iter()
            .filter_map(|key| self.batches.get(key))
            .map(|batch| batch.instances.len())
            .sum()
    }
}
