//! # Render Sink and Draw List
//!
//! [`RenderSink`] is the boundary between scene construction and whatever
//! draws it. Builders submit meshes and spheres under a transform and never
//! read anything back. [`DrawList`] records those submissions; the GPU
//! renderer consumes a recorded list and tests inspect it.

use std::collections::BTreeMap;
use std::sync::Arc;

use cgmath::Matrix4;

use super::{
    transform::Transform,
    vertex::{SceneVertex, SphereInstance},
};
use crate::gfx::geometry::{Color, Mesh, SphereSpec};

/// Receiver of primitive submissions, in strict draw order.
pub trait RenderSink {
    /// Draw `mesh` under `transform`. Uncolored meshes are painted with `paint`.
    fn draw_mesh(&mut self, transform: &Transform, mesh: &Arc<Mesh>, paint: Color, label: &'static str);

    /// Draw a solid sphere centered at the transform's origin.
    fn draw_sphere(&mut self, transform: &Transform, sphere: SphereSpec, color: Color, label: &'static str);
}

/// One recorded submission.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Mesh {
        transform: Transform,
        mesh: Arc<Mesh>,
        paint: Color,
        label: &'static str,
    },
    Sphere {
        transform: Transform,
        sphere: SphereSpec,
        color: Color,
        label: &'static str,
    },
}

impl DrawCommand {
    pub fn label(&self) -> &'static str {
        match self {
            DrawCommand::Mesh { label, .. } | DrawCommand::Sphere { label, .. } => label,
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            DrawCommand::Mesh { transform, .. } | DrawCommand::Sphere { transform, .. } => {
                transform
            }
        }
    }
}

/// Counts describing one recorded frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub meshes: usize,
    pub spheres: usize,
    pub mesh_triangles: usize,
}

/// Recording [`RenderSink`].
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl RenderSink for DrawList {
    fn draw_mesh(&mut self, transform: &Transform, mesh: &Arc<Mesh>, paint: Color, label: &'static str) {
        self.commands.push(DrawCommand::Mesh {
            transform: *transform,
            mesh: Arc::clone(mesh),
            paint,
            label,
        });
    }

    fn draw_sphere(&mut self, transform: &Transform, sphere: SphereSpec, color: Color, label: &'static str) {
        self.commands.push(DrawCommand::Sphere {
            transform: *transform,
            sphere,
            color,
            label,
        });
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands recorded under `label`, in draw order.
    pub fn labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a DrawCommand> + 'a {
        self.commands.iter().filter(move |c| c.label() == label)
    }

    pub fn count_labeled(&self, label: &str) -> usize {
        self.labeled(label).count()
    }

    pub fn stats(&self) -> DrawStats {
        self.commands
            .iter()
            .fold(DrawStats::default(), |mut stats, command| {
                match command {
                    DrawCommand::Mesh { mesh, .. } => {
                        stats.meshes += 1;
                        stats.mesh_triangles += mesh.triangle_count();
                    }
                    DrawCommand::Sphere { .. } => stats.spheres += 1,
                }
                stats
            })
    }

    /// Expands every recorded mesh into a world-space triangle list.
    pub fn triangle_vertices(&self) -> Vec<SceneVertex> {
        let mut out = Vec::with_capacity(self.stats().mesh_triangles * 3);
        for command in &self.commands {
            let DrawCommand::Mesh {
                transform,
                mesh,
                paint,
                ..
            } = command
            else {
                continue;
            };
            for triangle in mesh.triangle_indices() {
                for i in triangle {
                    out.push(SceneVertex {
                        position: transform.transform_point(mesh.positions[i]),
                        normal: transform.transform_normal(mesh.normals[i]),
                        color: mesh.color_at(i, *paint).to_array(),
                    });
                }
            }
        }
        out
    }

    /// Sphere instances grouped by `(slices, stacks)`, so each group can share
    /// one unit-sphere mesh.
    pub fn sphere_batches(&self) -> BTreeMap<(u32, u32), Vec<SphereInstance>> {
        let mut batches: BTreeMap<(u32, u32), Vec<SphereInstance>> = BTreeMap::new();
        for command in &self.commands {
            let DrawCommand::Sphere {
                transform,
                sphere,
                color,
                ..
            } = command
            else {
                continue;
            };
            let placed = transform.then(Matrix4::from_scale(sphere.radius));
            let normal = placed.normal_matrix();
            batches
                .entry((sphere.slices, sphere.stacks))
                .or_default()
                .push(SphereInstance {
                    model: placed.matrix().into(),
                    normal: [
                        normal.x.extend(0.0).into(),
                        normal.y.extend(0.0).into(),
                        normal.z.extend(0.0).into(),
                    ],
                    color: [color.r, color.g, color.b, 1.0],
                });
        }
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_square, Topology};

    fn square() -> Arc<Mesh> {
        Arc::new(generate_square())
    }

    #[test]
    fn records_in_order_with_labels() {
        let mut list = DrawList::new();
        let t = Transform::identity();
        list.draw_mesh(&t, &square(), Color::WHITE, "window");
        list.draw_sphere(&t, SphereSpec::new(2.0, 24, 12).unwrap(), Color::WHITE, "body");
        list.draw_mesh(&t, &square(), Color::WHITE, "window");

        assert_eq!(list.len(), 3);
        assert_eq!(list.count_labeled("window"), 2);
        assert_eq!(list.commands()[1].label(), "body");
        assert_eq!(
            list.stats(),
            DrawStats {
                meshes: 2,
                spheres: 1,
                mesh_triangles: 4
            }
        );
    }

    #[test]
    fn triangle_expansion_applies_transform_and_paint() {
        let mut list = DrawList::new();
        let t = Transform::identity().translate(10.0, 0.0, 0.0);
        list.draw_mesh(&t, &square(), Color::GREEN, "leg");

        let vertices = list.triangle_vertices();
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [9.5, -0.5, 0.5]);
        assert!(vertices.iter().all(|v| v.color == [0.0, 1.0, 0.0]));
        assert!(vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn spheres_batch_by_resolution() {
        let mut list = DrawList::new();
        let t = Transform::identity().translate(1.0, 2.0, 3.0);
        list.draw_sphere(&t, SphereSpec::new(2.0, 24, 12).unwrap(), Color::WHITE, "body");
        list.draw_sphere(&t, SphereSpec::new(1.0, 12, 12).unwrap(), Color::WHITE, "head");
        list.draw_sphere(&t, SphereSpec::new(2.0, 24, 12).unwrap(), Color::WHITE, "body");

        let batches = list.sphere_batches();
        assert_eq!(batches[&(24, 12)].len(), 2);
        assert_eq!(batches[&(12, 12)].len(), 1);

        let model = batches[&(24, 12)][0].model;
        // radius folded into the model matrix, translation in the last column
        assert_eq!(model[0][0], 2.0);
        assert_eq!(model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn empty_list() {
        let list = DrawList::new();
        assert!(list.is_empty());
        assert!(list.triangle_vertices().is_empty());
        assert_eq!(Topology::TriangleFan, generate_square().topology);
    }
}
