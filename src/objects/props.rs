//! Decorative "splat" and "planet" props: a disk cap, a stack of colored
//! spheres at the same point and a small cow spinning above them.

use std::sync::Arc;

use super::cow::{Cow, Facing};
use crate::animation::{schedules::phased_spin, FrameTime};
use crate::error::SceneError;
use crate::gfx::geometry::{
    generate_disk, Color, DiskStyle, Mesh, RimWinding, SphereSpec, RING_SEGMENTS,
};
use crate::gfx::scene::{RenderSink, Transform};

const CHILD_COW_PHASE: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropStyle {
    /// Ring hue `i + r + g/64`, child cow low and small
    Splat,
    /// Ring hue `i/64`, child cow higher and larger
    Planet,
}

impl PropStyle {
    pub fn disk_style(self, center: Color) -> DiskStyle {
        match self {
            PropStyle::Splat => DiskStyle::OffsetHue {
                center,
                offset: center.r + center.g / RING_SEGMENTS as f32,
            },
            PropStyle::Planet => DiskStyle::Rainbow { center },
        }
    }

    /// Offset and scale of the child cow.
    pub fn child_cow(self) -> ([f32; 3], f32) {
        match self {
            PropStyle::Splat => ([0.0, 0.0, 4.0], 0.3),
            PropStyle::Planet => ([0.0, 0.0, 5.4], 0.5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prop {
    style: PropStyle,
    cap: Arc<Mesh>,
    ball: SphereSpec,
    /// Sphere 0 takes the center color, sphere `i` the ring color of sample `i - 1`.
    sphere_colors: Vec<Color>,
}

impl Prop {
    pub fn new(style: PropStyle, center: Color) -> Result<Self, SceneError> {
        let disk = style.disk_style(center);
        let cap = generate_disk(1.0, RING_SEGMENTS, 1.0, RimWinding::CounterClockwise, disk)?;

        let sphere_colors = std::iter::once(center)
            .chain((0..RING_SEGMENTS).map(|i| disk.rim(i, RING_SEGMENTS)))
            .collect();

        Ok(Self {
            style,
            cap: Arc::new(cap),
            ball: SphereSpec::new(2.0, 24, 12)?,
            sphere_colors,
        })
    }

    pub fn style(&self) -> PropStyle {
        self.style
    }

    pub fn draw(&self, sink: &mut dyn RenderSink, at: &Transform, time: FrameTime, cow: &Cow) {
        sink.draw_mesh(at, &self.cap, Color::WHITE, "prop cap");
        for &color in &self.sphere_colors {
            sink.draw_sphere(at, self.ball, color, "prop sphere");
        }

        let ([x, y, z], scale) = self.style.child_cow();
        let child = at
            .translate(x, y, z)
            .uniform_scale(scale)
            .rotate(phased_spin(time, CHILD_COW_PHASE), [1.0, 0.0, 0.0]);
        cow.draw(sink, &child, Facing::Forward);
    }
}
