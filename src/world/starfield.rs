//! The star field: a diagonal band of small spot disks, each jittered by a
//! random per-axis offset.

use std::sync::Arc;

use rand::Rng;

use super::layout::{STAR_END, STAR_FIRST, STAR_JITTER, STAR_SCALE};
use crate::gfx::geometry::{Color, Mesh};
use crate::gfx::scene::{RenderSink, Transform};

/// When star jitter is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StarFieldMode {
    /// Fresh jitter every frame; the field twinkles.
    #[default]
    PerFrame,
    /// Jitter generated once when the scene is built.
    Fixed,
}

#[derive(Debug, Clone)]
pub struct StarField {
    spot: Arc<Mesh>,
    fixed: Option<Vec<[i32; 3]>>,
}

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> [i32; 3] {
    [
        rng.random_range(0..STAR_JITTER),
        rng.random_range(0..STAR_JITTER),
        rng.random_range(0..STAR_JITTER),
    ]
}

impl StarField {
    pub fn new<R: Rng + ?Sized>(mode: StarFieldMode, spot: Arc<Mesh>, rng: &mut R) -> Self {
        let fixed = match mode {
            StarFieldMode::PerFrame => None,
            StarFieldMode::Fixed => Some((STAR_FIRST..STAR_END).map(|_| jitter(rng)).collect()),
        };
        Self { spot, fixed }
    }

    pub fn mode(&self) -> StarFieldMode {
        if self.fixed.is_some() {
            StarFieldMode::Fixed
        } else {
            StarFieldMode::PerFrame
        }
    }

    pub fn star_count(&self) -> usize {
        (STAR_END - STAR_FIRST) as usize
    }

    pub fn draw<R: Rng + ?Sized>(&self, sink: &mut dyn RenderSink, at: &Transform, rng: &mut R) {
        for (n, i) in (STAR_FIRST..STAR_END).enumerate() {
            let [r, s, t] = match &self.fixed {
                Some(fixed) => fixed[n],
                None => jitter(rng),
            };
            let placed = at
                .translate((i + r) as f32, (i + s) as f32, (i + t) as f32)
                .uniform_scale(STAR_SCALE);
            sink.draw_mesh(&placed, &self.spot, Color::WHITE, "star");
        }
    }
}
