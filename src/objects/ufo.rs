//! The UFO: a capped cylinder, flattened by its placement.

use std::sync::Arc;

use super::MeshLibrary;
use crate::gfx::geometry::{Color, Mesh};
use crate::gfx::scene::{RenderSink, Transform};

#[derive(Debug, Clone)]
pub struct Ufo {
    side: Arc<Mesh>,
    top: Arc<Mesh>,
    bottom: Arc<Mesh>,
}

impl Ufo {
    pub fn new(library: &MeshLibrary) -> Self {
        Self {
            side: Arc::clone(&library.cylinder_side),
            top: Arc::clone(&library.cylinder_top),
            bottom: Arc::clone(&library.cylinder_bottom),
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink, at: &Transform) {
        sink.draw_mesh(at, &self.side, Color::WHITE, "ufo side");
        sink.draw_mesh(at, &self.top, Color::WHITE, "ufo top");
        sink.draw_mesh(at, &self.bottom, Color::WHITE, "ufo bottom");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::DrawList;

    #[test]
    fn draws_side_then_caps() {
        let mut list = DrawList::new();
        Ufo::new(&MeshLibrary::new().unwrap()).draw(&mut list, &Transform::identity());
        let labels: Vec<_> = list.commands().iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["ufo side", "ufo top", "ufo bottom"]);
        // strip of 65 pairs plus two fans of 65 rim samples
        assert_eq!(list.stats().mesh_triangles, 128 + 64 + 64);
    }

    #[test]
    fn every_part_uses_the_parent_transform() {
        let parent = Transform::identity()
            .translate(-35.0, 40.0, 0.0)
            .rotate(200.0, [0.0, 1.0, 0.0])
            .scale(4.0, 4.0, 0.5);
        let mut list = DrawList::new();
        Ufo::new(&MeshLibrary::new().unwrap()).draw(&mut list, &parent);

        assert_eq!(list.len(), 3);
        assert!(list.commands().iter().all(|c| *c.transform() == parent));
    }
}
