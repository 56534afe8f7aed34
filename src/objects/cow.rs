//! Quadrupeds: a body and head sphere, rainbow spots on the flank and four
//! square legs.

use std::sync::Arc;

use super::MeshLibrary;
use crate::error::SceneError;
use crate::gfx::geometry::{Color, Mesh, SphereSpec};
use crate::gfx::scene::{RenderSink, Transform};

pub const COW_COLOR: Color = Color::new(0.5, 0.35, 0.05);

/// Leg offsets: front right, back right, front left, back left.
pub const LEG_OFFSETS: [[f32; 3]; 4] = [
    [-0.8, -1.8, -1.8],
    [0.9, -1.8, -1.8],
    [-0.8, -1.5, 1.0],
    [0.9, -1.5, 1.0],
];

const LEG_STRETCH: [f32; 3] = [1.0, 2.3, 1.0];

/// Placement of one spot disk on the flank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotPlacement {
    pub at: [f32; 3],
    pub scale: f32,
}

const FORWARD_SPOTS: [SpotPlacement; 2] = [
    SpotPlacement {
        at: [0.02, 0.12, 2.63],
        scale: 0.5,
    },
    SpotPlacement {
        at: [0.42, 0.22, 2.69],
        scale: 0.7,
    },
];

const OPPOSITE_SPOTS: [SpotPlacement; 1] = [SpotPlacement {
    at: [0.0, 1.0, 2.4],
    scale: 0.5,
}];

/// Which way the head points along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Head towards `-x`
    Forward,
    /// Head towards `+x`, a single spot and legs dropped slightly
    Opposite,
}

impl Facing {
    pub fn head_offset(self) -> [f32; 3] {
        match self {
            Facing::Forward => [-2.0, 1.0, 0.0],
            Facing::Opposite => [2.5, 1.0, 0.0],
        }
    }

    pub fn spots(self) -> &'static [SpotPlacement] {
        match self {
            Facing::Forward => &FORWARD_SPOTS,
            Facing::Opposite => &OPPOSITE_SPOTS,
        }
    }

    fn leg_shift(self) -> [f32; 3] {
        match self {
            Facing::Forward => [0.0, 0.0, 0.0],
            Facing::Opposite => [0.0, -0.2, 0.0],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cow {
    body: SphereSpec,
    head: SphereSpec,
    spot: Arc<Mesh>,
    leg: Arc<Mesh>,
}

impl Cow {
    pub fn new(library: &MeshLibrary) -> Result<Self, SceneError> {
        Ok(Self {
            body: SphereSpec::new(2.0, 24, 12)?,
            head: SphereSpec::new(1.0, 12, 12)?,
            spot: Arc::clone(&library.spot),
            leg: Arc::clone(&library.square),
        })
    }

    /// Draws a cow with its body centered at `at`.
    pub fn draw(&self, sink: &mut dyn RenderSink, at: &Transform, facing: Facing) {
        sink.draw_sphere(at, self.body, COW_COLOR, "cow body");

        let [x, y, z] = facing.head_offset();
        sink.draw_sphere(&at.translate(x, y, z), self.head, COW_COLOR, "cow head");

        for spot in facing.spots() {
            let [x, y, z] = spot.at;
            let placed = at.translate(x, y, z).uniform_scale(spot.scale);
            sink.draw_mesh(&placed, &self.spot, Color::WHITE, "cow spot");
        }

        let [x, y, z] = facing.leg_shift();
        self.draw_legs(sink, &at.translate(x, y, z));
    }

    pub fn draw_legs(&self, sink: &mut dyn RenderSink, at: &Transform) {
        for offset in LEG_OFFSETS {
            self.draw_leg(sink, at, offset);
        }
    }

    /// One leg: the unit square stretched vertically at `offset`.
    pub fn draw_leg(&self, sink: &mut dyn RenderSink, at: &Transform, offset: [f32; 3]) {
        let [sx, sy, sz] = LEG_STRETCH;
        let placed = at.translate(offset[0], offset[1], offset[2]).scale(sx, sy, sz);
        sink.draw_mesh(&placed, &self.leg, COW_COLOR, "cow leg");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{DrawCommand, DrawList};

    fn cow() -> Cow {
        Cow::new(&MeshLibrary::new().unwrap()).unwrap()
    }

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-4, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn forward_cow_parts() {
        let mut list = DrawList::new();
        cow().draw(&mut list, &Transform::identity(), Facing::Forward);

        assert_eq!(list.count_labeled("cow body"), 1);
        assert_eq!(list.count_labeled("cow head"), 1);
        assert_eq!(list.count_labeled("cow spot"), 2);
        assert_eq!(list.count_labeled("cow leg"), 4);

        let head = list.labeled("cow head").next().unwrap();
        assert_close(head.transform().origin(), [-2.0, 1.0, 0.0]);

        // leg square corner: (0.5, 0.5, 0.5) stretched then offset
        let leg = list.labeled("cow leg").next().unwrap();
        assert_close(
            leg.transform().transform_point([0.5, 0.5, 0.5]),
            [-0.3, -0.65, -1.3],
        );
    }

    #[test]
    fn opposite_cow_parts() {
        let mut list = DrawList::new();
        cow().draw(&mut list, &Transform::identity(), Facing::Opposite);

        assert_eq!(list.count_labeled("cow spot"), 1);
        let head = list.labeled("cow head").next().unwrap();
        assert_close(head.transform().origin(), [2.5, 1.0, 0.0]);

        let legs: Vec<_> = list.labeled("cow leg").map(|c| c.transform().origin()).collect();
        assert_close(legs[0], [-0.8, -2.0, -1.8]);
        assert_close(legs[3], [0.9, -1.7, 1.0]);
    }

    #[test]
    fn legs_are_brown_squares() {
        let mut list = DrawList::new();
        cow().draw_legs(&mut list, &Transform::identity());
        for command in list.commands() {
            let DrawCommand::Mesh { paint, mesh, .. } = command else {
                panic!("legs are meshes");
            };
            assert_eq!(*paint, COW_COLOR);
            assert_eq!(mesh.vertex_count(), 4);
        }
    }

    #[test]
    fn output_depends_only_on_parent() {
        let cow = cow();
        let parent = Transform::identity()
            .translate(29.0, 0.0, 5.0)
            .uniform_scale(0.8)
            .rotate(20.0, [1.0, 0.0, 0.0]);

        let mut local = DrawList::new();
        cow.draw(&mut local, &Transform::identity(), Facing::Forward);
        let mut placed = DrawList::new();
        cow.draw(&mut placed, &parent, Facing::Forward);
        // a sibling drawn after the cow still sees the untouched parent
        placed.draw_mesh(&parent, &MeshLibrary::new().unwrap().square, Color::WHITE, "sibling");

        assert_eq!(placed.len(), local.len() + 1);
        for (a, b) in local.commands().iter().zip(placed.commands()) {
            let expected = parent.then(a.transform().matrix());
            assert_close(b.transform().origin(), expected.origin());
            assert_close(
                b.transform().transform_point([1.0, 1.0, 1.0]),
                expected.transform_point([1.0, 1.0, 1.0]),
            );
        }
        assert_eq!(*placed.labeled("sibling").next().unwrap().transform(), parent);
    }
}
