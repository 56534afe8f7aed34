//! Biped alien: a large head sphere over a small body sphere.

use crate::error::SceneError;
use crate::gfx::geometry::{Color, SphereSpec};
use crate::gfx::scene::{RenderSink, Transform};

pub const ALIEN_COLOR: Color = Color::new(0.98, 0.625, 0.12);

const BODY_OFFSET: [f32; 3] = [-2.0, -3.0, 0.0];
const BODY_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct Alien {
    head: SphereSpec,
    body: SphereSpec,
}

impl Alien {
    pub fn new() -> Result<Self, SceneError> {
        Ok(Self {
            head: SphereSpec::new(2.0, 24, 12)?,
            body: SphereSpec::new(1.0, 12, 6)?,
        })
    }

    pub fn draw(&self, sink: &mut dyn RenderSink, at: &Transform) {
        sink.draw_sphere(at, self.head, ALIEN_COLOR, "alien head");

        let [x, y, z] = BODY_OFFSET;
        let body = at.translate(x, y, z).uniform_scale(BODY_SCALE);
        sink.draw_sphere(&body, self.body, ALIEN_COLOR, "alien body");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{DrawCommand, DrawList};

    #[test]
    fn head_and_body() {
        let mut list = DrawList::new();
        Alien::new()
            .unwrap()
            .draw(&mut list, &Transform::identity().translate(1.0, 0.0, 0.0));

        assert_eq!(list.len(), 2);
        let DrawCommand::Sphere {
            transform, sphere, color, ..
        } = &list.commands()[1]
        else {
            panic!("alien body is a sphere");
        };
        assert_eq!(*color, ALIEN_COLOR);
        assert_eq!((sphere.slices, sphere.stacks), (12, 6));
        assert_eq!(transform.origin(), [-1.0, -3.0, 0.0]);
        assert_eq!(transform.transform_point([1.0, 0.0, 0.0]), [-0.5, -3.0, 0.0]);
    }

    #[test]
    fn body_offset_does_not_leak_to_siblings() {
        let parent = Transform::identity()
            .translate(-35.0, 40.0, 0.0)
            .rotate(90.0, [0.0, 1.0, 0.0])
            .uniform_scale(0.5);
        let mut list = DrawList::new();
        let alien = Alien::new().unwrap();
        alien.draw(&mut list, &parent);
        list.draw_sphere(&parent, alien.head, Color::WHITE, "sibling");

        assert_eq!(list.len(), 3);
        assert_eq!(*list.commands()[0].transform(), parent);
        assert_eq!(*list.commands()[2].transform(), parent);
        let body = parent.translate(-2.0, -3.0, 0.0).uniform_scale(BODY_SCALE);
        assert_eq!(*list.commands()[1].transform(), body);
    }
}
