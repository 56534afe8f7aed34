//! # Scene Assembly
//!
//! [`Scene`] owns every prebuilt object and the layout that places them. It is
//! built once, fallibly, and then drawn once per frame into a
//! [`RenderSink`]. Drawing only reads the scene, so the transform of one
//! object can never influence another.
//!
//! Draw order is fixed: star field, ground and props, herd, building, UFO,
//! alien, windowed cow.

pub mod layout;
pub mod starfield;

use std::sync::Arc;

use cgmath::Vector3;
use rand::Rng;

use crate::animation::{schedules::phased_spin, AnimationCurve, FrameTime};
use crate::error::SceneError;
use crate::gfx::geometry::Mesh;
use crate::gfx::scene::{RenderSink, Transform};
use crate::objects::{Alien, Building, Cow, Facing, MeshLibrary, Prop, Ufo};
use layout::{MoverKind, MoverLayout, GROUND, HERD, HERD_ORIGIN, HOUSE, MOVERS, PROPS};

pub use starfield::{StarField, StarFieldMode};

struct PlacedProp {
    layout: &'static layout::PropLayout,
    prop: Prop,
}

struct Mover {
    layout: &'static MoverLayout,
    offset: AnimationCurve<Vector3<f32>>,
    spin: AnimationCurve<f32>,
}

impl Mover {
    fn new(layout: &'static MoverLayout) -> Self {
        Self {
            layout,
            offset: (layout.offset)(),
            spin: (layout.spin)(),
        }
    }

    fn transform(&self, time: FrameTime) -> Transform {
        let [bx, by, bz] = self.layout.base;
        let [sx, sy, sz] = self.layout.scale;
        Transform::identity()
            .translate(bx, by, bz)
            .translate_by(self.offset.sample(time))
            .rotate(self.spin.sample(time), self.layout.spin_axis)
            .scale(sx, sy, sz)
    }
}

pub struct Scene {
    stars: StarField,
    ground: Arc<Mesh>,
    props: Vec<PlacedProp>,
    cow: Cow,
    house: Building,
    ufo: Ufo,
    alien: Alien,
    movers: Vec<Mover>,
}

impl Scene {
    /// Builds and validates every mesh and table the scene draws.
    ///
    /// `rng` seeds the star field in [`StarFieldMode::Fixed`].
    pub fn new<R: Rng + ?Sized>(stars: StarFieldMode, rng: &mut R) -> Result<Self, SceneError> {
        let library = MeshLibrary::new()?;

        let props = PROPS
            .iter()
            .map(|layout| -> Result<PlacedProp, SceneError> {
                log::debug!("placing {} at {:?}", layout.name, layout.translate);
                Ok(PlacedProp {
                    layout,
                    prop: Prop::new(layout.style, layout.color)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let scene = Self {
            stars: StarField::new(stars, Arc::clone(&library.spot), rng),
            ground: Arc::clone(&library.flat),
            props,
            cow: Cow::new(&library)?,
            house: Building::standard(&library)?,
            ufo: Ufo::new(&library),
            alien: Alien::new()?,
            movers: MOVERS.iter().map(Mover::new).collect(),
        };
        log::info!(
            "scene built: {} stars ({:?}), {} props, {} cows in the herd, {} building faces",
            scene.stars.star_count(),
            scene.stars.mode(),
            scene.props.len(),
            HERD.len(),
            scene.house.face_count()
        );
        Ok(scene)
    }

    pub fn draw<R: Rng + ?Sized>(&self, time: FrameTime, rng: &mut R, sink: &mut dyn RenderSink) {
        let world = Transform::identity();
        self.stars.draw(sink, &world, rng);
        self.draw_ground_and_props(sink, &world, time);
        self.draw_herd(sink, &world);
        self.draw_house(sink, &world);
        for mover in &self.movers {
            self.draw_mover(sink, mover, time);
        }
    }

    fn draw_ground_and_props(&self, sink: &mut dyn RenderSink, world: &Transform, time: FrameTime) {
        let [x, y, z] = GROUND.translate;
        let [sx, sy, sz] = GROUND.scale;
        let ground = world
            .translate(x, y, z)
            .rotate(GROUND.tilt_degrees, GROUND.tilt_axis)
            .scale(sx, sy, sz);
        sink.draw_mesh(&ground, &self.ground, GROUND.color, "ground");

        for placed in &self.props {
            let layout = placed.layout;
            let [x, y, z] = layout.translate;
            let at = world
                .translate(x, y, z)
                .uniform_scale(layout.scale)
                .rotate(phased_spin(time, layout.spin_phase), layout.spin_axis);
            placed.prop.draw(sink, &at, time, &self.cow);
        }
    }

    fn draw_herd(&self, sink: &mut dyn RenderSink, world: &Transform) {
        let [x, y, z] = HERD_ORIGIN;
        let herd = world.translate(x, y, z);
        for member in &HERD {
            let [x, y, z] = member.translate;
            let mut at = herd.translate(x, y, z).uniform_scale(member.scale);
            if let Some((degrees, axis)) = member.tilt {
                at = at.rotate(degrees, axis);
            }
            self.cow.draw(sink, &at, member.facing);
        }
    }

    fn draw_house(&self, sink: &mut dyn RenderSink, world: &Transform) {
        let [x, y, z] = HOUSE.translate;
        let at = world
            .translate(x, y, z)
            .rotate(HOUSE.turn_degrees, HOUSE.turn_axis);
        self.house.draw(sink, &at);
    }

    fn draw_mover(&self, sink: &mut dyn RenderSink, mover: &Mover, time: FrameTime) {
        let at = mover.transform(time);
        match mover.layout.kind {
            MoverKind::Ufo => self.ufo.draw(sink, &at),
            MoverKind::Alien => self.alien.draw(sink, &at),
            MoverKind::WindowCow => self.cow.draw(sink, &at, Facing::Forward),
        }
    }

    /// World transform of a moving object at `time`.
    pub fn mover_transform(&self, kind: MoverKind, time: FrameTime) -> Option<Transform> {
        self.movers
            .iter()
            .find(|mover| mover.layout.kind == kind)
            .map(|mover| mover.transform(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::DrawList;
    use rand::{rngs::StdRng, SeedableRng};

    fn scene(mode: StarFieldMode) -> (Scene, StdRng) {
        let mut rng = StdRng::seed_from_u64(405);
        let scene = Scene::new(mode, &mut rng).unwrap();
        (scene, rng)
    }

    fn draw(scene: &Scene, frame: u32, rng: &mut StdRng) -> DrawList {
        let mut list = DrawList::new();
        scene.draw(FrameTime::new(frame), rng, &mut list);
        list
    }

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-3, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn frame_contains_every_object_in_order() {
        let (scene, mut rng) = scene(StarFieldMode::Fixed);
        let list = draw(&scene, 0, &mut rng);

        // stars, ground, 4 props of cap + 65 spheres + child cow, five cows and
        // an opposite cow, building, ufo, alien, windowed cow
        assert_eq!(list.len(), 400 + 1 + 4 * (1 + 65 + 8) + 5 * 8 + 7 + 18 + 3 + 2 + 8);

        let labels: Vec<_> = list.commands().iter().map(|c| c.label()).collect();
        assert!(labels[..400].iter().all(|l| *l == "star"));
        assert_eq!(labels[400], "ground");
        assert_eq!(labels[401], "prop cap");
        let first_window = labels.iter().position(|l| *l == "building window").unwrap();
        let ufo = labels.iter().position(|l| *l == "ufo side").unwrap();
        let alien = labels.iter().position(|l| *l == "alien head").unwrap();
        assert!(first_window < ufo && ufo < alien);
        assert_eq!(labels[alien + 2], "cow body");
        assert_eq!(list.count_labeled("building face"), 9);
    }

    #[test]
    fn herd_members_sit_under_shared_origin() {
        let (scene, mut rng) = scene(StarFieldMode::Fixed);
        let list = draw(&scene, 0, &mut rng);

        // the herd follows the four child cows riding on the props
        let bodies: Vec<_> = list.labeled("cow body").map(|c| c.transform().origin()).collect();
        assert_eq!(bodies.len(), 4 + 6 + 1);
        let herd = &bodies[4..10];
        assert_close(herd[0], [0.0, 0.0, 9.0]);
        assert_close(herd[1], [-16.0, 0.0, 6.5]);
        assert_close(herd[3], [-13.0, 0.0, 10.0]);
        assert_close(herd[5], [29.0, 0.0, 14.0]);
    }

    #[test]
    fn windowed_cow_path() {
        let (scene, _) = scene(StarFieldMode::PerFrame);
        let at = |frame| {
            scene
                .mover_transform(MoverKind::WindowCow, FrameTime::new(frame))
                .unwrap()
                .origin()
        };
        assert_close(at(0), [-24.5, 16.0, 11.0]);
        assert_close(at(39), [-76.96875, -103.0, -96.0]);
    }

    #[test]
    fn ufo_jumps_between_approach_and_hold() {
        let (scene, _) = scene(StarFieldMode::PerFrame);
        let at = |frame| {
            scene
                .mover_transform(MoverKind::Ufo, FrameTime::new(frame))
                .unwrap()
                .origin()
        };
        let (a, b) = (at(80), at(81));
        assert_close([b[0] - a[0], b[1] - a[1], b[2] - a[2]], [-86.70454, 58.0, -10.0]);
        assert_close(at(400), [-35.0, 40.0, 0.0]);
    }

    #[test]
    fn only_stars_change_between_identical_frames() {
        let (scene, mut rng) = scene(StarFieldMode::PerFrame);
        let a = draw(&scene, 120, &mut rng);
        let b = draw(&scene, 120, &mut rng);

        let stars_moved = a
            .labeled("star")
            .zip(b.labeled("star"))
            .any(|(x, y)| x.transform() != y.transform());
        assert!(stars_moved);
        for (x, y) in a.commands()[400..].iter().zip(&b.commands()[400..]) {
            assert_eq!(x.transform(), y.transform());
        }
    }
}
