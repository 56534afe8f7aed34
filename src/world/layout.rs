//! Scene description: where every object sits, how it is sized and which
//! curves move it. Transforms listed here are applied in field order.

use cgmath::Vector3;

use crate::animation::{schedules, AnimationCurve};
use crate::gfx::geometry::Color;
use crate::objects::{Facing, PropStyle};

pub const X_AXIS: [f32; 3] = [1.0, 0.0, 0.0];
pub const Y_AXIS: [f32; 3] = [0.0, 1.0, 0.0];

/// Star indices run over `STAR_FIRST..STAR_END`.
pub const STAR_FIRST: i32 = -200;
pub const STAR_END: i32 = 200;
/// Per-axis jitter is drawn from `0..STAR_JITTER`.
pub const STAR_JITTER: i32 = 20;
pub const STAR_SCALE: f32 = 0.3;

/// Ground: translate, rotate, then scale.
pub struct GroundLayout {
    pub translate: [f32; 3],
    pub tilt_degrees: f32,
    pub tilt_axis: [f32; 3],
    pub scale: [f32; 3],
    pub color: Color,
}

pub const GROUND: GroundLayout = GroundLayout {
    translate: [-5.0, 10.0, 5.0],
    tilt_degrees: 90.0,
    tilt_axis: X_AXIS,
    scale: [65.0, 65.0, 16.0],
    color: Color::GREEN,
};

/// A prop: translate, scale, then spin by `frame + phase` about `spin_axis`.
pub struct PropLayout {
    pub name: &'static str,
    pub style: PropStyle,
    pub color: Color,
    pub translate: [f32; 3],
    pub scale: f32,
    pub spin_axis: [f32; 3],
    pub spin_phase: f32,
}

pub static PROPS: [PropLayout; 4] = [
    PropLayout {
        name: "magenta splat",
        style: PropStyle::Splat,
        color: Color::new(1.0, 0.0, 1.0),
        translate: [40.0, 10.0, 7.0],
        scale: 3.0,
        spin_axis: [1.0, 0.0, 1.0],
        spin_phase: 189.0,
    },
    PropLayout {
        name: "green planet",
        style: PropStyle::Planet,
        color: Color::new(0.0, 1.0, 0.0),
        translate: [50.0, 10.0, 7.0],
        scale: 2.0,
        spin_axis: X_AXIS,
        spin_phase: 89.0,
    },
    PropLayout {
        name: "blue splat",
        style: PropStyle::Splat,
        color: Color::new(1.0, 0.0, 0.0),
        translate: [60.0, 8.0, 5.0],
        scale: 2.0,
        spin_axis: [0.0, 1.0, 1.0],
        spin_phase: 89.0,
    },
    PropLayout {
        name: "pink planet",
        style: PropStyle::Planet,
        color: Color::new(0.0, 1.0, 1.0),
        translate: [57.0, 1.0, 2.0],
        scale: 4.0,
        spin_axis: Y_AXIS,
        spin_phase: 89.0,
    },
];

/// Origin shared by the whole herd.
pub const HERD_ORIGIN: [f32; 3] = [0.0, 0.0, 9.0];

/// A herd member: translate, scale, then an optional fixed tilt.
pub struct HerdMember {
    pub facing: Facing,
    pub translate: [f32; 3],
    pub scale: f32,
    pub tilt: Option<(f32, [f32; 3])>,
}

pub static HERD: [HerdMember; 6] = [
    HerdMember {
        facing: Facing::Forward,
        translate: [0.0, 0.0, 0.0],
        scale: 1.0,
        tilt: None,
    },
    HerdMember {
        facing: Facing::Forward,
        translate: [-16.0, 0.0, -2.5],
        scale: 0.3,
        tilt: None,
    },
    HerdMember {
        facing: Facing::Forward,
        translate: [-5.0, 0.0, 3.0],
        scale: 1.2,
        tilt: None,
    },
    HerdMember {
        facing: Facing::Opposite,
        translate: [-13.0, 0.0, 1.0],
        scale: 0.8,
        tilt: None,
    },
    HerdMember {
        facing: Facing::Forward,
        translate: [23.0, 0.0, 5.0],
        scale: 0.5,
        tilt: None,
    },
    HerdMember {
        facing: Facing::Forward,
        translate: [29.0, 0.0, 5.0],
        scale: 0.8,
        tilt: Some((20.0, X_AXIS)),
    },
];

/// Building: translate, then turn about `turn_axis`.
pub struct HouseLayout {
    pub translate: [f32; 3],
    pub turn_degrees: f32,
    pub turn_axis: [f32; 3],
}

pub const HOUSE: HouseLayout = HouseLayout {
    translate: [14.0, 0.0, 2.0],
    turn_degrees: 150.0,
    turn_axis: Y_AXIS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverKind {
    Ufo,
    Alien,
    WindowCow,
}

/// A moving object: base translation, the sampled offset, the sampled spin
/// about `spin_axis`, then `scale`.
pub struct MoverLayout {
    pub kind: MoverKind,
    pub base: [f32; 3],
    pub offset: fn() -> AnimationCurve<Vector3<f32>>,
    pub spin: fn() -> AnimationCurve<f32>,
    pub spin_axis: [f32; 3],
    pub scale: [f32; 3],
}

pub static MOVERS: [MoverLayout; 3] = [
    MoverLayout {
        kind: MoverKind::Ufo,
        base: [-35.0, 40.0, 0.0],
        offset: schedules::ufo_offset,
        spin: schedules::ufo_spin,
        spin_axis: [1.0, 1.0, 1.0],
        scale: [3.0, 3.0, 0.5],
    },
    MoverLayout {
        kind: MoverKind::Alien,
        base: [-34.0, 42.0, -2.0],
        offset: schedules::alien_offset,
        spin: schedules::alien_spin,
        spin_axis: [1.0, 1.0, 0.0],
        scale: [0.7, 0.7, 0.7],
    },
    MoverLayout {
        kind: MoverKind::WindowCow,
        base: [-62.0, 38.0, 11.0],
        offset: schedules::window_cow_offset,
        spin: schedules::window_cow_spin,
        spin_axis: [1.0, 1.0, 0.0],
        scale: [1.0, 1.0, 1.0],
    },
];
