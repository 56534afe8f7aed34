//! The per-frame light rig: three orbiting colored point lights, a dim
//! headlight fixed at the viewer, a global ambient term and the material
//! emission.

use super::clock::FrameTime;
use crate::gfx::geometry::Color;
use crate::gfx::scene::Transform;

pub const GLOBAL_AMBIENT: f32 = 0.15;
pub const HEADLIGHT_INTENSITY: f32 = 0.5;

const LIGHT_DIFFUSE: f32 = 0.5;
const LIGHT_AMBIENT: f32 = 0.1;
const LIGHT_EMISSION: f32 = 0.5;

/// Static description of one orbiting light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpec {
    pub channel: Color,
    pub base: [f32; 3],
    pub rate: f32,
    pub phase: f32,
}

impl OrbitSpec {
    /// Orbit angle about the Y axis in degrees: `(f + phase) * rate`.
    pub fn angle(&self, time: FrameTime) -> f32 {
        (time.as_f32() + self.phase) * self.rate
    }
}

pub const RED_ORBIT: OrbitSpec = OrbitSpec {
    channel: Color::new(1.0, 0.0, 0.0),
    base: [10.0, 7.0, 0.0],
    rate: -1.0,
    phase: 0.0,
};

pub const GREEN_ORBIT: OrbitSpec = OrbitSpec {
    channel: Color::new(0.0, 1.0, 0.0),
    base: [9.0, 8.0, 0.0],
    rate: 0.8743,
    phase: 100.0,
};

pub const BLUE_ORBIT: OrbitSpec = OrbitSpec {
    channel: Color::new(0.0, 0.0, 1.0),
    base: [9.5, 7.5, 0.0],
    rate: 1.3057,
    phase: -100.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub diffuse: Color,
    pub ambient: Color,
}

impl PointLight {
    fn orbiting(spec: &OrbitSpec, time: FrameTime) -> Self {
        let c = spec.channel;
        Self {
            position: Transform::identity()
                .rotate(spec.angle(time), [0.0, 1.0, 0.0])
                .transform_point(spec.base),
            diffuse: c.scaled(LIGHT_DIFFUSE),
            ambient: c.scaled(LIGHT_AMBIENT),
        }
    }
}

/// Complete lighting state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub global_ambient: Color,
    /// White light at the eye, diffuse and specular.
    pub headlight: f32,
    /// Red, green, blue.
    pub points: [PointLight; 3],
    pub emission: Color,
}

impl LightRig {
    pub fn at(time: FrameTime) -> Self {
        let orbits = [RED_ORBIT, GREEN_ORBIT, BLUE_ORBIT];
        Self {
            global_ambient: Color::WHITE.scaled(GLOBAL_AMBIENT),
            headlight: HEADLIGHT_INTENSITY,
            points: orbits.map(|o| PointLight::orbiting(&o, time)),
            // lights set the emission in order, the last one stays active
            emission: orbits[2].channel.scaled(LIGHT_EMISSION),
        }
    }
}
