//! # Animation Module
//!
//! A single global frame counter drives every motion in the scene. The clock
//! hands out [`FrameTime`] snapshots; piecewise motions are [`AnimationCurve`]s
//! sampled at that time, and the light rig is a pure function of it.
//!
//! ## Usage
//!
//! ```rust
//! use pasture::animation::{schedules, AnimationClock, Tick};
//!
//! let mut clock = AnimationClock::new();
//! let ufo = schedules::ufo_offset();
//! if let Tick::Advanced(time) = clock.tick() {
//!     let offset = ufo.sample(time);
//!     assert_eq!(offset.z, 12.0);
//! }
//! ```

pub mod clock;
pub mod curve;
pub mod lights;
pub mod schedules;

pub use clock::{AnimationClock, FrameTime, Tick, LOOP_BOUND};
pub use curve::AnimationCurve;
pub use lights::{LightRig, PointLight};
