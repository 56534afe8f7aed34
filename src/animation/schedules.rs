//! Motion schedules of the moving objects.
//!
//! Offsets are added to an object's base placement. Where the formulas divide
//! integer expressions the division truncates toward zero, so the stepped
//! motion of the y and z axes is part of the schedule.

use cgmath::Vector3;

use super::clock::{FrameTime, LOOP_BOUND};
use super::curve::AnimationCurve;

/// Last frame of the UFO and alien approach.
pub const APPROACH_END: u32 = 80;
/// Last frame of the UFO and alien hold.
pub const HOLD_END: u32 = LOOP_BOUND - 1;
/// First frame at which the windowed cow has left the window.
pub const WINDOW_EXIT_FRAME: u32 = 39;

const WINDOW_EXIT_SHIFT: f32 = -100.0;

/// Shared approach path of the UFO and the alien.
pub fn approach(f: u32) -> Vector3<f32> {
    let fi = i64::from(f);
    let ff = f as f32;
    let x = (ff * ff / 11.0 + 25.0) / 4.0;
    let y = (-fi - 30) / 2;
    Vector3::new(x, y as f32, 12.0)
}

/// Windowed cow path before the exit shift is applied.
pub fn window_path(f: u32) -> Vector3<f32> {
    let fi = i64::from(f);
    let ff = f as f32;
    let x = (ff * ff / 16.0 + 75.0) / 2.0;
    let y = (-fi - 44) / 2;
    let z = -fi / 5;
    Vector3::new(x, y as f32, z as f32)
}

pub fn ufo_offset() -> AnimationCurve<Vector3<f32>> {
    AnimationCurve::new(Vector3::new(0.0, 0.0, 0.0))
        .segment(0..=APPROACH_END, approach)
        .segment(APPROACH_END + 1..=HOLD_END, |_| Vector3::new(65.0, 3.0, 2.0))
}

pub fn alien_offset() -> AnimationCurve<Vector3<f32>> {
    AnimationCurve::new(Vector3::new(0.0, 0.0, 0.0))
        .segment(0..=APPROACH_END, approach)
        .segment(APPROACH_END + 1..=HOLD_END, |_| Vector3::new(0.0, -1.0, 0.0))
}

pub fn ufo_spin() -> AnimationCurve<f32> {
    AnimationCurve::new(0.0).segment(0..=u32::MAX, |f| 160.0 + f as f32)
}

pub fn alien_spin() -> AnimationCurve<f32> {
    AnimationCurve::new(90.0)
}

pub fn window_cow_offset() -> AnimationCurve<Vector3<f32>> {
    AnimationCurve::new(Vector3::new(0.0, 0.0, 0.0))
        .segment(0..=WINDOW_EXIT_FRAME - 1, window_path)
        .segment(WINDOW_EXIT_FRAME..=u32::MAX, |f| {
            window_path(f) + Vector3::new(WINDOW_EXIT_SHIFT, WINDOW_EXIT_SHIFT, WINDOW_EXIT_SHIFT)
        })
}

/// Spin of the windowed cow. Frame 400 is drawn after the loop reset has
/// already taken effect, so it reads 0.
pub fn window_cow_spin() -> AnimationCurve<f32> {
    AnimationCurve::new(0.0).segment(0..=HOLD_END, |f| 2.0 * f as f32)
}

/// Constant-rate spin with a phase, in degrees.
pub fn phased_spin(time: FrameTime, phase: f32) -> f32 {
    time.as_f32() + phase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(frame: u32) -> FrameTime {
        FrameTime::new(frame)
    }

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3 && (a.z - b.z).abs() < 1e-3,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn ufo_jump_between_approach_and_hold() {
        let curve = ufo_offset();
        let end = curve.sample(at(80));
        assert_close(end, Vector3::new(151.70454, -55.0, 12.0));
        let jump = curve.sample(at(81)) - end;
        assert_close(jump, Vector3::new(-86.70454, 58.0, -10.0));
    }

    #[test]
    fn approach_truncates_integer_axes() {
        // (-1 - 30) / 2 truncates toward zero
        assert_eq!(approach(1).y, -15.0);
        assert_eq!(approach(0), Vector3::new(6.25, -15.0, 12.0));
    }

    #[test]
    fn hold_and_fallback() {
        assert_eq!(ufo_offset().sample(at(399)), Vector3::new(65.0, 3.0, 2.0));
        assert_eq!(ufo_offset().sample(at(400)), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(alien_offset().sample(at(200)), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(alien_offset().sample(at(400)), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(alien_offset().sample(at(40)), ufo_offset().sample(at(40)));
    }

    #[test]
    fn windowed_cow_enters_then_leaves() {
        let curve = window_cow_offset();
        assert_close(curve.sample(at(0)), Vector3::new(37.5, -22.0, 0.0));
        assert_close(curve.sample(at(38)), Vector3::new(82.625, -41.0, -7.0));
        assert_close(curve.sample(at(39)), Vector3::new(-14.96875, -141.0, -107.0));
        assert_eq!(curve.segment_index(at(38)), Some(0));
        assert_eq!(curve.segment_index(at(39)), Some(1));
    }

    #[test]
    fn paths_stay_exact_far_past_the_loop() {
        let far = window_cow_offset().sample(at(70_000));
        assert!(((far.x - 153_125_037.5) / 153_125_037.5).abs() < 1e-6, "{far:?}");
        assert_eq!(far.y, -35_122.0);
        assert_eq!(far.z, -14_100.0);

        let last = approach(u32::MAX);
        assert!(last.x.is_finite());
        assert_eq!(last.y, -2_147_483_662.0);
    }

    #[test]
    fn spins() {
        assert_eq!(ufo_spin().sample(at(0)), 160.0);
        assert_eq!(ufo_spin().sample(at(400)), 560.0);
        assert_eq!(alien_spin().sample(at(123)), 90.0);
        assert_eq!(window_cow_spin().sample(at(399)), 798.0);
        assert_eq!(window_cow_spin().sample(at(400)), 0.0);
        assert_eq!(phased_spin(at(11), 189.0), 200.0);
    }
}
