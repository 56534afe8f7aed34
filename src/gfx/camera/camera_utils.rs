use cgmath::{Matrix4, SquareMatrix, Vector3};
use winit::event::DeviceEvent;

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};
use crate::animation::{FrameTime, LOOP_BOUND};

/// Eye and up used when the camera re-aims each frame.
pub const TRACKING_EYE: [f32; 3] = [12.0, 10.0, 35.0];
pub const TRACKING_UP: [f32; 3] = [-0.2, 4.0, 1.0];
/// Target height and depth; the horizontal component follows the counter.
pub const TRACKING_TARGET_YZ: [f32; 2] = [0.0, 3.0];
const TRACKING_TARGET_SHIFT: i32 = -10;

const LEAD_END: u32 = 75;

/// Frame-derived counter steering the camera target.
///
/// Follows `frame - 1` through frame 75, resets to 0 past the loop bound and
/// otherwise keeps its last value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackingCounter {
    value: i32,
}

impl TrackingCounter {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn update(&mut self, time: FrameTime) -> i32 {
        let frame = time.frame();
        if frame <= LEAD_END {
            self.value = time.as_i32() - 1;
        } else if frame > LOOP_BOUND {
            self.value = 0;
        }
        self.value
    }

    /// Target the camera aims at for the current counter value.
    pub fn target(&self) -> Vector3<f32> {
        let [y, z] = TRACKING_TARGET_YZ;
        Vector3::new((self.value + TRACKING_TARGET_SHIFT) as f32, y, z)
    }
}

pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
    pub tracking: TrackingCounter,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self {
            camera,
            controller,
            tracking: TrackingCounter::default(),
        }
    }

    /// Returns `true` when the event left input pending for the next frame.
    pub fn process_event(&mut self, event: &DeviceEvent) -> bool {
        self.controller.process_events(event)
    }

    /// Re-aims the camera for `time`, then applies all input gathered since
    /// the previous frame.
    pub fn begin_frame(&mut self, time: FrameTime) {
        self.tracking.update(time);
        self.camera.look_at(
            Vector3::from(TRACKING_EYE),
            self.tracking.target(),
            Vector3::from(TRACKING_UP),
        );

        let pending = self.controller.take_pending();
        if !pending.is_empty() {
            self.camera.orbit(pending.yaw, pending.pitch);
            self.camera.add_scale(pending.zoom);
        }
        self.camera.update_view_proj();
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::camera_controller::OrbitState;
    use winit::event::ElementState;

    fn manager() -> CameraManager {
        CameraManager::new(OrbitCamera::new(1.0), CameraController::new(0.01, 1.0))
    }

    #[test]
    fn counter_leads_then_holds() {
        let mut counter = TrackingCounter::default();
        assert_eq!(counter.update(FrameTime::new(0)), -1);
        assert_eq!(counter.update(FrameTime::new(40)), 39);
        assert_eq!(counter.update(FrameTime::new(75)), 74);
        assert_eq!(counter.update(FrameTime::new(76)), 74);
        assert_eq!(counter.update(FrameTime::new(400)), 74);
        assert_eq!(counter.update(FrameTime::new(401)), 0);
        assert_eq!(counter.update(FrameTime::new(300)), 0);
    }

    #[test]
    fn frame_retargets_camera() {
        let mut cameras = manager();
        cameras.begin_frame(FrameTime::new(10));
        assert_eq!(cameras.camera.frame.target, Vector3::new(-1.0, 0.0, 3.0));
        assert_eq!(cameras.camera.frame.up, Vector3::new(-0.2, 4.0, 1.0));
        assert_eq!(cameras.camera.frame.scale, 28.0);
    }

    #[test]
    fn drag_is_applied_once_at_next_frame() {
        let mut cameras = manager();
        cameras.process_event(&DeviceEvent::Button {
            button: 0,
            state: ElementState::Pressed,
        });
        cameras.process_event(&DeviceEvent::MouseMotion { delta: (-50.0, 0.0) });
        assert_eq!(cameras.controller.state(), OrbitState::Orbiting);

        let before = cameras.camera.orientation;
        cameras.begin_frame(FrameTime::new(1));
        let after = cameras.camera.orientation;
        assert_ne!(before, after);

        // tracking keeps running while orbiting, and nothing is applied twice
        cameras.begin_frame(FrameTime::new(2));
        assert_eq!(cameras.camera.orientation, after);
        assert_eq!(cameras.camera.frame.target.x, -9.0);
    }
}
