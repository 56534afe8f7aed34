use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

pub const INITIAL_SCALE: f32 = 28.0;
pub const MIN_SCALE: f32 = 2.0;
pub const MAX_SCALE: f32 = 200.0;

/// Eye, target and up of a look-at view, plus the half-extent of the region
/// visible at the target's distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub scale: f32,
}

impl CameraFrame {
    /// The view the scene opens with.
    pub fn initial() -> Self {
        Self {
            eye: Vector3::new(12.0, 10.0, 35.0),
            target: Vector3::new(-3.4, 2.0, 3.4),
            up: Vector3::new(-0.2, 3.0, -0.2),
            scale: INITIAL_SCALE,
        }
    }

    pub fn distance(&self) -> f32 {
        (self.eye - self.target).magnitude()
    }
}

/// Look-at camera with a trackball orientation layered on top.
///
/// Re-aiming replaces eye, target and up but keeps `orientation`, so user
/// orbit input survives the per-frame retargeting. The orientation turns the
/// eye (and up) about the target.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub frame: CameraFrame,
    pub orientation: Quaternion<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye());
        let target = Point3::from_vec(self.frame.target);
        let view = Matrix4::look_at_rh(eye, target, self.up());
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy(), self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            frame: CameraFrame::initial(),
            orientation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            aspect,
            znear: 0.5,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    /// Re-aims the camera. Scale and trackball orientation are kept.
    pub fn look_at(&mut self, eye: Vector3<f32>, target: Vector3<f32>, up: Vector3<f32>) {
        self.frame.eye = eye;
        self.frame.target = target;
        self.frame.up = up;
    }

    /// Eye position after the trackball orientation is applied.
    pub fn eye(&self) -> Vector3<f32> {
        self.frame.target + self.orientation.rotate_vector(self.frame.eye - self.frame.target)
    }

    pub fn up(&self) -> Vector3<f32> {
        self.orientation.rotate_vector(self.frame.up)
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.frame.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn add_scale(&mut self, delta: f32) {
        self.set_scale(self.frame.scale + delta);
    }

    /// Vertical field of view that shows `scale` units either side of the target.
    pub fn fovy(&self) -> Rad<f32> {
        let distance = self.frame.distance().max(f32::EPSILON);
        Rad(2.0 * (self.frame.scale / distance).atan())
    }

    /// Turns the trackball: `yaw` radians about world up, then `pitch`
    /// radians about the camera's right axis.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        if yaw != 0.0 {
            let turn = Quaternion::from_axis_angle(Vector3::unit_y(), Rad(yaw));
            self.orientation = (turn * self.orientation).normalize();
        }
        if pitch != 0.0 {
            let forward = self.frame.target - self.eye();
            let right = forward.cross(self.up());
            if right.magnitude2() > f32::EPSILON {
                let tilt = Quaternion::from_axis_angle(right.normalize(), Rad(pitch));
                self.orientation = (tilt * self.orientation).normalize();
            }
        }
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn update_view_proj(&mut self) {
        let eye = self.eye();
        self.uniform.view_position = [eye.x, eye.y, eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_the_initial_frame() {
        let camera = OrbitCamera::new(1.0);
        assert_eq!(camera.frame, CameraFrame::initial());
        assert!((camera.eye() - Vector3::new(12.0, 10.0, 35.0)).magnitude() < 1e-4);
        assert_eq!(camera.uniform.view_position[3], 1.0);
    }

    #[test]
    fn field_of_view_frames_the_scale() {
        let mut camera = OrbitCamera::new(1.0);
        camera.look_at(
            Vector3::new(0.0, 0.0, 28.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        );
        // scale equal to the distance gives a right angle
        assert!((camera.fovy().0 - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn scale_is_clamped() {
        let mut camera = OrbitCamera::new(1.0);
        camera.add_scale(-100.0);
        assert_eq!(camera.frame.scale, MIN_SCALE);
        camera.set_scale(1e6);
        assert_eq!(camera.frame.scale, MAX_SCALE);
    }

    #[test]
    fn orbit_survives_retargeting() {
        let mut camera = OrbitCamera::new(1.0);
        camera.orbit(std::f32::consts::FRAC_PI_2, 0.0);
        let target = Vector3::new(0.0, 0.0, 0.0);
        camera.look_at(Vector3::new(0.0, 0.0, 10.0), target, Vector3::unit_y());

        // a quarter turn about +y carries +z to +x
        let eye = camera.eye();
        assert!((eye - Vector3::new(10.0, 0.0, 0.0)).magnitude() < 1e-4, "{eye:?}");
        assert!((camera.frame.distance() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn pitch_keeps_distance() {
        let mut camera = OrbitCamera::new(1.0);
        let before = (camera.eye() - camera.frame.target).magnitude();
        camera.orbit(0.0, 0.3);
        let after = (camera.eye() - camera.frame.target).magnitude();
        assert!((before - after).abs() < 1e-3);
        assert_ne!(camera.orientation, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }
}
