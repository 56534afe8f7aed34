use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, MouseScrollDelta},
};

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitState {
    Idle,
    Orbiting,
}

/// Input gathered between two frames, applied wholesale at the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingOrbit {
    /// Radians about world up
    pub yaw: f32,
    /// Radians about the camera's right axis
    pub pitch: f32,
    /// Change of the camera scale
    pub zoom: f32,
}

impl PendingOrbit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Maps left-button drags and the wheel to pending camera input. It never
/// touches anything but its own state.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    state: OrbitState,
    pending: PendingOrbit,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            state: OrbitState::Idle,
            pending: PendingOrbit::default(),
        }
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    pub fn pending(&self) -> PendingOrbit {
        self.pending
    }

    /// Returns `true` when the event changed the pending input.
    pub fn process_events(&mut self, event: &DeviceEvent) -> bool {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                let next = match state {
                    ElementState::Pressed => OrbitState::Orbiting,
                    ElementState::Released => OrbitState::Idle,
                };
                if next != self.state {
                    log::debug!("camera orbit state {:?} -> {:?}", self.state, next);
                    self.state = next;
                }
                false
            }
            DeviceEvent::MouseWheel { delta } => {
                let scroll_amount = -match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                        *scroll as f32
                    }
                };
                self.pending.zoom += scroll_amount * self.zoom_speed;
                true
            }
            DeviceEvent::MouseMotion { delta } if self.state == OrbitState::Orbiting => {
                self.pending.yaw += -delta.0 as f32 * self.rotate_speed;
                self.pending.pitch += delta.1 as f32 * self.rotate_speed;
                true
            }
            _ => false,
        }
    }

    /// Hands over everything accumulated since the last call.
    pub fn take_pending(&mut self) -> PendingOrbit {
        std::mem::take(&mut self.pending)
    }
}
