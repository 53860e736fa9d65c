//! Pointer-drag orbit controls.
//!
//! Raw pointer movement is accumulated into three angles which then drive a
//! point on a sphere around the origin. The axes are coupled on purpose: a
//! horizontal drag feeds both `y` and `z`, a vertical drag feeds `x`.

use glam::Vec3;

/// Converts accumulated pixel deltas into radians.
pub const ORBIT_SCALE: f32 = 0.0005;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrbitState {
    #[default]
    Idle,
    PointerDown,
    Dragging,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    state: OrbitState,
    angles: Vec3,
    radius: f32,
}

impl OrbitControls {
    pub fn new(radius: f32) -> Self {
        Self {
            state: OrbitState::Idle,
            angles: Vec3::ZERO,
            radius,
        }
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    /// Position for the current angles.
    pub fn position(&self) -> Vec3 {
        sphere_position(self.angles, self.radius)
    }

    pub fn press(&mut self) {
        self.state = OrbitState::PointerDown;
    }

    /// Feeds one pointer-move sample. The first sample after a press starts
    /// the drag and is accumulated like every following one.
    ///
    /// Returns the new camera position when the sample moved the camera.
    pub fn motion(&mut self, dx: f32, dy: f32) -> Option<Vec3> {
        match self.state {
            OrbitState::Idle => return None,
            OrbitState::PointerDown => {
                log::debug!("orbit: drag started");
                self.state = OrbitState::Dragging;
            }
            OrbitState::Dragging => {}
        }

        self.angles.x += dy;
        self.angles.y -= dx;
        self.angles.z += dx;

        Some(self.position())
    }

    pub fn release(&mut self) {
        if self.state == OrbitState::Dragging {
            log::debug!("orbit: drag ended at angles {:?}", self.angles);
        }
        self.state = OrbitState::Idle;
    }
}

/// Maps accumulated angles onto a sphere of `radius`.
///
/// `x` tilts towards the poles, `y` swings around the vertical axis on the X
/// side and `z` on the Z side. With all angles at zero the point sits on +Z.
pub fn sphere_position(angles: Vec3, radius: f32) -> Vec3 {
    let a = angles * ORBIT_SCALE;
    Vec3::new(
        radius * a.x.cos() * a.y.sin(),
        radius * a.x.sin(),
        radius * a.x.cos() * a.z.cos(),
    )
}
