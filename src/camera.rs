//! Perspective camera producing a single view-projection matrix per frame.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::orbit::{OrbitControls, OrbitState};

/// Field-wise position update; `None` leaves the coordinate untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialPosition {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl PartialPosition {
    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }
}

impl From<Vec3> for PartialPosition {
    fn from(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    position: Vec3,
    orbit: Option<OrbitControls>,
}

impl Camera {
    /// Creates a camera sitting at `(0, 0, radius)`.
    ///
    /// `aspect` is taken once here, like the drawing buffer size it comes
    /// from. Nothing is validated: a zero aspect or `near >= far` gives a
    /// degenerate projection.
    pub fn new(config: CameraConfig, aspect: f32) -> Self {
        let orbit = config.controls.then(|| OrbitControls::new(config.radius));
        let position = match &orbit {
            Some(orbit) => orbit.position(),
            None => Vec3::new(0.0, 0.0, config.radius),
        };

        Self {
            fov: config.fov,
            aspect,
            near: config.near,
            far: config.far,
            position,
            orbit,
        }
    }

    /// View-projection for looking from the current position at `target`.
    pub fn look_at(&self, target: Vec3) -> Mat4 {
        self.projection() * self.view(target)
    }

    /// Like [`Camera::look_at`], with `shift` applied between the projection
    /// and the view, i.e. `projection · T(shift) · view`.
    pub fn look_at_shifted(&self, target: Vec3, shift: Vec3) -> Mat4 {
        self.projection() * Mat4::from_translation(shift) * self.view(target)
    }

    /// View-projection for a camera that only flips and translates, with no
    /// look-at target.
    pub fn translate(&self, offset: Vec3) -> Mat4 {
        let projection = self.projection();
        let view = camera_matrix().inverse()
            * Mat4::from_rotation_x(PI)
            * Mat4::from_translation(offset);
        projection * view
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, update: impl Into<PartialPosition>) {
        let update = update.into();
        if let Some(x) = update.x {
            self.position.x = x;
        }
        if let Some(y) = update.y {
            self.position.y = y;
        }
        if let Some(z) = update.z {
            self.position.z = z;
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.orbit.is_some()
    }

    /// `None` when controls are disabled.
    pub fn orbit_state(&self) -> Option<OrbitState> {
        self.orbit.as_ref().map(OrbitControls::state)
    }

    /// Accumulated drag angles, `None` when controls are disabled.
    pub fn orbit_angles(&self) -> Option<Vec3> {
        self.orbit.as_ref().map(OrbitControls::angles)
    }

    pub fn pointer_down(&mut self) {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.press();
        }
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        let Some(orbit) = self.orbit.as_mut() else {
            return;
        };
        if let Some(position) = orbit.motion(dx, dy) {
            self.set_position(position);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.release();
        }
    }

    fn view(&self, target: Vec3) -> Mat4 {
        let look = Mat4::look_at_rh(self.position, target, Vec3::Y);
        camera_matrix().inverse() * look * Mat4::from_rotation_x(PI)
    }

    fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }
}

// The camera itself never moves in world space; position only feeds look-at.
fn camera_matrix() -> Mat4 {
    Mat4::IDENTITY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(controls: bool) -> Camera {
        let config = CameraConfig {
            radius: 10.0,
            controls,
            ..CameraConfig::default()
        };
        Camera::new(config, 1.5)
    }

    #[test]
    fn starts_on_positive_z_at_radius() {
        assert_eq!(camera(false).position(), Vec3::new(0.0, 0.0, 10.0));
        assert!(camera(true).position().abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-6));
    }

    #[test]
    fn pointer_events_are_ignored_without_controls() {
        let mut cam = camera(false);
        cam.pointer_down();
        cam.pointer_move(100.0, 100.0);
        cam.pointer_up();
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(cam.orbit_state(), None);
        assert_eq!(cam.orbit_angles(), None);
    }

    #[test]
    fn translate_puts_offset_through_the_flip() {
        let cam = camera(false);
        let vp = cam.translate(Vec3::new(0.0, 0.0, 5.0));
        // Origin is moved to z=+5 and then flipped to z=-5, i.e. in front.
        let clip = vp * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.w - 5.0).abs() < 1e-5, "w={}", clip.w);
    }

    #[test]
    fn zero_shift_is_plain_look_at() {
        let cam = camera(false);
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(cam.look_at_shifted(target, Vec3::ZERO), cam.look_at(target));
    }

    #[test]
    fn degenerate_aspect_does_not_panic() {
        let cam = Camera::new(CameraConfig::default(), 0.0);
        let vp = cam.look_at(Vec3::ZERO);
        assert!(!vp.is_finite());
    }
}
