//! Per-sketch animation math, kept free of GL so it can be checked on the host.

use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

/// Moves the F's origin from its top-left corner to roughly its middle.
pub const F_CENTER_OFFSET: Vec3 = Vec3::new(-50.0, -75.0, 0.0);

/// Translation for the 2D F, wobbling around the canvas center.
pub fn wobble_translation(width: f32, height: f32, millis: f64) -> Vec2 {
    Vec2::new(
        width / 2.0 + ((millis * 0.004).cos() * 100.0) as f32 - 50.0,
        height / 2.0 + ((millis * 0.0025).sin() * 100.0) as f32 - 75.0,
    )
}

/// Pixel-space orthographic projection of the 3D F, tilted towards the
/// viewer and pulsing in size.
pub fn orthographic_f(width: f32, height: f32, millis: f64) -> Mat4 {
    let scale = 0.8 + ((millis * 0.001).sin() * 0.4).abs() as f32;

    Mat4::orthographic_rh_gl(0.0, width, height, 0.0, 0.1, 1000.0)
        * Mat4::from_translation(Vec3::new(width / 2.0, height / 2.0, -200.0))
        * Mat4::from_rotation_x(PI * -0.1)
        * Mat4::from_rotation_y(PI * 0.1)
        * Mat4::from_scale(Vec3::splat(scale))
        * Mat4::from_translation(F_CENTER_OFFSET)
}

/// Clip-space shift the camera ring applies between projection and view.
pub const RING_SHIFT: Vec3 = Vec3::new(-50.0, 75.0, 0.0);

/// Eye position circling the origin on the XZ plane.
pub fn circling_eye(millis: f64, radius: f32) -> Vec3 {
    let t = millis * 0.001;
    Vec3::new(t.cos() as f32 * radius, 0.0, t.sin() as f32 * radius)
}

/// `count` points evenly spaced on a ring of `radius` in the XZ plane.
pub fn ring_offsets(radius: f32, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * PI * 2.0 / count as f32;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// One matrix per offset, each translation stacked on top of the previous
/// one rather than applied to `view_projection` alone.
pub fn stacked_translations(view_projection: Mat4, offsets: &[Vec3]) -> Vec<Mat4> {
    offsets
        .iter()
        .scan(view_projection, |matrix, offset| {
            *matrix *= Mat4::from_translation(*offset);
            Some(*matrix)
        })
        .collect()
}

/// Matrix for transforming normals by `world`.
pub fn normal_matrix(world: Mat4) -> Mat4 {
    world.inverse().transpose()
}

pub fn directional_light() -> Vec3 {
    Vec3::new(0.5, 0.7, 1.0).normalize()
}

pub fn point_light_position(tick: u32) -> Vec3 {
    Vec3::new(20.0, (tick as f32 * 0.025).sin() * 100.0, 80.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wobble_starts_left_of_center() {
        let t = wobble_translation(800.0, 600.0, 0.0);
        assert_eq!(t, Vec2::new(400.0 + 100.0 - 50.0, 300.0 - 75.0));
    }

    #[test]
    fn ring_is_evenly_spaced() {
        let ring = ring_offsets(150.0, 5);
        assert_eq!(ring.len(), 5);
        assert!(ring[0].abs_diff_eq(Vec3::new(150.0, 0.0, 0.0), 1e-4));
        for p in &ring {
            assert!((p.length() - 150.0).abs() < 1e-3);
        }
        let gap = ring[0].distance(ring[1]);
        assert!((ring[3].distance(ring[4]) - gap).abs() < 1e-3);
    }

    #[test]
    fn translations_accumulate() {
        let offsets = [Vec3::X, Vec3::Y, Vec3::Z];
        let stacked = stacked_translations(Mat4::IDENTITY, &offsets);
        assert_eq!(stacked.len(), 3);
        assert_eq!(stacked[2].w_axis.truncate(), Vec3::ONE);
    }

    #[test]
    fn orthographic_maps_f_center_near_canvas_center() {
        // At t=0 the scale is 0.8 and the F's middle sits at the translation.
        let m = orthographic_f(800.0, 600.0, 0.0);
        let clip = m.project_point3(Vec3::new(50.0, 75.0, 0.0));
        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4, "clip={clip:?}");
    }

    #[test]
    fn normal_matrix_ignores_translation_for_directions() {
        let world = Mat4::from_translation(Vec3::new(-50.0, -75.0, -15.0));
        let n = normal_matrix(world).transform_vector3(Vec3::Y);
        assert!(n.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn light_direction_is_unit_length() {
        assert!((directional_light().length() - 1.0).abs() < 1e-6);
    }
}
