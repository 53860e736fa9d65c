use std::f32::consts::PI;

use glam::{Mat4, Vec3, Vec4};
use webgl_sketches::camera::{Camera, PartialPosition};
use webgl_sketches::config::CameraConfig;
use webgl_sketches::orbit::{OrbitState, ORBIT_SCALE};
use webgl_sketches::transforms::{
    circling_eye, ring_offsets, stacked_translations, RING_SHIFT,
};

// Column-major 4x4, written out the long way so the camera's matrices are
// checked against the formulas rather than against themselves.
type Cols = [f32; 16];

fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Cols {
    let f = 1.0 / (fov / 2.0).tan();
    let nf = 1.0 / (near - far);
    let mut m = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = (far + near) * nf;
    m[11] = -1.0;
    m[14] = 2.0 * far * near * nf;
    m
}

fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Cols {
    let z = (eye - center).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    [
        x.x, y.x, z.x, 0.0, //
        x.y, y.y, z.y, 0.0, //
        x.z, y.z, z.z, 0.0, //
        -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
    ]
}

fn rotate_x(angle: f32) -> Cols {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

fn translation(v: Vec3) -> Cols {
    let mut m = [0.0; 16];
    m[0] = 1.0;
    m[5] = 1.0;
    m[10] = 1.0;
    m[12] = v.x;
    m[13] = v.y;
    m[14] = v.z;
    m[15] = 1.0;
    m
}

fn multiply(a: &Cols, b: &Cols) -> Cols {
    let mut out = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
        }
    }
    out
}

fn approx_eq(a: &Cols, b: &Cols, eps: f32) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps * x.abs().max(1.0))
}

fn camera(fov: f32, aspect: f32, near: f32, far: f32, radius: f32, controls: bool) -> Camera {
    let config = CameraConfig {
        fov,
        near,
        far,
        radius,
        controls,
    };
    Camera::new(config, aspect)
}

#[test]
fn look_at_equals_projection_times_flipped_look_at() {
    let frusta = [
        (PI * 0.25, 1.0, 0.1, 100.0),
        (PI * 0.25, 16.0 / 9.0, 0.1, 10000.0),
        (1.2, 0.5, 1.0, 50.0),
    ];
    let poses = [
        (Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO),
        (Vec3::new(120.0, -40.0, 300.0), Vec3::new(10.0, 5.0, -3.0)),
        (Vec3::new(-7.0, 2.0, -9.0), Vec3::new(1.0, 1.0, 1.0)),
    ];

    for &(fov, aspect, near, far) in &frusta {
        for &(eye, target) in &poses {
            let mut cam = camera(fov, aspect, near, far, 10.0, false);
            cam.set_position(eye);

            let view = multiply(&look_at(eye, target, Vec3::Y), &rotate_x(PI));
            let expected = multiply(&perspective(fov, aspect, near, far), &view);
            let actual = cam.look_at(target).to_cols_array();

            assert!(
                approx_eq(&actual, &expected, 1e-4),
                "fov={fov} aspect={aspect} eye={eye:?}\nactual={actual:?}\nexpected={expected:?}"
            );
        }
    }
}

#[test]
fn look_at_is_repeatable() {
    let mut cam = camera(PI * 0.25, 1.5, 0.1, 10000.0, 500.0, true);
    cam.pointer_down();
    cam.pointer_move(37.0, -12.0);
    cam.pointer_up();

    let target = Vec3::new(3.0, -4.0, 5.0);
    assert_eq!(cam.look_at(target), cam.look_at(target));
}

#[test]
fn drag_accumulates_running_sums() {
    let radius = 500.0;
    let mut cam = camera(PI * 0.25, 1.0, 0.1, 10000.0, radius, true);
    let deltas = [(12.0, -3.0), (40.0, 8.0), (-5.0, 0.0), (0.0, 250.0), (-300.0, -45.0)];

    cam.pointer_down();
    for &(dx, dy) in &deltas {
        cam.pointer_move(dx, dy);
        assert_eq!(cam.orbit_state(), Some(OrbitState::Dragging));
    }

    let sum_dx: f32 = deltas.iter().map(|d| d.0).sum();
    let sum_dy: f32 = deltas.iter().map(|d| d.1).sum();
    let angles = cam.orbit_angles().unwrap();
    assert_eq!(angles, Vec3::new(sum_dy, -sum_dx, sum_dx));

    let (ax, ay, az) = (
        sum_dy * ORBIT_SCALE,
        -sum_dx * ORBIT_SCALE,
        sum_dx * ORBIT_SCALE,
    );
    let expected = Vec3::new(
        radius * ax.cos() * ay.sin(),
        radius * ax.sin(),
        radius * ax.cos() * az.cos(),
    );
    assert!(
        cam.position().abs_diff_eq(expected, 1e-3),
        "position={:?} expected={expected:?}",
        cam.position()
    );

    cam.pointer_up();
    assert_eq!(cam.orbit_state(), Some(OrbitState::Idle));
}

#[test]
fn moves_after_release_are_ignored() {
    let mut cam = camera(PI * 0.25, 1.0, 0.1, 10000.0, 500.0, true);
    cam.pointer_down();
    cam.pointer_move(10.0, 10.0);
    cam.pointer_up();
    let before = (cam.orbit_angles(), cam.position());

    cam.pointer_move(99.0, -99.0);
    assert_eq!((cam.orbit_angles(), cam.position()), before);
}

#[test]
fn press_then_release_changes_nothing() {
    let mut cam = camera(PI * 0.25, 1.0, 0.1, 10000.0, 500.0, true);
    let position = cam.position();

    cam.pointer_down();
    assert_eq!(cam.orbit_state(), Some(OrbitState::PointerDown));
    cam.pointer_up();

    assert_eq!(cam.orbit_state(), Some(OrbitState::Idle));
    assert_eq!(cam.orbit_angles(), Some(Vec3::ZERO));
    assert_eq!(cam.position(), position);
}

#[test]
fn set_position_merges_fields() {
    let mut cam = camera(PI * 0.25, 1.0, 0.1, 100.0, 10.0, false);
    cam.set_position(Vec3::new(1.0, 2.0, 3.0));
    cam.set_position(PartialPosition::default().y(5.0));
    assert_eq!(cam.position(), Vec3::new(1.0, 5.0, 3.0));

    cam.set_position(PartialPosition::default());
    assert_eq!(cam.position(), Vec3::new(1.0, 5.0, 3.0));
}

#[test]
fn closed_form_for_default_pose() {
    let (fov, near, far) = (PI / 4.0, 0.1, 100.0);
    let cam = camera(fov, 1.0, near, far, 10.0, false);
    let vp: Mat4 = cam.look_at(Vec3::ZERO);

    let f = 1.0 / (fov / 2.0).tan();
    let a = (far + near) / (near - far);
    let b = 2.0 * far * near / (near - far);

    // Eye at (0, 0, 10): w ends up as z + 10 after the flip.
    let bottom = vp.row(3);
    assert!(
        bottom.abs_diff_eq(Vec4::new(0.0, 0.0, 1.0, 10.0), 1e-5),
        "bottom row {bottom:?}"
    );
    assert!((vp.col(2).z - -a).abs() < 1e-5, "col2.z={}", vp.col(2).z);
    assert!((vp.col(3).z - (-10.0 * a + b)).abs() < 1e-5, "col3.z={}", vp.col(3).z);
    assert!((vp.col(0).x - f).abs() < 1e-5);
    assert!((vp.col(1).y + f).abs() < 1e-5);

    // The origin lands in the middle of the screen.
    let clip = vp * Vec4::W;
    assert!((clip.x / clip.w).abs() < 1e-6 && (clip.y / clip.w).abs() < 1e-6);
}

#[test]
fn ring_shift_sits_between_projection_and_view() {
    let (fov, aspect, near, far) = (PI * 0.25, 1.0, 0.1, 20000.0);
    let mut cam = camera(fov, aspect, near, far, 500.0, false);
    let offsets = ring_offsets(150.0, 5);

    for millis in [0.0, 1250.0, 4000.0] {
        let eye = circling_eye(millis, 500.0);
        cam.set_position(eye);
        let stacked = stacked_translations(cam.look_at_shifted(Vec3::ZERO, RING_SHIFT), &offsets);

        let view = multiply(&look_at(eye, Vec3::ZERO, Vec3::Y), &rotate_x(PI));
        let shifted = multiply(&perspective(fov, aspect, near, far), &translation(RING_SHIFT));
        let mut expected = multiply(&shifted, &view);
        for (actual, offset) in stacked.iter().zip(&offsets) {
            expected = multiply(&expected, &translation(*offset));
            let actual = actual.to_cols_array();
            assert!(
                approx_eq(&actual, &expected, 1e-4),
                "millis={millis} offset={offset:?}\nactual={actual:?}\nexpected={expected:?}"
            );
        }
    }

    // Eye at (500, 0, 0): the first F sits 350 units ahead, pushed off center
    // by the shift alone.
    cam.set_position(circling_eye(0.0, 500.0));
    let first = stacked_translations(cam.look_at_shifted(Vec3::ZERO, RING_SHIFT), &offsets)[0];
    let clip = first * Vec4::W;
    let ndc = (clip.x / clip.w, clip.y / clip.w);
    assert!((ndc.0 - -0.3449).abs() < 1e-3 && (ndc.1 - 0.5173).abs() < 1e-3, "ndc={ndc:?}");
}
