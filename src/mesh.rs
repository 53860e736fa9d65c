//! Hand-authored meshes shared by the sketches: a flat "F" for the 2D
//! tutorials and a 16-face extruded "F" for the 3D ones.
//!
//! Coordinates are in pixels with Y pointing down, matching the flip the
//! camera applies to its view matrix.

/// Vertices per quad face, as two triangles.
pub const VERTICES_PER_FACE: usize = 6;

/// Flat F, 3 quads as 18 `(x, y)` vertices.
pub const F_2D: [[f32; 2]; 18] = [
    // Left column
    [0.0, 0.0], [30.0, 0.0], [0.0, 150.0],
    [0.0, 150.0], [30.0, 0.0], [30.0, 150.0],
    // Top rung
    [30.0, 0.0], [100.0, 0.0], [30.0, 30.0],
    [30.0, 30.0], [100.0, 0.0], [100.0, 30.0],
    // Middle rung
    [30.0, 60.0], [67.0, 60.0], [30.0, 90.0],
    [30.0, 90.0], [67.0, 60.0], [67.0, 90.0],
];

const RED: [u8; 3] = [200, 50, 60];
const TEAL: [u8; 3] = [10, 170, 130];
const YELLOW: [u8; 3] = [230, 190, 0];

const FRONT: [f32; 3] = [0.0, 0.0, 1.0];
const BACK: [f32; 3] = [0.0, 0.0, -1.0];
const UP: [f32; 3] = [0.0, 1.0, 0.0];
const DOWN: [f32; 3] = [0.0, -1.0, 0.0];
const LEFT: [f32; 3] = [-1.0, 0.0, 0.0];
const RIGHT: [f32; 3] = [1.0, 0.0, 0.0];

#[derive(Clone, Copy, Debug)]
pub struct Face {
    pub corners: [[f32; 3]; VERTICES_PER_FACE],
    pub color: [u8; 3],
    pub normal: [f32; 3],
}

const fn face(corners: [[f32; 3]; VERTICES_PER_FACE], color: [u8; 3], normal: [f32; 3]) -> Face {
    Face {
        corners,
        color,
        normal,
    }
}

/// Extruded F, 30 units deep.
pub const F_3D: [Face; 16] = [
    // Left column - front
    face(
        [
            [0.0, 0.0, 0.0], [0.0, 150.0, 0.0], [30.0, 0.0, 0.0],
            [30.0, 0.0, 0.0], [0.0, 150.0, 0.0], [30.0, 150.0, 0.0],
        ],
        RED,
        FRONT,
    ),
    // Left column - back
    face(
        [
            [0.0, 0.0, 30.0], [30.0, 0.0, 30.0], [0.0, 150.0, 30.0],
            [30.0, 150.0, 30.0], [0.0, 150.0, 30.0], [30.0, 0.0, 30.0],
        ],
        TEAL,
        BACK,
    ),
    // Left column - top
    face(
        [
            [0.0, 0.0, 0.0], [30.0, 0.0, 0.0], [0.0, 0.0, 30.0],
            [30.0, 0.0, 30.0], [0.0, 0.0, 30.0], [30.0, 0.0, 0.0],
        ],
        YELLOW,
        UP,
    ),
    // Left column - left side
    face(
        [
            [0.0, 0.0, 0.0], [0.0, 0.0, 30.0], [0.0, 150.0, 0.0],
            [0.0, 0.0, 30.0], [0.0, 150.0, 30.0], [0.0, 150.0, 0.0],
        ],
        YELLOW,
        LEFT,
    ),
    // Left column - right side
    face(
        [
            [30.0, 30.0, 0.0], [30.0, 150.0, 0.0], [30.0, 30.0, 30.0],
            [30.0, 150.0, 30.0], [30.0, 30.0, 30.0], [30.0, 150.0, 0.0],
        ],
        YELLOW,
        RIGHT,
    ),
    // Left column - bottom side
    face(
        [
            [0.0, 150.0, 0.0], [0.0, 150.0, 30.0], [30.0, 150.0, 0.0],
            [0.0, 150.0, 30.0], [30.0, 150.0, 30.0], [30.0, 150.0, 0.0],
        ],
        YELLOW,
        DOWN,
    ),
    // Top rung - front
    face(
        [
            [30.0, 0.0, 0.0], [30.0, 30.0, 0.0], [100.0, 0.0, 0.0],
            [100.0, 0.0, 0.0], [30.0, 30.0, 0.0], [100.0, 30.0, 0.0],
        ],
        RED,
        FRONT,
    ),
    // Top rung - back
    face(
        [
            [30.0, 0.0, 30.0], [100.0, 0.0, 30.0], [30.0, 30.0, 30.0],
            [100.0, 30.0, 30.0], [30.0, 30.0, 30.0], [100.0, 0.0, 30.0],
        ],
        TEAL,
        BACK,
    ),
    // Top rung - bottom side
    face(
        [
            [30.0, 30.0, 0.0], [30.0, 30.0, 30.0], [100.0, 30.0, 0.0],
            [100.0, 30.0, 30.0], [100.0, 30.0, 0.0], [30.0, 30.0, 30.0],
        ],
        YELLOW,
        DOWN,
    ),
    // Top rung - right side
    face(
        [
            [100.0, 0.0, 0.0], [100.0, 30.0, 0.0], [100.0, 30.0, 30.0],
            [100.0, 0.0, 0.0], [100.0, 30.0, 30.0], [100.0, 0.0, 30.0],
        ],
        YELLOW,
        RIGHT,
    ),
    // Top rung - top
    face(
        [
            [30.0, 0.0, 0.0], [100.0, 0.0, 0.0], [30.0, 0.0, 30.0],
            [100.0, 0.0, 30.0], [30.0, 0.0, 30.0], [100.0, 0.0, 0.0],
        ],
        YELLOW,
        UP,
    ),
    // Middle rung - front
    face(
        [
            [30.0, 60.0, 0.0], [30.0, 90.0, 0.0], [67.0, 60.0, 0.0],
            [67.0, 60.0, 0.0], [30.0, 90.0, 0.0], [67.0, 90.0, 0.0],
        ],
        RED,
        FRONT,
    ),
    // Middle rung - back
    face(
        [
            [30.0, 60.0, 30.0], [67.0, 60.0, 30.0], [30.0, 90.0, 30.0],
            [67.0, 90.0, 30.0], [30.0, 90.0, 30.0], [67.0, 60.0, 30.0],
        ],
        TEAL,
        BACK,
    ),
    // Middle rung - right side
    face(
        [
            [67.0, 60.0, 0.0], [67.0, 90.0, 0.0], [67.0, 90.0, 30.0],
            [67.0, 60.0, 0.0], [67.0, 90.0, 30.0], [67.0, 60.0, 30.0],
        ],
        YELLOW,
        RIGHT,
    ),
    // Middle rung - top side
    face(
        [
            [30.0, 60.0, 0.0], [67.0, 60.0, 0.0], [30.0, 60.0, 30.0],
            [67.0, 60.0, 30.0], [30.0, 60.0, 30.0], [67.0, 60.0, 0.0],
        ],
        YELLOW,
        UP,
    ),
    // Middle rung - bottom side
    face(
        [
            [30.0, 90.0, 0.0], [30.0, 90.0, 30.0], [67.0, 90.0, 0.0],
            [67.0, 90.0, 0.0], [30.0, 90.0, 30.0], [67.0, 90.0, 30.0],
        ],
        YELLOW,
        DOWN,
    ),
];

/// Number of vertices to draw for [`F_3D`].
pub const F_3D_VERTEX_COUNT: i32 = (F_3D.len() * VERTICES_PER_FACE) as i32;

pub fn f_2d_positions() -> Vec<f32> {
    F_2D.iter().flatten().copied().collect()
}

pub fn f_3d_positions() -> Vec<f32> {
    F_3D.iter()
        .flat_map(|face| face.corners.iter().flatten().copied())
        .collect()
}

/// One RGB triple per vertex, uploaded as normalized `UNSIGNED_BYTE`.
pub fn f_3d_colors() -> Vec<u8> {
    F_3D.iter()
        .flat_map(|face| face.color.repeat(VERTICES_PER_FACE))
        .collect()
}

pub fn f_3d_normals() -> Vec<f32> {
    F_3D.iter()
        .flat_map(|face| face.normal.repeat(VERTICES_PER_FACE))
        .collect()
}
