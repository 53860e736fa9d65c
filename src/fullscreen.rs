//! Data for the "big triangle" technique: one oversized triangle whose
//! visible part covers the viewport exactly once, so full-surface passes need
//! neither a second triangle nor an index buffer.

/// Clip-space positions.
pub const TRIANGLE_POSITIONS: [f32; 6] = [
    -1.0, -1.0, //
    3.0, -1.0, //
    -1.0, 3.0,
];

/// Texture coordinates; the visible part spans `0..1`.
pub const TRIANGLE_UVS: [f32; 6] = [
    0.0, 0.0, //
    2.0, 0.0, //
    0.0, 2.0,
];

pub const TRIANGLE_VERTEX_COUNT: i32 = 3;

pub const VERTEX_SHADER: &str = r#"
attribute vec2 a_position;
attribute vec2 a_uv;
attribute vec2 a_texture_coord;

varying vec2 v_uv;
varying vec2 v_texture_coord;

void main() {
  gl_Position = vec4(a_position, 0.0, 1.0);

  v_uv = a_uv;
  v_texture_coord = a_texture_coord;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform sampler2D u_image;

varying vec2 v_uv;
varying vec2 v_texture_coord;

void main() {
  gl_FragColor = texture2D(u_image, v_texture_coord);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(data: &[f32; 6], i: usize) -> (f32, f32) {
        (data[i * 2], data[i * 2 + 1])
    }

    // Barycentric weights of `p` against the triangle.
    fn barycentric(p: (f32, f32)) -> [f32; 3] {
        let (a, b, c) = (
            vertex(&TRIANGLE_POSITIONS, 0),
            vertex(&TRIANGLE_POSITIONS, 1),
            vertex(&TRIANGLE_POSITIONS, 2),
        );
        let det = (b.1 - c.1) * (a.0 - c.0) + (c.0 - b.0) * (a.1 - c.1);
        let w0 = ((b.1 - c.1) * (p.0 - c.0) + (c.0 - b.0) * (p.1 - c.1)) / det;
        let w1 = ((c.1 - a.1) * (p.0 - c.0) + (a.0 - c.0) * (p.1 - c.1)) / det;
        [w0, w1, 1.0 - w0 - w1]
    }

    #[test]
    fn viewport_corners_are_inside_the_triangle() {
        for corner in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            let w = barycentric(corner);
            assert!(w.iter().all(|w| *w >= -1e-6), "{corner:?} -> {w:?}");
        }
    }

    #[test]
    fn viewport_maps_to_unit_uv_square() {
        let corners = [
            ((-1.0, -1.0), (0.0, 0.0)),
            ((1.0, -1.0), (1.0, 0.0)),
            ((-1.0, 1.0), (0.0, 1.0)),
            ((1.0, 1.0), (1.0, 1.0)),
        ];
        for (clip, expected) in corners {
            let w = barycentric(clip);
            let uv = (0..3).fold((0.0, 0.0), |acc, i| {
                let (u, v) = vertex(&TRIANGLE_UVS, i);
                (acc.0 + w[i] * u, acc.1 + w[i] * v)
            });
            assert!(
                (uv.0 - expected.0).abs() < 1e-6 && (uv.1 - expected.1).abs() < 1e-6,
                "clip={clip:?} uv={uv:?}"
            );
        }
    }
}
