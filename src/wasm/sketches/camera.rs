use glam::Vec3;
use web_sys::{HtmlCanvasElement, WebGlUniformLocation};

use crate::camera::Camera;
use crate::config::CameraConfig;
use crate::error::SketchError;
use crate::mesh::F_3D_VERTEX_COUNT;
use crate::transforms::{circling_eye, ring_offsets, stacked_translations, RING_SHIFT};
use crate::wasm::gl_utils::Gl;
use crate::wasm::render::Sketch;

const RING_RADIUS: f32 = 150.0;
const RING_COUNT: usize = 5;

/// A ring of F's seen from a camera circling the origin.
pub struct CameraRing {
    gl: Gl,
    camera: Camera,
    radius: f32,
    offsets: Vec<Vec3>,
    u_matrix: Option<WebGlUniformLocation>,
    u_time: Option<WebGlUniformLocation>,
    tick: u32,
}

impl CameraRing {
    pub fn new(canvas: &HtmlCanvasElement, config: CameraConfig) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            include_str!("../shaders/colored.vert"),
            include_str!("../shaders/colored.frag"),
        )?;
        super::upload_f_3d(&gl, &program, false)?;
        super::enable_solid(&gl);

        Ok(Self {
            camera: Camera::new(config, super::aspect(canvas)),
            radius: config.radius,
            offsets: ring_offsets(RING_RADIUS, RING_COUNT),
            u_matrix: gl.get_uniform_location(&program, "u_matrix"),
            u_time: gl.get_uniform_location(&program, "u_time"),
            gl,
            tick: 0,
        })
    }
}

impl Sketch for CameraRing {
    fn render(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let gl = &self.gl;

        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        gl.uniform1f(self.u_time.as_ref(), self.tick as f32);

        self.camera.set_position(circling_eye(js_sys::Date::now(), self.radius));
        let view_projection = self.camera.look_at_shifted(Vec3::ZERO, RING_SHIFT);

        for matrix in stacked_translations(view_projection, &self.offsets) {
            let cols = matrix.to_cols_array();
            gl.uniform_matrix4fv_with_f32_array(self.u_matrix.as_ref(), false, &cols);
            gl.draw_arrays(Gl::TRIANGLES, 0, F_3D_VERTEX_COUNT);
        }
    }
}
