use web_sys::{HtmlCanvasElement, WebGlUniformLocation};

use crate::error::SketchError;
use crate::mesh;
use crate::transforms::wobble_translation;
use crate::wasm::gl_utils::{self, Gl};
use crate::wasm::render::Sketch;

const COLOR: [f32; 4] = [0.5, 0.1, 0.2, 1.0];

/// Flat F translated in pixel space.
pub struct Matrix {
    gl: Gl,
    canvas: HtmlCanvasElement,
    u_resolution: Option<WebGlUniformLocation>,
    u_translation: Option<WebGlUniformLocation>,
    u_color: Option<WebGlUniformLocation>,
}

impl Matrix {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            include_str!("../shaders/flat.vert"),
            include_str!("../shaders/flat.frag"),
        )?;

        gl_utils::create_f32_buffer(&gl, &mesh::f_2d_positions())
            .ok_or(SketchError::Resource("position buffer"))?;
        gl_utils::point_attribute(&gl, &program, "a_position", 2, Gl::FLOAT, false);

        Ok(Self {
            u_resolution: gl.get_uniform_location(&program, "u_resolution"),
            u_translation: gl.get_uniform_location(&program, "u_translation"),
            u_color: gl.get_uniform_location(&program, "u_color"),
            canvas: canvas.clone(),
            gl,
        })
    }
}

impl Sketch for Matrix {
    fn render(&mut self) {
        let gl = &self.gl;
        let (width, height) = (self.canvas.width() as f32, self.canvas.height() as f32);

        gl.uniform2f(self.u_resolution.as_ref(), width, height);
        let translation = wobble_translation(width, height, js_sys::Date::now());
        gl.uniform2f(self.u_translation.as_ref(), translation.x, translation.y);
        gl.uniform4fv_with_f32_array(self.u_color.as_ref(), &COLOR);

        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        gl.draw_arrays(Gl::TRIANGLES, 0, mesh::F_2D.len() as i32);
    }
}
