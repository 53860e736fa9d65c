use web_sys::{HtmlCanvasElement, WebGlUniformLocation};

use crate::error::SketchError;
use crate::mesh::F_3D_VERTEX_COUNT;
use crate::transforms::orthographic_f;
use crate::wasm::gl_utils::Gl;
use crate::wasm::render::Sketch;

/// Solid F under a pixel-space orthographic projection.
pub struct Orthographic {
    gl: Gl,
    canvas: HtmlCanvasElement,
    u_matrix: Option<WebGlUniformLocation>,
    u_time: Option<WebGlUniformLocation>,
    tick: u32,
}

impl Orthographic {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            include_str!("../shaders/colored.vert"),
            include_str!("../shaders/colored.frag"),
        )?;
        super::upload_f_3d(&gl, &program, false)?;
        super::enable_solid(&gl);

        Ok(Self {
            u_matrix: gl.get_uniform_location(&program, "u_matrix"),
            u_time: gl.get_uniform_location(&program, "u_time"),
            canvas: canvas.clone(),
            gl,
            tick: 0,
        })
    }
}

impl Sketch for Orthographic {
    fn render(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let gl = &self.gl;

        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        let matrix = orthographic_f(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
            js_sys::Date::now(),
        );
        gl.uniform_matrix4fv_with_f32_array(self.u_matrix.as_ref(), false, &matrix.to_cols_array());
        gl.uniform1f(self.u_time.as_ref(), self.tick as f32);

        gl.draw_arrays(Gl::TRIANGLES, 0, F_3D_VERTEX_COUNT);
    }
}
