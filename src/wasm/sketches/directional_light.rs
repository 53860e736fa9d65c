use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use web_sys::{HtmlCanvasElement, WebGlUniformLocation};

use crate::camera::Camera;
use crate::config::CameraConfig;
use crate::error::SketchError;
use crate::mesh::F_3D_VERTEX_COUNT;
use crate::transforms::directional_light;
use crate::wasm::controls;
use crate::wasm::gl_utils::Gl;
use crate::wasm::render::Sketch;

/// Solid F lit by a fixed directional light, with an orbit camera.
pub struct DirectionalLight {
    gl: Gl,
    camera: Rc<RefCell<Camera>>,
    u_matrix: Option<WebGlUniformLocation>,
    u_light_dir: Option<WebGlUniformLocation>,
}

impl DirectionalLight {
    pub fn new(canvas: &HtmlCanvasElement, config: CameraConfig) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            include_str!("../shaders/directional.vert"),
            include_str!("../shaders/directional.frag"),
        )?;
        super::upload_f_3d(&gl, &program, true)?;
        super::enable_solid(&gl);

        let camera = Rc::new(RefCell::new(Camera::new(config, super::aspect(canvas))));
        controls::attach(canvas, camera.clone())?;

        Ok(Self {
            camera,
            u_matrix: gl.get_uniform_location(&program, "u_matrix"),
            u_light_dir: gl.get_uniform_location(&program, "u_lightDir"),
            gl,
        })
    }
}

impl Sketch for DirectionalLight {
    fn render(&mut self) {
        let gl = &self.gl;

        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        let matrix = self.camera.borrow().look_at(Vec3::ZERO);
        gl.uniform_matrix4fv_with_f32_array(self.u_matrix.as_ref(), false, &matrix.to_cols_array());
        gl.uniform3fv_with_f32_array(self.u_light_dir.as_ref(), &directional_light().to_array());

        gl.draw_arrays(Gl::TRIANGLES, 0, F_3D_VERTEX_COUNT);
    }
}
