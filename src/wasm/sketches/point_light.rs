use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use web_sys::{HtmlCanvasElement, WebGlProgram, WebGlUniformLocation};

use crate::camera::Camera;
use crate::config::CameraConfig;
use crate::error::SketchError;
use crate::mesh::F_3D_VERTEX_COUNT;
use crate::transforms::{normal_matrix, point_light_position};
use crate::wasm::controls;
use crate::wasm::gl_utils::Gl;
use crate::wasm::render::Sketch;

const SHININESS: f32 = 64.0;
const LIGHT_COLOR: [f32; 3] = [0.3, 0.6, 0.1];
const SPECULAR_COLOR: [f32; 3] = [0.3, 0.6, 0.1];

struct Uniforms {
    world: Option<WebGlUniformLocation>,
    world_inverse_transpose: Option<WebGlUniformLocation>,
    world_view_projection: Option<WebGlUniformLocation>,
    light_world_position: Option<WebGlUniformLocation>,
    view_world_position: Option<WebGlUniformLocation>,
    shininess: Option<WebGlUniformLocation>,
    light_color: Option<WebGlUniformLocation>,
    specular_color: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &Gl, program: &WebGlProgram) -> Self {
        Self {
            world: gl.get_uniform_location(program, "u_worldMatrix"),
            world_inverse_transpose: gl
                .get_uniform_location(program, "u_worldInverseTransposeMatrix"),
            world_view_projection: gl.get_uniform_location(program, "u_worldViewProjectionMatrix"),
            light_world_position: gl.get_uniform_location(program, "u_lightWorldPosition"),
            view_world_position: gl.get_uniform_location(program, "u_viewWorldPosition"),
            shininess: gl.get_uniform_location(program, "u_shininess"),
            light_color: gl.get_uniform_location(program, "u_lightColor"),
            specular_color: gl.get_uniform_location(program, "u_specularColor"),
        }
    }
}

/// Solid F with diffuse and specular lighting from a bobbing point light.
pub struct PointLight {
    gl: Gl,
    camera: Rc<RefCell<Camera>>,
    world: Mat4,
    uniforms: Uniforms,
    tick: u32,
}

impl PointLight {
    pub fn new(canvas: &HtmlCanvasElement, config: CameraConfig) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            include_str!("../shaders/point.vert"),
            include_str!("../shaders/point.frag"),
        )?;
        super::upload_f_3d(&gl, &program, true)?;
        super::enable_solid(&gl);

        let camera = Rc::new(RefCell::new(Camera::new(config, super::aspect(canvas))));
        controls::attach(canvas, camera.clone())?;

        Ok(Self {
            camera,
            world: Mat4::from_translation(Vec3::new(-50.0, -75.0, -15.0)),
            uniforms: Uniforms::locate(&gl, &program),
            gl,
            tick: 0,
        })
    }
}

impl Sketch for PointLight {
    fn render(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let gl = &self.gl;
        let u = &self.uniforms;

        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        let camera = self.camera.borrow();
        let view_projection = camera.look_at(Vec3::ZERO);

        gl.uniform_matrix4fv_with_f32_array(u.world.as_ref(), false, &self.world.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(
            u.world_view_projection.as_ref(),
            false,
            &(view_projection * self.world).to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            u.world_inverse_transpose.as_ref(),
            false,
            &normal_matrix(self.world).to_cols_array(),
        );

        gl.uniform3fv_with_f32_array(
            u.light_world_position.as_ref(),
            &point_light_position(self.tick).to_array(),
        );
        gl.uniform3fv_with_f32_array(u.view_world_position.as_ref(), &camera.position().to_array());

        gl.uniform1f(u.shininess.as_ref(), SHININESS);
        gl.uniform3fv_with_f32_array(u.light_color.as_ref(), &LIGHT_COLOR);
        gl.uniform3fv_with_f32_array(u.specular_color.as_ref(), &SPECULAR_COLOR);

        gl.draw_arrays(Gl::TRIANGLES, 0, F_3D_VERTEX_COUNT);
    }
}
