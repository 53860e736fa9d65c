//! One module per page. Each sketch builds its GL state once and then only
//! updates uniforms and draws.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, WebGlProgram};

use crate::config::{CameraConfig, SketchKind};
use crate::error::SketchError;
use crate::mesh;
use crate::wasm::gl_utils::{self, Gl, ShaderKind};
use crate::wasm::render::{self, Sketch};

mod camera;
mod directional_light;
mod image;
mod image_effects;
mod matrix;
mod orthographic;
mod point_light;

pub fn start(kind: SketchKind, document: &Document) -> Result<(), SketchError> {
    match kind {
        SketchKind::Image => image::start(document),
        SketchKind::ImageEffects => image_effects::start(canvas(document)?),
        SketchKind::Matrix => run(matrix::Matrix::new(&canvas(document)?)?),
        SketchKind::Orthographic3d => run(orthographic::Orthographic::new(&canvas(document)?)?),
        SketchKind::Camera => {
            let canvas = canvas(document)?;
            let config = camera_config(&canvas, CameraConfig::default())?;
            run(camera::CameraRing::new(&canvas, config)?)
        }
        SketchKind::DirectionalLight => {
            let canvas = canvas(document)?;
            let config = camera_config(&canvas, orbiting())?;
            run(directional_light::DirectionalLight::new(&canvas, config)?)
        }
        SketchKind::PointLight => {
            let canvas = canvas(document)?;
            let config = camera_config(&canvas, orbiting())?;
            run(point_light::PointLight::new(&canvas, config)?)
        }
    }
}

fn run(mut sketch: impl Sketch + 'static) -> Result<(), SketchError> {
    render::animate(move || sketch.render())
}

fn canvas(document: &Document) -> Result<HtmlCanvasElement, SketchError> {
    document
        .query_selector("canvas")?
        .ok_or(SketchError::MissingElement("canvas"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SketchError::MissingElement("canvas"))
}

fn orbiting() -> CameraConfig {
    CameraConfig {
        controls: true,
        ..CameraConfig::default()
    }
}

fn camera_config(
    canvas: &HtmlCanvasElement,
    defaults: CameraConfig,
) -> Result<CameraConfig, SketchError> {
    Ok(defaults.with_overrides(|name| canvas.get_attribute(name))?)
}

fn context(canvas: &HtmlCanvasElement) -> Result<Gl, SketchError> {
    gl_utils::create_context(canvas).ok_or(SketchError::ContextUnavailable)
}

fn aspect(canvas: &HtmlCanvasElement) -> f32 {
    canvas.width() as f32 / canvas.height() as f32
}

/// Compiles and links `vs`/`fs` and makes the program current.
fn program(gl: &Gl, vs: &str, fs: &str) -> Result<WebGlProgram, SketchError> {
    let vs = gl_utils::create_shader(gl, ShaderKind::Vertex, vs)
        .ok_or(SketchError::ShaderCompile("vertex"))?;
    let fs = gl_utils::create_shader(gl, ShaderKind::Fragment, fs)
        .ok_or(SketchError::ShaderCompile("fragment"))?;
    let program = gl_utils::create_program(gl, &vs, &fs).ok_or(SketchError::ProgramLink)?;
    gl.use_program(Some(&program));
    Ok(program)
}

/// Backface culling and depth testing for the solid 3D F.
fn enable_solid(gl: &Gl) {
    gl.enable(Gl::CULL_FACE);
    gl.cull_face(Gl::BACK);
    gl.enable(Gl::DEPTH_TEST);
}

/// Uploads the 3D F's positions and colors, plus normals when asked.
fn upload_f_3d(gl: &Gl, program: &WebGlProgram, with_normals: bool) -> Result<(), SketchError> {
    gl_utils::create_f32_buffer(gl, &mesh::f_3d_positions())
        .ok_or(SketchError::Resource("position buffer"))?;
    gl_utils::point_attribute(gl, program, "a_position", 3, Gl::FLOAT, false);

    gl_utils::create_u8_buffer(gl, &mesh::f_3d_colors())
        .ok_or(SketchError::Resource("color buffer"))?;
    gl_utils::point_attribute(gl, program, "a_color", 3, Gl::UNSIGNED_BYTE, true);

    if with_normals {
        gl_utils::create_f32_buffer(gl, &mesh::f_3d_normals())
            .ok_or(SketchError::Resource("normal buffer"))?;
        gl_utils::point_attribute(gl, program, "a_normal", 3, Gl::FLOAT, false);
    }
    Ok(())
}
