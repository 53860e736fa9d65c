//! Context, shader and program bootstrap.
//!
//! Creation helpers are fail-soft: they log what the driver reported and
//! hand back `None`. Callers decide whether that ends the sketch.

use std::fmt;

use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext,
    WebGlShader, WebGlTexture, WebglLoseContext,
};

use crate::fullscreen::{TRIANGLE_POSITIONS, TRIANGLE_UVS, TRIANGLE_VERTEX_COUNT};

pub type Gl = WebGlRenderingContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    fn gl_type(self) -> u32 {
        match self {
            ShaderKind::Vertex => Gl::VERTEX_SHADER,
            ShaderKind::Fragment => Gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Acquires a WebGL 1 context and sizes the drawing buffer to the canvas'
/// current layout size.
pub fn create_context(canvas: &HtmlCanvasElement) -> Option<Gl> {
    let gl: Gl = match canvas.get_context("webgl") {
        Ok(Some(ctx)) => ctx.dyn_into().ok()?,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("getContext failed: {err:?}");
            return None;
        }
    };

    canvas.set_width(canvas.client_width().max(0) as u32);
    canvas.set_height(canvas.client_height().max(0) as u32);
    gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

    Some(gl)
}

pub fn create_shader(gl: &Gl, kind: ShaderKind, source: &str) -> Option<WebGlShader> {
    let shader = gl.create_shader(kind.gl_type())?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Some(shader);
    }

    log::warn!(
        "{kind} shader: {}",
        gl.get_shader_info_log(&shader).unwrap_or_default()
    );
    gl.delete_shader(Some(&shader));
    None
}

pub fn create_program(gl: &Gl, vs: &WebGlShader, fs: &WebGlShader) -> Option<WebGlProgram> {
    let program = gl.create_program()?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Some(program);
    }

    log::warn!(
        "link: {}",
        gl.get_program_info_log(&program).unwrap_or_default()
    );
    gl.delete_program(Some(&program));
    None
}

/// Creates a static `ARRAY_BUFFER` holding `data`, left bound.
pub fn create_f32_buffer(gl: &Gl, data: &[f32]) -> Option<WebGlBuffer> {
    let buffer = gl.create_buffer()?;
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    let array = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STATIC_DRAW);
    Some(buffer)
}

/// Creates a static `ARRAY_BUFFER` holding `data`, left bound.
pub fn create_u8_buffer(gl: &Gl, data: &[u8]) -> Option<WebGlBuffer> {
    let buffer = gl.create_buffer()?;
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_u8_array(Gl::ARRAY_BUFFER, data, Gl::STATIC_DRAW);
    Some(buffer)
}

/// Points attribute `name` at the currently bound `ARRAY_BUFFER`, tightly
/// packed from offset 0.
pub fn point_attribute(
    gl: &Gl,
    program: &WebGlProgram,
    name: &str,
    size: i32,
    kind: u32,
    normalized: bool,
) {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        // Inactive attributes are optimised out by the driver.
        log::debug!("attribute {name} is not active");
        return;
    }
    let location = location as u32;
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, size, kind, normalized, 0, 0);
}

/// Sets `a_position` and `a_uv` for the fullscreen triangle.
pub fn create_fullscreen_attributes(gl: &Gl, program: &WebGlProgram) {
    if create_f32_buffer(gl, &TRIANGLE_POSITIONS).is_some() {
        point_attribute(gl, program, "a_position", 2, Gl::FLOAT, false);
    }
    if create_f32_buffer(gl, &TRIANGLE_UVS).is_some() {
        point_attribute(gl, program, "a_uv", 2, Gl::FLOAT, false);
    }
}

/// Uploads `image` as a texture covering the fullscreen triangle, with
/// `a_texture_coord` pointed at matching coordinates. The texture stays
/// bound to `TEXTURE_2D`.
pub fn create_fullscreen_texture(
    gl: &Gl,
    program: &WebGlProgram,
    image: &HtmlImageElement,
) -> Option<WebGlTexture> {
    create_f32_buffer(gl, &TRIANGLE_UVS)?;
    point_attribute(gl, program, "a_texture_coord", 2, Gl::FLOAT, false);

    let texture = gl.create_texture()?;
    gl.bind_texture(Gl::TEXTURE_2D, Some(&texture));
    gl.pixel_storei(Gl::UNPACK_FLIP_Y_WEBGL, 1);

    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_S, Gl::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_T, Gl::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MIN_FILTER, Gl::NEAREST as i32);
    gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MAG_FILTER, Gl::LINEAR as i32);

    if let Err(err) = gl.tex_image_2d_with_u32_and_u32_and_image(
        Gl::TEXTURE_2D,
        0,
        Gl::RGBA as i32,
        Gl::RGBA,
        Gl::UNSIGNED_BYTE,
        image,
    ) {
        log::warn!("texture upload failed: {err:?}");
        return None;
    }

    Some(texture)
}

/// Clears to transparent black and draws the fullscreen triangle.
pub fn render(gl: &Gl) {
    gl.clear_color(0.0, 0.0, 0.0, 0.0);
    gl.clear(Gl::COLOR_BUFFER_BIT);
    gl.draw_arrays(Gl::TRIANGLES, 0, TRIANGLE_VERTEX_COUNT);
}

/// Forces context loss, releasing every GPU object the context owns.
pub fn destroy(gl: &Gl) {
    match gl.get_extension("WEBGL_lose_context") {
        Ok(Some(ext)) => ext.unchecked_into::<WebglLoseContext>().lose_context(),
        _ => log::warn!("WEBGL_lose_context is not available"),
    }
}
