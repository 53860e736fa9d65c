use web_sys::{
    HtmlCanvasElement, HtmlImageElement, WebGlFramebuffer, WebGlProgram, WebGlTexture,
    WebGlUniformLocation,
};

use crate::error::SketchError;
use crate::fullscreen::{self, TRIANGLE_VERTEX_COUNT};
use crate::kernels::{self, Kernel, EFFECT_CHAIN};
use crate::wasm::gl_utils::{self, Gl};
use crate::wasm::image;
use crate::wasm::render::Sketch;

const DEFAULT_IMAGE: &str = "./flower.jpg";

/// Runs the image through a chain of convolution kernels using two
/// ping-pong framebuffers, then draws the result to the canvas.
struct ImageEffects {
    gl: Gl,
    canvas: HtmlCanvasElement,
    original: WebGlTexture,
    image_size: (i32, i32),
    targets: [(WebGlTexture, WebGlFramebuffer); 2],
    u_resolution: Option<WebGlUniformLocation>,
    u_kernel: Option<WebGlUniformLocation>,
}

impl ImageEffects {
    fn new(canvas: &HtmlCanvasElement, image: &HtmlImageElement) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            fullscreen::VERTEX_SHADER,
            include_str!("../shaders/kernel.frag"),
        )?;
        gl_utils::create_fullscreen_attributes(&gl, &program);
        let original = gl_utils::create_fullscreen_texture(&gl, &program, image)
            .ok_or(SketchError::Resource("texture"))?;
        let targets = [
            render_target(&gl, &program, image)?,
            render_target(&gl, &program, image)?,
        ];

        Ok(Self {
            u_resolution: gl.get_uniform_location(&program, "u_resolution"),
            u_kernel: gl.get_uniform_location(&program, "u_kernel"),
            canvas: canvas.clone(),
            original,
            image_size: (image.natural_width() as i32, image.natural_height() as i32),
            targets,
            gl,
        })
    }

    fn set_framebuffer(&self, framebuffer: Option<&WebGlFramebuffer>, width: i32, height: i32) {
        self.gl.bind_framebuffer(Gl::FRAMEBUFFER, framebuffer);
        self.gl.uniform2f(self.u_resolution.as_ref(), width as f32, height as f32);
        self.gl.viewport(0, 0, width, height);
    }

    fn draw_with(&self, kernel: Kernel) {
        self.gl.uniform1fv_with_f32_array(self.u_kernel.as_ref(), &kernel.weights());
        self.gl.draw_arrays(Gl::TRIANGLES, 0, TRIANGLE_VERTEX_COUNT);
    }
}

impl Sketch for ImageEffects {
    fn render(&mut self) {
        let (width, height) = self.image_size;

        // Start with the original image
        self.gl.bind_texture(Gl::TEXTURE_2D, Some(&self.original));

        for (kernel, target) in kernels::passes(&EFFECT_CHAIN) {
            let (texture, framebuffer) = &self.targets[target];
            self.set_framebuffer(Some(framebuffer), width, height);
            self.draw_with(kernel);
            // The next pass reads what this one wrote.
            self.gl.bind_texture(Gl::TEXTURE_2D, Some(texture));
        }

        self.set_framebuffer(None, self.canvas.width() as i32, self.canvas.height() as i32);
        self.draw_with(Kernel::Normal);
    }
}

fn render_target(
    gl: &Gl,
    program: &WebGlProgram,
    image: &HtmlImageElement,
) -> Result<(WebGlTexture, WebGlFramebuffer), SketchError> {
    let texture = gl_utils::create_fullscreen_texture(gl, program, image)
        .ok_or(SketchError::Resource("texture"))?;
    let framebuffer = gl
        .create_framebuffer()
        .ok_or(SketchError::Resource("framebuffer"))?;
    gl.bind_framebuffer(Gl::FRAMEBUFFER, Some(&framebuffer));
    gl.framebuffer_texture_2d(
        Gl::FRAMEBUFFER,
        Gl::COLOR_ATTACHMENT0,
        Gl::TEXTURE_2D,
        Some(&texture),
        0,
    );
    Ok((texture, framebuffer))
}

/// Loads the canvas' `data-image` (or the bundled flower) and starts once it
/// has decoded.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), SketchError> {
    let url = canvas
        .get_attribute("data-image")
        .unwrap_or_else(|| DEFAULT_IMAGE.to_owned());

    image::load(&url, move |image| {
        let started = ImageEffects::new(&canvas, &image).and_then(|sketch| super::run(sketch));
        if let Err(err) = started {
            log::warn!("image-effects stopped: {err}");
        }
    })
}
