use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, HtmlCanvasElement, HtmlImageElement, WebGlUniformLocation,
};

use crate::error::SketchError;
use crate::fullscreen;
use crate::wasm::gl_utils::{self, Gl};
use crate::wasm::image;
use crate::wasm::render::{self, Sketch, SketchRegistry};

const CONTAINER_SELECTOR: &str = "[data-webgl-image]";
const BUTTON_SELECTOR: &str = ".js-button";

/// A fullscreen image whose red and blue channels pulse over time.
struct TintedImage {
    gl: Gl,
    u_time: Option<WebGlUniformLocation>,
    count: u32,
}

impl TintedImage {
    fn new(canvas: &HtmlCanvasElement, image: &HtmlImageElement) -> Result<Self, SketchError> {
        let gl = super::context(canvas)?;
        let program = super::program(
            &gl,
            fullscreen::VERTEX_SHADER,
            include_str!("../shaders/image_tint.frag"),
        )?;
        gl_utils::create_fullscreen_attributes(&gl, &program);
        gl_utils::create_fullscreen_texture(&gl, &program, image)
            .ok_or(SketchError::Resource("texture"))?;

        Ok(Self {
            u_time: gl.get_uniform_location(&program, "u_time"),
            gl,
            count: 0,
        })
    }
}

impl Sketch for TintedImage {
    fn render(&mut self) {
        self.count = self.count.wrapping_add(1);
        self.gl.uniform1f(self.u_time.as_ref(), self.count as f32);
        gl_utils::render(&self.gl);
    }

    fn destroy(&mut self) {
        gl_utils::destroy(&self.gl);
    }
}

/// Arms every image container on the page; each one starts rendering after
/// its button is first clicked and its image has loaded. All of them share
/// one frame loop.
pub fn start(document: &Document) -> Result<(), SketchError> {
    let registry = SketchRegistry::default();

    let containers = document.query_selector_all(CONTAINER_SELECTOR)?;
    for i in 0..containers.length() {
        let Some(container) = containers.item(i).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if let Err(err) = arm(document, container, registry.clone()) {
            log::warn!("skipping image container: {err}");
        }
    }

    let window = window().ok_or(SketchError::MissingElement("window"))?;
    let teardown = {
        let registry = registry.clone();
        Closure::wrap(Box::new(move || {
            log::info!("page hidden, releasing {} image contexts", registry.len());
            registry.destroy_all();
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("pagehide", teardown.as_ref().unchecked_ref())?;
    teardown.forget();

    render::animate(move || registry.render_all())
}

fn arm(
    document: &Document,
    container: Element,
    registry: SketchRegistry,
) -> Result<(), SketchError> {
    let button = match container.query_selector(BUTTON_SELECTOR)? {
        Some(button) => button,
        None => document
            .query_selector(BUTTON_SELECTOR)?
            .ok_or(SketchError::MissingElement(BUTTON_SELECTOR))?,
    };
    let canvas = container
        .query_selector("canvas")?
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or(SketchError::MissingElement("canvas"))?;
    let url = container
        .get_attribute("data-webgl-image")
        .ok_or(SketchError::MissingElement("data-webgl-image"))?;

    // Only the first click does anything.
    let mut pending = Some((container, canvas, url, registry));
    let on_click = Closure::wrap(Box::new(move || {
        let Some((container, canvas, url, registry)) = pending.take() else {
            return;
        };
        let label = url.clone();
        let loading = image::load(&url, move |image| match TintedImage::new(&canvas, &image) {
            Ok(sketch) => {
                registry.push(sketch);
                if let Err(err) = container.class_list().add_1("is-visible") {
                    log::warn!("could not reveal {label}: {err:?}");
                }
            }
            Err(err) => log::warn!("image sketch for {label} stopped: {err}"),
        });
        if let Err(err) = loading {
            log::warn!("could not load {url}: {err}");
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
