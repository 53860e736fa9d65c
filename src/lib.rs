//! Small WebGL sketches: fullscreen image effects, matrix tutorials and
//! directional/point lighting, sharing a GL bootstrap and a camera.
//!
//! Everything outside `wasm` is plain math and compiles on any target so it
//! can be tested with `cargo test` on the host.

pub mod camera;
pub mod config;
pub mod error;
pub mod fullscreen;
pub mod kernels;
pub mod mesh;
pub mod orbit;
pub mod transforms;

pub use camera::{Camera, PartialPosition};
pub use config::{CameraConfig, SketchKind};
pub use error::SketchError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::SketchKind;
    use crate::error::SketchError;

    pub mod controls;
    pub mod gl_utils;
    pub mod image;
    pub mod render;
    pub mod sketches;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let Some(name) = body.get_attribute("data-sketch") else {
            log::info!("no data-sketch attribute on <body>, nothing to start");
            return Ok(());
        };
        let kind: SketchKind = name.parse().map_err(SketchError::from)?;

        log::info!("starting sketch {kind}");
        sketches::start(kind, &document)?;
        Ok(())
    }
}
