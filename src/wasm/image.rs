use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::HtmlImageElement;

use crate::error::SketchError;

/// Starts loading `url` and calls `on_load` once the image has decoded.
/// A failed load is logged and `on_load` never runs.
pub fn load<F>(url: &str, on_load: F) -> Result<(), SketchError>
where
    F: FnOnce(HtmlImageElement) + 'static,
{
    let image = HtmlImageElement::new()?;

    let loaded = image.clone();
    let mut on_load = Some(on_load);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(callback) = on_load.take() {
            callback(loaded.clone());
        }
    }) as Box<dyn FnMut()>);
    image.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let src = url.to_owned();
    let failed = Closure::wrap(Box::new(move || {
        log::warn!("failed to load image {src}");
    }) as Box<dyn FnMut()>);
    image.set_onerror(Some(failed.as_ref().unchecked_ref()));
    failed.forget();

    image.set_src(url);
    Ok(())
}
