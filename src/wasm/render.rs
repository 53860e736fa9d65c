use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::error::SketchError;

/// A sketch drawn once per animation frame.
pub trait Sketch {
    fn render(&mut self);

    /// Releases the sketch's GL context.
    fn destroy(&mut self) {}
}

/// Caller-owned set of running sketches, all driven by one frame loop.
#[derive(Clone, Default)]
pub struct SketchRegistry {
    sketches: Rc<RefCell<Vec<Box<dyn Sketch>>>>,
}

impl SketchRegistry {
    pub fn push(&self, sketch: impl Sketch + 'static) {
        self.sketches.borrow_mut().push(Box::new(sketch));
    }

    pub fn len(&self) -> usize {
        self.sketches.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sketches.borrow().is_empty()
    }

    pub fn render_all(&self) {
        for sketch in self.sketches.borrow_mut().iter_mut() {
            sketch.render();
        }
    }

    /// Destroys and drops every registered sketch.
    pub fn destroy_all(&self) {
        for mut sketch in self.sketches.borrow_mut().drain(..) {
            sketch.destroy();
        }
    }
}

/// Calls `frame` on every animation frame, forever.
pub fn animate<F>(mut frame: F) -> Result<(), SketchError>
where
    F: FnMut() + 'static,
{
    let window = window().ok_or(SketchError::MissingElement("window"))?;

    // The closure reschedules itself, so it needs a handle to its own slot.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let scheduler = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = scheduler.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }

    Ok(())
}
