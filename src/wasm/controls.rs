use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, MouseEvent};

use crate::camera::Camera;
use crate::error::SketchError;

/// Feeds mouse press/move/release into `camera`'s orbit controls.
///
/// Press and move are taken from the canvas; release is taken from the whole
/// window so a drag that leaves the canvas still ends. Listeners live for the
/// rest of the page.
pub fn attach(canvas: &HtmlCanvasElement, camera: Rc<RefCell<Camera>>) -> Result<(), SketchError> {
    if !camera.borrow().controls_enabled() {
        return Ok(());
    }
    let window = window().ok_or(SketchError::MissingElement("window"))?;

    let down = {
        let camera = camera.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            camera.borrow_mut().pointer_down();
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
    down.forget();

    let moved = {
        let camera = camera.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            camera
                .borrow_mut()
                .pointer_move(event.movement_x() as f32, event.movement_y() as f32);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
    moved.forget();

    let up = Closure::wrap(Box::new(move |_: MouseEvent| {
        camera.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref())?;
    up.forget();

    Ok(())
}
