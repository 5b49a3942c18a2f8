use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use super::webgl::WebGl;
use crate::cursor::Cursor;
use crate::demo::Demo;

/// Starts the animation loop. It reschedules itself every frame until the page unloads.
pub fn start(demo: Demo<WebGl>, cursor: Rc<Cell<Cursor>>) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let scheduler = window.clone();
    let mut first = true;
    *g.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time_ms: f64| {
        let u = demo.render_frame(time_ms, cursor.get());
        if first {
            log::debug!("first frame at {}s, {:?}", u.time, u.resolution);
            first = false;
        }

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = scheduler.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    if let Some(frame) = g.borrow().as_ref() {
        window.request_animation_frame(frame.as_ref().unchecked_ref())?;
    }
    Ok(())
}
