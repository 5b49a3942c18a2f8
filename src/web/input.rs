use std::cell::Cell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::cursor::{Cursor, SurfaceRect};
use crate::gpu::SetupError;

fn surface_rect(canvas: &HtmlCanvasElement) -> SurfaceRect {
    let r = canvas.get_bounding_client_rect();
    SurfaceRect::new(r.left(), r.top(), r.height())
}

/// Attaches pointer listeners to `canvas` that keep `cursor` current.
///
/// Touch listeners are non-passive and always cancel the default action so
/// dragging over the canvas neither scrolls nor zooms the page.
pub fn track_pointer(
    canvas: &HtmlCanvasElement,
    cursor: Rc<Cell<Cursor>>,
) -> Result<(), SetupError> {
    let on_mouse = {
        let canvas = canvas.clone();
        let cursor = cursor.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let pos = Cursor::from_client(
                e.client_x() as f64,
                e.client_y() as f64,
                surface_rect(&canvas),
            );
            cursor.set(pos);
        })
    };
    canvas
        .add_event_listener_with_callback("mousemove", on_mouse.as_ref().unchecked_ref())
        .map_err(|_| SetupError::Listener("mousemove"))?;
    on_mouse.forget();

    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);

    let on_touch_start = Closure::<dyn FnMut(TouchEvent)>::new(|e: TouchEvent| {
        e.prevent_default();
    });
    listen_active(canvas, "touchstart", on_touch_start.as_ref().unchecked_ref(), &opts)?;
    on_touch_start.forget();

    let on_touch_move = {
        let canvas = canvas.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
            e.prevent_default();
            let touches = e.touches();
            let points = (0..touches.length())
                .filter_map(|i| touches.get(i))
                .map(|t| (t.client_x() as f64, t.client_y() as f64));
            if let Some(pos) = Cursor::from_touches(points, surface_rect(&canvas)) {
                cursor.set(pos);
            }
        })
    };
    listen_active(canvas, "touchmove", on_touch_move.as_ref().unchecked_ref(), &opts)?;
    on_touch_move.forget();

    log::debug!("pointer listeners attached");
    Ok(())
}

fn listen_active(
    canvas: &HtmlCanvasElement,
    event: &'static str,
    callback: &Function,
    opts: &AddEventListenerOptions,
) -> Result<(), SetupError> {
    canvas
        .add_event_listener_with_callback_and_add_event_listener_options(event, callback, opts)
        .map_err(|_| SetupError::Listener(event))
}
