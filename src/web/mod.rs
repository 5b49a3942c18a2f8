//! Browser glue: canvas lookup, WebGL, pointer listeners and the frame loop.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::DemoConfig;
use crate::cursor::Cursor;
use crate::demo::Demo;
use crate::gpu::{Platform, SetupError};

pub mod input;
mod logging;
mod render;
pub mod webgl;

pub use logging::init_logging;
pub use webgl::WebGl;

impl From<SetupError> for JsValue {
    fn from(e: SetupError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// A canvas in the current page plus the cursor its listeners write to.
pub struct WebPlatform {
    canvas: HtmlCanvasElement,
    cursor: Rc<Cell<Cursor>>,
}

impl WebPlatform {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            cursor: Rc::new(Cell::new(Cursor::default())),
        }
    }

    pub fn cursor(&self) -> Rc<Cell<Cursor>> {
        self.cursor.clone()
    }
}

impl Platform for WebPlatform {
    type Gpu = WebGl;

    fn acquire_context(&mut self) -> Option<WebGl> {
        WebGl::from_canvas(&self.canvas)
    }

    fn register_input(&mut self) -> Result<(), SetupError> {
        input::track_pointer(&self.canvas, self.cursor.clone())
    }
}

/// Boots the demo on `canvas` and starts drawing.
///
/// Returns `Ok(false)` when no WebGL context is available; nothing else is set up then.
pub fn start(canvas: HtmlCanvasElement, config: &DemoConfig) -> Result<bool, JsValue> {
    let mut platform = WebPlatform::new(canvas);
    let Some(demo) = Demo::boot(&mut platform, config)? else {
        return Ok(false);
    };
    render::start(demo, platform.cursor())?;
    Ok(true)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    init_logging(log::LevelFilter::Info);

    let window = web_sys::window().ok_or(SetupError::Missing("window"))?;
    let mut config = DemoConfig::default();
    let search = window.location().search().unwrap_or_default();
    let ignored = config.apply_query(&search);
    log::set_max_level(config.log_level);
    for pair in ignored {
        log::debug!("ignoring query parameter {pair:?}");
    }

    let document = window.document().ok_or(SetupError::Missing("document"))?;
    // Pages without the canvas (test runners included) load the module and do nothing.
    let Some(element) = document.get_element_by_id(&config.canvas_id) else {
        log::warn!("{}", SetupError::Missing("canvas"));
        return Ok(());
    };
    let canvas = element.dyn_into::<HtmlCanvasElement>()?;

    start(canvas, &config)?;
    Ok(())
}
