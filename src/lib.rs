#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! CRT scanline/curvature effect rendered full-screen into a WebGL canvas.
//!
//! Everything outside [`web`] is plain Rust and runs on the host; the browser
//! glue is only compiled for `wasm32`.

pub mod config;
pub mod cursor;
pub mod demo;
pub mod frame;
pub mod geometry;
pub mod gpu;
pub mod shader;

pub use config::DemoConfig;
pub use cursor::{Cursor, SurfaceRect};
pub use demo::Demo;
pub use gpu::{Gpu, Platform, SetupError};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod web;
