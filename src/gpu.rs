//! The narrow slice of a graphics API the demo needs.
//!
//! [`crate::demo::Demo`] drives everything through these traits so the setup
//! order and the per-frame sequence can be exercised without a browser. The
//! WebGL implementation lives in `web::webgl`.

use std::fmt;

use crate::geometry::DrawCall;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A browser object the demo needs is missing (window, document, canvas…).
    Missing(&'static str),
    /// A shader failed to compile; carries the driver's info log.
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link; carries the driver's info log.
    Link(String),
    /// The driver refused to allocate an object.
    Allocation(&'static str),
    /// An input listener could not be attached.
    Listener(&'static str),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Missing(what) => write!(f, "{what} not found"),
            SetupError::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {log}")
            }
            SetupError::Link(log) => write!(f, "program failed to link: {log}"),
            SetupError::Allocation(what) => write!(f, "could not create {what}"),
            SetupError::Listener(event) => write!(f, "could not listen for {event}"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Graphics calls issued during setup and on every frame.
pub trait Gpu {
    type Program;
    type Buffer;
    type Uniform;

    fn compile_program(&self, vertex: &str, fragment: &str) -> Result<Self::Program, SetupError>;
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;
    fn upload_static(&self, data: &[f32]) -> Result<Self::Buffer, SetupError>;

    /// Matches the drawing buffer to the display size and returns the result.
    fn resize_to_display(&self, pixel_ratio: f64) -> (u32, u32);
    fn viewport(&self, width: u32, height: u32);
    fn use_program(&self, program: &Self::Program);
    fn bind_vertices(&self, buffer: &Self::Buffer, location: Option<u32>, components: i32);

    /// A `None` location is accepted and ignored, as WebGL does.
    fn uniform2f(&self, location: Option<&Self::Uniform>, x: f32, y: f32);
    fn uniform1f(&self, location: Option<&Self::Uniform>, v: f32);
    fn draw(&self, call: DrawCall);
}

/// Where the demo runs: owns the surface and the input plumbing.
pub trait Platform {
    type Gpu: Gpu;

    /// `None` when no graphics context can be created.
    fn acquire_context(&mut self) -> Option<Self::Gpu>;
    fn register_input(&mut self) -> Result<(), SetupError>;
}
