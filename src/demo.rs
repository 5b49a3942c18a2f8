use crate::config::DemoConfig;
use crate::cursor::Cursor;
use crate::frame::FrameUniforms;
use crate::geometry::{DrawCall, COMPONENTS_PER_VERTEX, QUAD_VERTICES};
use crate::gpu::{Gpu, Platform, SetupError};
use crate::shader::{
    fragment_shader, MOUSE_UNIFORM, POSITION_ATTRIBUTE, RESOLUTION_UNIFORM, TIME_UNIFORM,
    VERTEX_SHADER,
};

/// Everything created at startup and read on every frame.
pub struct Demo<G: Gpu> {
    gpu: G,
    program: G::Program,
    quad: G::Buffer,
    position: Option<u32>,
    resolution: Option<G::Uniform>,
    mouse: Option<G::Uniform>,
    time: Option<G::Uniform>,
    pixel_ratio: f64,
}

impl<G: Gpu> Demo<G> {
    /// Runs the one-time setup.
    ///
    /// Returns `Ok(None)` without touching anything else when the platform
    /// cannot provide a graphics context.
    pub fn boot<P>(platform: &mut P, config: &DemoConfig) -> Result<Option<Self>, SetupError>
    where
        P: Platform<Gpu = G>,
    {
        let Some(gpu) = platform.acquire_context() else {
            log::warn!("graphics context unavailable; demo disabled");
            return Ok(None);
        };

        let fragment = fragment_shader(&config.params);
        let program = gpu.compile_program(VERTEX_SHADER, &fragment)?;

        let position = gpu.attrib_location(&program, POSITION_ATTRIBUTE);
        let resolution = gpu.uniform_location(&program, RESOLUTION_UNIFORM);
        let mouse = gpu.uniform_location(&program, MOUSE_UNIFORM);
        let time = gpu.uniform_location(&program, TIME_UNIFORM);
        if position.is_none() {
            log::warn!("attribute {POSITION_ATTRIBUTE} not found");
        }

        let quad = gpu.upload_static(&QUAD_VERTICES)?;
        platform.register_input()?;

        log::info!(
            "crt demo ready (warp {}, scan {})",
            config.params.warp,
            config.params.scan
        );
        Ok(Some(Self {
            gpu,
            program,
            quad,
            position,
            resolution,
            mouse,
            time,
            pixel_ratio: config.pixel_ratio,
        }))
    }

    /// Draws one frame and returns the uniform values it pushed.
    pub fn render_frame(&self, time_ms: f64, cursor: Cursor) -> FrameUniforms {
        let size = self.gpu.resize_to_display(self.pixel_ratio);
        self.gpu.viewport(size.0, size.1);

        self.gpu.use_program(&self.program);
        self.gpu
            .bind_vertices(&self.quad, self.position, COMPONENTS_PER_VERTEX);

        let u = FrameUniforms::new(size, cursor, time_ms);
        self.gpu
            .uniform2f(self.resolution.as_ref(), u.resolution.0, u.resolution.1);
        self.gpu.uniform2f(self.mouse.as_ref(), u.mouse.0, u.mouse.1);
        self.gpu.uniform1f(self.time.as_ref(), u.time);

        self.gpu.draw(DrawCall::FULL_SCREEN_QUAD);
        u
    }
}
