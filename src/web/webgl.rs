use js_sys::Float32Array;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

use crate::frame::display_size;
use crate::geometry::{DrawCall, Primitive};
use crate::gpu::{Gpu, SetupError, ShaderStage};

/// WebGL 1 context bound to the canvas it draws into.
pub struct WebGl {
    gl: GL,
    canvas: HtmlCanvasElement,
}

impl WebGl {
    /// `None` when the browser cannot hand out a `webgl` context.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let gl = canvas.get_context("webgl").ok().flatten()?.dyn_into::<GL>().ok()?;
        Some(Self {
            gl,
            canvas: canvas.clone(),
        })
    }

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, SetupError> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or(SetupError::Allocation("shader"))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        let ok = self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            return Ok(shader);
        }
        let log = self.gl.get_shader_info_log(&shader).unwrap_or_default();
        self.gl.delete_shader(Some(&shader));
        log::error!("{stage} shader: {log}");
        Err(SetupError::Compile { stage, log })
    }
}

impl Gpu for WebGl {
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Uniform = WebGlUniformLocation;

    fn compile_program(&self, vertex: &str, fragment: &str) -> Result<WebGlProgram, SetupError> {
        let vs = self.compile_shader(ShaderStage::Vertex, vertex)?;
        let fs = self.compile_shader(ShaderStage::Fragment, fragment)?;

        let program = self
            .gl
            .create_program()
            .ok_or(SetupError::Allocation("program"))?;
        self.gl.attach_shader(&program, &vs);
        self.gl.attach_shader(&program, &fs);
        self.gl.link_program(&program);

        let linked = self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if linked {
            return Ok(program);
        }
        let log = self.gl.get_program_info_log(&program).unwrap_or_default();
        self.gl.delete_program(Some(&program));
        log::error!("link: {log}");
        Err(SetupError::Link(log))
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn upload_static(&self, data: &[f32]) -> Result<WebGlBuffer, SetupError> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(SetupError::Allocation("buffer"))?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        // Copies into JS memory, so no view into wasm memory outlives this call.
        let array = Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Ok(buffer)
    }

    fn resize_to_display(&self, pixel_ratio: f64) -> (u32, u32) {
        let (w, h) = display_size(
            self.canvas.client_width() as f64,
            self.canvas.client_height() as f64,
            pixel_ratio,
        );
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            log::debug!("drawing buffer resized to {w}x{h}");
        }
        (w, h)
    }

    fn viewport(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn bind_vertices(&self, buffer: &WebGlBuffer, location: Option<u32>, components: i32) {
        if let Some(loc) = location {
            self.gl.enable_vertex_attrib_array(loc);
        }
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        if let Some(loc) = location {
            self.gl
                .vertex_attrib_pointer_with_i32(loc, components, GL::FLOAT, false, 0, 0);
        }
    }

    fn uniform2f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32) {
        self.gl.uniform2f(location, x, y);
    }

    fn uniform1f(&self, location: Option<&WebGlUniformLocation>, v: f32) {
        self.gl.uniform1f(location, v);
    }

    fn draw(&self, call: DrawCall) {
        let mode = match call.primitive {
            Primitive::Triangles => GL::TRIANGLES,
        };
        self.gl.draw_arrays(mode, call.first, call.count);
    }
}
