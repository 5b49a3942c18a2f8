//! GLSL sources for the CRT effect and a host-side mirror of its arithmetic.

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const RESOLUTION_UNIFORM: &str = "iResolution";
pub const MOUSE_UNIFORM: &str = "iMouse";
pub const TIME_UNIFORM: &str = "iTime";

pub const VERTEX_SHADER: &str = r#"
attribute vec4 a_position;

void main() {
    gl_Position = a_position;
}
"#;

/// Curvature and scanline strength of the effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CrtParams {
    /// Simulated curvature of the tube.
    pub warp: f32,
    /// Darkness between scanlines.
    pub scan: f32,
}

impl Default for CrtParams {
    fn default() -> Self {
        Self {
            warp: 0.75,
            scan: 0.75,
        }
    }
}

impl CrtParams {
    /// Returns `value` clamped to `[0, 1]`, or `None` when it is not finite.
    pub fn sanitize(value: f32) -> Option<f32> {
        value.is_finite().then(|| value.clamp(0.0, 1.0))
    }
}

/// Builds the fragment shader with `params` baked in as constants.
pub fn fragment_shader(params: &CrtParams) -> String {
    // `{:?}` keeps a decimal point on whole numbers, which GLSL ES needs for floats.
    format!(
        r#"
precision highp float;

uniform vec2 {res};
uniform vec2 {mouse};
uniform float {time};

float warp = {warp:?};
float scan = {scan:?};

void mainImage(out vec4 fragColor, in vec2 fragCoord)
{{
    vec2 uv = fragCoord / {res}.xy;
    vec2 dc = abs(0.5 - uv);
    dc *= dc;

    uv.x -= 0.5; uv.x *= 1.0 + (dc.y * (0.3 * warp)); uv.x += 0.5;
    uv.y -= 0.5; uv.y *= 1.0 + (dc.x * (0.4 * warp)); uv.y += 0.5;

    if (uv.y > 1.0 || uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0)
        fragColor = vec4(0.0, 0.0, 0.0, 1.0);
    else
    {{
        float apply = abs(sin(fragCoord.y) * 0.5 * scan);
        fragColor = vec4(apply, apply, apply, 1.0 - apply);
    }}
}}

void main() {{
    mainImage(gl_FragColor, gl_FragCoord.xy);
}}
"#,
        res = RESOLUTION_UNIFORM,
        mouse = MOUSE_UNIFORM,
        time = TIME_UNIFORM,
        warp = params.warp,
        scan = params.scan,
    )
}

/// Barrel-distorts a normalized coordinate; `None` means the pixel is clipped to black.
pub fn warp_uv(uv: (f32, f32), params: &CrtParams) -> Option<(f32, f32)> {
    let (mut u, mut v) = uv;
    let dx = (0.5 - u).abs().powi(2);
    let dy = (0.5 - v).abs().powi(2);

    u = (u - 0.5) * (1.0 + dy * 0.3 * params.warp) + 0.5;
    v = (v - 0.5) * (1.0 + dx * 0.4 * params.warp) + 0.5;

    if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
        Some((u, v))
    } else {
        None
    }
}

/// Scanline mask for a fragment row, used as grey level and `1 - alpha`.
pub fn scanline_mask(frag_y: f32, params: &CrtParams) -> f32 {
    (frag_y.sin() * 0.5 * params.scan).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_declares_all_uniforms() {
        let src = fragment_shader(&CrtParams::default());
        for name in [RESOLUTION_UNIFORM, MOUSE_UNIFORM, TIME_UNIFORM] {
            assert!(src.contains(&format!(" {};", name)), "{} not declared", name);
        }
        assert!(VERTEX_SHADER.contains(POSITION_ATTRIBUTE));
    }

    #[test]
    fn params_are_written_as_float_literals() {
        let src = fragment_shader(&CrtParams { warp: 1.0, scan: 0.0 });
        assert!(src.contains("float warp = 1.0;"));
        assert!(src.contains("float scan = 0.0;"));

        let src = fragment_shader(&CrtParams::default());
        assert!(src.contains("float warp = 0.75;"));
    }

    #[test]
    fn center_is_not_distorted() {
        let p = CrtParams::default();
        assert_eq!(warp_uv((0.5, 0.5), &p), Some((0.5, 0.5)));
    }

    #[test]
    fn corners_are_pushed_outside_and_clipped() {
        let p = CrtParams::default();
        assert_eq!(warp_uv((0.999, 0.999), &p), None);
        assert_eq!(warp_uv((0.001, 0.001), &p), None);
        // Without curvature the same pixel survives.
        let flat = CrtParams { warp: 0.0, ..p };
        assert!(warp_uv((0.999, 0.999), &flat).is_some());
    }

    #[test]
    fn scanline_mask_is_bounded_by_half_scan() {
        let p = CrtParams::default();
        for y in 0..500 {
            let m = scanline_mask(y as f32 + 0.5, &p);
            assert!((0.0..=0.5 * p.scan).contains(&m));
        }
        assert_eq!(scanline_mask(0.0, &p), 0.0);
    }

    #[test]
    fn sanitize_clamps_and_rejects() {
        assert_eq!(CrtParams::sanitize(0.3), Some(0.3));
        assert_eq!(CrtParams::sanitize(2.0), Some(1.0));
        assert_eq!(CrtParams::sanitize(-1.0), Some(0.0));
        assert_eq!(CrtParams::sanitize(f32::NAN), None);
        assert_eq!(CrtParams::sanitize(f32::INFINITY), None);
    }
}
