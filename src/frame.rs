//! Per-frame arithmetic: timestamps, drawing-buffer size, uniform values.

use crate::cursor::Cursor;

/// Converts an animation-frame timestamp (ms) into the seconds fed to `iTime`.
#[inline]
pub fn seconds_from_millis(ms: f64) -> f32 {
    (ms * 0.001) as f32
}

/// Drawing-buffer size for a canvas displayed at `client_w` x `client_h` CSS pixels.
///
/// Non-finite or negative inputs collapse to zero.
pub fn display_size(client_w: f64, client_h: f64, multiplier: f64) -> (u32, u32) {
    let scale = |v: f64| {
        let px = (v * multiplier).floor();
        if px.is_finite() && px > 0.0 {
            px as u32
        } else {
            0
        }
    };
    (scale(client_w), scale(client_h))
}

/// Values pushed to the fragment shader for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameUniforms {
    pub resolution: (f32, f32),
    pub mouse: (f32, f32),
    pub time: f32,
}

impl FrameUniforms {
    pub fn new(size: (u32, u32), cursor: Cursor, time_ms: f64) -> Self {
        Self {
            resolution: (size.0 as f32, size.1 as f32),
            mouse: cursor.as_tuple(),
            time: seconds_from_millis(time_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_time_is_zero() {
        assert_eq!(seconds_from_millis(0.0), 0.0);
        assert_eq!(seconds_from_millis(1500.0), 1.5);
    }

    #[test]
    fn display_size_floors_scaled_css_size() {
        assert_eq!(display_size(640.0, 480.0, 1.0), (640, 480));
        assert_eq!(display_size(300.5, 150.9, 2.0), (601, 301));
        assert_eq!(display_size(100.7, 100.2, 1.0), (100, 100));
    }

    #[test]
    fn display_size_rejects_garbage() {
        assert_eq!(display_size(f64::NAN, -3.0, 1.0), (0, 0));
        assert_eq!(display_size(100.0, f64::INFINITY, 1.0), (100, 0));
    }

    #[test]
    fn uniforms_collect_one_frame() {
        let u = FrameUniforms::new((800, 600), Cursor::new(90.0, 145.0), 250.0);
        assert_eq!(u.resolution, (800.0, 600.0));
        assert_eq!(u.mouse, (90.0, 145.0));
        assert_eq!(u.time, 0.25);
    }
}
