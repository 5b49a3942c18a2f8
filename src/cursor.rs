//! Pointer position in canvas pixel space.
//!
//! Input events report client coordinates with the origin at the top-left of
//! the page, while `gl_FragCoord` has its origin at the bottom-left of the
//! drawing buffer. [`Cursor::from_client`] maps one into the other.

/// Bounding box of the drawing surface in client coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub const fn new(left: f64, top: f64, height: f64) -> Self {
        Self { left, top, height }
    }
}

/// Last known pointer position, bottom-left origin. Last write wins.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_client(client_x: f64, client_y: f64, rect: SurfaceRect) -> Self {
        let x = client_x - rect.left;
        let y = rect.height - (client_y - rect.top) - 1.0;
        Self::new(x as f32, y as f32)
    }

    /// Maps the first touch point; the rest are ignored.
    pub fn from_touches<I>(mut touches: I, rect: SurfaceRect) -> Option<Self>
    where
        I: Iterator<Item = (f64, f64)>,
    {
        touches
            .next()
            .map(|(x, y)| Self::from_client(x, y, rect))
    }

    #[inline]
    pub fn as_tuple(self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_y_relative_to_surface() {
        let rect = SurfaceRect::new(10.0, 5.0, 200.0);
        assert_eq!(Cursor::from_client(100.0, 50.0, rect), Cursor::new(90.0, 154.0));
    }

    #[test]
    fn top_left_pixel_maps_to_last_row() {
        let rect = SurfaceRect::new(0.0, 0.0, 480.0);
        assert_eq!(Cursor::from_client(0.0, 0.0, rect), Cursor::new(0.0, 479.0));
        assert_eq!(Cursor::from_client(0.0, 479.0, rect), Cursor::new(0.0, 0.0));
    }

    #[test]
    fn positions_outside_the_surface_are_kept() {
        let rect = SurfaceRect::new(10.0, 10.0, 100.0);
        let c = Cursor::from_client(5.0, 200.0, rect);
        assert_eq!(c, Cursor::new(-5.0, -91.0));
    }

    #[test]
    fn only_first_touch_counts() {
        let rect = SurfaceRect::new(10.0, 5.0, 200.0);
        let touches = vec![(100.0, 50.0), (0.0, 0.0)];
        assert_eq!(
            Cursor::from_touches(touches.into_iter(), rect),
            Some(Cursor::new(90.0, 154.0))
        );
        assert_eq!(Cursor::from_touches(std::iter::empty(), rect), None);
    }
}
