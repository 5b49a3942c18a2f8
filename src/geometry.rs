//! Full-screen quad and the draw call that covers it.

/// Two triangles covering clip space, two floats per vertex.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, // first triangle
    1.0, -1.0,
    -1.0, 1.0,
    -1.0, 1.0, // second triangle
    1.0, -1.0,
    1.0, 1.0,
];

pub const COMPONENTS_PER_VERTEX: i32 = 2;
pub const VERTEX_COUNT: i32 = 6;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
    Triangles,
}

/// A non-indexed draw of `count` vertices starting at `first`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub first: i32,
    pub count: i32,
}

impl DrawCall {
    /// The single draw issued every frame.
    pub const FULL_SCREEN_QUAD: DrawCall = DrawCall {
        primitive: Primitive::Triangles,
        first: 0,
        count: VERTEX_COUNT,
    };
}

/// Iterates the quad as `[(x, y); 3]` triangles.
pub fn triangles() -> impl Iterator<Item = [(f32, f32); 3]> {
    QUAD_VERTICES.chunks_exact(6).map(|t| {
        [(t[0], t[1]), (t[2], t[3]), (t[4], t[5])]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(t: &[(f32, f32); 3]) -> f32 {
        let [(ax, ay), (bx, by), (cx, cy)] = *t;
        0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay))
    }

    #[test]
    fn buffer_holds_six_two_component_vertices() {
        assert_eq!(QUAD_VERTICES.len(), 12);
        assert_eq!(
            QUAD_VERTICES.len() as i32,
            COMPONENTS_PER_VERTEX * VERTEX_COUNT
        );
        assert_eq!(triangles().count(), 2);
    }

    #[test]
    fn triangles_tile_the_clip_square() {
        // Each triangle covers half of the 2x2 square; together exactly 4.
        let total: f32 = triangles().map(|t| signed_area(&t).abs()).sum();
        assert!((total - 4.0).abs() < 1e-6);

        // Both wound the same way, so they do not fold over one another.
        let signs: Vec<bool> = triangles().map(|t| signed_area(&t) > 0.0).collect();
        assert_eq!(signs, vec![true, true]);

        // Every corner of the square is a vertex, and nothing lies outside it.
        let verts: Vec<(f32, f32)> = triangles().flatten().collect();
        for corner in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            assert!(verts.contains(&corner), "missing corner {:?}", corner);
        }
        assert!(verts.iter().all(|&(x, y)| x.abs() == 1.0 && y.abs() == 1.0));
    }

    #[test]
    fn frame_draw_is_six_triangle_vertices() {
        let call = DrawCall::FULL_SCREEN_QUAD;
        assert_eq!(call.primitive, Primitive::Triangles);
        assert_eq!((call.first, call.count), (0, 6));
    }
}
