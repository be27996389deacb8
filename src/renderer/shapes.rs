//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn rect_quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t) = (rect.left() as f32, rect.top() as f32);
    let (r, b) = (rect.right() as f32, rect.bottom() as f32);
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}
