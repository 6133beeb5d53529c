//! Shape generation for 2D primitives

use super::atlas::UvRect;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a screen-space rectangle in a flat color
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Two triangles covering a screen-space rectangle, sampling a sprite region
pub fn textured_quad(rect: &Rect, uv: UvRect) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::textured(l, t, uv.u0, uv.v0),
        Vertex::textured(r, t, uv.u1, uv.v0),
        Vertex::textured(l, b, uv.u0, uv.v1),
        Vertex::textured(l, b, uv.u0, uv.v1),
        Vertex::textured(r, t, uv.u1, uv.v0),
        Vertex::textured(r, b, uv.u1, uv.v1),
    ]
}
