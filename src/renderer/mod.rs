//! Rendering projection
//!
//! Turns the game state into a flat triangle list in field pixels (origin
//! top-left, y down). Reads the simulation only; nothing here mutates it.

pub mod shapes;
pub mod vertex;

pub use shapes::rect_quad;
pub use vertex::{Vertex, rgba};

use crate::sim::GameState;

/// Triangles for every brick, then the paddle, then the ball
pub fn draw_list(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.grid.len() + 2) * 6);
    for brick in state.grid.bricks() {
        vertices.extend(rect_quad(&brick.rect, rgba(brick.color)));
    }
    vertices.extend(rect_quad(&state.paddle.rect, rgba(vertex::colors::PADDLE)));
    vertices.extend(rect_quad(&state.ball.rect, rgba(vertex::colors::BALL)));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::RED;

    #[test]
    fn test_draw_list_counts() {
        let state = GameState::new(10, 5);
        let vertices = draw_list(&state);
        assert_eq!(vertices.len(), (45 + 2) * 6);
        assert_eq!(vertices[0].color, rgba(RED));
        assert_eq!(vertices.last().map(|v| v.color), Some([1.0; 4]));
    }

    #[test]
    fn test_draw_list_in_field_pixels() {
        let state = GameState::new(10, 5);
        let vertices = draw_list(&state);
        // Paddle quad sits just before the ball's
        let paddle = &vertices[vertices.len() - 12..vertices.len() - 6];
        assert_eq!(paddle[0].position, [130.0, 210.0]);
        assert_eq!(paddle[2].position, [190.0, 220.0]);
    }

    #[test]
    fn test_draw_list_is_pod() {
        let state = GameState::new(1, 1);
        let vertices = draw_list(&state);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices[..]);
        assert_eq!(bytes.len(), vertices.len() * std::mem::size_of::<Vertex>());
    }
}
