//! Collision response helpers for the ball
//!
//! Everything here works on the integer rectangles; the ball keeps its float
//! center authoritative and re-derives it from a rectangle after any clamp.

use super::rect::Rect;
use crate::consts::PADDLE_MAX_DEFLECT;

/// Which velocity component a bounce inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    Horizontal,
    Vertical,
}

/// Field edges a rectangle touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right edge (at most one of the two per tick)
    pub side: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Clamp `rect` back inside the left, right and top edges of the field.
///
/// The bottom edge is not a wall. Left wins over right when the rectangle is
/// wider than the field.
pub fn clamp_to_walls(rect: &mut Rect, field_width: i32) -> WallContact {
    let mut contact = WallContact::default();

    if rect.left() <= 0 {
        rect.set_left(0);
        contact.side = true;
    } else if rect.right() >= field_width {
        rect.set_right(field_width);
        contact.side = true;
    }

    if rect.top() <= 0 {
        rect.set_top(0);
        contact.top = true;
    }

    contact
}

/// Lateral velocity after a paddle hit.
///
/// Linear in the offset from the paddle center: zero dead-center and
/// `PADDLE_MAX_DEFLECT` at either edge.
pub fn paddle_deflection(ball_center_x: i32, paddle: &Rect) -> f32 {
    let half_width = paddle.w as f32 / 2.0;
    let offset = (ball_center_x - paddle.center_x()) as f32;
    offset / half_width * PADDLE_MAX_DEFLECT
}

/// Pick the contact axis for a ball/brick overlap.
///
/// Compares how far the ball center sits inside the brick's half extents on
/// each axis and bounces on the shallower one. Ties bounce vertically.
pub fn least_penetration_axis(ball: &Rect, brick: &Rect) -> BounceAxis {
    let overlap_x = brick.w as f32 / 2.0 - (ball.center_x() - brick.center_x()).abs() as f32;
    let overlap_y = brick.h as f32 / 2.0 - (ball.center_y() - brick.center_y()).abs() as f32;

    if overlap_x < overlap_y {
        BounceAxis::Horizontal
    } else {
        BounceAxis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_left_wall() {
        let mut r = Rect::new(-3, 100, 6, 6);
        let contact = clamp_to_walls(&mut r, 320);
        assert_eq!(r.left(), 0);
        assert!(contact.side);
        assert!(!contact.top);
    }

    #[test]
    fn test_clamp_right_wall() {
        let mut r = Rect::new(316, 100, 6, 6);
        let contact = clamp_to_walls(&mut r, 320);
        assert_eq!(r.right(), 320);
        assert!(contact.side);
    }

    #[test]
    fn test_corner_reports_both_axes() {
        let mut r = Rect::new(-2, -1, 6, 6);
        let contact = clamp_to_walls(&mut r, 320);
        assert_eq!((r.left(), r.top()), (0, 0));
        assert!(contact.side && contact.top);
    }

    #[test]
    fn test_bottom_is_open() {
        let mut r = Rect::new(100, 250, 6, 6);
        let contact = clamp_to_walls(&mut r, 320);
        assert!(!contact.any());
        assert_eq!(r.top(), 250);
    }

    #[test]
    fn test_paddle_deflection_range() {
        let paddle = Rect::new(130, 210, 60, 10);
        assert_eq!(paddle_deflection(160, &paddle), 0.0);
        assert!((paddle_deflection(130, &paddle) + 5.0).abs() < 1e-6);
        assert!((paddle_deflection(190, &paddle) - 5.0).abs() < 1e-6);
        assert!((paddle_deflection(175, &paddle) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_side_hit_bounces_horizontally() {
        let brick = Rect::new(100, 50, 32, 12);
        // Ball center 15px right of brick center, level with it
        let ball = Rect::centered(131, 56, 6, 6);
        assert_eq!(least_penetration_axis(&ball, &brick), BounceAxis::Horizontal);
    }

    #[test]
    fn test_underside_hit_bounces_vertically() {
        let brick = Rect::new(100, 50, 32, 12);
        let ball = Rect::centered(116, 63, 6, 6);
        assert_eq!(least_penetration_axis(&ball, &brick), BounceAxis::Vertical);
    }
}
