//! Destructible brick wall
//!
//! The grid is an ordered list of live bricks. Collision scans walk it in
//! insertion order (row-major, top to bottom then left to right), so removal
//! must keep the remaining bricks in place.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::Rgb;
use crate::consts::*;
use crate::palette::BRICK_COLORS;

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Rgb,
}

impl Brick {
    pub fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            color,
        }
    }
}

/// Largest column count whose wall fits inside `field_width`
pub fn max_columns(field_width: i32) -> u32 {
    ((field_width + BRICK_GAP) / (BRICK_WIDTH + BRICK_GAP)).max(1) as u32
}

/// Live bricks in scan order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out `columns x rows` bricks, centered horizontally in the field.
    ///
    /// `columns` should already be clamped with [`max_columns`]; a wider wall
    /// is pinned to the left edge rather than shifted off-screen.
    pub fn build(columns: u32, rows: u32, field_width: i32) -> Self {
        let cols = columns.max(1) as i32;
        let grid_w = cols * BRICK_WIDTH + (cols - 1) * BRICK_GAP;
        let left = ((field_width - grid_w) / 2).max(0);

        let mut bricks = Vec::with_capacity((cols as usize) * rows as usize);
        for row in 0..rows as i32 {
            let color = BRICK_COLORS[row as usize % BRICK_COLORS.len()];
            for col in 0..cols {
                let x = left + col * (BRICK_WIDTH + BRICK_GAP);
                let y = BRICK_TOP + row * (BRICK_HEIGHT + BRICK_GAP);
                bricks.push(Brick::new(x, y, color));
            }
        }

        log::info!("Built brick wall: {}x{} ({} bricks)", cols, rows, bricks.len());
        Self { bricks }
    }

    /// Grid from an explicit brick list (kept in the given order)
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Index of the first brick overlapping `rect`
    pub fn first_overlap(&self, rect: &Rect) -> Option<usize> {
        self.bricks.iter().position(|b| b.rect.overlaps(rect))
    }

    /// Remove one brick, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Brick {
        self.bricks.remove(index)
    }
}
