//! Character grid that stands in for the playfield
//!
//! The 800 x 600 playfield maps onto an 80 x 30 grid, so one cell covers
//! 10 x 20 playfield units.

use glam::Vec2;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::Rect;

pub const GRID_COLS: usize = 80;
pub const GRID_ROWS: usize = 30;

const CELL_W: f32 = PLAYFIELD_WIDTH / GRID_COLS as f32;
const CELL_H: f32 = PLAYFIELD_HEIGHT / GRID_ROWS as f32;

/// Cell containing a playfield point, clamped to the grid
pub fn to_cell(point: Vec2) -> (usize, usize) {
    let col = (point.x / CELL_W).floor().clamp(0.0, (GRID_COLS - 1) as f32) as usize;
    let row = (point.y / CELL_H).floor().clamp(0.0, (GRID_ROWS - 1) as f32) as usize;
    (col, row)
}

/// Playfield point at the center of a cell (0-based)
pub fn to_playfield(col: usize, row: usize) -> Vec2 {
    Vec2::new((col as f32 + 0.5) * CELL_W, (row as f32 + 0.5) * CELL_H)
}

#[derive(Debug, Clone)]
pub struct Canvas {
    cells: Vec<char>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            cells: vec![' '; GRID_COLS * GRID_ROWS],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col < GRID_COLS && row < GRID_ROWS {
            Some(self.cells[row * GRID_COLS + col])
        } else {
            None
        }
    }

    /// Set one cell; out-of-grid writes are dropped
    pub fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < GRID_COLS && row < GRID_ROWS {
            self.cells[row * GRID_COLS + col] = ch;
        }
    }

    pub fn text(&mut self, col: usize, row: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i, row, ch);
        }
    }

    pub fn text_centered(&mut self, row: usize, text: &str) {
        let len = text.chars().count();
        let col = GRID_COLS.saturating_sub(len) / 2;
        self.text(col, row, text);
    }

    /// Fill every cell a playfield rectangle touches
    pub fn fill_rect(&mut self, rect: &Rect, ch: char) {
        let (c0, r0) = to_cell(rect.min);
        // Step just inside the far edge so exact cell boundaries are exclusive
        let (c1, r1) = to_cell(rect.max() - Vec2::splat(0.01));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, ch);
            }
        }
    }

    /// Outline a playfield rectangle
    pub fn frame_rect(&mut self, rect: &Rect) {
        let (c0, r0) = to_cell(rect.min);
        let (c1, r1) = to_cell(rect.max() - Vec2::splat(0.01));
        for col in c0..=c1 {
            self.put(col, r0, '-');
            self.put(col, r1, '-');
        }
        for row in r0..=r1 {
            self.put(c0, row, '|');
            self.put(c1, row, '|');
        }
        for (col, row) in [(c0, r0), (c1, r0), (c0, r1), (c1, r1)] {
            self.put(col, row, '+');
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(GRID_COLS)
            .map(|row| row.iter().collect())
            .collect()
    }
}
