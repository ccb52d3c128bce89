//! Character-grid rendering
//!
//! Screens are drawn into a `Canvas` first; the frontend then writes the
//! canvas lines to the terminal in one pass.

pub mod canvas;
pub mod screens;

pub use canvas::{Canvas, GRID_COLS, GRID_ROWS, to_cell, to_playfield};
pub use screens::{draw_game, draw_menu, draw_winner};
