//! Menu flow and HUD text
//!
//! Layout is expressed in playfield coordinates; the renderer maps it onto
//! whatever surface it draws to.

pub mod hud;
pub mod menu;

pub use hud::{final_score_lines, format_clock, winner_headline};
pub use menu::{Button, CREDITS, Menu, MenuAction, MenuCommand, Screen};
