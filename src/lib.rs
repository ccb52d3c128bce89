//! Duel Pong - a two-paddle arcade duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, AI)
//! - `ui`: Menu flow and HUD text
//! - `renderer`: Character-grid drawing of menus and the playfield
//! - `platform`: Input mapping (held keys, pointer coordinates)
//! - `audio`: Sound cues for simulation events
//! - `settings`: Presentation preferences

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a side edge and the paddle's outer face
    pub const PADDLE_INSET: f32 = 50.0;
    /// Paddle speed before the difficulty bonus (pixels per tick)
    pub const BASE_PADDLE_SPEED: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Velocity given to the ball by a restart (renormalized next tick)
    pub const RESTART_BALL_VELOCITY: (f32, f32) = (3.0, 2.0);

    /// Win conditions offered by the mode menu
    pub const SCORE_LIMITS: [u32; 3] = [15, 25, 40];
    pub const DEFAULT_SCORE_LIMIT: u32 = 15;
    pub const TIMER_MODE_SECS: f32 = 60.0;
}

/// Center of the playfield
#[inline]
pub fn playfield_center() -> Vec2 {
    Vec2::new(consts::PLAYFIELD_WIDTH / 2.0, consts::PLAYFIELD_HEIGHT / 2.0)
}

/// Clamp a paddle's top edge so the whole paddle stays on the playfield
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32) -> f32 {
    y.clamp(0.0, consts::PLAYFIELD_HEIGHT - paddle_height)
}
