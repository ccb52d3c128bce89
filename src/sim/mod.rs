//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through the `dt` passed to `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use ai::{AiDecision, AiOpponent};
pub use collision::{Rect, renormalize_velocity};
pub use difficulty::{AiProfile, Difficulty, SpeedProfile};
pub use state::{
    Ball, GameEvent, GameMode, GamePhase, GameState, Outcome, Paddle, Scores, SessionConfig, Side,
    Stopwatch, WinCondition,
};
pub use tick::{TickInput, tick};
