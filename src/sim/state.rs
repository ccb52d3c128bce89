//! Game state and core simulation types
//!
//! One `GameState` owns everything a session needs: configuration, phase,
//! scores, both paddles, the ball, clocks, and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiOpponent;
use super::collision::Rect;
use super::difficulty::{Difficulty, SpeedProfile};
use crate::consts::*;
use crate::{clamp_paddle_y, playfield_center};

/// Left or right half of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Right paddle is driven by the AI
    #[default]
    SinglePlayer,
    /// Both paddles are human-controlled
    TwoPlayer,
}

/// How a session ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WinCondition {
    /// First side to reach the target wins
    ScoreLimit(u32),
    /// Highest score when the clock runs out wins
    Timer { secs: f32 },
}

impl Default for WinCondition {
    fn default() -> Self {
        WinCondition::ScoreLimit(DEFAULT_SCORE_LIMIT)
    }
}

/// Choices made in the menus, fixed for one session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub win: WinCondition,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for mode and win condition
    SelectingMode,
    /// Waiting for difficulty
    SelectingDifficulty,
    /// Active gameplay
    Playing,
    /// Session ended, waiting for restart
    GameOver,
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    LeftWins,
    RightWins,
    Tie,
}

/// Score pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// True once either side has reached `target`
    pub fn reached(&self, target: u32) -> bool {
        self.left >= target || self.right >= target
    }

    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.left.cmp(&self.right) {
            Ordering::Greater => Outcome::LeftWins,
            Ordering::Less => Outcome::RightWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Discrete notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// A point was scored and the ball re-served
    PointScored { scorer: Side, scores: Scores },
    /// Session is over
    SessionEnded { outcome: Outcome, scores: Scores },
}

/// Elapsed-time accumulator driven by the simulation's `dt`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}

/// A vertical paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => PLAYFIELD_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: (PLAYFIELD_HEIGHT - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move vertically, staying inside the playfield
    pub fn move_by(&mut self, dy: f32) {
        self.y = clamp_paddle_y(self.y + dy, self.height);
    }

    /// Return to the vertically centered start position
    pub fn reset(&mut self) {
        *self = Paddle::new(self.side);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(vel: Vec2) -> Self {
        Self {
            pos: playfield_center(),
            vel,
            radius: BALL_RADIUS,
        }
    }

    pub fn bounds(&self) -> Rect {
        super::collision::ball_bounds(self.pos, self.radius)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub config: SessionConfig,
    pub scores: Scores,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    /// Time spent in `Playing` since the session (re)started
    pub session_clock: Stopwatch,
    /// Right paddle controller in single-player mode
    pub ai: AiOpponent,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Outcome of the last finished session
    pub outcome: Option<Outcome>,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game waiting for mode selection
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::SelectingMode,
            config: SessionConfig::default(),
            scores: Scores::default(),
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            ball: Ball::new(Vec2::ZERO),
            session_clock: Stopwatch::default(),
            ai: AiOpponent::default(),
            time_ticks: 0,
            outcome: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Choose mode and win condition (SelectingMode only)
    pub fn select_mode(&mut self, mode: GameMode, win: WinCondition) {
        if self.phase != GamePhase::SelectingMode {
            log::warn!("Ignoring mode selection during {:?}", self.phase);
            return;
        }
        self.config.mode = mode;
        self.config.win = win;
        self.phase = GamePhase::SelectingDifficulty;
    }

    /// Choose difficulty and start playing (SelectingDifficulty only)
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase != GamePhase::SelectingDifficulty {
            log::warn!("Ignoring difficulty selection during {:?}", self.phase);
            return;
        }
        self.config.difficulty = difficulty;
        self.reset_session();
        self.serve_random();
        self.phase = GamePhase::Playing;
        log::info!(
            "Session started: {:?}, {}, {:?}",
            self.config.mode,
            difficulty.as_str(),
            self.config.win
        );
    }

    /// Start a new session with the same configuration (GameOver only)
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            log::warn!("Ignoring restart during {:?}", self.phase);
            return;
        }
        self.reset_session();
        let (vx, vy) = RESTART_BALL_VELOCITY;
        self.ball = Ball::new(Vec2::new(vx, vy));
        self.phase = GamePhase::Playing;
        log::info!("Session restarted");
    }

    fn reset_session(&mut self) {
        self.scores = Scores::default();
        self.left_paddle.reset();
        self.right_paddle.reset();
        self.session_clock.restart();
        self.ai.reset();
        self.outcome = None;
        self.events.clear();
    }

    /// Put the ball in the center with a random diagonal at the current speed
    pub fn serve_random(&mut self) {
        let dx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed = self.speed_profile().ball_speed;
        self.ball = Ball::new(Vec2::new(dx, dy).normalize() * speed);
    }

    pub fn speed_profile(&self) -> SpeedProfile {
        self.config.difficulty.speed_profile()
    }

    /// Seconds left in timer mode
    pub fn remaining_secs(&self) -> Option<f32> {
        match self.config.win {
            WinCondition::Timer { secs } => Some((secs - self.session_clock.elapsed()).max(0.0)),
            WinCondition::ScoreLimit(_) => None,
        }
    }

    pub(crate) fn end_session(&mut self) {
        let outcome = self.scores.outcome();
        self.outcome = Some(outcome);
        self.phase = GamePhase::GameOver;
        self.push_event(GameEvent::SessionEnded {
            outcome,
            scores: self.scores,
        });
        log::info!(
            "Session ended: {:?} ({} - {})",
            outcome,
            self.scores.left,
            self.scores.right
        );
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
