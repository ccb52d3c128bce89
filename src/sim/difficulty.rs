//! Difficulty table
//!
//! Every speed, margin, and error constant that varies with difficulty is
//! looked up here.

use serde::{Deserialize, Serialize};

use crate::consts::BASE_PADDLE_SPEED;

/// Difficulty level, chosen once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Ball and paddle speed magnitudes (pixels per tick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    pub ball_speed: f32,
    pub paddle_speed: f32,
}

/// AI opponent tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Paddle displacement per tick when moving
    pub speed: f32,
    /// Dead zone around the target where the paddle holds still
    pub reaction_margin: f32,
    /// Maximum misjudgment of the ball's vertical position
    pub prediction_error: f32,
    /// Minimum seconds between re-evaluations (easy only)
    pub reaction_delay: Option<f32>,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a menu index to a level; unknown indices fall back to medium
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            other => {
                log::warn!("Unknown difficulty level {}, using Medium", other);
                Difficulty::Medium
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn speed_profile(&self) -> SpeedProfile {
        match self {
            Difficulty::Easy => SpeedProfile {
                ball_speed: 0.8,
                paddle_speed: BASE_PADDLE_SPEED,
            },
            Difficulty::Medium => SpeedProfile {
                ball_speed: 1.2,
                paddle_speed: BASE_PADDLE_SPEED + 0.8,
            },
            Difficulty::Hard => SpeedProfile {
                ball_speed: 1.6,
                paddle_speed: BASE_PADDLE_SPEED + 1.5,
            },
        }
    }

    pub fn ai_profile(&self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                speed: 6.0,
                reaction_margin: 50.0,
                prediction_error: 50.0,
                reaction_delay: Some(0.01),
            },
            Difficulty::Medium => AiProfile {
                speed: 6.0,
                reaction_margin: 20.0,
                prediction_error: 15.0,
                reaction_delay: None,
            },
            Difficulty::Hard => AiProfile {
                speed: 8.0,
                reaction_margin: 5.0,
                prediction_error: 5.0,
                reaction_delay: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_table() {
        assert_eq!(Difficulty::Easy.speed_profile().ball_speed, 0.8);
        assert_eq!(Difficulty::Medium.speed_profile().ball_speed, 1.2);
        assert_eq!(Difficulty::Hard.speed_profile().ball_speed, 1.6);

        assert_eq!(Difficulty::Easy.speed_profile().paddle_speed, BASE_PADDLE_SPEED);
        assert!((Difficulty::Medium.speed_profile().paddle_speed - 1.8).abs() < 1e-6);
        assert!((Difficulty::Hard.speed_profile().paddle_speed - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_level_uses_medium_policy() {
        assert_eq!(Difficulty::from_level(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2), Difficulty::Hard);
        let fallback = Difficulty::from_level(7);
        assert_eq!(fallback, Difficulty::Medium);
        assert_eq!(fallback.speed_profile().ball_speed, 1.2);
    }

    #[test]
    fn test_only_easy_has_reaction_delay() {
        assert_eq!(Difficulty::Easy.ai_profile().reaction_delay, Some(0.01));
        assert!(Difficulty::Medium.ai_profile().reaction_delay.is_none());
        assert!(Difficulty::Hard.ai_profile().reaction_delay.is_none());
        assert_eq!(Difficulty::Hard.ai_profile().speed, 8.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
