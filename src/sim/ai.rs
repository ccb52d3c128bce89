//! Single-player opponent
//!
//! Tracks the ball's vertical center with a random misjudgment and a dead
//! zone. On easy it also waits out a reaction delay between decisions.

use rand::Rng;

use super::difficulty::AiProfile;
use super::state::{Ball, Paddle, Stopwatch};

/// Direction the AI chose this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiDecision {
    Up,
    Down,
    Hold,
}

/// Paddle controller state carried across ticks
#[derive(Debug, Clone, Default)]
pub struct AiOpponent {
    reaction_clock: Stopwatch,
}

impl AiOpponent {
    pub fn reset(&mut self) {
        self.reaction_clock.restart();
    }

    /// Decide and apply one tick of movement. `scale` converts the profile's
    /// per-tick speed into this tick's displacement.
    pub fn update<R: Rng>(
        &mut self,
        paddle: &mut Paddle,
        ball: &Ball,
        profile: &AiProfile,
        rng: &mut R,
        dt: f32,
        scale: f32,
    ) -> AiDecision {
        if let Some(delay) = profile.reaction_delay {
            self.reaction_clock.advance(dt);
            if self.reaction_clock.elapsed() < delay {
                return AiDecision::Hold;
            }
            self.reaction_clock.restart();
        }

        let error = profile.prediction_error;
        let target = ball.pos.y + rng.random_range(-error..=error);
        let decision = decide(paddle.center_y(), target, profile.reaction_margin);

        match decision {
            AiDecision::Down => paddle.move_by(profile.speed * scale),
            AiDecision::Up => paddle.move_by(-profile.speed * scale),
            AiDecision::Hold => {}
        }
        decision
    }
}

/// Dead-zone comparison of paddle center against target (y grows downward)
pub fn decide(paddle_center: f32, target: f32, margin: f32) -> AiDecision {
    if paddle_center < target - margin {
        AiDecision::Down
    } else if paddle_center > target + margin {
        AiDecision::Up
    } else {
        AiDecision::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::state::Side;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball_at(y: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(1.0, 0.0));
        ball.pos.y = y;
        ball
    }

    #[test]
    fn test_decide_dead_zone() {
        assert_eq!(decide(300.0, 400.0, 20.0), AiDecision::Down);
        assert_eq!(decide(300.0, 200.0, 20.0), AiDecision::Up);
        assert_eq!(decide(300.0, 315.0, 20.0), AiDecision::Hold);
        assert_eq!(decide(300.0, 285.0, 20.0), AiDecision::Hold);
    }

    #[test]
    fn test_hard_ai_tracks_ball() {
        let profile = Difficulty::Hard.ai_profile();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ai = AiOpponent::default();
        let mut paddle = Paddle::new(Side::Right);
        let ball = ball_at(550.0);

        let start = paddle.y;
        let decision = ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0);
        assert_eq!(decision, AiDecision::Down);
        assert_eq!(paddle.y, start + 8.0);
    }

    #[test]
    fn test_easy_ai_waits_for_reaction_delay() {
        let profile = Difficulty::Easy.ai_profile();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ai = AiOpponent::default();
        let mut paddle = Paddle::new(Side::Right);
        // Far below: beyond margin plus maximum error
        let ball = ball_at(590.0);

        // 1/120 s < 0.01 s: still reacting
        let start = paddle.y;
        assert_eq!(
            ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0),
            AiDecision::Hold
        );
        assert_eq!(paddle.y, start);

        // Accumulated 2/120 s >= 0.01 s
        assert_eq!(
            ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0),
            AiDecision::Down
        );
        assert_eq!(paddle.y, start + 6.0);

        // Clock restarted after deciding
        assert_eq!(
            ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0),
            AiDecision::Hold
        );
    }

    #[test]
    fn test_ai_stays_on_playfield() {
        let profile = Difficulty::Hard.ai_profile();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut ai = AiOpponent::default();
        let mut paddle = Paddle::new(Side::Right);
        let ball = ball_at(-500.0);

        for _ in 0..200 {
            ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0);
        }
        assert_eq!(paddle.y, 0.0);

        let ball = ball_at(PLAYFIELD_HEIGHT + 500.0);
        for _ in 0..200 {
            ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0);
        }
        assert_eq!(paddle.y, PLAYFIELD_HEIGHT - PADDLE_HEIGHT);
    }
}
