//! Invariants that must hold for arbitrary inputs

use duel_pong::consts::*;
use duel_pong::sim::{
    AiOpponent, Ball, Difficulty, GameMode, GamePhase, GameState, Paddle, Side, TickInput,
    WinCondition, renormalize_velocity, tick,
};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left_up, left_down, right_up, right_down)| TickInput {
            left_up,
            left_down,
            right_up,
            right_down,
        },
    )
}

proptest! {
    #[test]
    fn paddle_stays_on_playfield(moves in prop::collection::vec(-2000.0f32..2000.0, 1..50)) {
        let mut paddle = Paddle::new(Side::Left);
        for dy in moves {
            paddle.move_by(dy);
            prop_assert!(paddle.y >= 0.0);
            prop_assert!(paddle.y <= PLAYFIELD_HEIGHT - paddle.height);
        }
    }

    #[test]
    fn renormalized_speed_matches_difficulty(
        d in difficulty(),
        vx in -50.0f32..50.0,
        vy in -50.0f32..50.0,
    ) {
        prop_assume!(vx.abs() > 1e-3 || vy.abs() > 1e-3);
        let speed = d.speed_profile().ball_speed;
        let v = renormalize_velocity(Vec2::new(vx, vy), speed);
        prop_assert!((v.length() - speed).abs() < 1e-3);
        // Direction is kept
        prop_assert!(v.x.signum() == vx.signum() || vx == 0.0);
    }

    #[test]
    fn ai_paddle_stays_on_playfield(
        d in difficulty(),
        seed in any::<u64>(),
        ball_ys in prop::collection::vec(-100.0f32..700.0, 1..200),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ai = AiOpponent::default();
        let mut paddle = Paddle::new(Side::Right);
        let profile = d.ai_profile();
        for y in ball_ys {
            let mut ball = Ball::new(Vec2::new(1.0, 1.0));
            ball.pos.y = y;
            ai.update(&mut paddle, &ball, &profile, &mut rng, SIM_DT, 1.0);
            prop_assert!(paddle.y >= 0.0);
            prop_assert!(paddle.y <= PLAYFIELD_HEIGHT - paddle.height);
        }
    }

    #[test]
    fn scores_never_decrease_and_speed_is_pinned(
        d in difficulty(),
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        state.select_mode(GameMode::SinglePlayer, WinCondition::ScoreLimit(3));
        state.select_difficulty(d);
        let speed = d.speed_profile().ball_speed;

        let mut last = state.scores;
        for input in &inputs {
            tick(&mut state, input, SIM_DT);
            prop_assert!(state.scores.left >= last.left);
            prop_assert!(state.scores.right >= last.right);
            last = state.scores;

            if state.phase != GamePhase::Playing {
                break;
            }
            prop_assert!((state.ball.vel.length() - speed).abs() < 1e-3);
            prop_assert!(state.left_paddle.y >= 0.0);
            prop_assert!(state.right_paddle.y <= PLAYFIELD_HEIGHT - state.right_paddle.height);
        }
    }
}
