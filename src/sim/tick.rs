//! Fixed timestep simulation tick
//!
//! Advances a `Playing` session by one step: clocks, paddles, ball, collisions,
//! then scoring. Other phases are left untouched.

use super::collision::{
    bounce_off_paddle, bounce_off_wall, goal_crossed, paddle_contact, renormalize_velocity,
    wall_contact,
};
use super::state::{GameEvent, GameMode, GamePhase, GameState, WinCondition};
use crate::consts::SIM_DT;

/// Held controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    /// Ignored in single-player mode
    pub right_up: bool,
    pub right_down: bool,
}

/// -1 for up, +1 for down, 0 for neither or both
fn axis(up: bool, down: bool) -> f32 {
    match (up, down) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    // Speeds are tuned per reference tick
    let scale = dt / SIM_DT;

    state.session_clock.advance(dt);
    if let WinCondition::Timer { secs } = state.config.win {
        if state.session_clock.elapsed() >= secs {
            state.end_session();
            return;
        }
    }

    move_paddles(state, input, dt, scale);
    move_ball(state, scale);
    resolve_bounces(state);
    check_goals(state);
}

fn move_paddles(state: &mut GameState, input: &TickInput, dt: f32, scale: f32) {
    let paddle_speed = state.speed_profile().paddle_speed * scale;

    state
        .left_paddle
        .move_by(axis(input.left_up, input.left_down) * paddle_speed);

    match state.config.mode {
        GameMode::TwoPlayer => {
            state
                .right_paddle
                .move_by(axis(input.right_up, input.right_down) * paddle_speed);
        }
        GameMode::SinglePlayer => {
            let profile = state.config.difficulty.ai_profile();
            state.ai.update(
                &mut state.right_paddle,
                &state.ball,
                &profile,
                &mut state.rng,
                dt,
                scale,
            );
        }
    }
}

fn move_ball(state: &mut GameState, scale: f32) {
    let speed = state.speed_profile().ball_speed;
    let ball = &mut state.ball;
    ball.vel = renormalize_velocity(ball.vel, speed);
    ball.pos += ball.vel * scale;
}

fn resolve_bounces(state: &mut GameState) {
    if let Some(contact) = wall_contact(state.ball.pos, state.ball.radius) {
        let vel = bounce_off_wall(state.ball.vel, contact);
        if vel != state.ball.vel {
            state.ball.vel = vel;
            state.push_event(GameEvent::WallBounce);
        }
    }

    let hit = paddle_contact(
        state.ball.pos,
        state.ball.radius,
        &state.left_paddle,
        &state.right_paddle,
    );
    if let Some(side) = hit {
        let vel = bounce_off_paddle(state.ball.vel, side);
        // Only the tick that turns the ball around counts as a hit
        if vel != state.ball.vel {
            state.ball.vel = vel;
            state.push_event(GameEvent::PaddleHit { side });
        }
    }
}

fn check_goals(state: &mut GameState) {
    let Some(goal) = goal_crossed(state.ball.pos, state.ball.radius) else {
        return;
    };

    let scorer = goal.opposite();
    state.scores.award(scorer);
    log::debug!(
        "{:?} scored ({} - {})",
        scorer,
        state.scores.left,
        state.scores.right
    );
    state.push_event(GameEvent::PointScored {
        scorer,
        scores: state.scores,
    });
    state.serve_random();

    if let WinCondition::ScoreLimit(target) = state.config.win {
        if state.scores.reached(target) {
            state.end_session();
        }
    }
}
