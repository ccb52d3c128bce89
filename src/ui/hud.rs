//! HUD and winner-screen text

use crate::sim::{GameMode, Outcome, Scores};

/// Remaining time as `m:ss`, counting down in whole seconds
pub fn format_clock(remaining_secs: f32) -> String {
    let secs = remaining_secs.max(0.0).ceil() as u32;
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn winner_headline(outcome: Outcome, mode: GameMode) -> &'static str {
    match (outcome, mode) {
        (Outcome::LeftWins, _) => "Left Player Wins!",
        (Outcome::RightWins, GameMode::SinglePlayer) => "AI Wins!",
        (Outcome::RightWins, GameMode::TwoPlayer) => "Right Player Wins!",
        (Outcome::Tie, _) => "It's a Tie!",
    }
}

/// Lines of the final score block
pub fn final_score_lines(scores: &Scores) -> [String; 3] {
    [
        "Final Score:".to_string(),
        format!("Left Player: {}", scores.left),
        format!("Right Player: {}", scores.right),
    ]
}
