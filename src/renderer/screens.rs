//! Drawing of each screen onto a `Canvas`

use glam::Vec2;

use super::canvas::{Canvas, GRID_COLS, GRID_ROWS, to_cell};
use crate::sim::{GameState, Outcome};
use crate::ui::{self, CREDITS, Menu, Screen};

const BALL_CHAR: char = 'O';
const PADDLE_CHAR: char = '#';

/// Draw the current menu screen; the button under `pointer` is marked
pub fn draw_menu(canvas: &mut Canvas, menu: &Menu, pointer: Option<Vec2>) {
    canvas.clear();
    let screen = menu.screen();
    canvas.text_centered(2, screen.title());

    match screen {
        Screen::Credits => {
            for (i, line) in CREDITS.iter().enumerate() {
                canvas.text_centered(7 + i, line);
            }
        }
        Screen::ModeSelect => {
            canvas.text_centered(14, "Set Score Limit or Timer Mode:");
        }
        Screen::Welcome | Screen::DifficultySelect => {}
    }

    let hovered = pointer.and_then(|p| menu.button_at(p));
    for button in menu.buttons() {
        canvas.frame_rect(&button.rect);
        let (_, row) = to_cell(button.rect.center());
        let (col, _) = to_cell(button.rect.min);
        let width = to_cell(button.rect.max()).0.saturating_sub(col);

        let mut label = format!("{} [{}]", button.label, button.shortcut);
        if menu.is_selected(&button.action) {
            label = format!("*{}", label);
        }
        if hovered.as_ref() == Some(&button) {
            label = format!("> {}", label);
        }
        let len = label.chars().count();
        let start = col + 1 + width.saturating_sub(len + 1) / 2;
        canvas.text(start, row, &label);
    }

    canvas.text_centered(GRID_ROWS - 1, "click a button or press its key, Esc to go back");
}

/// Draw the playfield and HUD
pub fn draw_game(canvas: &mut Canvas, state: &GameState, fps: Option<u32>) {
    canvas.clear();

    // Center line
    let mid = GRID_COLS / 2;
    for row in (0..GRID_ROWS).step_by(2) {
        canvas.put(mid, row, ':');
    }

    canvas.fill_rect(&state.left_paddle.rect(), PADDLE_CHAR);
    canvas.fill_rect(&state.right_paddle.rect(), PADDLE_CHAR);

    let (col, row) = to_cell(state.ball.pos);
    canvas.put(col, row, BALL_CHAR);

    // Scores
    canvas.text(5, 1, &state.scores.left.to_string());
    let right = state.scores.right.to_string();
    canvas.text(GRID_COLS - 10, 1, &right);

    if let Some(remaining) = state.remaining_secs() {
        canvas.text_centered(0, &ui::format_clock(remaining));
    }
    if let Some(fps) = fps {
        canvas.text(GRID_COLS - 8, GRID_ROWS - 1, &format!("{:>3} fps", fps));
    }
}

/// Draw the end-of-session screen
pub fn draw_winner(canvas: &mut Canvas, state: &GameState) {
    canvas.clear();
    let outcome = state.outcome.unwrap_or(Outcome::Tie);
    canvas.text_centered(
        GRID_ROWS / 3 - 2,
        ui::winner_headline(outcome, state.config.mode),
    );
    for (i, line) in ui::final_score_lines(&state.scores).iter().enumerate() {
        canvas.text_centered(GRID_ROWS / 2 + i, line);
    }
    canvas.text_centered(GRID_ROWS - 3, "R: play again    Q: quit");
}
