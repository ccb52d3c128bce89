//! Menu screens before play starts
//!
//! Each screen is a list of buttons laid out in playfield coordinates. Clicks
//! are hit-tested against the button rectangles; every button also has a
//! single-key shortcut. Selections are forwarded to the `GameState` phase
//! machine, so the menu never starts a session the state would reject.

use glam::Vec2;

use crate::consts::{SCORE_LIMITS, TIMER_MODE_SECS};
use crate::sim::{Difficulty, GameMode, GamePhase, GameState, Rect, WinCondition};

/// Menu screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Credits,
    ModeSelect,
    DifficultySelect,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Duel Pong",
            Screen::Credits => "Credits",
            Screen::ModeSelect => "Select Mode",
            Screen::DifficultySelect => "Select Difficulty",
        }
    }
}

/// What a button does when activated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    Play,
    Credits,
    Exit,
    Back,
    SetWin(WinCondition),
    ChooseMode(GameMode),
    ChooseDifficulty(Difficulty),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub shortcut: char,
    pub rect: Rect,
    pub action: MenuAction,
}

impl Button {
    fn new(label: impl Into<String>, shortcut: char, rect: Rect, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            shortcut,
            rect,
            action,
        }
    }
}

/// Result of handling one menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Nothing for the caller to do
    Stay,
    /// Play has begun
    Started,
    Quit,
}

/// Lines shown on the credits screen
pub const CREDITS: [&str; 6] = [
    "Duel Pong",
    "",
    "A two-paddle arcade duel for one or two players.",
    "",
    "Left paddle: W / S    Right paddle: Up / Down",
    "Written in Rust.",
];

/// Centered column of wide buttons
fn column_rect(row: usize) -> Rect {
    Rect::new(300.0, 230.0 + row as f32 * 90.0, 200.0, 50.0)
}

#[derive(Debug, Clone)]
pub struct Menu {
    screen: Screen,
    pending_win: WinCondition,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            pending_win: WinCondition::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Win condition that the next mode choice will use
    pub fn pending_win(&self) -> WinCondition {
        self.pending_win
    }

    /// Buttons of the current screen
    pub fn buttons(&self) -> Vec<Button> {
        match self.screen {
            Screen::Welcome => vec![
                Button::new("Play", 'p', column_rect(0), MenuAction::Play),
                Button::new("Exit", 'x', column_rect(1), MenuAction::Exit),
                Button::new("Credits", 'c', column_rect(2), MenuAction::Credits),
            ],
            Screen::Credits => vec![Button::new(
                "Back",
                'b',
                Rect::new(300.0, 500.0, 200.0, 50.0),
                MenuAction::Back,
            )],
            Screen::ModeSelect => {
                let mut buttons = vec![
                    Button::new(
                        "Single Player",
                        '1',
                        Rect::new(275.0, 100.0, 250.0, 50.0),
                        MenuAction::ChooseMode(GameMode::SinglePlayer),
                    ),
                    Button::new(
                        "Two Player",
                        '2',
                        Rect::new(275.0, 180.0, 250.0, 50.0),
                        MenuAction::ChooseMode(GameMode::TwoPlayer),
                    ),
                ];
                for (i, (limit, key)) in SCORE_LIMITS.iter().zip(['a', 'b', 'c']).enumerate() {
                    buttons.push(Button::new(
                        limit.to_string(),
                        key,
                        Rect::new(270.0 + i as f32 * 90.0, 330.0, 80.0, 50.0),
                        MenuAction::SetWin(WinCondition::ScoreLimit(*limit)),
                    ));
                }
                buttons.push(Button::new(
                    format!("Timer ({}s)", TIMER_MODE_SECS as u32),
                    't',
                    Rect::new(275.0, 410.0, 250.0, 50.0),
                    MenuAction::SetWin(WinCondition::Timer {
                        secs: TIMER_MODE_SECS,
                    }),
                ));
                buttons
            }
            Screen::DifficultySelect => Difficulty::ALL
                .iter()
                .enumerate()
                .map(|(row, d)| {
                    let key = d.as_str().to_ascii_lowercase().chars().next().unwrap_or('?');
                    Button::new(
                        d.as_str(),
                        key,
                        column_rect(row),
                        MenuAction::ChooseDifficulty(*d),
                    )
                })
                .collect(),
        }
    }

    /// Topmost button under `point`
    pub fn button_at(&self, point: Vec2) -> Option<Button> {
        self.buttons().into_iter().find(|b| b.rect.contains(point))
    }

    /// Whether `action` is the currently selected win condition
    pub fn is_selected(&self, action: &MenuAction) -> bool {
        matches!(action, MenuAction::SetWin(win) if *win == self.pending_win)
    }

    pub fn click(&mut self, point: Vec2, state: &mut GameState) -> MenuCommand {
        match self.button_at(point) {
            Some(button) => self.activate(button.action, state),
            None => MenuCommand::Stay,
        }
    }

    pub fn shortcut(&mut self, key: char, state: &mut GameState) -> MenuCommand {
        let key = key.to_ascii_lowercase();
        match self.buttons().into_iter().find(|b| b.shortcut == key) {
            Some(button) => self.activate(button.action, state),
            None => MenuCommand::Stay,
        }
    }

    /// Esc: step back toward the welcome screen, or quit from it.
    /// Difficulty selection has no way back once a mode is chosen.
    pub fn back(&mut self) -> MenuCommand {
        match self.screen {
            Screen::Welcome => return MenuCommand::Quit,
            Screen::Credits | Screen::ModeSelect => self.screen = Screen::Welcome,
            Screen::DifficultySelect => {}
        }
        MenuCommand::Stay
    }

    pub fn activate(&mut self, action: MenuAction, state: &mut GameState) -> MenuCommand {
        match action {
            MenuAction::Play => self.screen = Screen::ModeSelect,
            MenuAction::Credits => self.screen = Screen::Credits,
            MenuAction::Back => self.screen = Screen::Welcome,
            MenuAction::Exit => return MenuCommand::Quit,
            MenuAction::SetWin(win) => self.pending_win = win,
            MenuAction::ChooseMode(mode) => {
                state.select_mode(mode, self.pending_win);
                if state.phase == GamePhase::SelectingDifficulty {
                    self.screen = Screen::DifficultySelect;
                }
            }
            MenuAction::ChooseDifficulty(difficulty) => {
                state.select_difficulty(difficulty);
                if state.phase == GamePhase::Playing {
                    return MenuCommand::Started;
                }
            }
        }
        MenuCommand::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_flow_by_clicks() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        assert_eq!(menu.screen(), Screen::Welcome);

        // Play
        assert_eq!(menu.click(Vec2::new(400.0, 250.0), &mut state), MenuCommand::Stay);
        assert_eq!(menu.screen(), Screen::ModeSelect);

        // "25" then "Two Player"
        menu.click(Vec2::new(400.0, 350.0), &mut state);
        assert_eq!(menu.pending_win(), WinCondition::ScoreLimit(25));
        menu.click(Vec2::new(400.0, 200.0), &mut state);
        assert_eq!(menu.screen(), Screen::DifficultySelect);
        assert_eq!(state.phase, GamePhase::SelectingDifficulty);

        // Hard
        let cmd = menu.click(Vec2::new(400.0, 430.0), &mut state);
        assert_eq!(cmd, MenuCommand::Started);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.config.mode, GameMode::TwoPlayer);
        assert_eq!(state.config.win, WinCondition::ScoreLimit(25));
        assert_eq!(state.config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_default_win_condition_is_fifteen() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        menu.shortcut('p', &mut state);
        menu.shortcut('1', &mut state);
        assert_eq!(menu.shortcut('e', &mut state), MenuCommand::Started);
        assert_eq!(state.config.win, WinCondition::ScoreLimit(15));
        assert_eq!(state.config.mode, GameMode::SinglePlayer);
        assert_eq!(state.config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_timer_shortcut() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        menu.shortcut('P', &mut state);
        menu.shortcut('t', &mut state);
        assert_eq!(menu.pending_win(), WinCondition::Timer { secs: 60.0 });
        assert!(menu.is_selected(&MenuAction::SetWin(WinCondition::Timer { secs: 60.0 })));
        assert!(!menu.is_selected(&MenuAction::SetWin(WinCondition::ScoreLimit(15))));
    }

    #[test]
    fn test_credits_and_back() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        menu.click(Vec2::new(400.0, 430.0), &mut state);
        assert_eq!(menu.screen(), Screen::Credits);
        menu.click(Vec2::new(400.0, 520.0), &mut state);
        assert_eq!(menu.screen(), Screen::Welcome);
    }

    #[test]
    fn test_back() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        menu.shortcut('p', &mut state);
        assert_eq!(menu.back(), MenuCommand::Stay);
        assert_eq!(menu.screen(), Screen::Welcome);
        assert_eq!(menu.back(), MenuCommand::Quit);

        menu.shortcut('p', &mut state);
        menu.shortcut('2', &mut state);
        assert_eq!(menu.back(), MenuCommand::Stay);
        assert_eq!(menu.screen(), Screen::DifficultySelect);
    }

    #[test]
    fn test_exit_and_misses() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        assert_eq!(menu.click(Vec2::new(10.0, 10.0), &mut state), MenuCommand::Stay);
        assert_eq!(menu.shortcut('z', &mut state), MenuCommand::Stay);
        assert_eq!(menu.click(Vec2::new(400.0, 340.0), &mut state), MenuCommand::Quit);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let mut state = GameState::new(1);
        let mut menu = Menu::new();
        for key in ['p', '1'] {
            let buttons = menu.buttons();
            for (i, a) in buttons.iter().enumerate() {
                for b in &buttons[i + 1..] {
                    assert!(!a.rect.intersects(&b.rect), "{} overlaps {}", a.label, b.label);
                    assert_ne!(a.shortcut, b.shortcut);
                }
            }
            menu.shortcut(key, &mut state);
        }
    }
}
