//! Platform abstraction layer
//!
//! Turns raw terminal input into what the simulation and menus consume:
//! - Key presses into held paddle controls
//! - Pointer cells into playfield coordinates

use glam::Vec2;

use crate::renderer::to_playfield;
use crate::sim::TickInput;

/// Frontend-independent input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Up,
    Down,
    Esc,
    /// Ctrl-C
    Interrupt,
    /// Left click at a 1-based terminal cell
    Click { col: u16, row: u16 },
}

/// One of the four paddle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    fn index(self) -> usize {
        match self {
            Control::LeftUp => 0,
            Control::LeftDown => 1,
            Control::RightUp => 2,
            Control::RightDown => 3,
        }
    }
}

pub fn control_for(event: &InputEvent) -> Option<Control> {
    match event {
        InputEvent::Char('w') | InputEvent::Char('W') => Some(Control::LeftUp),
        InputEvent::Char('s') | InputEvent::Char('S') => Some(Control::LeftDown),
        InputEvent::Up => Some(Control::RightUp),
        InputEvent::Down => Some(Control::RightDown),
        _ => None,
    }
}

/// Playfield point under a 1-based terminal cell
pub fn pointer_to_playfield(col: u16, row: u16) -> Vec2 {
    to_playfield(col.saturating_sub(1) as usize, row.saturating_sub(1) as usize)
}

/// Terminals report key presses (and auto-repeat), never releases. A press
/// keeps its control held for `hold_secs`, long enough to bridge the gap
/// until the next auto-repeat.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    remaining: [f32; 4],
    hold_secs: f32,
}

impl HeldKeys {
    pub fn new(hold_secs: f32) -> Self {
        Self {
            remaining: [0.0; 4],
            hold_secs,
        }
    }

    pub fn press(&mut self, control: Control) {
        let opposite = match control {
            Control::LeftUp => Control::LeftDown,
            Control::LeftDown => Control::LeftUp,
            Control::RightUp => Control::RightDown,
            Control::RightDown => Control::RightUp,
        };
        // Reversing direction releases the other key immediately
        self.remaining[opposite.index()] = 0.0;
        self.remaining[control.index()] = self.hold_secs;
    }

    pub fn advance(&mut self, dt: f32) {
        for r in &mut self.remaining {
            *r = (*r - dt).max(0.0);
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.remaining[control.index()] > 0.0
    }

    pub fn release_all(&mut self) {
        self.remaining = [0.0; 4];
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left_up: self.is_held(Control::LeftUp),
            left_down: self.is_held(Control::LeftDown),
            right_up: self.is_held(Control::RightUp),
            right_down: self.is_held(Control::RightDown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_mapping() {
        assert_eq!(control_for(&InputEvent::Char('w')), Some(Control::LeftUp));
        assert_eq!(control_for(&InputEvent::Char('S')), Some(Control::LeftDown));
        assert_eq!(control_for(&InputEvent::Down), Some(Control::RightDown));
        assert_eq!(control_for(&InputEvent::Char('r')), None);
        assert_eq!(control_for(&InputEvent::Esc), None);
    }

    #[test]
    fn test_press_holds_until_expired() {
        let mut keys = HeldKeys::new(0.1);
        keys.press(Control::LeftUp);
        assert!(keys.tick_input().left_up);
        keys.advance(0.05);
        assert!(keys.is_held(Control::LeftUp));
        keys.advance(0.06);
        assert!(!keys.is_held(Control::LeftUp));
        assert_eq!(keys.tick_input(), TickInput::default());
    }

    #[test]
    fn test_reverse_releases_opposite() {
        let mut keys = HeldKeys::new(0.1);
        keys.press(Control::RightUp);
        keys.press(Control::LeftDown);
        keys.press(Control::RightDown);
        let input = keys.tick_input();
        assert!(!input.right_up);
        assert!(input.right_down);
        assert!(input.left_down);

        keys.release_all();
        assert_eq!(keys.tick_input(), TickInput::default());
    }

    #[test]
    fn test_pointer_mapping() {
        // Terminal cell (1,1) is the top-left grid cell
        assert_eq!(pointer_to_playfield(1, 1), Vec2::new(5.0, 10.0));
        assert_eq!(pointer_to_playfield(41, 16), Vec2::new(405.0, 310.0));
    }
}
