//! Audio cues using the terminal bell
//!
//! No sound assets: each effect is a short run of BEL characters written to
//! the terminal, which the terminal turns into a beep or a visual flash.

use std::io::{self, Write};

use crate::sim::GameEvent;

const BEL: &[u8] = b"\x07";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Point scored
    Score,
    /// Session over
    GameOver,
}

impl SoundEffect {
    /// Effect that accompanies a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::PointScored { .. } => SoundEffect::Score,
            GameEvent::SessionEnded { .. } => SoundEffect::GameOver,
        }
    }

    /// Number of bells rung. Wall hits are too frequent to ring.
    fn bells(self) -> usize {
        match self {
            SoundEffect::PaddleHit | SoundEffect::Score => 1,
            SoundEffect::WallHit => 0,
            SoundEffect::GameOver => 2,
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone, Default)]
pub struct AudioManager {
    muted: bool,
}

impl AudioManager {
    pub fn new(enabled: bool) -> Self {
        Self { muted: !enabled }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play a sound effect; the caller flushes `out`
    pub fn play<W: Write>(&self, out: &mut W, effect: SoundEffect) -> io::Result<()> {
        if self.muted {
            return Ok(());
        }
        for _ in 0..effect.bells() {
            out.write_all(BEL)?;
        }
        Ok(())
    }

    /// Play the effect for every event in `events`
    pub fn play_events<W: Write>(&self, out: &mut W, events: &[GameEvent]) -> io::Result<()> {
        for event in events {
            self.play(out, SoundEffect::for_event(event))?;
        }
        Ok(())
    }
}
