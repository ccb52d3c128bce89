//! Duel Pong entry point
//!
//! Sets up logging and settings, then runs the terminal frontend.

#[cfg(unix)]
mod term {
    use std::io::{self, Write, stdin, stdout};
    use std::sync::mpsc::{Receiver, TryRecvError, channel};
    use std::thread::{sleep, spawn};
    use std::time::{Duration, Instant};

    use glam::Vec2;
    use termion::clear;
    use termion::cursor::{self, HideCursor};
    use termion::event::{Event, Key, MouseButton, MouseEvent};
    use termion::input::{MouseTerminal, TermRead};
    use termion::raw::IntoRawMode;

    use duel_pong::Settings;
    use duel_pong::audio::AudioManager;
    use duel_pong::consts::*;
    use duel_pong::platform::{HeldKeys, InputEvent, control_for, pointer_to_playfield};
    use duel_pong::renderer::{Canvas, draw_game, draw_menu, draw_winner};
    use duel_pong::sim::{GamePhase, GameState, tick};
    use duel_pong::ui::{Menu, MenuCommand};

    /// Translate a terminal event; anything unmapped is dropped
    pub(crate) fn map_event(event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(Key::Char(c)) => Some(InputEvent::Char(c)),
            Event::Key(Key::Up) => Some(InputEvent::Up),
            Event::Key(Key::Down) => Some(InputEvent::Down),
            Event::Key(Key::Esc) => Some(InputEvent::Esc),
            Event::Key(Key::Ctrl('c')) => Some(InputEvent::Interrupt),
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                Some(InputEvent::Click { col, row })
            }
            _ => None,
        }
    }

    /// Read stdin on its own thread so the frame loop never blocks
    fn spawn_input_reader() -> Receiver<InputEvent> {
        let (tx, rx) = channel();
        spawn(move || {
            for event in stdin().events() {
                let Some(input) = event.ok().and_then(map_event) else {
                    continue;
                };
                if tx.send(input).is_err() {
                    break;
                }
            }
        });
        rx
    }

    /// Whether the frontend keeps running after an input
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Flow {
        Continue,
        Quit,
    }

    /// Frontend instance holding all state
    struct Game {
        state: GameState,
        menu: Menu,
        keys: HeldKeys,
        audio: AudioManager,
        canvas: Canvas,
        settings: Settings,
        accumulator: f32,
        pointer: Option<Vec2>,
        // FPS tracking
        frames: u32,
        fps_window: f32,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                menu: Menu::new(),
                keys: HeldKeys::new(settings.key_hold_secs()),
                audio: AudioManager::new(settings.sound),
                canvas: Canvas::new(),
                settings,
                accumulator: 0.0,
                pointer: None,
                frames: 0,
                fps_window: 0.0,
                fps: 0,
            }
        }

        fn handle_input(&mut self, input: InputEvent) -> Flow {
            if input == InputEvent::Interrupt {
                return Flow::Quit;
            }

            match self.state.phase {
                GamePhase::SelectingMode | GamePhase::SelectingDifficulty => {
                    let command = match input {
                        InputEvent::Char(c) => self.menu.shortcut(c, &mut self.state),
                        InputEvent::Esc => self.menu.back(),
                        InputEvent::Click { col, row } => {
                            let point = pointer_to_playfield(col, row);
                            self.pointer = Some(point);
                            self.menu.click(point, &mut self.state)
                        }
                        _ => MenuCommand::Stay,
                    };
                    match command {
                        MenuCommand::Quit => return Flow::Quit,
                        MenuCommand::Started => self.begin_play(),
                        MenuCommand::Stay => {}
                    }
                }
                GamePhase::Playing => match input {
                    InputEvent::Esc | InputEvent::Char('q') | InputEvent::Char('Q') => {
                        return Flow::Quit;
                    }
                    other => {
                        if let Some(control) = control_for(&other) {
                            self.keys.press(control);
                        }
                    }
                },
                GamePhase::GameOver => match input {
                    InputEvent::Char('r') | InputEvent::Char('R') => {
                        self.state.restart();
                        self.begin_play();
                    }
                    InputEvent::Esc | InputEvent::Char('q') | InputEvent::Char('Q') => {
                        return Flow::Quit;
                    }
                    _ => {}
                },
            }
            Flow::Continue
        }

        fn begin_play(&mut self) {
            self.keys.release_all();
            self.accumulator = 0.0;
            self.pointer = None;
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);

            self.frames += 1;
            self.fps_window += dt;
            if self.fps_window >= 1.0 {
                self.fps = (self.frames as f32 / self.fps_window).round() as u32;
                self.frames = 0;
                self.fps_window = 0.0;
            }

            if self.state.phase != GamePhase::Playing {
                return;
            }

            self.accumulator += dt;
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.keys.tick_input();
                tick(&mut self.state, &input, SIM_DT);
                self.keys.advance(SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            // Drop backlog the substep cap could not absorb
            if substeps == MAX_SUBSTEPS {
                self.accumulator = self.accumulator.min(SIM_DT);
            }
        }

        /// Render the current frame
        fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
            let events = self.state.drain_events();
            self.audio.play_events(out, &events)?;

            match self.state.phase {
                GamePhase::SelectingMode | GamePhase::SelectingDifficulty => {
                    draw_menu(&mut self.canvas, &self.menu, self.pointer)
                }
                GamePhase::Playing => {
                    let fps = self.settings.show_fps.then_some(self.fps);
                    draw_game(&mut self.canvas, &self.state, fps)
                }
                GamePhase::GameOver => draw_winner(&mut self.canvas, &self.state),
            }

            for (row, line) in self.canvas.lines().iter().enumerate() {
                write!(out, "{}{}", cursor::Goto(1, row as u16 + 1), line)?;
            }
            out.flush()
        }
    }

    pub fn run(settings: Settings) -> io::Result<()> {
        let frame = Duration::from_secs_f32(settings.frame_secs());
        let seed: u64 = rand::random();
        log::info!("Session seed: {}", seed);

        let mut out = HideCursor::from(MouseTerminal::from(stdout().into_raw_mode()?));
        write!(out, "{}", clear::All)?;

        let inputs = spawn_input_reader();
        let mut game = Game::new(seed, settings);
        let mut last = Instant::now();

        loop {
            let frame_start = Instant::now();
            loop {
                match inputs.try_recv() {
                    Ok(input) => {
                        if game.handle_input(input) == Flow::Quit {
                            write!(out, "{}{}", clear::All, cursor::Goto(1, 1))?;
                            return out.flush();
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        log::warn!("Input closed, exiting");
                        return out.flush();
                    }
                }
            }

            let now = Instant::now();
            game.update(now.duration_since(last).as_secs_f32());
            last = now;
            game.render(&mut out)?;

            if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
                sleep(rest);
            }
        }
    }

}

#[cfg(unix)]
fn main() {
    env_logger::init();
    log::info!("Duel Pong starting...");

    let settings = duel_pong::Settings::load();
    if let Err(e) = term::run(settings) {
        eprintln!("duel-pong: terminal error: {}", e);
        std::process::exit(1);
    }
    log::info!("Duel Pong exiting");
}

#[cfg(not(unix))]
fn main() {
    env_logger::init();
    log::error!("Duel Pong needs a Unix terminal");
    eprintln!("duel-pong: only Unix terminals are supported");
    std::process::exit(1);
}
