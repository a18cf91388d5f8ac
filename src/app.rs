//! Interactive driver: input, fixed-timestep simulation and rendering.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};
use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::core::{FixedTimestep, GameSnapshot, GameState};
use crate::input::{handle_key_event, is_fresh_press, should_quit};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{GameAction, GameEvent};

/// What the driver should do after handling an input event.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    game: GameState,
    clock: FixedTimestep,
    frame: Duration,
    view: GameView,
    snap: GameSnapshot,
}

impl App {
    pub fn new(config: &DriverConfig) -> Self {
        let game = match config.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_os_rng(),
        };
        info!(seed = game.seed(), tick = ?config.tick, "soundtrack started");
        Self {
            snap: game.snapshot(),
            game,
            clock: FixedTimestep::new(config.tick),
            frame: config.frame,
            view: GameView::default(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Apply one key event. Repeats and releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if !is_fresh_press(&key) {
            return Control::Continue;
        }
        if should_quit(key) {
            info!(score = self.game.score(), lines = self.game.lines(), "quit");
            return Control::Quit;
        }
        if let Some(action) = handle_key_event(key) {
            let changed = self.game.apply_action(action);
            debug!(?action, changed, "action");
            if action == GameAction::Reset {
                self.clock.reset();
            }
            self.drain_events();
        }
        Control::Continue
    }

    /// Feed elapsed wall-clock time and run the ticks that became due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            self.game.tick();
        }
        self.drain_events();
        due
    }

    /// Render the current state into `fb`.
    pub fn render(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.game.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, viewport, fb);
    }

    fn drain_events(&mut self) {
        for event in self.game.take_events() {
            match event {
                GameEvent::Reset => info!("soundtrack started"),
                GameEvent::GameOver { score, lines } => {
                    info!(score, lines, "soundtrack stopped")
                }
                GameEvent::PieceLocked { .. } | GameEvent::RowsCleared { .. } => {}
            }
        }
    }

    /// Run until the player quits or terminal I/O fails.
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let mut fb = FrameBuffer::new(0, 0);
        let mut last = Instant::now();

        loop {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            self.render(Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;

            // Wait for input until the next frame is due.
            let deadline = Instant::now() + self.frame;
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) == Control::Quit {
                            return Ok(());
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            let now = Instant::now();
            self.advance(now - last);
            last = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn app() -> App {
        App::new(&DriverConfig {
            seed: Some(3),
            ..DriverConfig::default()
        })
    }

    #[test]
    fn ticks_follow_the_clock() {
        let mut app = app();
        let y0 = app.game().active().y;
        assert_eq!(app.advance(Duration::from_millis(499)), 0);
        assert_eq!(app.game().active().y, y0);
        assert_eq!(app.advance(Duration::from_millis(1)), 1);
        assert_eq!(app.game().active().y, y0 + 1);
    }

    #[test]
    fn key_presses_drive_the_game() {
        let mut app = app();
        let x0 = app.game().active().x;
        assert_eq!(app.handle_key(KeyEvent::from(KeyCode::Left)), Control::Continue);
        assert_eq!(app.game().active().x, x0 - 1);

        let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(app.handle_key(repeat), Control::Continue);
        assert_eq!(app.game().active().x, x0 - 1);

        assert_eq!(app.handle_key(KeyEvent::from(KeyCode::Char('r'))), Control::Continue);
        assert_eq!(app.game().episode_id(), 1);
        assert_eq!(app.handle_key(KeyEvent::from(KeyCode::Esc)), Control::Quit);
    }
}
