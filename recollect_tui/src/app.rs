//! Application state and logic.

use crate::clock::Clock;
use crossterm::event::KeyCode;
use recollect::{Alphabet, GameState, PendingPair, ResolveOutcome, SelectOutcome};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// How long a mismatched pair stays face-up before flipping back.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Period of the game clock.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Messages delivered to the app by background tasks.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// One clock interval elapsed.
    Tick,
    /// The reveal delay for this pair elapsed; resolve it.
    Resolve(PendingPair),
}

/// Main application state: the single authoritative owner of the game.
///
/// All mutation happens here, on events (key presses, clock ticks,
/// delayed resolutions) delivered to the UI loop. Background tasks
/// never touch the game directly; they send [`AppEvent`]s back over
/// the channel, and stale resolutions are rejected by the game's
/// session guard.
pub struct App {
    game: GameState,
    alphabet: Alphabet,
    cursor: usize,
    status_message: String,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    clock: Clock,
}

impl App {
    /// Creates a new application with a freshly shuffled board and a
    /// running clock.
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let alphabet = Alphabet::standard();
        let game = GameState::new(&alphabet, &mut rand::rng());
        let mut clock = Clock::new(TICK_INTERVAL, event_tx.clone());
        clock.start();

        Self {
            game,
            alphabet,
            cursor: 0,
            status_message: "Find all the pairs! Arrows move, Enter flips.".to_string(),
            event_tx,
            clock,
        }
    }

    /// The current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board index the cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of board columns (square-ish grid, 6 for the standard
    /// 36-card deck).
    pub fn columns(&self) -> usize {
        (self.game.cards().len() as f64).sqrt().ceil() as usize
    }

    /// The current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press. Quit is handled by the caller.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-(self.columns() as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(self.columns() as isize),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_under_cursor(),
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Handles an event from a background task.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                self.game.tick();
            }
            AppEvent::Resolve(pair) => match self.game.resolve(pair) {
                ResolveOutcome::Matched { complete: true } => {
                    info!(
                        seconds = self.game.elapsed_seconds(),
                        moves = self.game.moves(),
                        "Game complete"
                    );
                    self.clock.stop();
                    self.status_message = format!(
                        "You finished in {} seconds with {} moves! Press 'r' to play again.",
                        self.game.elapsed_seconds(),
                        self.game.moves()
                    );
                }
                ResolveOutcome::Matched { complete: false } => {
                    self.status_message = "A match! Keep going.".to_string();
                }
                ResolveOutcome::Mismatched => {
                    self.status_message = "Not a pair.".to_string();
                }
                ResolveOutcome::Stale => {
                    debug!("Dropped stale resolution");
                }
            },
        }
    }

    /// Restarts with a fresh deck and resets the clock.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart(&self.alphabet, &mut rand::rng());
        self.cursor = 0;
        self.status_message = "Find all the pairs! Arrows move, Enter flips.".to_string();
        self.clock.start();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.game.cards().len() as isize;
        let next = self.cursor as isize + delta;
        if (0..len).contains(&next) {
            self.cursor = next as usize;
        }
    }

    fn select_under_cursor(&mut self) {
        match self.game.select(self.cursor) {
            SelectOutcome::PairFormed(pair) => {
                // Let the reveal linger, then deliver the pair back to
                // the resolver through the event channel.
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(REVEAL_DELAY).await;
                    let _ = tx.send(AppEvent::Resolve(pair));
                });
            }
            SelectOutcome::Revealed => {
                self.status_message = "Pick its twin.".to_string();
            }
            SelectOutcome::Ignored => {}
        }
    }
}
