//! Recollect - memory-matching game logic
//!
//! A single-player concentration game: a grid of face-down cards, each
//! paired with exactly one other card sharing the same symbol. The
//! player reveals two cards per turn; matches stay face-up permanently,
//! mismatches flip back down after a short delay, and the game ends
//! when every pair is matched.
//!
//! This crate is the pure state machine. It performs no I/O and owns no
//! timers: the frontend schedules the reveal-resolution delay and the
//! once-per-second clock tick, delivering both back as messages
//! ([`PendingPair`] and [`GameState::tick`]). A session (epoch)
//! identifier guards against a delayed resolution landing on a game
//! that has since been restarted.
//!
//! # Example
//!
//! ```
//! use recollect::{Alphabet, GameState, SelectOutcome};
//!
//! let mut rng = rand::rng();
//! let mut game = GameState::new(&Alphabet::standard(), &mut rng);
//!
//! if let SelectOutcome::PairFormed(pair) = {
//!     game.select(0);
//!     game.select(1)
//! } {
//!     // After the reveal delay, deliver the pair back:
//!     let _outcome = game.resolve(pair);
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod deck;
mod game;
mod types;

pub use deck::{generate_deck, Alphabet, DeckError, DEFAULT_SYMBOLS};
pub use game::{GameState, PendingPair, ResolveOutcome, SelectOutcome};
pub use types::{Card, CardFace, CardId, SessionId, Symbol};
