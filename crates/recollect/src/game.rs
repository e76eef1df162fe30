//! The memory-game state machine.
//!
//! All mutation goes through four operations: [`GameState::select`],
//! [`GameState::resolve`], [`GameState::tick`], and
//! [`GameState::restart`]. The frontend owns the two delays (reveal
//! resolution, clock tick) and delivers them back as messages; the
//! state machine itself is synchronous and single-threaded.

use crate::deck::{generate_deck, validate_pairing, Alphabet, DeckError};
use crate::types::{Card, CardFace, SessionId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A two-card selection captured at the moment it was formed.
///
/// The pair is a message, not a closure over live state: it records the
/// board indices and the session they belong to, and the resolver
/// validates both before mutating. A pair scheduled before a restart
/// resolves as [`ResolveOutcome::Stale`] against the newer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPair {
    session: SessionId,
    first: usize,
    second: usize,
}

impl PendingPair {
    /// Session the pair was formed under.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Board index of the first card selected.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Board index of the second card selected.
    pub fn second(&self) -> usize {
        self.second
    }
}

/// Result of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was absorbed as a no-op: a pair is already
    /// pending, the card is face-up or matched, or the index is out
    /// of bounds. The state is unchanged.
    Ignored,
    /// The first card of a pair flipped face-up.
    Revealed,
    /// The second card flipped face-up, completing a pair. The caller
    /// must schedule exactly one [`GameState::resolve`] of this pair
    /// after the reveal delay.
    PairFormed(PendingPair),
}

/// Result of delivering a pending pair to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The pair belongs to an earlier session or no longer corresponds
    /// to the live selection (restart or duplicate delivery). The
    /// state is unchanged.
    Stale,
    /// Both cards carried the same symbol and are now permanently
    /// matched. `complete` reports whether this was the final pair.
    Matched {
        /// True if every card on the board is now matched.
        complete: bool,
    },
    /// The symbols differed; both cards flipped back face-down.
    Mismatched,
}

/// Complete state of one game instance.
///
/// Invariants:
/// - the selection holds at most two indices, and while it holds two
///   no further selection is accepted until resolution clears it;
/// - `complete` is true iff every card is matched;
/// - `moves` increments exactly once per completed pair-selection,
///   on the second card and never the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    session: SessionId,
    cards: Vec<Card>,
    selection: Vec<usize>,
    moves: u32,
    elapsed_seconds: u32,
    complete: bool,
}

impl GameState {
    /// Starts a new game with a freshly shuffled deck.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(alphabet: &Alphabet, rng: &mut R) -> Self {
        info!(symbols = alphabet.len(), "Starting new game");
        Self::from_parts(SessionId::initial(), generate_deck(alphabet, rng))
    }

    /// Starts a new game over a pre-built deck.
    ///
    /// Intended for frontends and tests that need a fixed layout.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnpairedSymbol`] if any symbol does not
    /// appear exactly twice, or [`DeckError::EmptyAlphabet`] for an
    /// empty deck.
    #[instrument(skip(cards))]
    pub fn from_deck(cards: Vec<Card>) -> Result<Self, DeckError> {
        validate_pairing(&cards)?;
        Ok(Self::from_parts(SessionId::initial(), cards))
    }

    fn from_parts(session: SessionId, cards: Vec<Card>) -> Self {
        Self {
            session,
            cards,
            selection: Vec::new(),
            moves: 0,
            elapsed_seconds: 0,
            complete: false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Turn controller
    // ─────────────────────────────────────────────────────────────

    /// Attempts to flip the card at `index` face-up.
    ///
    /// No-op cases (state unchanged, [`SelectOutcome::Ignored`]):
    /// a pair is already pending resolution, the card is already
    /// face-up, the card is matched, or the index is out of bounds.
    /// Rapid selections while a pair is pending are blocked by the
    /// two-card guard rather than debounced.
    #[instrument(skip(self), fields(session = %self.session))]
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.selection.len() == 2 {
            debug!(index, "Selection ignored: pair awaiting resolution");
            return SelectOutcome::Ignored;
        }
        let card = match self.cards.get(index) {
            Some(card) => card,
            None => {
                warn!(index, deck_len = self.cards.len(), "Selection ignored: out of bounds");
                return SelectOutcome::Ignored;
            }
        };
        if !card.is_active() {
            debug!(index, face = ?card.face(), "Selection ignored: card not active");
            return SelectOutcome::Ignored;
        }

        self.cards[index].flip_up();
        self.selection.push(index);

        if self.selection.len() == 2 {
            // Second card of the pair: this is the completed move.
            self.moves += 1;
            let pair = PendingPair {
                session: self.session,
                first: self.selection[0],
                second: self.selection[1],
            };
            info!(
                first = pair.first,
                second = pair.second,
                moves = self.moves,
                "Pair formed, awaiting resolution"
            );
            SelectOutcome::PairFormed(pair)
        } else {
            debug!(index, "First card revealed");
            SelectOutcome::Revealed
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Match resolver
    // ─────────────────────────────────────────────────────────────

    /// Resolves a previously formed pair: commits a match or reverts
    /// a mismatch, then clears the selection.
    ///
    /// The pair must still be live: its session must match the current
    /// session and its indices must be exactly the current selection.
    /// Anything else (an intervening restart, a duplicated delivery)
    /// returns [`ResolveOutcome::Stale`] without mutating.
    ///
    /// Completion is re-evaluated across the full deck on every
    /// resolution, so the final matching resolution always flips
    /// `complete` and a mismatch never can.
    #[instrument(skip(self), fields(session = %self.session))]
    pub fn resolve(&mut self, pair: PendingPair) -> ResolveOutcome {
        if pair.session != self.session || self.selection != [pair.first, pair.second] {
            warn!(
                pair_session = %pair.session,
                first = pair.first,
                second = pair.second,
                "Ignoring stale resolution"
            );
            return ResolveOutcome::Stale;
        }

        let matched = self.cards[pair.first].symbol() == self.cards[pair.second].symbol();
        if matched {
            // Matched cards stay face-up permanently.
            self.cards[pair.first].set_matched();
            self.cards[pair.second].set_matched();
        } else {
            self.cards[pair.first].flip_down();
            self.cards[pair.second].flip_down();
        }
        self.selection.clear();

        // Unconditional on every resolution, across the full deck.
        self.complete = self.cards.iter().all(Card::is_matched);

        if matched {
            info!(
                first = pair.first,
                second = pair.second,
                complete = self.complete,
                "Pair matched"
            );
            ResolveOutcome::Matched {
                complete: self.complete,
            }
        } else {
            debug!(first = pair.first, second = pair.second, "Pair mismatched");
            ResolveOutcome::Mismatched
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Clock
    // ─────────────────────────────────────────────────────────────

    /// Advances the timer by one second while the game is unfinished.
    ///
    /// Returns true if the tick was counted. Once the game completes,
    /// ticks are ignored and the timer freezes at its final value.
    pub fn tick(&mut self) -> bool {
        if self.complete {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    // ─────────────────────────────────────────────────────────────
    //  Restart
    // ─────────────────────────────────────────────────────────────

    /// Abandons the current game and starts a fresh one: new shuffled
    /// deck, counters zeroed, selection cleared.
    ///
    /// The session id is bumped, so any resolution still in flight
    /// from the old game resolves as [`ResolveOutcome::Stale`].
    #[instrument(skip(self, rng), fields(session = %self.session))]
    pub fn restart<R: Rng + ?Sized>(&mut self, alphabet: &Alphabet, rng: &mut R) {
        let session = self.session.next();
        info!(new_session = %session, "Restarting game");
        *self = Self::from_parts(session, generate_deck(alphabet, rng));
    }

    // ─────────────────────────────────────────────────────────────
    //  Read-only projections
    // ─────────────────────────────────────────────────────────────

    /// Current session (epoch) identifier.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The cards in board order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Board indices of the currently flipped, unresolved cards.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Completed pair-selections so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seconds elapsed while the game was unfinished.
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// True once every card is matched.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Visual state of each board position, in board order.
    pub fn faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        self.cards.iter().map(Card::face)
    }
}
