//! Core domain types for the memory game.

use serde::{Deserialize, Serialize};

/// A card glyph, drawn from the game's symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique, stable identifier for a card within one game instance.
///
/// Ids are assigned in deck order (`0..2N`) before the shuffle, so they
/// survive as a stable handle no matter where the card lands on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub usize);

/// Epoch tag distinguishing one game instance from a later restart.
///
/// Every scheduled resolution carries the session it was formed under;
/// a resolution whose session no longer matches is stale and must not
/// mutate the newer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// Session id of a freshly constructed game.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the session id for the next game instance.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card on the board.
///
/// Invariant: `matched` implies `face_up` — a matched card is always
/// shown face-up and never flips back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Creates a new face-down, unmatched card.
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Returns the card's id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns true if the card is currently face-up.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns true if the card has been matched.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// A card is active if it can still be selected: neither face-up
    /// nor matched.
    pub fn is_active(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Returns the visual state derived from the card's flags.
    ///
    /// This is a pure projection, never stored, so visibility has a
    /// single source of truth.
    pub fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.face_up {
            CardFace::Revealed
        } else {
            CardFace::Hidden
        }
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn flip_down(&mut self) {
        self.face_up = false;
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
    }
}

/// Visual state of a board position, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down; the symbol is concealed.
    Hidden,
    /// Face-up awaiting resolution; the symbol is visible.
    Revealed,
    /// Permanently matched; the symbol stays visible.
    Matched,
}

impl CardFace {
    /// Returns true if the symbol should be shown at this position.
    pub fn shows_symbol(&self) -> bool {
        matches!(self, CardFace::Revealed | CardFace::Matched)
    }
}
