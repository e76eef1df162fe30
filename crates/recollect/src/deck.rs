//! Deck generation: a paired, uniformly shuffled card set.

use crate::types::{Card, CardId, Symbol};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The 18 glyphs of the standard alphabet, for a 36-card 6×6 board.
pub const DEFAULT_SYMBOLS: [char; 18] = [
    '🐶', '🐱', '🐭', '🐹', '🐰', '🦊', '🐻', '🐼', '🐨', '🐯', '🦁', '🐮', '🐷', '🐸', '🐵',
    '🐧', '🐢', '🐙',
];

/// Errors from alphabet or deck construction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// The alphabet has no symbols.
    #[display("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// The same symbol appears twice in the alphabet.
    #[display("Symbol {} appears more than once in the alphabet", _0)]
    DuplicateSymbol(Symbol),

    /// A deck handed to the game does not pair every symbol exactly twice.
    #[display("Deck is not a valid pairing: symbol {} appears {} times", _0, _1)]
    UnpairedSymbol(Symbol, usize),
}

impl std::error::Error for DeckError {}

/// A validated list of distinct symbols.
///
/// The deck pairs each symbol exactly twice, so an alphabet of N
/// symbols produces a 2N-card board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet(Vec<Symbol>);

impl Alphabet {
    /// Creates an alphabet from a list of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAlphabet`] for an empty list and
    /// [`DeckError::DuplicateSymbol`] if any symbol repeats.
    #[instrument]
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, DeckError> {
        if symbols.is_empty() {
            return Err(DeckError::EmptyAlphabet);
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(DeckError::DuplicateSymbol(*symbol));
            }
        }
        Ok(Self(symbols))
    }

    /// The standard 18-symbol animal alphabet.
    pub fn standard() -> Self {
        Self(DEFAULT_SYMBOLS.iter().copied().map(Symbol).collect())
    }

    /// Returns the symbols in alphabet order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of symbols (half the deck size).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Generates a shuffled deck pairing every alphabet symbol exactly twice.
///
/// Card ids are assigned in `0..2N` before the shuffle, so they are
/// stable handles independent of board position. All cards start
/// face-down and unmatched. The shuffle is a uniform Fisher–Yates via
/// [`SliceRandom::shuffle`].
#[instrument(skip(rng), fields(symbols = alphabet.len()))]
pub fn generate_deck<R: Rng + ?Sized>(alphabet: &Alphabet, rng: &mut R) -> Vec<Card> {
    let mut cards: Vec<Card> = alphabet
        .symbols()
        .iter()
        .chain(alphabet.symbols().iter())
        .enumerate()
        .map(|(id, &symbol)| Card::new(CardId(id), symbol))
        .collect();

    cards.shuffle(rng);

    debug!(deck_len = cards.len(), "Generated shuffled deck");
    cards
}

/// Validates that a deck pairs every symbol exactly twice.
///
/// Used by [`crate::GameState::from_deck`] so a hand-built layout
/// cannot create an unwinnable game.
pub(crate) fn validate_pairing(cards: &[Card]) -> Result<(), DeckError> {
    if cards.is_empty() {
        return Err(DeckError::EmptyAlphabet);
    }
    let mut seen: Vec<(Symbol, usize)> = Vec::new();
    for card in cards {
        match seen.iter_mut().find(|(s, _)| *s == card.symbol()) {
            Some((_, count)) => *count += 1,
            None => seen.push((card.symbol(), 1)),
        }
    }
    for (symbol, count) in seen {
        if count != 2 {
            return Err(DeckError::UnpairedSymbol(symbol, count));
        }
    }
    Ok(())
}
