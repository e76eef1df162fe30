//! Tests for match resolution, completion, and stale-callback guards.

use recollect::{Card, CardFace, CardId, GameState, PendingPair, ResolveOutcome, SelectOutcome, Symbol};

fn paired_deck(symbols: &[char]) -> Vec<Card> {
    symbols
        .iter()
        .chain(symbols.iter())
        .enumerate()
        .map(|(id, &s)| Card::new(CardId(id), Symbol(s)))
        .collect()
}

/// Layout [A, B, A, B]: indices 0 and 2 hold A, indices 1 and 3 hold B.
fn two_pair_game() -> GameState {
    let cards = vec![
        Card::new(CardId(0), Symbol('A')),
        Card::new(CardId(1), Symbol('B')),
        Card::new(CardId(2), Symbol('A')),
        Card::new(CardId(3), Symbol('B')),
    ];
    GameState::from_deck(cards).expect("valid paired deck")
}

fn form_pair(game: &mut GameState, first: usize, second: usize) -> PendingPair {
    assert_eq!(game.select(first), SelectOutcome::Revealed);
    match game.select(second) {
        SelectOutcome::PairFormed(pair) => pair,
        other => panic!("Expected a pair, got {other:?}"),
    }
}

#[test]
fn test_matching_pair_stays_face_up() {
    let mut game = two_pair_game();
    let pair = form_pair(&mut game, 0, 2);

    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: false });

    assert!(game.cards()[0].is_matched());
    assert!(game.cards()[2].is_matched());
    assert!(game.cards()[0].is_face_up(), "matched cards remain visible");
    assert!(game.cards()[2].is_face_up());
    assert!(game.selection().is_empty());
}

#[test]
fn test_mismatched_pair_flips_back_down() {
    let mut game = two_pair_game();
    let pair = form_pair(&mut game, 0, 1); // A vs B

    assert_eq!(game.resolve(pair), ResolveOutcome::Mismatched);

    assert!(!game.cards()[0].is_face_up());
    assert!(!game.cards()[1].is_face_up());
    assert!(!game.cards()[0].is_matched());
    assert!(!game.cards()[1].is_matched());
    assert!(game.selection().is_empty());
    assert!(!game.is_complete());
    assert_eq!(game.moves(), 1, "a mismatch still counts as one move");
}

#[test]
fn test_selection_reopens_after_resolution() {
    let mut game = two_pair_game();
    let pair = form_pair(&mut game, 0, 1);
    game.resolve(pair);

    // The two-card guard must be released.
    assert_eq!(game.select(0), SelectOutcome::Revealed);
}

#[test]
fn test_completion_only_on_final_match() {
    let mut game = two_pair_game();

    let pair = form_pair(&mut game, 0, 2);
    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: false });
    assert!(!game.is_complete());

    let pair = form_pair(&mut game, 1, 3);
    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: true });
    assert!(game.is_complete());
}

#[test]
fn test_mismatch_on_mostly_matched_board_never_completes() {
    // Layout [A, B, C, A, B, C]. Match the A pair, then mismatch B
    // against C: the completion check runs on that resolution too, but
    // must stay false while unmatched cards remain.
    let mut game = GameState::from_deck(paired_deck(&['A', 'B', 'C'])).expect("valid deck");

    let pair = form_pair(&mut game, 0, 3);
    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: false });

    let pair = form_pair(&mut game, 1, 2); // B vs C
    assert_eq!(game.resolve(pair), ResolveOutcome::Mismatched);
    assert!(!game.is_complete());
}

#[test]
fn test_duplicate_delivery_is_stale() {
    let mut game = two_pair_game();
    let pair = form_pair(&mut game, 0, 2);

    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: false });

    // Delivering the same pair again must not mutate anything.
    let before = game.clone();
    assert_eq!(game.resolve(pair), ResolveOutcome::Stale);
    assert_eq!(game, before);
}

#[test]
fn test_faces_projection_tracks_card_state() {
    let mut game = two_pair_game();

    assert!(game.faces().all(|f| f == CardFace::Hidden));

    game.select(0);
    let faces: Vec<CardFace> = game.faces().collect();
    assert_eq!(faces[0], CardFace::Revealed);
    assert_eq!(faces[1], CardFace::Hidden);

    // Complete the A pair and check the matched projection.
    let pair = match game.select(2) {
        SelectOutcome::PairFormed(pair) => pair,
        other => panic!("Expected a pair, got {other:?}"),
    };
    game.resolve(pair);

    let faces: Vec<CardFace> = game.faces().collect();
    assert_eq!(faces[0], CardFace::Matched);
    assert_eq!(faces[2], CardFace::Matched);
    assert_eq!(faces[1], CardFace::Hidden);
    assert!(faces[0].shows_symbol());
    assert!(!faces[1].shows_symbol());
}
