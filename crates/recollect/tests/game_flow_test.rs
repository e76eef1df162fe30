//! Tests for turn sequencing, counters, the clock, and restart.

use rand::rngs::StdRng;
use rand::SeedableRng;
use recollect::{
    Alphabet, Card, CardId, GameState, ResolveOutcome, SelectOutcome, Symbol,
};

/// Fixed two-pair layout: indices 0 and 2 hold A, indices 1 and 3 hold B.
fn two_pair_game() -> GameState {
    let cards = vec![
        Card::new(CardId(0), Symbol('A')),
        Card::new(CardId(1), Symbol('B')),
        Card::new(CardId(2), Symbol('A')),
        Card::new(CardId(3), Symbol('B')),
    ];
    GameState::from_deck(cards).expect("valid paired deck")
}

fn form_pair(game: &mut GameState, first: usize, second: usize) -> recollect::PendingPair {
    assert_eq!(game.select(first), SelectOutcome::Revealed);
    match game.select(second) {
        SelectOutcome::PairFormed(pair) => pair,
        other => panic!("Expected a pair, got {other:?}"),
    }
}

#[test]
fn test_full_game_to_completion() {
    let mut game = two_pair_game();

    // First turn: both A cards.
    assert_eq!(game.select(0), SelectOutcome::Revealed);
    assert_eq!(game.selection(), &[0]);

    let pair = match game.select(2) {
        SelectOutcome::PairFormed(pair) => pair,
        other => panic!("Expected a pair, got {other:?}"),
    };
    assert_eq!(game.selection(), &[0, 2]);
    assert_eq!(game.moves(), 1);

    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: false });
    assert!(game.cards()[0].is_matched());
    assert!(game.cards()[2].is_matched());
    assert!(game.selection().is_empty());
    assert!(!game.is_complete(), "B pair remains");

    // Second turn: both B cards finish the game.
    let pair = form_pair(&mut game, 1, 3);
    assert_eq!(game.moves(), 2);
    assert_eq!(game.resolve(pair), ResolveOutcome::Matched { complete: true });
    assert!(game.is_complete());
}

#[test]
fn test_move_count_does_not_increment_on_first_card() {
    let mut game = two_pair_game();

    game.select(0);
    assert_eq!(game.moves(), 0, "lone first selection is not a move");

    game.select(2);
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_selecting_flipped_card_is_a_no_op() {
    let mut game = two_pair_game();
    game.select(0);

    let before = game.clone();
    assert_eq!(game.select(0), SelectOutcome::Ignored);
    assert_eq!(game, before, "state must be unchanged");
}

#[test]
fn test_selecting_matched_card_is_a_no_op() {
    let mut game = two_pair_game();
    let pair = form_pair(&mut game, 0, 2);
    game.resolve(pair);

    let before = game.clone();
    assert_eq!(game.select(0), SelectOutcome::Ignored);
    assert_eq!(game, before);
}

#[test]
fn test_selection_blocked_while_pair_pending() {
    let mut game = two_pair_game();
    let _pair = form_pair(&mut game, 0, 2);

    let before = game.clone();
    assert_eq!(game.select(1), SelectOutcome::Ignored);
    assert_eq!(game.select(3), SelectOutcome::Ignored);
    assert_eq!(game, before, "no selection accepted until resolution");
}

#[test]
fn test_out_of_bounds_selection_is_a_no_op() {
    let mut game = two_pair_game();

    let before = game.clone();
    assert_eq!(game.select(99), SelectOutcome::Ignored);
    assert_eq!(game, before);
}

#[test]
fn test_clock_counts_only_while_unfinished() {
    let mut game = two_pair_game();

    assert!(game.tick());
    assert!(game.tick());
    assert_eq!(game.elapsed_seconds(), 2);

    // Finish the game.
    let pair = form_pair(&mut game, 0, 2);
    game.resolve(pair);
    let pair = form_pair(&mut game, 1, 3);
    game.resolve(pair);
    assert!(game.is_complete());

    // Ticks after completion are not counted.
    assert!(!game.tick());
    assert_eq!(game.elapsed_seconds(), 2);
}

#[test]
fn test_restart_resets_counters_and_deck() {
    let alphabet = Alphabet::standard();
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = GameState::new(&alphabet, &mut rng);
    let original_session = game.session();

    game.select(0);
    game.select(1);
    game.tick();
    game.tick();

    game.restart(&alphabet, &mut rng);

    assert_ne!(game.session(), original_session);
    assert!(game.selection().is_empty());
    assert_eq!(game.moves(), 0);
    assert_eq!(game.elapsed_seconds(), 0);
    assert!(!game.is_complete());
    assert_eq!(game.cards().len(), 2 * alphabet.len());
    assert!(game.cards().iter().all(Card::is_active));
}

#[test]
fn test_resolution_from_before_restart_is_stale() {
    let alphabet = Alphabet::standard();
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = GameState::new(&alphabet, &mut rng);

    game.select(0);
    let pair = match game.select(1) {
        SelectOutcome::PairFormed(pair) => pair,
        other => panic!("Expected a pair, got {other:?}"),
    };

    game.restart(&alphabet, &mut rng);
    let fresh = game.clone();

    // The delayed callback from the abandoned game must not touch the
    // new one.
    assert_eq!(game.resolve(pair), ResolveOutcome::Stale);
    assert_eq!(game, fresh);
}
