//! Deck and deal integration tests.
//!
//! These tests verify deck construction, shuffling, and the initial layout
//! of a new game.

use klondike_engine::core::STOCK_SIZE_AFTER_DEAL;
use klondike_engine::{
    create_deck, create_shuffled_deck, is_valid_deck, shuffle_deck, Card, CardId, DealSeed, GameRng,
    GameState, Pile, Settings,
};
use proptest::prelude::*;

// =============================================================================
// Deck Tests
// =============================================================================

/// Test that the canonical deck holds every rank of every suit once.
#[test]
fn test_create_deck_is_complete() {
    let deck = create_deck();

    assert_eq!(deck.len(), 52);
    assert!(is_valid_deck(&deck));

    let mut raw: Vec<u8> = deck.iter().map(|c| c.id().raw()).collect();
    raw.sort_unstable();
    assert_eq!(raw, (0..52).collect::<Vec<u8>>());
}

/// Test that card ids have a stable text form a presentation layer can use.
#[test]
fn test_card_ids_are_stable_strings() {
    let deck = create_deck();
    let names: Vec<String> = deck.iter().map(|c| c.id().to_string()).collect();

    assert_eq!(names[0], "A-hearts");
    assert_eq!(names[9], "10-hearts");
    assert_eq!(names[51], "K-spades");

    for (card, name) in deck.iter().zip(&names) {
        assert_eq!(name.parse::<CardId>().unwrap(), card.id());
    }
}

/// Test that repeated entropy-seeded shuffles are not all identical.
#[test]
fn test_shuffles_differ() {
    let decks: Vec<Vec<Card>> = (0..3)
        .map(|_| create_shuffled_deck(&mut GameRng::from_entropy()))
        .collect();

    assert!(decks[0] != decks[1] || decks[1] != decks[2]);
}

/// Test that shuffling leaves its input alone.
#[test]
fn test_shuffle_does_not_mutate() {
    let deck = create_deck();
    let copy = deck.clone();

    for seed in 0..5 {
        let _ = shuffle_deck(&deck, &mut GameRng::new(seed));
    }

    assert_eq!(deck, copy);
}

// =============================================================================
// Deal Tests
// =============================================================================

/// Test the dealt layout over several seeds.
#[test]
fn test_deal_layout() {
    for seed in 0..20 {
        let state = GameState::deal(Settings::default(), &mut GameRng::new(seed));

        for (i, pile) in state.tableau.iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
            assert!(pile.top().unwrap().face_up);
            assert!(pile.cards[..i].iter().all(|c| !c.face_up));
        }
        assert_eq!(state.stock.len(), STOCK_SIZE_AFTER_DEAL);
        assert!(state.stock.cards.iter().all(|c| !c.face_up));
        assert!(state.waste.is_empty());
        assert!(state.foundations.iter().all(Pile::is_empty));
        assert_eq!(state.count_total_cards(), 52);
        assert!(state.is_consistent());
    }
}

/// Test that fresh games record different seeds.
#[test]
fn test_new_game_seeds_are_not_pinned() {
    let seeds: Vec<DealSeed> = (0..3).map(|_| GameState::new(Settings::default()).seed).collect();
    assert!(seeds[0] != seeds[1] || seeds[1] != seeds[2]);
}

/// Test that a fresh game's recorded 256-bit seed replays its exact deal.
#[test]
fn test_fresh_seed_replays_deal() {
    for _ in 0..5 {
        let fresh = GameState::new(Settings::default());
        let replay = GameState::deal(Settings::default(), &mut GameRng::from_seed(fresh.seed));
        assert_eq!(replay, fresh);
    }
}

/// Test that the deal follows deck order: tableau first, then stock.
#[test]
fn test_deal_uses_shuffled_order() {
    let deck = create_shuffled_deck(&mut GameRng::new(77));
    let state = GameState::deal(Settings::default(), &mut GameRng::new(77));

    let mut dealt: Vec<CardId> = state
        .tableau
        .iter()
        .flat_map(|p| p.cards.iter().map(Card::id))
        .collect();
    dealt.extend(state.stock.cards.iter().map(Card::id));

    let expected: Vec<CardId> = deck.iter().map(Card::id).collect();
    assert_eq!(dealt, expected);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Shuffling any seed yields a permutation of the deck.
    #[test]
    fn prop_shuffle_preserves_cards(seed in any::<u64>()) {
        let deck = create_deck();
        let mut shuffled = shuffle_deck(&deck, &mut GameRng::new(seed));

        prop_assert!(is_valid_deck(&shuffled));
        shuffled.sort_by_key(Card::id);
        prop_assert_eq!(shuffled, deck);
    }

    /// Every seed deals a consistent table.
    #[test]
    fn prop_deal_is_consistent(seed in any::<u64>()) {
        let state = GameState::deal(Settings::default(), &mut GameRng::new(seed));
        prop_assert!(state.is_consistent());
        prop_assert_eq!(state.seed, GameRng::new(seed).seed());
    }
}
