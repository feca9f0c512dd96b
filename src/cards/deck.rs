//! Deck construction and shuffling.

use rustc_hash::FxHashSet;

use crate::core::card::{Card, Rank, Suit};
use crate::core::config::DECK_SIZE;
use crate::core::rng::GameRng;

/// Create the 52-card deck in canonical order (suits outer, ranks inner),
/// all face-down.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Return a uniformly shuffled copy of `deck`.
///
/// Fisher-Yates: walk from the last index down to 1, swapping each position
/// with a partner drawn uniformly from `[0, i]`. The input is not modified.
#[must_use]
pub fn shuffle_deck(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.index_up_to(i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Create a shuffled deck.
#[must_use]
pub fn create_shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    shuffle_deck(&create_deck(), rng)
}

/// Check that a deck has exactly 52 cards with distinct ids.
#[must_use]
pub fn is_valid_deck(deck: &[Card]) -> bool {
    if deck.len() != DECK_SIZE {
        return false;
    }

    let ids: FxHashSet<_> = deck.iter().map(Card::id).collect();
    ids.len() == DECK_SIZE
}
