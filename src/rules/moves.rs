//! Placement rules for tableau and foundation piles.
//!
//! All functions here are pure predicates over cards and piles. They never
//! consult game history or settings.

use crate::core::card::{Card, CardId, Rank};
use crate::zones::Pile;

/// Check if a run of cards may be placed on a tableau pile.
///
/// `cards[0]` is the card that lands directly on the pile.
/// - Empty pile: only a King.
/// - Otherwise the pile's top must be face-up, and the landing card must be
///   the opposite color and exactly one rank lower.
#[must_use]
pub fn can_move_to_tableau(cards: &[Card], target: &Pile) -> bool {
    let Some(moving) = cards.first() else {
        return false;
    };

    match target.top() {
        None => moving.rank == Rank::King,
        Some(top) if !top.face_up => false,
        Some(top) => moving.is_opposite_color(top) && moving.is_one_rank_lower(top),
    }
}

/// Check if a single card may be placed on a foundation pile.
///
/// - Empty pile: only an Ace.
/// - Otherwise same suit and exactly one rank higher than the top.
#[must_use]
pub fn can_move_to_foundation(card: &Card, target: &Pile) -> bool {
    match target.top() {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.is_one_rank_higher(top),
    }
}

/// The run from `from` through the top of `pile`.
///
/// Empty if the card is not in the pile or is face-down.
#[must_use]
pub fn movable_cards(pile: &Pile, from: CardId) -> &[Card] {
    match pile.position(from) {
        Some(index) if pile.cards[index].face_up => &pile.cards[index..],
        _ => &[],
    }
}

/// Check that cards form a descending, alternating-color run.
///
/// Zero or one card is always a valid run.
#[must_use]
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[0].is_opposite_color(&pair[1]) && pair[0].is_one_rank_higher(&pair[1]))
}
