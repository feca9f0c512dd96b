//! Foundation targeting, the safe auto-move heuristic, and win detection.
//!
//! `can_auto_move_to_foundation` is a pure query. The auto-move operation in
//! `crate::engine` does not consult it; callers that play automatically
//! (see `Session::auto_complete`) decide with it whether to invoke the move.

use crate::core::card::{Card, Rank};
use crate::core::config::SUIT_SIZE;
use crate::zones::Pile;

use super::moves::can_move_to_foundation;

/// First foundation (by index) that accepts `card`.
#[must_use]
pub fn find_valid_foundation<'a>(card: &Card, foundations: &'a [Pile]) -> Option<&'a Pile> {
    foundations.iter().find(|pile| can_move_to_foundation(card, pile))
}

/// Check if moving `card` to a foundation cannot hurt later tableau play.
///
/// Aces and twos are always safe. A higher card is safe only when both
/// foundations of the opposite color exist (are started) and each has a top
/// card of at least `rank - 1`; otherwise some opposite-color card might
/// still need it as a tableau parent.
#[must_use]
pub fn can_auto_move_to_foundation(card: &Card, foundations: &[Pile]) -> bool {
    if find_valid_foundation(card, foundations).is_none() {
        return false;
    }

    if matches!(card.rank, Rank::Ace | Rank::Two) {
        return true;
    }

    let opposite = card.color().opposite();
    let opposite_tops: Vec<&Card> = foundations
        .iter()
        .filter_map(Pile::top)
        .filter(|top| top.color() == opposite)
        .collect();

    // Two suits per color; an unstarted one blocks
    opposite_tops.len() >= 2
        && opposite_tops
            .iter()
            .all(|top| top.rank.value() + 1 >= card.rank.value())
}

/// Check if every foundation holds a complete suit.
#[must_use]
pub fn check_win(foundations: &[Pile]) -> bool {
    foundations.iter().all(|pile| pile.len() == SUIT_SIZE)
}
