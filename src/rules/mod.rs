//! Klondike move rules.
//!
//! - `moves`: where a card or run may be placed, run extraction
//! - `safety`: foundation targeting, auto-move safety, win detection
//!
//! Everything here is a pure predicate; `crate::engine` calls these before
//! it touches any pile.

pub mod moves;
pub mod safety;

pub use moves::{can_move_to_foundation, can_move_to_tableau, is_valid_sequence, movable_cards};
pub use safety::{can_auto_move_to_foundation, check_win, find_valid_foundation};
