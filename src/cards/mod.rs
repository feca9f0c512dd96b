//! Deck construction, shuffling, and validation.
//!
//! The card type itself lives in `core::card`; this module builds decks of
//! them. Shuffling takes an explicit `GameRng` so callers control whether a
//! deal is fresh or replayed.

pub mod deck;

pub use deck::{create_deck, create_shuffled_deck, is_valid_deck, shuffle_deck};
