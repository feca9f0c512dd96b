//! Core engine types: cards, settings, clock, RNG, history entries, state.
//!
//! This module holds plain data and lookups. State transitions live in
//! `crate::engine`.

pub mod card;
pub mod rng;
pub mod config;
pub mod clock;
pub mod action;
pub mod state;

pub use card::{Card, CardId, Color, Rank, Suit};
pub use rng::{DealSeed, GameRng};
pub use config::{
    CardBack, DrawCount, Settings, SettingsPatch, DECK_SIZE, FOUNDATION_COUNT, SESSION_KEY,
    SETTINGS_KEY, STOCK_SIZE_AFTER_DEAL, SUIT_SIZE, TABLEAU_COUNT,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use action::{MoveKind, MoveRecord};
pub use state::{GameState, Selection};
