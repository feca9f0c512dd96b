//! # klondike-engine
//!
//! Rules and state-transition engine for single-player Klondike Solitaire.
//!
//! ## Design Principles
//!
//! 1. **Plain State**: `GameState` is ordinary data. Engine operations are
//!    methods taking `&mut self` and the current time; there is no hidden
//!    global store and no I/O inside the engine.
//!
//! 2. **Card Conservation**: the piles always hold exactly the 52 distinct
//!    cards. Moves transfer cards between piles inside one call.
//!
//! 3. **Exact Undo**: every recorded move carries value copies of what it
//!    moved, so undo restores the previous layout exactly.
//!
//! ## Architecture
//!
//! - **Persistent History**: the move list is an `im::Vector`, so cloning a
//!   state for rendering or comparison stays cheap as history grows.
//!
//! - **Host Seams**: time comes from a `Clock`, saved games go through a
//!   `Storage`. Both are traits the host implements.
//!
//! ## Modules
//!
//! - `core`: cards, settings, clock, RNG, history records, game state
//! - `cards`: deck creation, shuffling, validation
//! - `zones`: piles and pile ids
//! - `rules`: placement legality, auto-move safety, win detection
//! - `engine`: draw, reset, move, auto-move, selection, tick, undo
//! - `session`: a game plus its clock, save and restore
//! - `persist`: saved-game encoding and the storage trait

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod engine;
pub mod session;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Rank, Suit,
    DealSeed, GameRng,
    CardBack, DrawCount, Settings, SettingsPatch,
    Clock, ManualClock, SystemClock,
    MoveKind, MoveRecord,
    GameState, Selection,
};

pub use crate::zones::{Pile, PileId, PileKind};

pub use crate::cards::{create_deck, create_shuffled_deck, is_valid_deck, shuffle_deck};

pub use crate::rules::{
    can_auto_move_to_foundation, can_move_to_foundation, can_move_to_tableau, check_win,
    find_valid_foundation, is_valid_sequence, movable_cards,
};

pub use crate::engine::SelectOutcome;

pub use crate::session::Session;

pub use crate::persist::{MemoryStorage, SavedGame, Storage};
