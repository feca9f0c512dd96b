//! State transitions on `GameState`.
//!
//! ## Operations
//!
//! - `execute`: draw, stock reset, card moves, auto-move, selection, clock
//! - `undo`: revert the latest recorded move
//!
//! All operations are inherent methods on `GameState` taking `&mut self`
//! plus the current time in milliseconds. Illegal operations are silent
//! no-ops (or return `false`), never errors.

pub mod execute;
pub mod undo;

pub use execute::SelectOutcome;
