//! Piles: the table positions cards can occupy.
//!
//! ## Key Types
//!
//! - `PileKind`: stock, waste, foundation, or tableau
//! - `PileId`: kind plus position (`tableau-3`), with a stable text form
//! - `Pile`: ordered cards, bottom first

pub mod pile;

pub use pile::{top_card, Pile, PileId, PileKind};
