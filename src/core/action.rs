//! Move history entries.
//!
//! Every state change made through the engine (except selection and clock
//! updates) appends one `MoveRecord`. Records hold value copies of the cards
//! involved, so they never alias live pile contents and never change once
//! pushed. Undo pops records from the end only.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::zones::{PileId, PileKind};

/// Kind of a recorded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveKind {
    Draw,
    TableauToTableau,
    TableauToFoundation,
    WasteToTableau,
    WasteToFoundation,
    FoundationToTableau,
    ResetStock,
}

impl MoveKind {
    /// Classify a card move by its source and destination pile kinds.
    ///
    /// Returns `None` for pairs that are not card moves (stock as either end,
    /// waste as destination, foundation to foundation).
    #[must_use]
    pub fn classify(from: PileKind, to: PileKind) -> Option<Self> {
        use PileKind::{Foundation, Tableau, Waste};

        match (from, to) {
            (Tableau, Tableau) => Some(MoveKind::TableauToTableau),
            (Tableau, Foundation) => Some(MoveKind::TableauToFoundation),
            (Waste, Tableau) => Some(MoveKind::WasteToTableau),
            (Waste, Foundation) => Some(MoveKind::WasteToFoundation),
            (Foundation, Tableau) => Some(MoveKind::FoundationToTableau),
            _ => None,
        }
    }
}

/// A recorded move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// What kind of move this was.
    #[serde(rename = "type")]
    pub kind: MoveKind,

    /// Source pile.
    pub from: PileId,

    /// Destination pile.
    pub to: PileId,

    /// Snapshot of the moved cards, in their order on the destination pile.
    pub cards: SmallVec<[Card; 3]>,

    /// Card turned face-up on the source pile as a side effect.
    #[serde(default)]
    pub flipped_card: Option<Card>,

    /// When the move was made (ms since epoch).
    pub timestamp: u64,
}

impl MoveRecord {
    /// Create a record without a flipped card.
    #[must_use]
    pub fn new(kind: MoveKind, from: PileId, to: PileId, cards: &[Card], timestamp: u64) -> Self {
        Self {
            kind,
            from,
            to,
            cards: SmallVec::from_slice(cards),
            flipped_card: None,
            timestamp,
        }
    }

    /// Attach the card revealed by this move.
    #[must_use]
    pub fn with_flipped(mut self, card: Option<Card>) -> Self {
        self.flipped_card = card;
        self
    }

    /// Number of cards moved.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
