//! Game state: the seven kinds of table position plus bookkeeping.
//!
//! ## Layout
//!
//! - one stock, one waste
//! - 4 foundations (`foundation-0..3`)
//! - 7 tableau columns (`tableau-0..6`)
//!
//! ## Invariant
//!
//! The piles together always hold exactly the 52 distinct cards. Every
//! operation in `crate::engine` moves cards by removing them from one pile
//! and appending them to another within a single `&mut self` call, so no
//! intermediate state is ever observable.
//!
//! `GameState` is plain data: cloning it gives an independent snapshot, and
//! the move history is an `im::Vector`, so the clone is cheap.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::card::{Card, CardId};
use super::config::{Settings, DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use super::rng::{DealSeed, GameRng};
use crate::cards::{create_shuffled_deck, is_valid_deck};
use crate::zones::{Pile, PileId};

/// Currently selected cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Selected cards, bottom first.
    pub card_ids: Vec<CardId>,

    /// Pile holding the selected cards.
    pub pile: PileId,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub stock: Pile,
    pub waste: Pile,
    pub foundations: [Pile; FOUNDATION_COUNT],
    pub tableau: [Pile; TABLEAU_COUNT],

    /// Move history, oldest first.
    pub moves: Vector<MoveRecord>,

    /// Moves made so far (decremented by undo).
    pub move_count: u32,

    /// Time of the first move (ms since epoch). `None` until then.
    pub start_time: Option<u64>,

    /// Whole seconds since the first move, as of the last tick.
    pub elapsed_time: u64,

    pub is_won: bool,

    pub settings: Settings,

    /// Current selection. Not persisted.
    #[serde(skip)]
    pub selection: Option<Selection>,

    /// Seed the deal was shuffled with. `GameRng::from_seed` replays it.
    pub seed: DealSeed,
}

impl GameState {
    /// Deal a new game from a shuffled deck.
    ///
    /// Tableau pile `i` receives `i + 1` cards in deck order with only the
    /// last one face-up; the remaining 24 cards form the face-down stock.
    ///
    /// Panics if the shuffled deck is not a valid 52-card deck.
    #[must_use]
    pub fn deal(settings: Settings, rng: &mut GameRng) -> Self {
        let deck = create_shuffled_deck(rng);
        assert!(is_valid_deck(&deck), "Shuffled deck is not a valid 52-card deck");

        let mut cards = deck.into_iter();

        let tableau = std::array::from_fn(|i| {
            let column = cards
                .by_ref()
                .take(i + 1)
                .enumerate()
                .map(|(j, card)| card.with_face_up(j == i))
                .collect();
            Pile::with_cards(PileId::Tableau(i as u8), column)
        });

        let stock_cards = cards.map(|card| card.with_face_up(false)).collect();

        Self {
            stock: Pile::with_cards(PileId::Stock, stock_cards),
            waste: Pile::new(PileId::Waste),
            foundations: std::array::from_fn(|i| Pile::new(PileId::Foundation(i as u8))),
            tableau,
            moves: Vector::new(),
            move_count: 0,
            start_time: None,
            elapsed_time: 0,
            is_won: false,
            settings,
            selection: None,
            seed: rng.seed(),
        }
    }

    /// Deal a new game from a fresh 256-bit seed.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::deal(settings, &mut GameRng::from_entropy())
    }

    // === Lookup ===

    /// All piles in fixed order: stock, waste, foundations, tableau.
    pub fn all_piles(&self) -> impl Iterator<Item = &Pile> {
        [&self.stock, &self.waste]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    /// Find a pile by id.
    #[must_use]
    pub fn find_pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundations.get(usize::from(i)),
            PileId::Tableau(i) => self.tableau.get(usize::from(i)),
        }
    }

    /// Find a pile by id, mutably.
    pub fn find_pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            PileId::Tableau(i) => self.tableau.get_mut(usize::from(i)),
        }
    }

    /// Pile by id, for ids already known to be on the table.
    ///
    /// Panics on an out-of-range foundation or tableau index.
    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Foundation(i) => &mut self.foundations[usize::from(i)],
            PileId::Tableau(i) => &mut self.tableau[usize::from(i)],
        }
    }

    /// Find the pile currently holding a card.
    #[must_use]
    pub fn find_card_pile(&self, card: CardId) -> Option<&Pile> {
        self.all_piles().find(|pile| pile.contains(card))
    }

    /// Find a card anywhere on the table.
    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<&Card> {
        self.all_piles().find_map(|pile| pile.get(card))
    }

    /// Total cards across all piles. Always 52 for reachable states.
    #[must_use]
    pub fn count_total_cards(&self) -> usize {
        self.all_piles().map(Pile::len).sum()
    }

    /// Check the 52-distinct-cards invariant and pile id consistency.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.count_total_cards() != DECK_SIZE {
            return false;
        }

        let ids: FxHashSet<_> = self
            .all_piles()
            .flat_map(|pile| pile.cards.iter().map(Card::id))
            .collect();
        if ids.len() != DECK_SIZE {
            return false;
        }

        self.stock.id == PileId::Stock
            && self.waste.id == PileId::Waste
            && self.foundations.iter().enumerate().all(|(i, p)| p.id == PileId::Foundation(i as u8))
            && self.tableau.iter().enumerate().all(|(i, p)| p.id == PileId::Tableau(i as u8))
    }

    // === Selectors ===

    /// Selected card ids (empty when nothing is selected).
    #[must_use]
    pub fn selected_card_ids(&self) -> &[CardId] {
        self.selection.as_ref().map_or(&[], |s| s.card_ids.as_slice())
    }

    /// Pile holding the selection, if any.
    #[must_use]
    pub fn selected_pile(&self) -> Option<PileId> {
        self.selection.as_ref().map(|s| s.pile)
    }

    /// Check if there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }
}
