//! Forward state transitions: stock handling, card moves, selection, clock.
//!
//! Every operation is atomic: it validates everything against the current
//! state first and only then mutates. A rejected operation leaves the state
//! untouched. Once the game is won, stock operations and card moves are
//! rejected; only undo (or a new deal) leaves the won state.

use log::{debug, trace};

use crate::core::action::{MoveKind, MoveRecord};
use crate::core::card::{Card, CardId};
use crate::core::config::SettingsPatch;
use crate::core::state::{GameState, Selection};
use crate::rules::{
    can_auto_move_to_foundation, can_move_to_foundation, can_move_to_tableau, check_win,
    find_valid_foundation, movable_cards,
};
use crate::zones::{Pile, PileId, PileKind};

/// Result of `GameState::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The existing selection was moved onto the clicked pile.
    Moved,
    /// The clicked card (and any run above it) is now selected.
    Selected,
    /// The clicked card was face-down or missing; selection cleared.
    Cleared,
    /// The clicked pile does not exist; nothing changed.
    Ignored,
}

impl GameState {
    /// Draw up to `draw_count` cards from stock onto the waste, face-up.
    ///
    /// Drawn cards keep their relative order. No-op on an empty stock.
    pub fn draw(&mut self, now: u64) {
        if self.is_won || self.stock.is_empty() {
            trace!("draw ignored: stock empty or game won");
            return;
        }

        self.start_time.get_or_insert(now);

        let drawn: Vec<Card> = self
            .stock
            .take_top(self.settings.draw_count.get())
            .into_iter()
            .map(|card| card.with_face_up(true))
            .collect();

        self.moves.push_back(MoveRecord::new(
            MoveKind::Draw,
            PileId::Stock,
            PileId::Waste,
            &drawn,
            now,
        ));
        debug!("draw {} card(s), {} left in stock", drawn.len(), self.stock.len());

        self.waste.extend(drawn);
        self.finish_move();
    }

    /// Turn the waste over to form a new stock.
    ///
    /// Applies only when the stock is empty and the waste is not. The waste
    /// is reversed and turned face-down.
    pub fn reset_stock(&mut self, now: u64) {
        if self.is_won || !self.stock.is_empty() || self.waste.is_empty() {
            trace!("reset_stock ignored");
            return;
        }

        self.start_time.get_or_insert(now);

        let mut cards = std::mem::take(&mut self.waste.cards);
        cards.reverse();
        for card in &mut cards {
            card.face_up = false;
        }

        self.moves.push_back(MoveRecord::new(
            MoveKind::ResetStock,
            PileId::Waste,
            PileId::Stock,
            &cards,
            now,
        ));
        debug!("reset stock with {} card(s)", cards.len());

        self.stock.cards = cards;
        self.finish_move();
    }

    /// Move cards onto `target`.
    ///
    /// The source pile is the one holding `card_ids[0]`. From a tableau pile
    /// the whole face-up run starting at that card moves; from the waste or a
    /// foundation only that card moves, and only if it is the face-up top.
    /// Returns `false` (and changes nothing) if the move is not legal.
    pub fn move_cards(&mut self, card_ids: &[CardId], target: PileId, now: u64) -> bool {
        let Some(&first) = card_ids.first() else {
            return false;
        };

        let Some((kind, source, start)) = self.plan_move(first, target) else {
            debug!("move {first} -> {target} rejected");
            return false;
        };

        self.start_time.get_or_insert(now);

        let moved = self.pile_mut(source).split_off(start);

        let mut flipped = None;
        if source.kind() == PileKind::Tableau {
            if let Some(top) = self.pile_mut(source).top_mut() {
                if !top.face_up {
                    top.face_up = true;
                    flipped = Some(*top);
                }
            }
        }

        self.moves
            .push_back(MoveRecord::new(kind, source, target, &moved, now).with_flipped(flipped));
        debug!("move {} card(s) {source} -> {target} ({kind:?})", moved.len());

        self.pile_mut(target).extend(moved);
        self.is_won = check_win(&self.foundations);
        if self.is_won {
            debug!("game won after {} moves", self.move_count + 1);
        }
        self.finish_move();
        true
    }

    /// Move a pile's face-up top card to the first foundation that accepts it.
    ///
    /// Goes through `move_cards`, so it is recorded and undoable like any
    /// other move. Does not apply the auto-move safety heuristic.
    pub fn auto_move_to_foundation(&mut self, card: CardId, now: u64) -> bool {
        let Some(pile) = self.find_card_pile(card) else {
            return false;
        };

        let Some(top) = pile.top().filter(|top| top.id() == card && top.face_up) else {
            return false;
        };

        let Some(target) = find_valid_foundation(top, &self.foundations).map(|p| p.id) else {
            return false;
        };

        self.move_cards(&[card], target, now)
    }

    /// Repeatedly auto-move waste and tableau tops that are safe to move.
    ///
    /// Returns the number of cards moved.
    pub fn auto_complete(&mut self, now: u64) -> usize {
        let mut moved = 0;

        loop {
            let candidate = std::iter::once(&self.waste)
                .chain(self.tableau.iter())
                .filter_map(Pile::top)
                .find(|card| card.face_up && can_auto_move_to_foundation(card, &self.foundations))
                .map(Card::id);

            let Some(card) = candidate else { break };
            if !self.auto_move_to_foundation(card, now) {
                break;
            }
            moved += 1;
        }

        if moved > 0 {
            debug!("auto-complete moved {moved} card(s)");
        }
        moved
    }

    /// Click a card.
    ///
    /// With an existing selection this first tries to move it onto `pile`.
    /// Otherwise (or if that move fails) the clicked card is selected: the
    /// run above it for a tableau pile, the card alone elsewhere. Clicking a
    /// face-down or missing card clears the selection.
    pub fn select_card(&mut self, card: CardId, pile: PileId, now: u64) -> SelectOutcome {
        if let Some(selection) = self.selection.take() {
            if self.find_pile(pile).is_some() && self.move_cards(&selection.card_ids, pile, now) {
                return SelectOutcome::Moved;
            }
            self.selection = Some(selection);
        }

        let Some(clicked) = self.find_pile(pile) else {
            return SelectOutcome::Ignored;
        };

        let card_ids: Vec<CardId> = match clicked.get(card) {
            Some(c) if c.face_up && clicked.kind() == PileKind::Tableau => {
                movable_cards(clicked, card).iter().map(Card::id).collect()
            }
            Some(c) if c.face_up => vec![card],
            _ => {
                self.selection = None;
                return SelectOutcome::Cleared;
            }
        };

        self.selection = Some(Selection { card_ids, pile });
        SelectOutcome::Selected
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Merge a partial settings update. Takes effect from the next operation.
    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.settings.apply(patch);
    }

    /// Recompute elapsed whole seconds since the first move.
    ///
    /// Idempotent; does nothing before the first move or after a win.
    pub fn tick(&mut self, now: u64) {
        if let (Some(start), false) = (self.start_time, self.is_won) {
            self.elapsed_time = now.saturating_sub(start) / 1000;
        }
    }

    // === Internals ===

    /// Validate a card move, returning its kind, source pile, and the index
    /// in the source pile where the moving cards start.
    fn plan_move(&self, first: CardId, target: PileId) -> Option<(MoveKind, PileId, usize)> {
        if self.is_won {
            return None;
        }

        let source_pile = self.find_card_pile(first)?;
        let target_pile = self.find_pile(target)?;
        let source = source_pile.id;
        if source == target {
            return None;
        }

        let kind = MoveKind::classify(source.kind(), target.kind())?;

        let moving: &[Card] = match source.kind() {
            PileKind::Tableau => movable_cards(source_pile, first),
            _ => match source_pile.top() {
                Some(top) if top.id() == first && top.face_up => std::slice::from_ref(top),
                _ => &[],
            },
        };
        if moving.is_empty() {
            return None;
        }

        let legal = match target.kind() {
            PileKind::Tableau => can_move_to_tableau(moving, target_pile),
            PileKind::Foundation => {
                moving.len() == 1 && can_move_to_foundation(&moving[0], target_pile)
            }
            PileKind::Stock | PileKind::Waste => false,
        };

        legal.then(|| (kind, source, source_pile.len() - moving.len()))
    }

    /// Bookkeeping shared by every recorded move.
    fn finish_move(&mut self) {
        self.move_count += 1;
        self.selection = None;
    }
}
