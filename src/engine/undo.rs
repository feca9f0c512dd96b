//! Reverting the most recent move.
//!
//! Each record carries enough to reverse itself exactly: the moved cards
//! (as they lie on the destination), and for tableau sources the card that
//! was flipped face-up. Undo never reads any other record.

use log::debug;

use crate::core::action::{MoveKind, MoveRecord};
use crate::core::state::GameState;

impl GameState {
    /// Revert the most recent recorded move. No-op with an empty history.
    ///
    /// Undo is allowed after a win and returns the game to play. The clock
    /// fields are left alone.
    pub fn undo(&mut self) {
        let Some(record) = self.moves.pop_back() else {
            return;
        };

        debug!("undo {:?} {} -> {}", record.kind, record.from, record.to);

        match record.kind {
            MoveKind::Draw => self.undo_draw(&record),
            MoveKind::ResetStock => self.undo_reset(),
            _ => self.undo_card_move(&record),
        }

        self.move_count = self.move_count.saturating_sub(1);
        self.is_won = false;
        self.selection = None;
    }

    /// Waste top goes back onto the stock face-down, in the same order it
    /// was drawn from.
    fn undo_draw(&mut self, record: &MoveRecord) {
        let cards = self.waste.take_top(record.card_count());
        self.stock
            .extend(cards.into_iter().map(|card| card.with_face_up(false)));
    }

    /// The whole stock goes back to the waste, reversed and face-up.
    fn undo_reset(&mut self) {
        let mut cards = std::mem::take(&mut self.stock.cards);
        cards.reverse();
        self.waste
            .extend(cards.into_iter().map(|card| card.with_face_up(true)));
    }

    fn undo_card_move(&mut self, record: &MoveRecord) {
        let cards = self.pile_mut(record.to).take_top(record.card_count());
        let source = self.pile_mut(record.from);

        if let Some(flipped) = record.flipped_card {
            if let Some(top) = source.top_mut().filter(|top| top.id() == flipped.id()) {
                top.face_up = false;
            }
        }

        source.extend(cards);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::card::{CardId, Rank, Suit};
    use crate::core::config::{DrawCount, Settings};
    use crate::core::rng::GameRng;
    use crate::core::state::GameState;
    use crate::zones::PileId;

    fn dealt(seed: u64) -> GameState {
        GameState::deal(Settings::default(), &mut GameRng::new(seed))
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut state = dealt(1);
        let before = state.clone();
        state.undo();
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_draw_restores_stock_order() {
        let mut state = dealt(2);
        state.settings = state.settings.with_draw_count(DrawCount::Three);
        let before = state.clone();

        state.draw(100);
        state.undo();

        assert_eq!(state.stock, before.stock);
        assert_eq!(state.waste, before.waste);
        assert_eq!(state.move_count, 0);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_undo_reset_restores_waste() {
        let mut state = dealt(3);
        while !state.stock.is_empty() {
            state.draw(0);
        }
        let before = state.clone();

        state.reset_stock(0);
        state.undo();

        assert_eq!(state.stock, before.stock);
        assert_eq!(state.waste, before.waste);
        assert_eq!(state.move_count, before.move_count);
    }

    #[test]
    fn test_undo_move_flips_source_back() {
        let mut state = dealt(4);

        // King of spades face-up on tableau-1 over face-down cards, tableau-0 empty
        let king = CardId::new(Rank::King, Suit::Spades);
        let holder = state.find_card_pile(king).unwrap().id;
        let index = state.find_pile(holder).unwrap().position(king).unwrap();
        let card = state.pile_mut(holder).cards.remove(index);
        state.tableau[1].cards.push(card.with_face_up(true));
        for below in state.tableau[1].cards.iter_mut().rev().skip(1) {
            below.face_up = false;
        }
        let spare = state.tableau[0].cards.drain(..).collect::<Vec<_>>();
        state.stock.extend(spare.into_iter().map(|c| c.with_face_up(false)));
        assert!(state.is_consistent());

        let before = state.clone();
        assert!(state.move_cards(&[king], PileId::Tableau(0), 0));
        assert!(state.moves.back().unwrap().flipped_card.is_some());
        assert!(state.tableau[1].top().unwrap().face_up);

        state.undo();

        assert_eq!(state.tableau, before.tableau);
        assert!(!state.tableau[1].cards[state.tableau[1].len() - 2].face_up);
        assert_eq!(state.move_count, 0);
    }

    #[test]
    fn test_undo_after_win_clears_win() {
        let mut state = dealt(5);
        state.draw(0);
        state.is_won = true;
        state.selection = None;

        state.undo();

        assert!(!state.is_won);
        assert_eq!(state.waste.len(), 0);
    }

    #[test]
    fn test_undo_keeps_clock() {
        let mut state = dealt(6);
        state.draw(1_000);
        state.tick(4_000);
        state.undo();

        assert_eq!(state.start_time, Some(1_000));
        assert_eq!(state.elapsed_time, 3);
    }
}
