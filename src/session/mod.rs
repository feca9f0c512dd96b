//! Game session: one `GameState` plus the clock that timestamps its moves.
//!
//! `Session` is the entry point a host (UI, CLI, test) drives. It reads the
//! clock once per operation and forwards to the engine methods on
//! `GameState`, and it saves to and restores from a `Storage`.
//!
//! ## Lifecycle
//!
//! A session starts from a fresh deal (`new`, `with_clock`, `with_seed`) or
//! from storage (`restore`). `new_game` replaces the state wholesale, keeping
//! the current settings. Nothing else replaces the state.

use anyhow::Result;
use log::{info, warn};

use crate::core::action::MoveRecord;
use crate::core::card::CardId;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{Settings, SettingsPatch, SESSION_KEY};
use crate::core::rng::{DealSeed, GameRng};
use crate::core::state::GameState;
use crate::engine::SelectOutcome;
use crate::persist::{self, SavedGame, Storage};
use crate::zones::{Pile, PileId};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session<C: Clock = SystemClock> {
    state: GameState,
    clock: C,
}

impl Session<SystemClock> {
    /// Deal a fresh game on the system clock.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Deal a fresh game with a fresh random seed.
    #[must_use]
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        Self::from_state(GameState::new(settings), clock)
    }

    /// Deal the game determined by `seed`.
    #[must_use]
    pub fn with_seed(settings: Settings, seed: u64, clock: C) -> Self {
        Self::from_state(GameState::deal(settings, &mut GameRng::new(seed)), clock)
    }

    /// Replay the deal recorded as `seed`.
    #[must_use]
    pub fn with_deal_seed(settings: Settings, seed: DealSeed, clock: C) -> Self {
        Self::from_state(GameState::deal(settings, &mut GameRng::from_seed(seed)), clock)
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(state: GameState, clock: C) -> Self {
        info!("session started: seed {}, draw {}", state.seed, state.settings.draw_count.get());
        Self { state, clock }
    }

    /// Restore from storage.
    ///
    /// Uses the game saved under `SESSION_KEY` when it decodes and holds a
    /// valid card layout. Otherwise deals a fresh game with the settings
    /// saved under `SETTINGS_KEY`, or defaults. Never fails.
    pub fn restore(storage: &impl Storage, clock: C) -> Self {
        match storage.get(SESSION_KEY).map(|json| restore_state(&json)) {
            Some(Ok(state)) => return Self::from_state(state, clock),
            Some(Err(err)) => warn!("discarding saved game: {err:#}"),
            None => {}
        }

        let settings = persist::load_settings(storage).unwrap_or_else(|err| {
            warn!("discarding saved settings: {err:#}");
            None
        });
        Self::with_clock(settings.unwrap_or_default(), clock)
    }

    // === Lifecycle ===

    /// Replace the game with a fresh deal, keeping the current settings.
    pub fn new_game(&mut self) {
        self.new_game_with_settings(self.state.settings);
    }

    /// Replace the game with a fresh deal under `settings`.
    pub fn new_game_with_settings(&mut self, settings: Settings) {
        self.state = GameState::new(settings);
        info!("new game: seed {}", self.state.seed);
    }

    /// Replace the game with the deal determined by `seed`.
    pub fn new_game_with_seed(&mut self, seed: u64) {
        self.state = GameState::deal(self.state.settings, &mut GameRng::new(seed));
        info!("new game: seed {seed}");
    }

    // === Operations ===

    pub fn draw_cards(&mut self) {
        let now = self.clock.now_millis();
        self.state.draw(now);
    }

    pub fn reset_stock(&mut self) {
        let now = self.clock.now_millis();
        self.state.reset_stock(now);
    }

    /// Draw if the stock has cards, otherwise turn the waste over.
    pub fn click_stock(&mut self) {
        if self.state.stock.is_empty() {
            self.reset_stock();
        } else {
            self.draw_cards();
        }
    }

    pub fn move_cards(&mut self, card_ids: &[CardId], target: PileId) -> bool {
        let now = self.clock.now_millis();
        self.state.move_cards(card_ids, target, now)
    }

    pub fn auto_move_to_foundation(&mut self, card: CardId) -> bool {
        let now = self.clock.now_millis();
        self.state.auto_move_to_foundation(card, now)
    }

    /// Move every safe card to the foundations. Returns the number moved.
    pub fn auto_complete(&mut self) -> usize {
        let now = self.clock.now_millis();
        self.state.auto_complete(now)
    }

    pub fn undo(&mut self) {
        self.state.undo();
    }

    pub fn select_card(&mut self, card: CardId, pile: PileId) -> SelectOutcome {
        let now = self.clock.now_millis();
        self.state.select_card(card, pile, now)
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.state.update_settings(patch);
    }

    /// Recompute elapsed time from the clock.
    pub fn tick(&mut self) {
        let now = self.clock.now_millis();
        self.state.tick(now);
    }

    // === Accessors ===

    /// Full state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the session, returning its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.state.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.state.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.state.foundations
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.state.tableau
    }

    #[must_use]
    pub fn moves(&self) -> &im::Vector<MoveRecord> {
        &self.state.moves
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    /// Whole seconds since the first move, as of the last tick.
    #[must_use]
    pub fn elapsed_time(&self) -> u64 {
        self.state.elapsed_time
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    #[must_use]
    pub fn selected_card_ids(&self) -> &[CardId] {
        self.state.selected_card_ids()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    // === Persistence ===

    /// Save progress under `SESSION_KEY` and settings under `SETTINGS_KEY`.
    pub fn save(&self, storage: &mut impl Storage) -> Result<()> {
        let json = SavedGame::capture(&self.state).to_json()?;
        storage.set(SESSION_KEY, json)?;
        self.save_settings(storage)
    }

    /// Save only the settings.
    pub fn save_settings(&self, storage: &mut impl Storage) -> Result<()> {
        persist::save_settings(storage, &self.state.settings)
    }
}

fn restore_state(json: &str) -> Result<GameState> {
    SavedGame::from_json(json)?.into_state()
}
