//! The persisted form of a game.
//!
//! `SavedGame` is `GameState` minus the selection, which is transient UI
//! state. JSON is the storage blob format (camelCase field names); bincode
//! gives a compact binary snapshot of the same data.

use anyhow::{ensure, Context, Result};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::action::MoveRecord;
use crate::core::config::{Settings, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::core::rng::DealSeed;
use crate::core::state::GameState;
use crate::zones::Pile;

/// Persisted game progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub stock: Pile,
    pub waste: Pile,
    pub foundations: [Pile; FOUNDATION_COUNT],
    pub tableau: [Pile; TABLEAU_COUNT],
    pub moves: Vector<MoveRecord>,
    pub move_count: u32,
    pub start_time: Option<u64>,
    pub elapsed_time: u64,
    pub is_won: bool,
    pub settings: Settings,
    #[serde(default)]
    pub seed: DealSeed,
}

impl SavedGame {
    /// Capture the persisted subset of a state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            stock: state.stock.clone(),
            waste: state.waste.clone(),
            foundations: state.foundations.clone(),
            tableau: state.tableau.clone(),
            moves: state.moves.clone(),
            move_count: state.move_count,
            start_time: state.start_time,
            elapsed_time: state.elapsed_time,
            is_won: state.is_won,
            settings: state.settings,
            seed: state.seed,
        }
    }

    /// Rebuild a state, checking the 52-card invariant.
    ///
    /// The restored state has no selection.
    pub fn into_state(self) -> Result<GameState> {
        let state = GameState {
            stock: self.stock,
            waste: self.waste,
            foundations: self.foundations,
            tableau: self.tableau,
            moves: self.moves,
            move_count: self.move_count,
            start_time: self.start_time,
            elapsed_time: self.elapsed_time,
            is_won: self.is_won,
            settings: self.settings,
            selection: None,
            seed: self.seed,
        };
        ensure!(
            state.is_consistent(),
            "saved game does not hold the 52 distinct cards in their piles"
        );
        Ok(state)
    }

    /// Encode as a JSON blob.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to encode saved game as JSON")
    }

    /// Decode a JSON blob.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to decode saved game JSON")
    }

    /// Encode as a bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).context("failed to encode saved game snapshot")
    }

    /// Decode a bincode snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).context("failed to decode saved game snapshot")
    }
}

impl From<&GameState> for SavedGame {
    fn from(state: &GameState) -> Self {
        Self::capture(state)
    }
}
