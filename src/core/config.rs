//! Game settings and layout constants.
//!
//! Settings are the only player-configurable part of a game:
//! - `DrawCount`: cards moved from stock to waste per draw (1 or 3)
//! - `sound_enabled`: passed through to the host
//! - `CardBack`: passed through to the presentation layer
//!
//! Settings survive "new game"; everything else is re-dealt.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Cards per suit, and cards on a completed foundation.
pub const SUIT_SIZE: usize = 13;

/// Cards left in the stock after the deal (52 - 1 - 2 - ... - 7).
pub const STOCK_SIZE_AFTER_DEAL: usize = DECK_SIZE - TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// Storage key for the persisted session.
pub const SESSION_KEY: &str = "solitaire-game";

/// Storage key for independently persisted settings.
pub const SETTINGS_KEY: &str = "solitaire-settings";

/// Number of cards drawn from stock per draw.
///
/// Serialized as the plain number `1` or `3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawCount {
    #[default]
    One,
    Three,
}

impl DrawCount {
    /// Number of cards per draw.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for DrawCount {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawCount::One),
            3 => Ok(DrawCount::Three),
            other => Err(anyhow!("draw count must be 1 or 3, got {other}")),
        }
    }
}

impl From<DrawCount> for u8 {
    fn from(count: DrawCount) -> Self {
        count.get() as u8
    }
}

/// Card back artwork choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBack {
    #[default]
    Classic,
    Modern,
}

/// Player settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Cards per draw.
    pub draw_count: DrawCount,

    /// Host-side sound toggle.
    pub sound_enabled: bool,

    /// Card back shown by the presentation layer.
    pub card_back: CardBack,
}

impl Settings {
    /// Set the draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: DrawCount) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Set the sound flag.
    #[must_use]
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Set the card back.
    #[must_use]
    pub fn with_card_back(mut self, card_back: CardBack) -> Self {
        self.card_back = card_back;
        self
    }

    /// Merge a partial update into these settings.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(draw_count) = patch.draw_count {
            self.draw_count = draw_count;
        }
        if let Some(sound_enabled) = patch.sound_enabled {
            self.sound_enabled = sound_enabled;
        }
        if let Some(card_back) = patch.card_back {
            self.card_back = card_back;
        }
    }
}

/// Partial settings update. Unset fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub draw_count: Option<DrawCount>,
    pub sound_enabled: Option<bool>,
    pub card_back: Option<CardBack>,
}

impl SettingsPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draw_count(mut self, draw_count: DrawCount) -> Self {
        self.draw_count = Some(draw_count);
        self
    }

    #[must_use]
    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn card_back(mut self, card_back: CardBack) -> Self {
        self.card_back = Some(card_back);
        self
    }

    /// Check if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_count.is_none() && self.sound_enabled.is_none() && self.card_back.is_none()
    }
}
