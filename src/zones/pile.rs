//! Piles: ordered card sequences with a fixed role on the table.
//!
//! Index 0 is the bottom of a pile; the last element is the top. Every pile
//! has a `PileId` that names both its kind and its position among piles of
//! the same kind.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId};
use crate::core::config::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// Role of a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up pile fed from the stock.
    Waste,
    /// Destination pile building one suit from Ace to King.
    Foundation,
    /// One of the seven playing columns.
    Tableau,
}

/// Identifier of a pile.
///
/// Text form: `stock`, `waste`, `foundation-<0..4>`, `tableau-<0..7>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PileId {
    Stock,
    Waste,
    Foundation(u8),
    Tableau(u8),
}

impl PileId {
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// Position among piles of the same kind (0 for stock and waste).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PileId::Stock | PileId::Waste => 0,
            PileId::Foundation(i) | PileId::Tableau(i) => i as usize,
        }
    }

    /// Check that the index is within the table layout.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            PileId::Stock | PileId::Waste => true,
            PileId::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
            PileId::Tableau(i) => (i as usize) < TABLEAU_COUNT,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => f.write_str("stock"),
            PileId::Waste => f.write_str("waste"),
            PileId::Foundation(i) => write!(f, "foundation-{i}"),
            PileId::Tableau(i) => write!(f, "tableau-{i}"),
        }
    }
}

impl FromStr for PileId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s {
            "stock" => PileId::Stock,
            "waste" => PileId::Waste,
            _ => {
                let (kind, index) = s
                    .split_once('-')
                    .ok_or_else(|| anyhow!("unknown pile id {s:?}"))?;
                let index: u8 = index
                    .parse()
                    .with_context(|| format!("bad pile index in {s:?}"))?;
                match kind {
                    "foundation" => PileId::Foundation(index),
                    "tableau" => PileId::Tableau(index),
                    _ => bail!("unknown pile kind in {s:?}"),
                }
            }
        };
        if !id.is_valid() {
            bail!("pile index out of range in {s:?}");
        }
        Ok(id)
    }
}

impl TryFrom<String> for PileId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PileId> for String {
    fn from(id: PileId) -> Self {
        id.to_string()
    }
}

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    /// Which pile this is.
    pub id: PileId,

    /// Cards, bottom first.
    pub cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
        }
    }

    /// Create a pile holding `cards`, bottom first.
    #[must_use]
    pub fn with_cards(id: PileId, cards: Vec<Card>) -> Self {
        Self { id, cards }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Topmost card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable topmost card, if any.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Index of a card in this pile.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == card)
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    /// Find a card by id.
    #[must_use]
    pub fn get(&self, card: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == card)
    }

    /// Remove and return the cards from `index` through the top.
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index.min(self.cards.len()))
    }

    /// Remove and return the top `count` cards, bottom first.
    pub fn take_top(&mut self, count: usize) -> Vec<Card> {
        let start = self.cards.len().saturating_sub(count);
        self.cards.split_off(start)
    }

    /// Place cards on top, preserving their order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }
}

/// Top card of a pile, or `None` for an empty pile.
#[must_use]
pub fn top_card(pile: &Pile) -> Option<&Card> {
    pile.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_pile_id_text_form() {
        assert_eq!(PileId::Stock.to_string(), "stock");
        assert_eq!(PileId::Foundation(2).to_string(), "foundation-2");
        assert_eq!(PileId::Tableau(6).to_string(), "tableau-6");

        assert_eq!("waste".parse::<PileId>().unwrap(), PileId::Waste);
        assert_eq!("tableau-0".parse::<PileId>().unwrap(), PileId::Tableau(0));
        assert_eq!("foundation-3".parse::<PileId>().unwrap(), PileId::Foundation(3));
    }

    #[test]
    fn test_pile_id_rejects_out_of_range() {
        assert!("tableau-7".parse::<PileId>().is_err());
        assert!("foundation-4".parse::<PileId>().is_err());
        assert!("tableau-x".parse::<PileId>().is_err());
        assert!("graveyard-0".parse::<PileId>().is_err());
        assert!("".parse::<PileId>().is_err());
    }

    #[test]
    fn test_pile_id_kind_and_index() {
        assert_eq!(PileId::Stock.kind(), PileKind::Stock);
        assert_eq!(PileId::Stock.index(), 0);
        assert_eq!(PileId::Tableau(4).kind(), PileKind::Tableau);
        assert_eq!(PileId::Tableau(4).index(), 4);
        assert!(!PileId::Tableau(9).is_valid());
    }

    #[test]
    fn test_pile_id_serializes_as_string() {
        let json = serde_json::to_string(&PileId::Tableau(3)).unwrap();
        assert_eq!(json, r#""tableau-3""#);
        let id: PileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, PileId::Tableau(3));
        assert!(serde_json::from_str::<PileId>(r#""tableau-12""#).is_err());
    }

    #[test]
    fn test_top_card() {
        let mut pile = Pile::new(PileId::Waste);
        assert!(top_card(&pile).is_none());

        pile.extend([
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Hearts),
        ]);
        assert_eq!(top_card(&pile).map(Card::id), Some(CardId::new(Rank::Nine, Suit::Hearts)));
    }

    #[test]
    fn test_split_and_take() {
        let mut pile = Pile::with_cards(
            PileId::Tableau(0),
            vec![
                Card::new(Rank::King, Suit::Spades),
                Card::new(Rank::Queen, Suit::Hearts),
                Card::new(Rank::Jack, Suit::Clubs),
            ],
        );

        assert_eq!(pile.position(CardId::new(Rank::Queen, Suit::Hearts)), Some(1));
        let moved = pile.split_off(1);
        assert_eq!(moved.len(), 2);
        assert_eq!(pile.len(), 1);

        pile.extend(moved);
        let top_two = pile.take_top(2);
        assert_eq!(top_two[0].rank, Rank::Queen);
        assert_eq!(top_two[1].rank, Rank::Jack);

        // Taking more than present takes everything
        let rest = pile.take_top(10);
        assert_eq!(rest.len(), 1);
        assert!(pile.is_empty());
    }
}
