//! Playing cards: suits, ranks, colors, and stable card identifiers.
//!
//! A `Card` is identified by its `(rank, suit)` pair. The `face_up` flag is the
//! only mutable part of a card; it never participates in identity.
//!
//! ## Identifiers
//!
//! `CardId` packs the pair into a single byte (`suit * 13 + rank - 1`), so the
//! 52 ids are dense in `0..52` and collision-free by construction. The textual
//! form (`"A-hearts"`, `"10-spades"`) is what a presentation layer maps to assets.
//!
//! ```
//! use klondike_engine::core::{Card, CardId, Rank, Suit};
//!
//! let card = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(card.id().to_string(), "A-hearts");
//! assert_eq!("A-hearts".parse::<CardId>().unwrap(), card.id());
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }


    /// Hearts and diamonds are red; clubs and spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Lowercase name, as used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| anyhow!("unknown suit {s:?}"))
    }
}

/// Card color. Two cards are of opposite color when their colors differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The other color class.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Card rank, ordered Ace (1) through King (13). There is no wraparound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value: A=1 ... K=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given numeric value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Short label: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// True if `self` is exactly one rank above `other`.
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

impl FromStr for Rank {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| anyhow!("unknown rank {s:?}"))
    }
}

/// Stable identifier of one of the 52 cards.
///
/// Serialized as its raw index; out-of-range indices are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Identifier for a rank/suit pair.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(suit.index() * 13 + rank.value() - 1)
    }

    /// Raw dense index in `0..52`.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Rebuild an id from its raw index.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw < 52 {
            Some(Self(raw))
        } else {
            None
        }
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::ALL[usize::from(self.0 % 13)]
    }

    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::ALL[usize::from(self.0 / 13)]
    }
}

impl TryFrom<u8> for CardId {
    type Error = anyhow::Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        CardId::from_raw(raw).ok_or_else(|| anyhow!("card index {raw} out of range"))
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> Self {
        id.raw()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank().label(), self.suit().name())
    }
}

impl FromStr for CardId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((rank, suit)) = s.split_once('-') else {
            bail!("card id {s:?} is not of the form <rank>-<suit>");
        };
        Ok(CardId::new(rank.parse()?, suit.parse()?))
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn revealed(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::new(self.rank, self.suit)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Red/black opposition; symmetric.
    #[must_use]
    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    /// True if this card's rank is exactly one above `other`'s.
    #[must_use]
    pub const fn is_one_rank_higher(&self, other: &Card) -> bool {
        self.rank.is_one_above(other.rank)
    }

    /// True if this card's rank is exactly one below `other`'s.
    #[must_use]
    pub const fn is_one_rank_lower(&self, other: &Card) -> bool {
        other.rank.is_one_above(self.rank)
    }

    /// Copy of this card with the given facing.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
