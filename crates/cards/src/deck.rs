// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    collections::VecDeque,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};
use thiserror::Error;

/// Errors from parsing a card, a rank, or a suit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not one of `2..10`, `J`, `Q`, `K`, `A`.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit is not one of `♦`, `♣`, `♥`, `♠`.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
}

/// Errors from dealing cards out of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A deal was requested with no cards remaining.
    #[error("cannot deal from an empty deck")]
    Empty,
}

/// Card rank, ordered from [Rank::Deuce] (weakest) to [Rank::Ace] (strongest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks in order of strength.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
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
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits are unordered, they only take part in equality checks for flush
/// detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits in deck enumeration order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let suit = match c {
            '♦' => Suit::Diamonds,
            '♣' => Suit::Clubs,
            '♥' => Suit::Hearts,
            '♠' => Suit::Spades,
            _ => return Err(CardError::InvalidSuit(c)),
        };

        Ok(suit)
    }
}

/// A playing card with a rank and a suit.
///
/// Equality, ordering, and hashing compare the rank only, the suit is
/// ignored, so `2♦ == 2♠` holds:
///
/// ```
/// # use handodds_cards::{Card, Rank, Suit};
/// let c1 = Card::new(Rank::Deuce, Suit::Diamonds);
/// let c2 = Card::new(Rank::Deuce, Suit::Spades);
/// assert_eq!(c1, c2);
/// ```
///
/// Callers that need to tell two cards of the same rank apart must compare
/// [Card::suit] explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card with the given rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| CardError::InvalidRank(s.to_string()))?;

        let rank = chars.as_str().parse()?;
        let suit = Suit::try_from(suit)?;
        Ok(Card::new(rank, suit))
    }
}

/// A cards deck.
///
/// A new deck holds the 52 cards in enumeration order, suits outer and ranks
/// inner, with one card for every rank and suit combination. [Deck::deal]
/// removes cards from the front of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Reorders the deck uniformly at random.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Deals the card at the front of the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, card) in self.cards.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_has_unique_cards() {
        let cards = Deck::default()
            .into_iter()
            .map(|c| (c.rank(), c.suit()))
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_enumeration_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<Vec<_>>();

        // Suits outer, ranks inner.
        for (pos, card) in cards.iter().enumerate() {
            let suit = Suit::suits().nth(pos / 13).unwrap();
            let rank = Rank::ranks().nth(pos % 13).unwrap();
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), suit);
        }
    }

    #[test]
    fn deal_from_front() {
        let mut deck = Deck::default();

        let card = deck.deal().unwrap();
        assert_eq!(card.rank(), Rank::Deuce);
        assert_eq!(card.suit(), Suit::Diamonds);
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let card = deck.deal().unwrap();
        assert_eq!(card.rank(), Rank::Trey);
        assert_eq!(card.suit(), Suit::Diamonds);
        assert_eq!(deck.count(), Deck::SIZE - 2);
    }

    #[test]
    fn deal_never_repeats() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut dealt = HashSet::default();

        while !deck.is_empty() {
            let card = deck.deal().unwrap();
            assert!(dealt.insert((card.rank(), card.suit())));
        }

        assert_eq!(dealt.len(), Deck::SIZE);
    }

    #[test]
    fn deal_from_empty_deck() {
        let mut deck = Deck::default();
        for _ in 0..Deck::SIZE {
            deck.deal().unwrap();
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(DeckError::Empty));
    }

    #[test]
    fn shuffle_keeps_all_cards() {
        let mut rng = SmallRng::seed_from_u64(42);
        let deck = Deck::new_and_shuffled(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck
            .into_iter()
            .map(|c| (c.rank(), c.suit()))
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn equality_ignores_suit() {
        let c1 = Card::new(Rank::Deuce, Suit::Diamonds);
        let c2 = Card::new(Rank::Deuce, Suit::Spades);
        assert_eq!(c1, c2);
        assert_ne!(c1.suit(), c2.suit());

        let c3 = Card::new(Rank::Trey, Suit::Diamonds);
        assert_ne!(c1, c3);
    }

    #[test]
    fn ordering_compares_ranks() {
        let c1 = Card::new(Rank::Deuce, Suit::Spades);
        let c2 = Card::new(Rank::Trey, Suit::Diamonds);
        assert!(c1 < c2);

        let c1 = Card::new(Rank::Ace, Suit::Clubs);
        let c2 = Card::new(Rank::King, Suit::Clubs);
        assert!(c1 > c2);

        // Same rank cards are neither greater nor smaller.
        let c1 = Card::new(Rank::Ten, Suit::Clubs);
        let c2 = Card::new(Rank::Ten, Suit::Hearts);
        assert!(!(c1 > c2) && !(c1 < c2));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::Queen, Suit::Spades);
        assert_eq!(c.to_string(), "Q♠");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Deuce, Suit::Diamonds);
        assert_eq!(c.to_string(), "2♦");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "A♣");
    }

    #[test]
    fn card_parse_round_trip() {
        for card in Deck::default() {
            let parsed = card.to_string().parse::<Card>().unwrap();
            assert_eq!(parsed.rank(), card.rank());
            assert_eq!(parsed.suit(), card.suit());
        }
    }

    #[test]
    fn card_parse_errors() {
        assert_eq!(
            "1♠".parse::<Card>(),
            Err(CardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "11♠".parse::<Card>(),
            Err(CardError::InvalidRank("11".to_string()))
        );
        assert_eq!("QX".parse::<Card>(), Err(CardError::InvalidSuit('X')));
        assert_eq!(
            "".parse::<Card>(),
            Err(CardError::InvalidRank("".to_string()))
        );
    }

    #[test]
    fn deck_to_string() {
        let deck = Deck::default();
        let repr = deck.to_string();
        assert!(repr.starts_with("2♦ 3♦ 4♦"));
        assert!(repr.ends_with("Q♠ K♠ A♠"));
    }
}
