// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use handodds_cards::{Card, Deck, DeckError};

/// A five cards hand dealt from a [Deck].
///
/// The cards are stored in draw order and never reordered, printing a hand
/// always shows the cards as they came out of the deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Draws a hand by dealing five cards from the deck.
    ///
    /// The deck loses the five dealt cards, fails with [DeckError::Empty] if
    /// the deck has fewer than five cards left.
    pub fn draw(deck: &mut Deck) -> Result<Self, DeckError> {
        Ok(Self {
            cards: [
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
            ],
        })
    }

    /// The hand cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Counts the ordered pairs of positions that hold the same rank.
    ///
    /// Every unordered pair of equal ranks is counted twice, so a pair adds
    /// 2 to the total, trips add 6, quads add 12, and a full house, trips
    /// plus a pair, totals 8. The classification predicates check this count
    /// for exact equality.
    pub fn number_matches(&self) -> u32 {
        let mut matches = 0;
        for i in 0..self.cards.len() {
            for j in 0..self.cards.len() {
                if i != j && self.cards[i].rank() == self.cards[j].rank() {
                    matches += 1;
                }
            }
        }

        matches
    }

    /// Checks if the hand has a single pair.
    pub fn is_pair(&self) -> bool {
        self.number_matches() == 2
    }

    /// Checks if the hand has two different pairs.
    pub fn is_two_pair(&self) -> bool {
        self.number_matches() == 4
    }

    /// Checks if the hand has three cards of the same rank.
    pub fn is_trips(&self) -> bool {
        self.number_matches() == 6
    }

    /// Checks if the hand has three cards of one rank and two of another.
    pub fn is_full_house(&self) -> bool {
        self.number_matches() == 8
    }

    /// Checks if the hand has four cards of the same rank.
    pub fn is_quads(&self) -> bool {
        self.number_matches() == 12
    }

    /// Checks if all five cards have the same suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Checks if the five ranks are consecutive.
    ///
    /// The check sorts a copy of the cards, the hand order is not affected.
    /// Ranks do not wrap around the ace, it is always the strongest rank, so
    /// A-2-3-4-5 is not a straight.
    pub fn is_straight(&self) -> bool {
        if self.number_matches() != 0 {
            return false;
        }

        let mut sorted = self.cards;
        sorted.sort();

        let distance = sorted[4].rank() as u32 - sorted[0].rank() as u32;
        distance == 4
    }
}

impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
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
