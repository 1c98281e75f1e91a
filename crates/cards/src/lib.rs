// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "A♥");
//! ```
//!
//! and a [Deck] type that enumerates the 52 cards, shuffles them, and deals
//! them from the front:
//!
//! ```
//! # use handodds_cards::{Deck, DeckError};
//! # fn main() -> Result<(), DeckError> {
//! use rand::prelude::*;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//!
//! let card = deck.deal()?;
//! println!("dealt {card}");
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! # Ok(())
//! # }
//! ```
//!
//! Note that card equality compares ranks only, see [Card] for details.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, DeckError, Rank, Suit};
