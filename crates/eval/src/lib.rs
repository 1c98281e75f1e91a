// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds 5-card hand classification.
//!
//! A [Hand] is dealt from a [Deck] and classifies itself from the number of
//! same-rank pairs among its cards, see [Hand::number_matches]:
//!
//! ```
//! # use handodds_eval::{Deck, DeckError, Hand};
//! # fn main() -> Result<(), DeckError> {
//! use rand::prelude::*;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//!
//! let hand = Hand::draw(&mut deck)?;
//! if hand.is_full_house() {
//!     println!("{hand}");
//! }
//! # Ok(())
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use handodds_cards::{Card, CardError, Deck, DeckError, Rank, Suit};
