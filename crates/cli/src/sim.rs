// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo draw loop.
use log::{debug, trace};
use rand::Rng;

use handodds_eval::{Deck, DeckError, Hand};

/// Final tallies for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The number of hands dealt.
    pub trials: u64,
    /// The number of hands that were a full house.
    pub matches: u64,
}

impl Report {
    /// The observed probability as a percentage.
    pub fn probability(&self) -> f64 {
        100.0 * self.matches as f64 / self.trials as f64
    }
}

/// Deals hands from fresh shuffled decks until `target` full houses are seen.
///
/// Each trial builds a new deck, shuffles it, and draws a single hand, calls
/// `on_match` with each full house as it is found. The randomness source only
/// affects how many trials a run takes, every run terminates.
pub fn run<R, F>(target: u64, rng: &mut R, mut on_match: F) -> Result<Report, DeckError>
where
    R: Rng,
    F: FnMut(&Hand),
{
    let mut trials = 0;
    let mut matches = 0;

    while matches < target {
        let mut deck = Deck::new_and_shuffled(rng);
        trace!("trial deck {deck}");

        let hand = Hand::draw(&mut deck)?;
        trials += 1;

        if hand.is_full_house() {
            matches += 1;
            debug!("match {matches}/{target} on trial {trials}");
            on_match(&hand);
        }
    }

    Ok(Report { trials, matches })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn runs_to_target() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut hands = Vec::new();

        let report = run(10, &mut rng, |hand| hands.push(hand.clone())).unwrap();

        assert_eq!(report.matches, 10);
        assert!(report.trials >= report.matches);
        assert_eq!(hands.len(), 10);

        for hand in &hands {
            assert_eq!(hand.number_matches(), 8);
            assert!(hand.is_full_house());
        }

        assert_eq!(report.probability(), 100.0 * 10.0 / report.trials as f64);
    }

    #[test]
    fn same_seed_same_run() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let r1 = run(3, &mut rng, |_| ()).unwrap();

        let mut rng = SmallRng::seed_from_u64(1234);
        let r2 = run(3, &mut rng, |_| ()).unwrap();

        assert_eq!(r1, r2);
    }
}
