// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds draw-odds simulator.
//!
//! Deals 5-card hands from fresh shuffled decks until the target number of
//! full houses is seen, prints each matching hand and the observed
//! probability.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

mod sim;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of full houses to stop at.
    #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    target: u64,
    /// Seed for the simulation rng, seeded from the OS if not given.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let report = sim::run(cli.target, &mut rng, |hand| println!("{hand}"))?;

    println!("Probability of a straight is {}%", report.probability());

    Ok(())
}
