//! Command-line front end for bingoduel.
//!
//! # Usage
//!
//! Generate a card, optionally reproducing it from a seed:
//!
//! ```sh
//! bingoduel card --layout classic75
//! bingoduel card --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef --json
//! ```
//!
//! Show which lines a set of marks completes, and how the card's cells map onto
//! another card:
//!
//! ```sh
//! bingoduel lines --card "1 2 3 4 5 / 6 7 8 9 10 / 11 12 13 14 15 / 16 17 18 19 20 / 21 22 23 24 25" \
//!     --marks "1,7,13,19,25" --against "25 24 23 22 21 20 19 18 17 16 15 14 13 12 11 10 9 8 7 6 5 4 3 2 1"
//! ```
//!
//! Play a duel between two automatic players, or many of them in parallel:
//!
//! ```sh
//! bingoduel play --strategy greedy --opponent random --rounds 3
//! bingoduel simulate --games 10000 --threshold 3
//! ```

use std::process;

use clap::{Parser, Subcommand};

use self::error::CliError;

mod commands;
mod error;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a bingo card.
    Card(commands::card::CardArgs),
    /// Show the lines of a card and which of them the marks complete.
    Lines(commands::lines::LinesArgs),
    /// Play a duel between two automatic players.
    Play(commands::play::PlayArgs),
    /// Play many independent duels in parallel and report the results.
    Simulate(commands::simulate::SimulateArgs),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result: Result<(), CliError> = match &args.command {
        Command::Card(args) => commands::card::run(args),
        Command::Lines(args) => commands::lines::run(args),
        Command::Play(args) => commands::play::run(args),
        Command::Simulate(args) => commands::simulate::run(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use bingoduel_generator::CardLayout;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bingoduel").chain(args.iter().copied()))
    }

    #[test]
    fn test_layout_names_parse_case_insensitively() {
        let args = parse(&["card", "--layout", "Classic75"]).unwrap();
        let Command::Card(card) = args.command else {
            panic!("expected the card command");
        };
        assert_eq!(card.layout, CardLayout::Classic75);

        let args = parse(&["simulate"]).unwrap();
        let Command::Simulate(simulate) = args.command else {
            panic!("expected the simulate command");
        };
        assert_eq!(simulate.layout, CardLayout::Permutation25);
    }

    #[test]
    fn test_unknown_layout_is_a_usage_error() {
        let err = parse(&["play", "--layout", "classic90"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }
}
