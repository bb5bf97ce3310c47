use bingoduel_core::Card;
use bingoduel_game::{FinishReason, Game, GameConfig, GameStatus, PlayerSlot, Strategy, play_round};
use bingoduel_generator::{CardGenerator, CardLayout, CardSeed};

use super::{StrategyKind, build_strategies};
use crate::error::CliError;

#[derive(Debug, clap::Args)]
pub(crate) struct PlayArgs {
    /// Value layout of both cards.
    #[arg(long, value_name = "LAYOUT", default_value_t = CardLayout::Permutation25)]
    layout: CardLayout,

    /// Game seed, as 64 hex digits. Drawn at random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<CardSeed>,

    /// Completed lines needed to win a round.
    #[arg(long, value_name = "LINES", default_value_t = GameConfig::DEFAULT_WIN_THRESHOLD)]
    threshold: usize,

    /// Strategy of the first seat.
    #[arg(long, value_name = "STRATEGY", default_value = "greedy")]
    strategy: StrategyKind,

    /// Strategy of the second seat.
    #[arg(long, value_name = "STRATEGY", default_value = "random")]
    opponent: StrategyKind,

    /// Number of rounds to play.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    rounds: u32,
}

pub(crate) fn run(args: &PlayArgs) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or_else(CardSeed::random);
    let generator = CardGenerator::new(args.layout);
    let config = GameConfig::default().with_win_threshold(args.threshold);
    let mut strategies = build_strategies(seed, [args.strategy, args.opponent]);

    println!("Seed:");
    println!("  {seed}");
    println!();

    let mut game = Game::new(deal(&generator, seed, 1), config)?;
    for round in 1..=args.rounds {
        if round > 1 {
            game.start_round(deal(&generator, seed, round))?;
        }
        let [first, second] = &mut strategies;
        play_round(&mut game, [&mut **first, &mut **second])?;
        print_round(&game, &strategies);
    }

    let scores = game.scores();
    println!("Scores:");
    for (player, score) in scores.iter() {
        println!("  {player} ({}): {score}", strategies[player.index()].name());
    }
    Ok(())
}

fn deal(generator: &CardGenerator, seed: CardSeed, round: u32) -> [Card; 2] {
    generator.deal(seed, round).map(|generated| generated.card)
}

fn seat_label(player: PlayerSlot, strategies: &[Box<dyn Strategy>; 2]) -> String {
    format!("{player} ({})", strategies[player.index()].name())
}

fn print_round(game: &Game, strategies: &[Box<dyn Strategy>; 2]) {
    println!("Round {}:", game.round());
    for player in PlayerSlot::ALL {
        println!("  {} card:", seat_label(player, strategies));
        for line in game.card(player).to_string().lines() {
            println!("    {line}");
        }
    }

    let opener = game.first_player_of(game.round());
    println!("  Calls:");
    for (i, value) in game.called().iter().enumerate() {
        let caller = if i % 2 == 0 { opener } else { opener.other() };
        println!("    {:>2}. {caller}: {value}", i + 1);
    }

    println!("  Lines:");
    for player in PlayerSlot::ALL {
        let completion = game.completion(player);
        println!(
            "    {player}: {} {}",
            completion.completed_lines(),
            completion.word()
        );
    }

    if let GameStatus::Finished { winner, reason } = game.status() {
        let how = match reason {
            FinishReason::Lines => "by lines",
            FinishReason::Forfeit => "by forfeit",
        };
        println!("  Winner: {} {how}", seat_label(winner, strategies));
    }
    println!();
}
