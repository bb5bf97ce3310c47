use bingoduel_game::{Game, GameConfig, GameError, PlayerSlot, Players, play_round};
use bingoduel_generator::{CardGenerator, CardLayout, CardSeed};
use rayon::prelude::*;

use super::{StrategyKind, build_strategies};
use crate::error::CliError;

#[derive(Debug, clap::Args)]
pub(crate) struct SimulateArgs {
    /// Number of games to play.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    games: u32,

    /// Seed every game seed is derived from, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<CardSeed>,

    /// Completed lines needed to win.
    #[arg(long, value_name = "LINES", default_value_t = GameConfig::DEFAULT_WIN_THRESHOLD)]
    threshold: usize,

    /// Value layout of the cards.
    #[arg(long, value_name = "LAYOUT", default_value_t = CardLayout::Permutation25)]
    pub(crate) layout: CardLayout,

    /// Strategy of the first seat.
    #[arg(long, value_name = "STRATEGY", default_value = "greedy")]
    strategy: StrategyKind,

    /// Strategy of the second seat.
    #[arg(long, value_name = "STRATEGY", default_value = "random")]
    opponent: StrategyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameResult {
    winner: PlayerSlot,
    calls: usize,
}

#[derive(Debug, PartialEq, Eq)]
struct Summary {
    games: usize,
    wins: Players<usize>,
    total_calls: usize,
    min_calls: Option<usize>,
    max_calls: Option<usize>,
}

impl Summary {
    fn from_results(results: &[GameResult]) -> Self {
        let mut wins = Players::<usize>::default();
        for result in results {
            wins[result.winner] += 1;
        }
        let calls = || results.iter().map(|result| result.calls);
        Self {
            games: results.len(),
            wins,
            total_calls: calls().sum(),
            min_calls: calls().min(),
            max_calls: calls().max(),
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn average_calls(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_calls as f64 / self.games as f64
    }
}

pub(crate) fn run(args: &SimulateArgs) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or_else(CardSeed::random);
    let generator = CardGenerator::new(args.layout);
    let config = GameConfig::default().with_win_threshold(args.threshold);
    config.validate()?;
    let kinds = [args.strategy, args.opponent];

    let results = (0..args.games)
        .into_par_iter()
        .map(|i| play_one(&generator, config, seed.derive(&format!("game-{i}")), kinds))
        .collect::<Result<Vec<_>, GameError>>()?;
    let summary = Summary::from_results(&results);

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Games:");
    println!("  played: {}", summary.games);
    println!("  threshold: {}", config.win_threshold);
    println!("  layout: {}", generator.layout());
    println!();
    println!("Wins:");
    for (player, wins) in summary.wins.iter() {
        println!("  {player} ({}): {wins}", kinds[player.index()].name());
    }
    println!();
    println!("Calls:");
    println!("  average: {:.2}", summary.average_calls());
    if let (Some(min), Some(max)) = (summary.min_calls, summary.max_calls) {
        println!("  min: {min}");
        println!("  max: {max}");
    }
    Ok(())
}

fn play_one(
    generator: &CardGenerator,
    config: GameConfig,
    game_seed: CardSeed,
    kinds: [StrategyKind; 2],
) -> Result<GameResult, GameError> {
    let cards = generator.deal(game_seed, 1).map(|generated| generated.card);
    let mut game = Game::new(cards, config)?;
    let [mut first, mut second] = build_strategies(game_seed, kinds);
    let winner = play_round(&mut game, [&mut *first, &mut *second])?;
    Ok(GameResult {
        winner,
        calls: game.called().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let results = [
            GameResult {
                winner: PlayerSlot::First,
                calls: 10,
            },
            GameResult {
                winner: PlayerSlot::Second,
                calls: 14,
            },
            GameResult {
                winner: PlayerSlot::First,
                calls: 12,
            },
        ];
        let summary = Summary::from_results(&results);
        assert_eq!(summary.wins, Players::new(2, 1));
        assert_eq!(summary.min_calls, Some(10));
        assert_eq!(summary.max_calls, Some(14));
        assert!((summary.average_calls() - 12.0).abs() < f64::EPSILON);
        assert!(Summary::from_results(&[]).average_calls().abs() < f64::EPSILON);
    }

    #[test]
    fn test_play_one_is_reproducible() {
        let generator = CardGenerator::new(CardLayout::Classic75);
        let config = GameConfig::default().with_win_threshold(3);
        let seed = CardSeed::from_bytes([7; 32]);
        let kinds = [StrategyKind::Greedy, StrategyKind::Random];
        let a = play_one(&generator, config, seed, kinds).unwrap();
        let b = play_one(&generator, config, seed, kinds).unwrap();
        assert_eq!(a, b);
        assert!(a.calls >= 3);
    }
}
