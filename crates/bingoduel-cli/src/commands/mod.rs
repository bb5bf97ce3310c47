use bingoduel_game::{GreedyStrategy, RandomStrategy, Strategy};
use bingoduel_generator::CardSeed;
use clap::ValueEnum;

pub(crate) mod card;
pub(crate) mod lines;
pub(crate) mod play;
pub(crate) mod simulate;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum StrategyKind {
    /// Call a random value from the card.
    Random,
    /// Call the value that advances the best line.
    Greedy,
}

impl StrategyKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Greedy => "greedy",
        }
    }

    pub(crate) fn build(self, seed: CardSeed) -> Box<dyn Strategy> {
        match self {
            Self::Random => Box::new(RandomStrategy::new(seed)),
            Self::Greedy => Box::new(GreedyStrategy::new(seed)),
        }
    }
}

/// Builds the two seats' strategies with seeds derived from `seed`.
pub(crate) fn build_strategies(
    seed: CardSeed,
    kinds: [StrategyKind; 2],
) -> [Box<dyn Strategy>; 2] {
    let [first, second] = kinds;
    [
        first.build(seed.derive("strategy/first")),
        second.build(seed.derive("strategy/second")),
    ]
}

/// Writes `text` with every line indented by two spaces.
pub(crate) fn print_indented(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}
