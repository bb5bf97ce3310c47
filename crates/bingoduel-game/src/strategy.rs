//! Automatic players.

use std::cmp::Reverse;

use bingoduel_core::{CellValue, Line};
use bingoduel_generator::CardSeed;
use rand::seq::IndexedRandom as _;
use rand_pcg::Pcg64;

use crate::{Game, GameError, PlayerSlot};

/// Picks the next value for an automatic player.
pub trait Strategy {
    /// Returns a short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Chooses a value for `player` to call, or `None` if nothing is callable.
    fn choose(&mut self, game: &Game, player: PlayerSlot) -> Option<CellValue>;
}

fn callable_values(game: &Game, player: PlayerSlot) -> Vec<CellValue> {
    game.card(player)
        .values()
        .filter(|value| game.is_callable(player, *value))
        .collect()
}

/// Calls a uniformly random value from its own card.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: Pcg64,
}

impl RandomStrategy {
    /// Creates a strategy whose choices are determined by `seed`.
    #[must_use]
    pub fn new(seed: CardSeed) -> Self {
        Self { rng: seed.rng() }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, game: &Game, player: PlayerSlot) -> Option<CellValue> {
        callable_values(game, player).choose(&mut self.rng).copied()
    }
}

/// Calls the value that pushes its own best line furthest.
///
/// Candidates are ranked by the most-marked line through the cell, then by
/// the total marks on all lines through it, then by how little the call helps
/// the opponent. Remaining ties are broken at random.
#[derive(Debug, Clone)]
pub struct GreedyStrategy {
    rng: Pcg64,
}

impl GreedyStrategy {
    /// Creates a strategy whose tie-breaks are determined by `seed`.
    #[must_use]
    pub fn new(seed: CardSeed) -> Self {
        Self { rng: seed.rng() }
    }
}

fn line_progress(game: &Game, player: PlayerSlot, line: Line) -> usize {
    let marked = game.marked(player);
    line.values(game.card(player))
        .into_iter()
        .filter(|value| marked.contains(*value))
        .count()
}

fn score(game: &Game, player: PlayerSlot, value: CellValue) -> (usize, usize, Reverse<usize>) {
    let Some(pos) = game.position_map(player).get(value) else {
        return (0, 0, Reverse(usize::MAX));
    };
    let (best, total) = Line::through(pos)
        .map(|line| line_progress(game, player, line))
        .fold((0, 0), |(best, total), n| (best.max(n), total + n));

    let opponent = player.other();
    let opponent_best = game
        .lookup(player)
        .translate(pos)
        .and_then(|target| {
            Line::through(target)
                .map(|line| line_progress(game, opponent, line))
                .max()
        })
        .unwrap_or(0);
    (best, total, Reverse(opponent_best))
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, game: &Game, player: PlayerSlot) -> Option<CellValue> {
        let scored: Vec<_> = callable_values(game, player)
            .into_iter()
            .map(|value| (score(game, player, value), value))
            .collect();
        let best = scored.iter().map(|(score, _)| *score).max()?;
        let candidates: Vec<CellValue> = scored
            .into_iter()
            .filter(|(score, _)| *score == best)
            .map(|(_, value)| value)
            .collect();
        candidates.choose(&mut self.rng).copied()
    }
}

/// Drives the current round to its end and returns the winner.
///
/// Each seat on turn calls what its strategy chooses. A seat with nothing
/// left to call forfeits.
///
/// # Errors
///
/// Returns [`GameError::RoundFinished`] if the round is already over, or any
/// error from a call a strategy got wrong.
pub fn play_round(
    game: &mut Game,
    mut strategies: [&mut dyn Strategy; 2],
) -> Result<PlayerSlot, GameError> {
    if game.status().is_finished() {
        return Err(GameError::RoundFinished);
    }
    loop {
        if let Some(winner) = game.status().winner() {
            return Ok(winner);
        }
        let player = game.turn();
        let strategy = &mut strategies[player.index()];
        match strategy.choose(game, player) {
            Some(value) => {
                log::debug!("{} strategy for {player} player calls {value}", strategy.name());
                game.call_value(player, value)?;
            }
            None => {
                log::warn!("{player} player has nothing left to call, forfeiting");
                game.forfeit(player)?;
            }
        }
    }
}
