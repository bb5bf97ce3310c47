//! Two-player bingo duels.
//!
//! This crate holds all mutable game state; line matching itself is the pure
//! computation in `bingoduel_matcher`.
//!
//! # Overview
//!
//! - [`Game`]: turns, calls, win arbitration, forfeits, and rounds
//! - [`GameConfig`]: the rules of a duel
//! - [`session`]: a [`Game`] owned by its own thread behind a request queue,
//!   with an event stream for subscribers
//! - [`Strategy`]: automatic players, and [`play_round`] to run a round with them
//!
//! # Examples
//!
//! ```
//! use bingoduel_game::{Game, GameConfig, GreedyStrategy, RandomStrategy, play_round};
//! use bingoduel_generator::{CardGenerator, CardSeed};
//!
//! let seed = CardSeed::from_bytes([42; 32]);
//! let [first, second] = CardGenerator::default().deal(seed, 1);
//! let mut game = Game::new([first.card, second.card], GameConfig::default())?;
//!
//! let mut greedy = GreedyStrategy::new(seed.derive("greedy"));
//! let mut random = RandomStrategy::new(seed.derive("random"));
//! let winner = play_round(&mut game, [&mut greedy, &mut random])?;
//!
//! assert!(game.completion(winner).reaches(5));
//! # Ok::<(), bingoduel_game::GameError>(())
//! ```

pub use self::{config::*, error::*, game::*, player::*, strategy::*};

mod config;
mod error;
mod game;
mod player;
pub mod session;
mod strategy;
