use bingoduel_core::{CellValue, InvalidCardError};

use crate::PlayerSlot;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The win threshold is outside `1..=12`.
    #[display("win threshold must be between 1 and 12, found {win_threshold}")]
    InvalidConfig {
        /// The rejected threshold.
        win_threshold: usize,
    },
    /// A player's card cannot be used.
    #[display("invalid card for the {player} player")]
    InvalidCard {
        /// Owner of the card.
        player: PlayerSlot,
        /// What is wrong with it.
        source: InvalidCardError,
    },
    /// The round already has a winner.
    #[display("the round is already finished")]
    RoundFinished,
    /// A new round was requested before the current one finished.
    #[display("the round is still in progress")]
    RoundInProgress,
    /// The player called out of turn.
    #[display("it is not the {player} player's turn")]
    NotYourTurn {
        /// The player who tried to call.
        player: PlayerSlot,
    },
    /// The called value is not on the caller's card.
    #[display("{value} is not on the caller's card")]
    ValueNotOnCard {
        /// The rejected value.
        value: CellValue,
    },
    /// The called value was called earlier this round.
    #[display("{value} has already been called")]
    AlreadyCalled {
        /// The rejected value.
        value: CellValue,
    },
}
