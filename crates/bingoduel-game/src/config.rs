use bingoduel_core::LINE_COUNT;

use crate::{GameError, PlayerSlot};

/// Rules of a duel.
///
/// # Examples
///
/// ```
/// use bingoduel_game::{GameConfig, PlayerSlot};
///
/// let config = GameConfig::default()
///     .with_win_threshold(3)
///     .with_first_player(PlayerSlot::Second);
/// assert!(config.validate().is_ok());
/// assert!(config.with_win_threshold(13).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Completed lines needed to win a round.
    pub win_threshold: usize,
    /// Who calls first in the first round.
    pub first_player: PlayerSlot,
    /// Whether the first caller alternates from round to round.
    pub alternate_first_player: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: Self::DEFAULT_WIN_THRESHOLD,
            first_player: PlayerSlot::First,
            alternate_first_player: true,
        }
    }
}

impl GameConfig {
    /// Lines needed to win unless configured otherwise: one per letter of BINGO.
    pub const DEFAULT_WIN_THRESHOLD: usize = 5;

    /// Sets the win threshold.
    #[must_use]
    pub const fn with_win_threshold(mut self, win_threshold: usize) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Sets who calls first in the first round.
    #[must_use]
    pub const fn with_first_player(mut self, first_player: PlayerSlot) -> Self {
        self.first_player = first_player;
        self
    }

    /// Sets whether the first caller alternates between rounds.
    #[must_use]
    pub const fn with_alternate_first_player(mut self, alternate: bool) -> Self {
        self.alternate_first_player = alternate;
        self
    }

    /// Checks that the rules can produce a winner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if the win threshold is zero or
    /// exceeds the 12 lines of a card.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=LINE_COUNT).contains(&self.win_threshold) {
            return Err(GameError::InvalidConfig {
                win_threshold: self.win_threshold,
            });
        }
        Ok(())
    }
}
