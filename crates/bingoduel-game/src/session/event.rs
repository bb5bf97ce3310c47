use bingoduel_core::{CellPosition, CellValue};
use bingoduel_matcher::BingoLetter;

use crate::{CallOutcome, FinishReason, PlayerSlot, Players};

/// Notification broadcast to session subscribers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A value was called and marked.
    ValueCalled {
        /// The seat that called.
        caller: PlayerSlot,
        /// The called value.
        value: CellValue,
        /// Where each seat marked it.
        marked: Players<Option<CellPosition>>,
    },
    /// A seat earned letters with the last call.
    LettersEarned {
        /// The seat earning them.
        player: PlayerSlot,
        /// The new letters, in order.
        letters: Vec<BingoLetter>,
        /// The seat's completed-line count after the call.
        completed_lines: usize,
    },
    /// The round ended.
    RoundFinished {
        /// Round number.
        round: u32,
        /// The winning seat.
        winner: PlayerSlot,
        /// How the round was won.
        reason: FinishReason,
        /// Rounds won per seat, this one included.
        scores: Players<u32>,
    },
    /// A new round began.
    RoundStarted {
        /// Round number.
        round: u32,
        /// The seat calling first.
        first_player: PlayerSlot,
    },
}

impl GameEvent {
    /// Expands a call outcome into the events it causes, in broadcast order.
    pub(crate) fn from_call(
        outcome: &CallOutcome,
        completed_lines: Players<usize>,
    ) -> Vec<Self> {
        let mut events = vec![Self::ValueCalled {
            caller: outcome.caller,
            value: outcome.value,
            marked: outcome.marked,
        }];
        for (player, letters) in outcome.new_letters.iter() {
            if !letters.is_empty() {
                events.push(Self::LettersEarned {
                    player,
                    letters: letters.clone(),
                    completed_lines: completed_lines[player],
                });
            }
        }
        events
    }
}
