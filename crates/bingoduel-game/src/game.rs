use bingoduel_core::{Card, CellPosition, CellValue, MarkedCells};
use bingoduel_matcher::{
    BingoLetter, LineCompletion, LookupTable, PositionMap, check_completed_lines,
    generate_lookup_table, generate_position_map,
};

use crate::{GameConfig, GameError, PlayerSlot, Players};

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum FinishReason {
    /// The winner reached the win threshold.
    Lines,
    /// The loser forfeited.
    Forfeit,
}

/// Progress of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum GameStatus {
    /// Players are still calling.
    #[default]
    InProgress,
    /// The round has a winner.
    Finished {
        /// The winning seat.
        winner: PlayerSlot,
        /// How the round was won.
        reason: FinishReason,
    },
}

impl GameStatus {
    /// Returns the winner of a finished round.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerSlot> {
        match self {
            Self::InProgress => None,
            Self::Finished { winner, .. } => Some(winner),
        }
    }
}

/// What a successful call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    /// The seat that called.
    pub caller: PlayerSlot,
    /// The called value.
    pub value: CellValue,
    /// Where each player marked the value, if their card holds it.
    pub marked: Players<Option<CellPosition>>,
    /// Letters each player earned with this call.
    pub new_letters: Players<Vec<BingoLetter>>,
    /// Status after the call.
    pub status: GameStatus,
}

/// Owned copy of a game's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Rules in force.
    pub config: GameConfig,
    /// Round number, starting at 1.
    pub round: u32,
    /// Seat to call next.
    pub turn: PlayerSlot,
    /// Round status.
    pub status: GameStatus,
    /// Rounds won per seat.
    pub scores: Players<u32>,
    /// Values called this round, oldest first.
    pub called: Vec<CellValue>,
    /// Each seat's card.
    pub cards: Players<Card>,
    /// Each seat's marks in ascending order.
    pub marked: Players<Vec<CellValue>>,
    /// Each seat's completed lines and letters.
    pub completions: Players<LineCompletion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlayerBoard {
    card: Card,
    positions: PositionMap,
    lookup: LookupTable,
    marked: MarkedCells,
    completion: LineCompletion,
}

impl PlayerBoard {
    fn deal(cards: [Card; 2]) -> Result<Players<Self>, GameError> {
        let cards = Players::from(cards);
        let positions = PlayerSlot::ALL.map(|player| {
            generate_position_map(&cards[player])
                .map_err(|source| GameError::InvalidCard { player, source })
        });
        let [first_positions, second_positions] = positions;
        let positions = Players::new(first_positions?, second_positions?);

        let board = |player: PlayerSlot| -> Result<Self, GameError> {
            let lookup = generate_lookup_table(&cards[player], &cards[player.other()]).map_err(
                |source| GameError::InvalidCard {
                    player: player.other(),
                    source,
                },
            )?;
            Ok(Self {
                card: cards[player].clone(),
                positions: positions[player].clone(),
                lookup,
                marked: MarkedCells::new(),
                completion: LineCompletion::default(),
            })
        };
        Ok(Players::new(
            board(PlayerSlot::First)?,
            board(PlayerSlot::Second)?,
        ))
    }
}

/// A two-player bingo duel.
///
/// Players take turns calling a value from their own card. Every player whose
/// card holds the called value marks it, and the round ends as soon as a
/// player completes [`GameConfig::win_threshold`] lines. Matches run over
/// any number of rounds; [`Game::scores`] counts rounds won.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{Card, CellValue};
/// use bingoduel_game::{Game, GameConfig, PlayerSlot};
///
/// let first: Card = (1..=25).map(|n| n.to_string()).collect::<Vec<_>>().join(" ").parse()?;
/// let second: Card = (1..=25).rev().map(|n| n.to_string()).collect::<Vec<_>>().join(" ").parse()?;
/// let mut game = Game::new([first, second], GameConfig::default().with_win_threshold(1))?;
///
/// for (player, n) in [(PlayerSlot::First, 1), (PlayerSlot::Second, 2)] {
///     game.call_value(player, CellValue::new(n).unwrap())?;
/// }
/// assert_eq!(game.turn(), PlayerSlot::First);
/// assert_eq!(game.called().len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    boards: Players<PlayerBoard>,
    called: Vec<CellValue>,
    turn: PlayerSlot,
    round: u32,
    scores: Players<u32>,
    status: GameStatus,
}

impl Game {
    /// Starts round 1 with the given cards, first seat's card first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] for an unusable config and
    /// [`GameError::InvalidCard`] if a card holds a duplicate value.
    pub fn new(cards: [Card; 2], config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let boards = PlayerBoard::deal(cards)?;
        log::info!("round 1 started, {} player calls first", config.first_player);
        Ok(Self {
            config,
            boards,
            called: Vec::new(),
            turn: config.first_player,
            round: 1,
            scores: Players::default(),
            status: GameStatus::InProgress,
        })
    }

    /// Returns the rules in force.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the round status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the seat to call next.
    #[must_use]
    pub fn turn(&self) -> PlayerSlot {
        self.turn
    }

    /// Returns the current round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns rounds won per seat.
    #[must_use]
    pub fn scores(&self) -> Players<u32> {
        self.scores
    }

    /// Returns values called this round, oldest first.
    #[must_use]
    pub fn called(&self) -> &[CellValue] {
        &self.called
    }

    /// Returns `player`'s card.
    #[must_use]
    pub fn card(&self, player: PlayerSlot) -> &Card {
        &self.boards[player].card
    }

    /// Returns `player`'s marks.
    #[must_use]
    pub fn marked(&self, player: PlayerSlot) -> &MarkedCells {
        &self.boards[player].marked
    }

    /// Returns `player`'s completed lines and letters.
    #[must_use]
    pub fn completion(&self, player: PlayerSlot) -> &LineCompletion {
        &self.boards[player].completion
    }

    /// Returns the table from `player`'s card to the opponent's card.
    #[must_use]
    pub fn lookup(&self, player: PlayerSlot) -> &LookupTable {
        &self.boards[player].lookup
    }

    /// Returns the value-to-position map of `player`'s card.
    #[must_use]
    pub fn position_map(&self, player: PlayerSlot) -> &PositionMap {
        &self.boards[player].positions
    }

    /// Returns `true` if `value` may still be called this round.
    #[must_use]
    pub fn is_callable(&self, player: PlayerSlot, value: CellValue) -> bool {
        let board = &self.boards[player];
        board.positions.contains(value) && !board.marked.contains(value)
    }

    /// Returns an owned copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            round: self.round,
            turn: self.turn,
            status: self.status,
            scores: self.scores,
            called: self.called.clone(),
            cards: Players::from_fn(|player| self.boards[player].card.clone()),
            marked: Players::from_fn(|player| self.boards[player].marked.to_sorted_vec()),
            completions: Players::from_fn(|player| self.boards[player].completion.clone()),
        }
    }

    /// Calls `value` on behalf of `player`.
    ///
    /// The value is marked on every card holding it, completions are
    /// recomputed, and the turn passes to the opponent. If the call brings
    /// both players to the win threshold at once, the caller wins.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - [`GameError::RoundFinished`] if the round already has a winner,
    /// - [`GameError::NotYourTurn`] if `player` is not on turn,
    /// - [`GameError::ValueNotOnCard`] if `player`'s card lacks `value`,
    /// - [`GameError::AlreadyCalled`] if `value` was called this round.
    pub fn call_value(
        &mut self,
        player: PlayerSlot,
        value: CellValue,
    ) -> Result<CallOutcome, GameError> {
        if self.status.is_finished() {
            return Err(GameError::RoundFinished);
        }
        if player != self.turn {
            return Err(GameError::NotYourTurn { player });
        }
        if !self.boards[player].positions.contains(value) {
            return Err(GameError::ValueNotOnCard { value });
        }
        // every called value is on the caller's card, so the caller has marked it
        if self.boards[player].marked.contains(value) {
            return Err(GameError::AlreadyCalled { value });
        }

        self.called.push(value);
        let mut marked = Players::default();
        let mut new_letters = Players::<Vec<BingoLetter>>::default();
        for slot in PlayerSlot::ALL {
            let board = &mut self.boards[slot];
            let Some(pos) = board.positions.get(value) else {
                continue;
            };
            board.marked.insert(value);
            let completion = check_completed_lines(&board.card, &board.marked);
            new_letters[slot] = completion.letters_since(&board.completion).to_vec();
            board.completion = completion;
            marked[slot] = Some(pos);
        }
        log::debug!(
            "{player} player called {value}, lines {}-{}",
            self.boards[PlayerSlot::First].completion.completed_lines(),
            self.boards[PlayerSlot::Second].completion.completed_lines(),
        );

        let threshold = self.config.win_threshold;
        let winner = [player, player.other()]
            .into_iter()
            .find(|slot| self.boards[*slot].completion.reaches(threshold));
        if let Some(winner) = winner {
            self.finish(winner, FinishReason::Lines);
        }
        self.turn = player.other();

        Ok(CallOutcome {
            caller: player,
            value,
            marked,
            new_letters,
            status: self.status,
        })
    }

    /// Calls the value at `pos` of `player`'s own card.
    ///
    /// # Errors
    ///
    /// Same as [`Game::call_value`]; the value is always on the card.
    pub fn call_cell(
        &mut self,
        player: PlayerSlot,
        pos: CellPosition,
    ) -> Result<CallOutcome, GameError> {
        let value = self.boards[player].card[pos];
        self.call_value(player, value)
    }

    /// Ends the round with `player` conceding, and returns the winner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundFinished`] if the round already has a winner.
    pub fn forfeit(&mut self, player: PlayerSlot) -> Result<PlayerSlot, GameError> {
        if self.status.is_finished() {
            return Err(GameError::RoundFinished);
        }
        let winner = player.other();
        self.finish(winner, FinishReason::Forfeit);
        Ok(winner)
    }

    /// Starts the next round with new cards.
    ///
    /// Marks and call history are cleared and scores are kept. The first
    /// caller alternates from the previous round when
    /// [`GameConfig::alternate_first_player`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundInProgress`] if the current round has no
    /// winner yet, and [`GameError::InvalidCard`] for an unusable card.
    pub fn start_round(&mut self, cards: [Card; 2]) -> Result<(), GameError> {
        if self.status.is_in_progress() {
            return Err(GameError::RoundInProgress);
        }
        self.boards = PlayerBoard::deal(cards)?;
        self.called.clear();
        self.round += 1;
        self.turn = self.first_player_of(self.round);
        self.status = GameStatus::InProgress;
        log::info!(
            "round {} started, {} player calls first",
            self.round,
            self.turn
        );
        Ok(())
    }

    /// Returns who calls first in `round`.
    #[must_use]
    pub fn first_player_of(&self, round: u32) -> PlayerSlot {
        let first = self.config.first_player;
        if self.config.alternate_first_player && round % 2 == 0 {
            first.other()
        } else {
            first
        }
    }

    fn finish(&mut self, winner: PlayerSlot, reason: FinishReason) {
        self.status = GameStatus::Finished { winner, reason };
        self.scores[winner] += 1;
        log::info!(
            "round {} won by {winner} player ({reason:?}), score {}-{}",
            self.round,
            self.scores[PlayerSlot::First],
            self.scores[PlayerSlot::Second],
        );
    }
}
