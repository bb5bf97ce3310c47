//! A game owned by a dedicated thread.
//!
//! [`GameSession::spawn`] moves a [`Game`] onto its own thread and returns a
//! cloneable [`SessionHandle`]. Requests from every handle go through one
//! queue and are applied one at a time, so calls for one game never race
//! while separate sessions run side by side. Subscribers receive a
//! [`GameEvent`] stream of everything the session applies.

use std::{sync::mpsc, thread};

use bingoduel_core::{Card, CellPosition, CellValue};

pub use self::event::GameEvent;
use crate::{CallOutcome, Game, GameError, GameSnapshot, GameStatus, PlayerSlot, Players};

mod event;

/// Errors returned by [`SessionHandle`] requests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The session thread has stopped.
    #[display("game session is not running")]
    Disconnected,
    /// The session answered with a response for a different request.
    #[display("unexpected session response")]
    UnexpectedResponse,
    /// The game rejected the request.
    #[display("{_0}")]
    Game(#[from] GameError),
}

#[derive(Debug)]
enum SessionRequest {
    CallValue {
        player: PlayerSlot,
        value: CellValue,
    },
    CallCell {
        player: PlayerSlot,
        pos: CellPosition,
    },
    Forfeit {
        player: PlayerSlot,
    },
    StartRound {
        cards: Box<[Card; 2]>,
    },
    Snapshot,
    Subscribe {
        events_tx: mpsc::Sender<GameEvent>,
    },
    Shutdown,
}

#[derive(Debug)]
enum SessionResponse {
    Called(CallOutcome),
    Forfeited(PlayerSlot),
    RoundStarted,
    Snapshot(Box<GameSnapshot>),
    Subscribed,
    Stopped,
    Error(GameError),
}

#[derive(Debug)]
struct SessionRequestEnvelope {
    request: SessionRequest,
    response_tx: mpsc::Sender<SessionResponse>,
}

/// The state owned by a session thread.
#[derive(Debug)]
pub struct GameSession {
    game: Game,
    subscribers: Vec<mpsc::Sender<GameEvent>>,
}

impl GameSession {
    /// Moves `game` onto a new thread and returns a handle to it.
    ///
    /// The thread runs until [`SessionHandle::shutdown`] is called or every
    /// handle is dropped.
    #[must_use]
    pub fn spawn(game: Game) -> SessionHandle {
        let (request_tx, request_rx) = mpsc::channel::<SessionRequestEnvelope>();
        thread::spawn(move || {
            let session = Self {
                game,
                subscribers: Vec::new(),
            };
            session.run(&request_rx);
        });
        SessionHandle { request_tx }
    }

    fn run(mut self, request_rx: &mpsc::Receiver<SessionRequestEnvelope>) {
        log::debug!("game session started");
        while let Ok(envelope) = request_rx.recv() {
            let stop = matches!(envelope.request, SessionRequest::Shutdown);
            let response = self.handle(envelope.request);
            let _ = envelope.response_tx.send(response);
            if stop {
                break;
            }
        }
        log::debug!("game session stopped after round {}", self.game.round());
    }

    fn handle(&mut self, request: SessionRequest) -> SessionResponse {
        match request {
            SessionRequest::CallValue { player, value } => {
                self.call(|game| game.call_value(player, value))
            }
            SessionRequest::CallCell { player, pos } => {
                self.call(|game| game.call_cell(player, pos))
            }
            SessionRequest::Forfeit { player } => match self.game.forfeit(player) {
                Ok(winner) => {
                    self.broadcast_finished();
                    SessionResponse::Forfeited(winner)
                }
                Err(err) => Self::reject(err),
            },
            SessionRequest::StartRound { cards } => match self.game.start_round(*cards) {
                Ok(()) => {
                    self.broadcast(&GameEvent::RoundStarted {
                        round: self.game.round(),
                        first_player: self.game.turn(),
                    });
                    SessionResponse::RoundStarted
                }
                Err(err) => Self::reject(err),
            },
            SessionRequest::Snapshot => SessionResponse::Snapshot(Box::new(self.game.snapshot())),
            SessionRequest::Subscribe { events_tx } => {
                self.subscribers.push(events_tx);
                SessionResponse::Subscribed
            }
            SessionRequest::Shutdown => SessionResponse::Stopped,
        }
    }

    fn call<F>(&mut self, f: F) -> SessionResponse
    where
        F: FnOnce(&mut Game) -> Result<CallOutcome, GameError>,
    {
        match f(&mut self.game) {
            Ok(outcome) => {
                let completed_lines =
                    Players::from_fn(|player| self.game.completion(player).completed_lines());
                for event in GameEvent::from_call(&outcome, completed_lines) {
                    self.broadcast(&event);
                }
                if outcome.status.is_finished() {
                    self.broadcast_finished();
                }
                SessionResponse::Called(outcome)
            }
            Err(err) => Self::reject(err),
        }
    }

    fn reject(err: GameError) -> SessionResponse {
        log::warn!("rejected session request: {err}");
        SessionResponse::Error(err)
    }

    fn broadcast_finished(&mut self) {
        if let GameStatus::Finished { winner, reason } = self.game.status() {
            self.broadcast(&GameEvent::RoundFinished {
                round: self.game.round(),
                winner,
                reason,
                scores: self.game.scores(),
            });
        }
    }

    fn broadcast(&mut self, event: &GameEvent) {
        self.subscribers
            .retain(|events_tx| events_tx.send(event.clone()).is_ok());
    }
}

/// Cloneable handle for sending requests to a [`GameSession`].
///
/// Every method blocks until the session has applied the request.
///
/// # Examples
///
/// ```
/// use bingoduel_core::CellValue;
/// use bingoduel_game::{
///     Game, GameConfig, PlayerSlot,
///     session::{GameEvent, GameSession},
/// };
/// use bingoduel_generator::{CardGenerator, CardSeed};
///
/// let [first, second] = CardGenerator::default().deal(CardSeed::from_bytes([1; 32]), 1);
/// let game = Game::new([first.card, second.card], GameConfig::default())?;
///
/// let handle = GameSession::spawn(game);
/// let events = handle.subscribe()?;
/// handle.call_value(PlayerSlot::First, CellValue::new(13).unwrap())?;
///
/// assert!(events.recv()?.is_value_called());
/// assert_eq!(handle.snapshot()?.called.len(), 1);
/// handle.shutdown()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SessionHandle {
    request_tx: mpsc::Sender<SessionRequestEnvelope>,
}

impl SessionHandle {
    fn request(&self, request: SessionRequest) -> Result<SessionResponse, SessionError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.request_tx
            .send(SessionRequestEnvelope {
                request,
                response_tx,
            })
            .map_err(|_| SessionError::Disconnected)?;
        match response_rx.recv() {
            Ok(SessionResponse::Error(err)) => Err(SessionError::Game(err)),
            Ok(response) => Ok(response),
            Err(_) => Err(SessionError::Disconnected),
        }
    }

    /// Calls `value` for `player`. See [`Game::call_value`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Game`] if the game rejects the call and
    /// [`SessionError::Disconnected`] if the session has stopped.
    pub fn call_value(
        &self,
        player: PlayerSlot,
        value: CellValue,
    ) -> Result<CallOutcome, SessionError> {
        match self.request(SessionRequest::CallValue { player, value })? {
            SessionResponse::Called(outcome) => Ok(outcome),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }

    /// Calls the value at `pos` of `player`'s card. See [`Game::call_cell`].
    ///
    /// # Errors
    ///
    /// Same as [`SessionHandle::call_value`].
    pub fn call_cell(
        &self,
        player: PlayerSlot,
        pos: CellPosition,
    ) -> Result<CallOutcome, SessionError> {
        match self.request(SessionRequest::CallCell { player, pos })? {
            SessionResponse::Called(outcome) => Ok(outcome),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }

    /// Ends the round with `player` conceding, and returns the winner.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Game`] if the round is already finished and
    /// [`SessionError::Disconnected`] if the session has stopped.
    pub fn forfeit(&self, player: PlayerSlot) -> Result<PlayerSlot, SessionError> {
        match self.request(SessionRequest::Forfeit { player })? {
            SessionResponse::Forfeited(winner) => Ok(winner),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }

    /// Starts the next round with new cards. See [`Game::start_round`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Game`] if the round is still running or a card
    /// is invalid, and [`SessionError::Disconnected`] if the session has
    /// stopped.
    pub fn start_round(&self, cards: [Card; 2]) -> Result<(), SessionError> {
        let cards = Box::new(cards);
        match self.request(SessionRequest::StartRound { cards })? {
            SessionResponse::RoundStarted => Ok(()),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }

    /// Returns a copy of the game state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Disconnected`] if the session has stopped.
    pub fn snapshot(&self) -> Result<GameSnapshot, SessionError> {
        match self.request(SessionRequest::Snapshot)? {
            SessionResponse::Snapshot(snapshot) => Ok(*snapshot),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }

    /// Returns a receiver for every event from now on.
    ///
    /// Dropping the receiver unsubscribes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Disconnected`] if the session has stopped.
    pub fn subscribe(&self) -> Result<mpsc::Receiver<GameEvent>, SessionError> {
        let (events_tx, events_rx) = mpsc::channel();
        match self.request(SessionRequest::Subscribe { events_tx })? {
            SessionResponse::Subscribed => Ok(events_rx),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }

    /// Stops the session thread after the requests queued before this one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Disconnected`] if the session already stopped.
    pub fn shutdown(&self) -> Result<(), SessionError> {
        match self.request(SessionRequest::Shutdown)? {
            SessionResponse::Stopped => Ok(()),
            _ => Err(SessionError::UnexpectedResponse),
        }
    }
}
