use bingoduel_core::{InvalidCardError, ParseCellValueError};
use bingoduel_game::GameError;
use bingoduel_matcher::InvalidLineError;

/// Exit code for input the user can fix.
const EXIT_INVALID_INPUT: i32 = 2;
/// Exit code for everything else.
const EXIT_FAILURE: i32 = 1;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("invalid mark: {_0}")]
    Mark(#[from] ParseCellValueError),
    #[display("invalid card: {_0}")]
    InvalidCard(#[from] InvalidCardError),
    #[display("{_0}")]
    Line(#[from] InvalidLineError),
    #[display("{_0}")]
    Game(#[from] GameError),
    #[display("failed to write JSON: {_0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Mark(_)
            | Self::InvalidCard(_)
            | Self::Game(GameError::InvalidConfig { .. } | GameError::InvalidCard { .. }) => {
                EXIT_INVALID_INPUT
            }
            Self::Line(_) | Self::Game(_) | Self::Json(_) => EXIT_FAILURE,
        }
    }
}
