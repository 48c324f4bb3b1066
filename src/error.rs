//! Error types returned by the engine.
//!
//! Every failure is recoverable: a rejected move leaves the session exactly
//! as it was before the call.

use crate::core::PlayerId;

/// Errors that can occur when applying or choosing a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{columns})")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is over; reset the board to keep playing")]
    GameOver,

    #[error("it is {expected}'s turn, not {attempted}'s")]
    NotYourTurn {
        expected: PlayerId,
        attempted: PlayerId,
    },

    #[error("the player to move is not automated")]
    NotAutomatedTurn,

    #[error("the opponent policy chose no column")]
    NoColumnChosen,
}

/// Errors that can occur when validating a session configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
