//! Outcome evaluation and the session status machine.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::PlayerId;

/// Result of evaluating a board. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line and at least one open column.
    InProgress,
    /// The player completed a line.
    Won(PlayerId),
    /// Board full with no line.
    Drawn,
}

impl Outcome {
    /// Check if no further moves are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

/// Where a session stands.
///
/// ```text
/// AwaitingMove(P) --drop, line for P-----> Won(P)
/// AwaitingMove(P) --drop, board full-----> Drawn
/// AwaitingMove(P) --drop, otherwise------> AwaitingMove(other P)
/// any             --reset----------------> AwaitingMove(first seat)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    AwaitingMove(PlayerId),
    Won(PlayerId),
    Drawn,
}

impl Status {
    /// Combine an outcome with the turn cursor.
    #[must_use]
    pub fn from_outcome(outcome: Outcome, turn: PlayerId) -> Self {
        match outcome {
            Outcome::InProgress => Status::AwaitingMove(turn),
            Outcome::Won(player) => Status::Won(player),
            Outcome::Drawn => Status::Drawn,
        }
    }

    /// Check if the session accepts no further drops.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::AwaitingMove(_))
    }

    /// The player whose move it is, if the game is live.
    #[must_use]
    pub fn to_move(self) -> Option<PlayerId> {
        match self {
            Status::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }
}

/// Evaluate `board` right after `mover` dropped a piece.
///
/// The mover's line is checked before the full-board condition, so a drop
/// that both completes a line and fills the board is a win. The other
/// player must not already hold a line, since play stops at the first one.
#[must_use]
pub fn judge(board: &Board, connect_length: usize, mover: PlayerId) -> Outcome {
    debug_assert!(
        !board.has_line(mover.other(), connect_length),
        "{} already holds a line",
        mover.other()
    );
    if board.has_line(mover, connect_length) {
        Outcome::Won(mover)
    } else if board.is_full() {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
