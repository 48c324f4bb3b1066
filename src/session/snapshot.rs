//! Read-only query result handed to a presentation layer.

use serde::Serialize;

use crate::board::{Board, Columns, Line};
use crate::core::{Placement, Player, PlayerId, PlayerMap};
use crate::rules::{Outcome, Status};

/// A copy of everything observable about a session at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub status: Status,
    pub outcome: Outcome,
    pub players: PlayerMap<Player>,
    pub scores: PlayerMap<u32>,
    /// Columns open to the player to move; empty once the game is over.
    pub legal_columns: Columns,
    /// The most recent drop, for highlighting.
    pub last_move: Option<Placement>,
    /// The completed line when the game is won.
    pub winning_line: Option<Line>,
}

impl Snapshot {
    /// The player whose move it is, if the game is live.
    #[must_use]
    pub fn turn(&self) -> Option<PlayerId> {
        self.status.to_move()
    }
}
