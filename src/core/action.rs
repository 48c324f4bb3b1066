//! Move records.
//!
//! A move is just a column index; the engine decides where the piece lands.
//! Each accepted drop is recorded as a `Placement` so the presentation layer
//! can highlight the most recent piece or replay the game.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A piece that has landed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player who dropped the piece.
    pub player: PlayerId,

    /// Row the piece landed in (0 is the top row).
    pub row: usize,

    /// Column the piece was dropped into.
    pub column: usize,

    /// 1-based move number since the last reset.
    pub ply: u32,
}

impl Placement {
    /// Create a new placement record.
    #[must_use]
    pub fn new(player: PlayerId, row: usize, column: usize, ply: u32) -> Self {
        Self {
            player,
            row,
            column,
            ply,
        }
    }

    /// Board coordinates as `(row, column)`.
    #[must_use]
    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}
