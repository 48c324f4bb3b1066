//! Line scanning: N-in-a-row detection along the four axis families.
//!
//! Every contiguous window of `length` cells is tested along rows, columns,
//! the rising `/` diagonals and the falling `\` diagonals. A scan is
//! O(rows * columns) per axis, cheap enough to run after every drop.

use serde::Serialize;
use smallvec::SmallVec;

use super::grid::{Board, Cell};
use crate::core::PlayerId;

/// Direction of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
    /// `/`: bottom-left to top-right.
    Rising,
    /// `\`: top-left to bottom-right.
    Falling,
}

impl Axis {
    /// All four axis families, in scan order.
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rising, Axis::Falling];

    /// (row, column) step between consecutive cells.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Rising => (-1, 1),
            Axis::Falling => (1, 1),
        }
    }
}

/// A completed line of same-player pieces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    /// Owner of every cell in the line.
    pub player: PlayerId,
    /// Direction of travel from the first cell.
    pub axis: Axis,
    /// (row, column) of each cell, in travel order.
    pub cells: SmallVec<[(usize, usize); 4]>,
}

impl Board {
    /// Find any window of `length` cells along any axis owned by `player`.
    ///
    /// When several lines exist, which one is returned is unspecified.
    ///
    /// ```
    /// use connect_four::board::Board;
    /// use connect_four::core::PlayerId;
    ///
    /// let mut board = Board::new(6, 7);
    /// for column in 0..4 {
    ///     board.drop_piece(column, PlayerId::FIRST).unwrap();
    /// }
    /// let line = board.find_line(PlayerId::FIRST, 4).unwrap();
    /// assert_eq!(line.cells.as_slice(), &[(5, 0), (5, 1), (5, 2), (5, 3)]);
    /// ```
    #[must_use]
    pub fn find_line(&self, player: PlayerId, length: usize) -> Option<Line> {
        if length == 0 {
            return None;
        }
        Axis::ALL.into_iter().find_map(|axis| {
            self.window_starts(axis, length)
                .find(|&start| self.window_owned_by(start, axis, length, player))
                .map(|start| Line {
                    player,
                    axis,
                    cells: window_cells(start, axis, length).collect(),
                })
        })
    }

    /// Check if `player` has `length` pieces in a row anywhere.
    #[must_use]
    pub fn has_line(&self, player: PlayerId, length: usize) -> bool {
        self.find_line(player, length).is_some()
    }

    /// First cell of every window along `axis` that fits on the board.
    fn window_starts(&self, axis: Axis, length: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = axis.step();
        let span = length as isize - 1;
        let rows = self.rows() as isize;
        let columns = self.columns() as isize;

        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).filter_map(move |column| {
                let end_row = row as isize + dr * span;
                let end_column = column as isize + dc * span;
                let in_bounds =
                    (0..rows).contains(&end_row) && (0..columns).contains(&end_column);
                in_bounds.then_some((row, column))
            })
        })
    }

    fn window_owned_by(
        &self,
        start: (usize, usize),
        axis: Axis,
        length: usize,
        player: PlayerId,
    ) -> bool {
        window_cells(start, axis, length)
            .all(|(row, column)| self.occupant(row, column) == Some(Cell::Occupied(player)))
    }
}

/// Coordinates of a window. `start` must be a valid window start.
fn window_cells(
    start: (usize, usize),
    axis: Axis,
    length: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (dr, dc) = axis.step();
    (0..length as isize).map(move |i| {
        (
            (start.0 as isize + dr * i) as usize,
            (start.1 as isize + dc * i) as usize,
        )
    })
}
