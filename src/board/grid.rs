//! The grid and the gravity drop.
//!
//! Row 0 is the top of the board and row `rows - 1` is the bottom. Pieces
//! only ever enter through `drop_piece`, which places them in the lowest
//! empty cell of a column, so no piece can float above an empty cell.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use crate::core::PlayerId;
use crate::error::MoveError;

/// Column indices, inline for boards up to 8 wide.
pub type Columns = SmallVec<[usize; 8]>;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    /// The occupying player, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Check if the cell holds no piece.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// A rows x columns grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The cell at (`row`, `column`), or `None` off the board.
    #[must_use]
    pub fn occupant(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Check that `column` is on the board.
    pub fn check_column(&self, column: usize) -> Result<(), MoveError> {
        if column < self.columns {
            Ok(())
        } else {
            Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            })
        }
    }

    /// The lowest empty row in `column`, or `None` when the column is full.
    ///
    /// ```
    /// use connect_four::board::Board;
    ///
    /// let board = Board::new(6, 7);
    /// assert_eq!(board.next_open_row(0), Ok(Some(5)));
    /// assert!(board.next_open_row(7).is_err());
    /// ```
    pub fn next_open_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(column)?;
        Ok((0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.columns + column].is_empty()))
    }

    /// Drop a piece for `player` into `column`, returning the landing row.
    ///
    /// Fails without touching the board when the column is off the board or
    /// full.
    pub fn drop_piece(&mut self, column: usize, player: PlayerId) -> Result<usize, MoveError> {
        let row = self
            .next_open_row(column)?
            .ok_or(MoveError::ColumnFull { column })?;
        self.cells[row * self.columns + column] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if a column has no open row. Off-board columns count as full.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        !matches!(self.next_open_row(column), Ok(Some(_)))
    }

    /// Number of pieces stacked in `column`.
    #[must_use]
    pub fn column_height(&self, column: usize) -> usize {
        match self.next_open_row(column) {
            Ok(Some(row)) => self.rows - row - 1,
            Ok(None) => self.rows,
            Err(_) => 0,
        }
    }

    /// Columns that can still take a piece, left to right.
    #[must_use]
    pub fn legal_columns(&self) -> Columns {
        (0..self.columns)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Check if every column is full, i.e. the top row is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().take(self.columns).all(|cell| !cell.is_empty())
    }

    /// Check if no piece has been dropped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// Remove every piece.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Write a cell directly. Test boards only; live play goes through
    /// `drop_piece`.
    #[cfg(test)]
    pub(crate) fn place(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * self.columns + column] = cell;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PlayerId = PlayerId::FIRST;
    const YELLOW: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        assert!(board.is_empty());
        for row in 0..6 {
            for column in 0..7 {
                assert_eq!(board.occupant(row, column), Some(Cell::Empty));
            }
        }
        assert_eq!(board.occupant(6, 0), None);
        assert_eq!(board.occupant(0, 7), None);
    }

    #[test]
    fn test_drop_piece_stacks() {
        let mut board = Board::new(6, 7);

        assert_eq!(board.drop_piece(3, RED), Ok(5));
        assert_eq!(board.occupant(5, 3), Some(Cell::Occupied(RED)));

        assert_eq!(board.drop_piece(3, YELLOW), Ok(4));
        assert_eq!(board.occupant(4, 3), Some(Cell::Occupied(YELLOW)));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_fills_up() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.next_open_row(0), Ok(Some(5)));

        for _ in 0..6 {
            board.drop_piece(0, RED).unwrap();
        }

        assert_eq!(board.next_open_row(0), Ok(None));
        assert!(board.is_column_full(0));
        assert_eq!(board.column_height(0), 6);

        let before = board.clone();
        assert_eq!(board.drop_piece(0, YELLOW), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7);
        let err = MoveError::InvalidColumn {
            column: 7,
            columns: 7,
        };
        assert_eq!(board.next_open_row(7), Err(err.clone()));
        assert_eq!(board.drop_piece(7, RED), Err(err));
        assert!(board.is_empty());
        assert!(board.is_column_full(7));
        assert_eq!(board.column_height(7), 0);
    }

    #[test]
    fn test_legal_columns() {
        let mut board = Board::new(4, 4);
        assert_eq!(board.legal_columns().as_slice(), &[0, 1, 2, 3]);

        for _ in 0..4 {
            board.drop_piece(2, RED).unwrap();
        }
        assert_eq!(board.legal_columns().as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(6, 7);
        for column in 0..7 {
            for _ in 0..6 {
                assert!(!board.is_full());
                board.drop_piece(column, RED).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.piece_count(), 42);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(6, 7);
        board.drop_piece(1, RED).unwrap();
        board.clear();
        assert!(board.is_empty());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(4, 4);
        board.drop_piece(0, RED).unwrap();
        board.drop_piece(0, YELLOW).unwrap();
        board.drop_piece(3, RED).unwrap();

        assert_eq!(board.to_string(), "....\n....\nY...\nR..R\n");
    }
}
