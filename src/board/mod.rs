//! Board representation.
//!
//! - `grid`: cells, gravity drops, column queries
//! - `lines`: N-in-a-row scanning along the four axis families

pub mod grid;
pub mod lines;

pub use grid::{Board, Cell, Columns};
pub use lines::{Axis, Line};
