//! Game sessions.
//!
//! A `Session` owns one board, its turn cursor, both seats and the move
//! history. There is no global game state: every operation goes through a
//! session the caller owns.

pub mod state;
pub mod snapshot;

pub use snapshot::Snapshot;
pub use state::{DropResult, Session};
