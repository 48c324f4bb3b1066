//! # connect-four-engine
//!
//! A two-player gravity-drop connection game engine: players alternate
//! dropping pieces into columns, and the first to line up `connect_length`
//! pieces (four by default) horizontally, vertically or diagonally wins.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: all game state lives in a `Session` the caller
//!    owns. There are no globals.
//!
//! 2. **Gravity by construction**: pieces reach the board only through
//!    `drop`. There is no public cell write.
//!
//! 3. **Recoverable errors**: illegal moves return a `MoveError` and leave
//!    the session untouched.
//!
//! 4. **Injectable randomness**: opponent policies draw from a seeded
//!    `GameRng`, so automated games replay exactly.
//!
//! ## Modules
//!
//! - `core`: players, configuration, move records, RNG
//! - `board`: grid, gravity drop, line scanning
//! - `rules`: outcome evaluation and the status machine
//! - `session`: the game session and its snapshot
//! - `opponent`: automated opponent policies
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use connect_four::{GameConfig, GameRng, Outcome, Session, UniformRandom};
//!
//! let mut session = Session::new(GameConfig::from_entries("Ada", "")).unwrap();
//! let mut rng = GameRng::new(42);
//!
//! while !session.is_terminal() {
//!     if session.awaiting_automated() {
//!         session.play_automated(&UniformRandom, &mut rng).unwrap();
//!     } else {
//!         let column = session.legal_columns()[0];
//!         session.human_drop(column).unwrap();
//!     }
//! }
//! assert_ne!(session.outcome(), Outcome::InProgress);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod opponent;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, Placement, Player, PlayerId, PlayerMap,
};

pub use crate::board::{Axis, Board, Cell, Columns, Line};

pub use crate::rules::{judge, Outcome, Status};

pub use crate::session::{DropResult, Session, Snapshot};

pub use crate::opponent::{OpponentPolicy, UniformRandom};

pub use crate::error::{ConfigError, MoveError};
