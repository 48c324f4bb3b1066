//! Core engine types: players, configuration, move records, RNG.
//!
//! These are the building blocks shared by the board, the rules, the session
//! and the opponent policies.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{
    GameConfig, COMPUTER_LABEL, DEFAULT_COLUMNS, DEFAULT_CONNECT_LENGTH, DEFAULT_ROWS,
    MAX_DIMENSION,
};
pub use action::Placement;
