//! Automated opponent policies.
//!
//! A policy sees the session through the same public queries a person
//! would use and draws any randomness from the `GameRng` it is handed.

use crate::core::GameRng;
use crate::session::Session;

/// Chooses a column for the player to move.
pub trait OpponentPolicy: Send + Sync {
    /// Pick one of `session.legal_columns()`.
    ///
    /// Returns `None` if no legal column exists.
    fn choose_column(&self, session: &Session, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random policy.
///
/// Selects uniformly from the columns that still have room.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl OpponentPolicy for UniformRandom {
    fn choose_column(&self, session: &Session, rng: &mut GameRng) -> Option<usize> {
        let legal = session.legal_columns();
        rng.choose(&legal).copied()
    }
}
