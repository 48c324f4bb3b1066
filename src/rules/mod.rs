//! Game rules: win/draw evaluation and the status machine.
//!
//! The board knows nothing about turns; the session asks `judge` for an
//! `Outcome` after every accepted drop and combines it with its turn cursor
//! into a `Status`.

pub mod engine;

pub use engine::{judge, Outcome, Status};
