//! Automated opponents.
//!
//! `OpponentPolicy` is the seam: the baseline `UniformRandom` can be swapped
//! for a searching policy without touching the session.

pub mod policy;

pub use policy::{OpponentPolicy, UniformRandom};
