//! Core engine types: player identity and deterministic RNG.
//!
//! These are the game-agnostic building blocks shared by the search and by
//! game implementations.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerPair};
pub use rng::SearchRng;
