//! Game engine trait: the boundary between the search and a concrete game.

pub mod engine;

pub use engine::GameEngine;
