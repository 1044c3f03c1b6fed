//! Bundled game implementations.
//!
//! The search core only sees the `GameEngine` trait; these modules exist so
//! integration tests and benchmarks can exercise a real game.

pub mod isolation;
