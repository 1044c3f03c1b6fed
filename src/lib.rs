//! # isolation-mcts
//!
//! A Monte Carlo Tree Search decision engine for two-player,
//! perfect-information, alternating-move games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: the search is generic over the [`GameEngine`]
//!    capability trait; it never inspects a state or action.
//!
//! 2. **Deterministic**: all randomness flows through one explicitly seeded
//!    RNG, so a fixed seed reproduces an entire decision.
//!
//! 3. **Fixed Budget**: one decision runs a fixed number of iterations
//!    (default 100), single-threaded and synchronous, then returns the best
//!    root action.
//!
//! ## Architecture
//!
//! - **Arena tree**: nodes live in a flat vector and reference each other by
//!   index, preserving the parent walk backpropagation needs without
//!   ownership cycles.
//!
//! - **Selection/expansion fusion**: during descent a fair coin interleaves
//!   UCB1 exploitation with expansion, keeping the tree shallow-but-wide
//!   under large branching factors.
//!
//! - **Mobility rollouts**: leaves are valued by random playout to a
//!   terminal state, scored by the players' mobility differential.
//!
//! ## Modules
//!
//! - `core`: player identity, per-player storage, deterministic RNG
//! - `game`: the `GameEngine` capability trait
//! - `mcts`: tree, node, policies, search orchestration, config, stats
//! - `games`: bundled knight's Isolation implementation

pub mod core;
pub mod game;
pub mod games;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{PlayerId, PlayerPair, SearchRng};

pub use crate::game::GameEngine;

pub use crate::mcts::{
    NodeId, RandomRollout, RolloutPolicy, SearchConfig, SearchEngine, SearchNode, SearchStats,
    SearchTree, SelectionPolicy, Ucb1,
};

pub use crate::games::isolation::{Isolation, IsolationState};
