//! Monte Carlo Tree Search for two-player alternating-move games.
//!
//! ## Overview
//!
//! One decision call builds a partial search tree rooted at the current
//! state, balances exploring untried lines against exploiting known-good
//! ones (UCB1), estimates unexplored positions with uniform random rollouts,
//! and backpropagates the estimates to rank the root's candidate moves.
//! Everything is single-threaded and synchronous; the budget is a fixed
//! iteration count.
//!
//! ## Usage
//!
//! ```rust
//! use isolation_mcts::core::PlayerId;
//! use isolation_mcts::games::isolation::Isolation;
//! use isolation_mcts::mcts::{SearchConfig, SearchEngine};
//!
//! let game = Isolation::default();
//! let state = game.initial_state();
//!
//! let config = SearchConfig::default().with_seed(7);
//! let mut search = SearchEngine::new(game, config);
//!
//! // First two plies are uniformly random placements; afterwards the
//! // engine searches 100 iterations per call.
//! let action = search.decide(&state, PlayerId::new(0));
//! ```
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! let search = SearchEngine::new(game, config)
//!     .with_selection(Ucb1)
//!     .with_rollout(RandomRollout);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use policy::{mobility_reward, RandomRollout, RolloutPolicy, SelectionPolicy, Ucb1};
pub use search::SearchEngine;
pub use stats::SearchStats;
pub use tree::SearchTree;
