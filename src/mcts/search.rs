//! Core MCTS search algorithm.
//!
//! Implements the selection/expansion fusion used by the engine: expansion is
//! probabilistically interleaved with exploitation at every step of the
//! descent (a coin flip per node) instead of the textbook "expand until no
//! untried moves remain" rule. Under a large branching factor this keeps the
//! tree shallow-but-wide and lets good lines deepen early.

use std::time::Instant;

use crate::core::player::PlayerId;
use crate::core::rng::SearchRng;
use crate::game::engine::GameEngine;

use super::config::SearchConfig;
use super::node::NodeId;
use super::policy::{RandomRollout, RolloutPolicy, SelectionPolicy, Ucb1};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Main MCTS search context.
///
/// Generic over the game engine type. Owns the configuration, the RNG, and
/// the most recent search tree, and provides [`decide`](Self::decide) to pick
/// the next action. A `SearchEngine` serves one decision call at a time; it
/// is not designed for concurrent invocation.
pub struct SearchEngine<G: GameEngine> {
    /// The game rules.
    engine: G,

    /// Search configuration.
    config: SearchConfig,

    /// Tree built by the most recent decision. Discarded and rebuilt from a
    /// fresh root every turn; no cross-turn subtree reuse.
    tree: Option<SearchTree<G::State, G::Action>>,

    /// RNG threaded through every random choice the search makes.
    rng: SearchRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy<G::State, G::Action>>,

    /// Rollout policy.
    rollout: Box<dyn RolloutPolicy<G>>,

    /// Search statistics.
    stats: SearchStats,
}

impl<G: GameEngine> SearchEngine<G> {
    /// Create a new search context.
    pub fn new(engine: G, config: SearchConfig) -> Self {
        let rng = SearchRng::new(config.seed);

        Self {
            engine,
            config,
            tree: None,
            rng,
            selection: Box::new(Ucb1),
            rollout: Box::new(RandomRollout),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S>(mut self, selection: S) -> Self
    where
        S: SelectionPolicy<G::State, G::Action> + 'static,
    {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom rollout policy.
    pub fn with_rollout<R>(mut self, rollout: R) -> Self
    where
        R: RolloutPolicy<G> + 'static,
    {
        self.rollout = Box::new(rollout);
        self
    }

    /// Decide the next action for `player` at `state`.
    ///
    /// For the first `bootstrap_plies` plies and for terminal states this
    /// returns a uniformly random legal action without searching. Otherwise
    /// it runs `config.iterations` MCTS iterations from a fresh root and
    /// returns the producing action of the root's best child.
    ///
    /// The returned action is always an element of `actions(state)`.
    pub fn decide(&mut self, state: &G::State, player: PlayerId) -> G::Action {
        let start = Instant::now();
        self.stats.reset();

        // Opening bootstrap: too little remaining depth to justify search.
        if self.engine.ply_count(state) < self.config.bootstrap_plies {
            log::trace!("ply below bootstrap threshold, picking a random action");
            return self.random_action(state);
        }

        // Degenerate fallback: no search is meaningful at a terminal state.
        if self.engine.terminal(state) {
            return self.random_action(state);
        }

        let mut tree = SearchTree::new(state.clone());

        for _ in 0..self.config.iterations {
            self.stats.iterations += 1;

            let Some(leaf) = self.tree_policy(&mut tree, player) else {
                continue;
            };

            let mut rollout_rng = self.rng.fork();
            let reward =
                self.rollout
                    .rollout(&self.engine, &tree.get(leaf).state, player, &mut rollout_rng);
            self.stats.rollouts += 1;

            self.backpropagate(&mut tree, leaf, reward);
        }

        let best = self.selection.select(
            &tree,
            tree.root(),
            self.config.exploration_constant,
            &mut self.rng,
        );
        let action = tree
            .get(best)
            .action
            .clone()
            .expect("non-root node is missing its producing action");

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "search complete: {} nodes, depth {}, {} rollouts in {}us -> {:?}",
            tree.len(),
            self.stats.max_depth,
            self.stats.rollouts,
            self.stats.time_us,
            action
        );
        self.tree = Some(tree);

        action
    }

    /// Tree descent: walk from the root until a terminal node is reached or
    /// an expansion occurs.
    ///
    /// At each non-terminal node: no children means expand immediately;
    /// otherwise a fair coin decides between descending via the selection
    /// policy (even when untried actions remain) and expanding if the node is
    /// not yet fully expanded.
    fn tree_policy(
        &mut self,
        tree: &mut SearchTree<G::State, G::Action>,
        _player: PlayerId,
    ) -> Option<NodeId> {
        let mut node = tree.root();

        while !self.engine.terminal(&tree.get(node).state) {
            if tree.get(node).children.is_empty() {
                return Some(self.expand(tree, node));
            }

            if self.rng.gen_bool(0.5) {
                node = self.selection.select(
                    tree,
                    node,
                    self.config.exploration_constant,
                    &mut self.rng,
                );
            } else if !self.fully_expanded(tree, node) {
                return Some(self.expand(tree, node));
            } else {
                node = self.selection.select(
                    tree,
                    node,
                    self.config.exploration_constant,
                    &mut self.rng,
                );
            }
        }

        Some(node)
    }

    /// Whether the side to move at this node has no legal continuation left.
    ///
    /// Delegated to the game's mobility query rather than tracking an
    /// explicit tried-action set.
    fn fully_expanded(&self, tree: &SearchTree<G::State, G::Action>, node: NodeId) -> bool {
        let state = &tree.get(node).state;
        let to_move = self.engine.to_move(state);
        match self.engine.player_locations(state)[to_move] {
            Some(loc) => self.engine.legal_move_count(state, loc) == 0,
            None => false,
        }
    }

    /// Materialize one new child by sampling a uniformly random legal action.
    ///
    /// The sample is not guaranteed to be untried at this node; repeated
    /// sampling may revisit an already-expanded action. This is an accepted
    /// limitation of the sampling scheme, not corrected here.
    fn expand(
        &mut self,
        tree: &mut SearchTree<G::State, G::Action>,
        node: NodeId,
    ) -> NodeId {
        let mut actions = self.engine.actions(&tree.get(node).state);
        assert!(
            !actions.is_empty(),
            "game engine returned no actions for a non-terminal state"
        );
        let idx = self.rng.gen_range_usize(0..actions.len());
        let action = actions.swap_remove(idx);

        let successor = self.engine.result(&tree.get(node).state, &action);
        let locations = self.engine.player_locations(&successor);
        assert!(
            locations[PlayerId::new(0)].is_some() && locations[PlayerId::new(1)].is_some(),
            "successor state is missing a player location"
        );

        let child = tree.add_child(node, successor, action);
        self.stats.nodes_expanded += 1;

        let depth = tree.depth(child) as u32;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }

        child
    }

    /// Walk from `node` up through parent links to the root inclusive,
    /// crediting each visited node with the rollout reward.
    fn backpropagate(
        &mut self,
        tree: &mut SearchTree<G::State, G::Action>,
        node: NodeId,
        reward: f64,
    ) {
        let mut current = node;
        loop {
            tree.get_mut(current).update(reward);
            let parent = tree.get(current).parent;
            if parent.is_none() {
                break;
            }
            current = parent;
        }
    }

    /// Uniformly random legal action, used for the bootstrap plies and for
    /// terminal states.
    fn random_action(&mut self, state: &G::State) -> G::Action {
        let mut actions = self.engine.actions(state);
        assert!(!actions.is_empty(), "game engine returned no actions");
        let idx = self.rng.gen_range_usize(0..actions.len());
        actions.swap_remove(idx)
    }

    /// Get search statistics for the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the tree built by the most recent searched decision, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree<G::State, G::Action>> {
        self.tree.as_ref()
    }

    /// Get the game engine reference.
    pub fn engine(&self) -> &G {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
