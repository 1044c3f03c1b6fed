//! Search policies for child selection and rollouts.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: how to pick which child to descend into (UCB1)
//! - `RolloutPolicy`: how to estimate a leaf's value (uniform random playout)

use crate::core::player::PlayerId;
use crate::core::rng::SearchRng;
use crate::game::engine::GameEngine;

use super::node::NodeId;
use super::tree::SearchTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to descend into.
pub trait SelectionPolicy<S, A>: Send + Sync {
    /// Select the best child of `node`.
    ///
    /// Panics if `node` has no children; callers must expand first.
    fn select(
        &self,
        tree: &SearchTree<S, A>,
        node: NodeId,
        exploration: f64,
        rng: &mut SearchRng,
    ) -> NodeId;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high mean reward) with exploration (low visits):
/// `score = reward/visits + c * sqrt(2 * ln(parent.visits) / visits)`.
///
/// Children tied at the maximal score are broken uniformly at random. If no
/// child reaches the 0.0 baseline, a uniformly random child is returned
/// instead of failing, so selection always produces a move.
#[derive(Clone, Debug, Default)]
pub struct Ucb1;

impl Ucb1 {
    /// The UCB1 score for one child.
    #[must_use]
    pub fn score(parent_visits: u32, child_visits: u32, child_reward: f64, exploration: f64) -> f64 {
        let exploit = child_reward / child_visits as f64;
        let explore = (2.0 * (parent_visits as f64).ln() / child_visits as f64).sqrt();
        exploit + exploration * explore
    }
}

impl<S, A> SelectionPolicy<S, A> for Ucb1 {
    fn select(
        &self,
        tree: &SearchTree<S, A>,
        node: NodeId,
        exploration: f64,
        rng: &mut SearchRng,
    ) -> NodeId {
        let parent = tree.get(node);
        assert!(
            !parent.children.is_empty(),
            "selection called on a node with no children"
        );

        let mut best_score = 0.0_f64;
        let mut best: Vec<NodeId> = Vec::new();

        for &child_id in &parent.children {
            let child = tree.get(child_id);
            let score = Self::score(parent.visits, child.visits, child.reward, exploration);
            if score == best_score {
                best.push(child_id);
            }
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(child_id);
            }
        }

        // Degenerate case: every child scored below the baseline. Fall back
        // to a uniformly random child rather than failing to move.
        if best.is_empty() {
            let idx = rng.gen_range_usize(0..parent.children.len());
            return parent.children[idx];
        }

        let idx = rng.gen_range_usize(0..best.len());
        best[idx]
    }
}

// =============================================================================
// Rollout Policy
// =============================================================================

/// Policy for estimating a leaf's value via simulation.
pub trait RolloutPolicy<G: GameEngine>: Send + Sync {
    /// Play out `state` to termination and score it from `player`'s
    /// perspective.
    fn rollout(&self, engine: &G, state: &G::State, player: PlayerId, rng: &mut SearchRng) -> f64;
}

/// Uniform random rollout.
///
/// Plays random legal actions until a terminal state, then converts the
/// mobility differential into a reward via [`mobility_reward`].
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl<G: GameEngine> RolloutPolicy<G> for RandomRollout {
    fn rollout(&self, engine: &G, state: &G::State, player: PlayerId, rng: &mut SearchRng) -> f64 {
        let mut state = state.clone();

        while !engine.terminal(&state) {
            let actions = engine.actions(&state);
            assert!(
                !actions.is_empty(),
                "game engine returned no actions for a non-terminal state"
            );
            let idx = rng.gen_range_usize(0..actions.len());
            state = engine.result(&state, &actions[idx]);
        }

        mobility_reward(engine, &state, player)
    }
}

/// Reward for a terminal state: the mobility differential between the two
/// players, normalized into roughly [0, 1].
///
/// `reward = (own - opponent) / 16 + 0.5`, evaluated from `player`'s
/// perspective. The normalization assumes the differential is bounded by
/// about +/-8; values outside that range are not clamped.
pub fn mobility_reward<G: GameEngine>(engine: &G, state: &G::State, player: PlayerId) -> f64 {
    let locations = engine.player_locations(state);
    let own = locations[player]
        .map(|loc| engine.legal_move_count(state, loc))
        .expect("searching player has no location at rollout terminal");
    let opp = locations[player.opponent()]
        .map(|loc| engine.legal_move_count(state, loc))
        .expect("opponent has no location at rollout terminal");

    (own as f64 - opp as f64) / 16.0 + 0.5
}
