//! Game engine trait for game implementations.
//!
//! Games implement `GameEngine` to define their rules:
//! - What actions are legal
//! - How actions produce successor states
//! - When a position is terminal
//! - The mobility heuristic (legal-move count per location)
//!
//! The search core is generic over any implementation of this trait and never
//! looks inside a state or action.

use crate::core::player::{PlayerId, PlayerPair};

/// Capability interface the search consumes.
///
/// States are immutable values: `result` returns a fresh successor rather
/// than mutating in place. All operations must be deterministic and
/// side-effect-free; the search relies on this for reproducibility.
///
/// ## Implementation Notes
///
/// - `actions`: non-empty unless `terminal(state)` holds
/// - `result`: only called with actions drawn from `actions(state)`
/// - `player_locations`: both entries must be present in any state produced
///   by `result` after the opening placements
pub trait GameEngine {
    /// Immutable game position.
    type State: Clone + PartialEq;

    /// A move one player can make.
    type Action: Clone + PartialEq + std::fmt::Debug;

    /// A board location occupied by a player.
    type Location: Copy;

    /// All legal actions for the side to move.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Deterministic successor state.
    ///
    /// `action` must be legal in `state`; an illegal action is a
    /// precondition violation and may panic.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether the game is over at this state.
    fn terminal(&self, state: &Self::State) -> bool;

    /// Number of legal moves available from `location` in `state`.
    ///
    /// Used for the fully-expanded check (mobility of the side to move) and
    /// for the rollout scoring heuristic (mobility differential).
    fn legal_move_count(&self, state: &Self::State, location: Self::Location) -> usize;

    /// Current location of each player, absent before their opening placement.
    fn player_locations(&self, state: &Self::State) -> PlayerPair<Option<Self::Location>>;

    /// Number of plies (half-moves) played so far.
    fn ply_count(&self, state: &Self::State) -> u32;

    // === Convenience Methods ===

    /// The side to move, under the alternating-move convention: player 0
    /// moves on even plies, player 1 on odd plies.
    fn to_move(&self, state: &Self::State) -> PlayerId {
        PlayerId::new((self.ply_count(state) % 2) as u8)
    }
}
