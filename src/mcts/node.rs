//! Search tree node structure.
//!
//! Uses arena-based allocation with index references (NodeId), avoiding
//! ownership cycles while preserving the parent walk that backpropagation
//! needs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One explored position in the search tree.
///
/// A node is created with `visits = 1`: creation counts as a visit, so the
/// UCB1 denominator is never zero. `reward / visits` is the node's value
/// estimate, meaningful once the node has been backpropagated through at
/// least once.
#[derive(Clone, Debug)]
pub struct SearchNode<S, A> {
    /// Parent node (NONE for root). Used only for the backpropagation walk.
    pub parent: NodeId,

    /// The action applied to the parent's state that produced this state.
    /// `None` only for the root.
    pub action: Option<A>,

    /// The game state this node wraps.
    pub state: S,

    /// Total visits, including the creation visit.
    pub visits: u32,

    /// Running sum of backpropagated rollout rewards.
    pub reward: f64,

    /// Child nodes, in expansion order.
    pub children: SmallVec<[NodeId; 8]>,
}

impl<S, A> SearchNode<S, A> {
    /// Create a root node wrapping `state`.
    pub fn root(state: S) -> Self {
        Self {
            parent: NodeId::NONE,
            action: None,
            state,
            visits: 1,
            reward: 0.0,
            children: SmallVec::new(),
        }
    }

    /// Create a child node. The producing action is required.
    pub fn child(parent: NodeId, state: S, action: A) -> Self {
        Self {
            parent,
            action: Some(action),
            state,
            visits: 1,
            reward: 0.0,
            children: SmallVec::new(),
        }
    }

    /// Record one backpropagated reward.
    pub fn update(&mut self, reward: f64) {
        self.visits += 1;
        self.reward += reward;
    }

    /// Average observed reward (the exploitation term).
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        self.reward / self.visits as f64
    }

    /// Whether this is the root of its tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_root_node() {
        let node: SearchNode<i32, u8> = SearchNode::root(7);

        assert!(node.is_root());
        assert!(node.action.is_none());
        assert_eq!(node.state, 7);
        assert_eq!(node.visits, 1);
        assert_eq!(node.reward, 0.0);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_child_node() {
        let node: SearchNode<i32, u8> = SearchNode::child(NodeId::new(0), 9, 3);

        assert!(!node.is_root());
        assert_eq!(node.parent, NodeId::new(0));
        assert_eq!(node.action, Some(3));
        assert_eq!(node.visits, 1);
    }

    #[test]
    fn test_update() {
        let mut node: SearchNode<i32, u8> = SearchNode::root(0);

        node.update(0.75);
        node.update(0.25);

        assert_eq!(node.visits, 3);
        assert_eq!(node.reward, 1.0);
    }

    #[test]
    fn test_mean_reward() {
        let mut node: SearchNode<i32, u8> = SearchNode::root(0);
        node.visits = 5;
        node.reward = 5.0;

        assert_eq!(node.mean_reward(), 1.0);
    }
}
