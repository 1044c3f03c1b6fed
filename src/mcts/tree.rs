//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references: children are
//! plain `NodeId`s and each node stores its parent's `NodeId`, so the upward
//! backpropagation walk needs no reference counting or lifetime gymnastics.

use super::node::{NodeId, SearchNode};

/// Arena-based search tree for one decision.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// Nodes are only appended, never removed; the whole tree is discarded (via
/// `reset`) when the next decision starts.
#[derive(Clone, Debug)]
pub struct SearchTree<S, A> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<S, A>>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl<S, A> SearchTree<S, A> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: S) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(256),
            root: NodeId::new(0),
        };
        tree.nodes.push(SearchNode::root(state));
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S, A> {
        &mut self.nodes[id.0 as usize]
    }

    /// Create a child of `parent` and append it to the parent's child list.
    ///
    /// Returns the new child's ID. The producing action is mandatory; the
    /// root is the only node without one.
    pub fn add_child(&mut self, parent: NodeId, state: S, action: A) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SearchNode::child(parent, state, action));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, state: S) {
        self.nodes.clear();
        self.nodes.push(SearchNode::root(state));
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S, A> {
        self.get(self.root)
    }

    /// Depth of `id`: number of parent links to the root.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while !self.get(current).parent.is_none() {
            current = self.get(current).parent;
            depth += 1;
        }
        depth
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S, A>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}
