use crate::graph::{MovieId, PersonId};

/// Stable handle into a [`NodeArena`]. Handles are only minted by
/// [`NodeArena::push`] and never outlive their search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One discovered state plus the edge that reached it. The root carries
/// neither parent nor action; every other node carries both, and the parent
/// handles form a tree rooted at the search source.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<NodeId>,
    pub action: Option<MovieId>,
}

/// Backing store for one search's node tree. Parent links are integer
/// handles rather than owned references, so backtracking needs no ownership
/// cycles and the whole tree drops with the arena when the search returns.
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let handle = NodeId(self.nodes.len());
        self.nodes.push(node);
        handle
    }

    pub fn get(&self, handle: NodeId) -> &SearchNode {
        &self.nodes[handle.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
