use super::frontier::QueueFrontier;
use super::node::{NodeArena, NodeId, SearchNode};
use crate::error::GraphError;
use crate::graph::{MovieId, PersonId, StarGraph};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// One hop of a path: the shared movie and the person it leads to.
pub type PathStep = (MovieId, PersonId);

/// Hops from the source to the target, in order. Empty iff source == target.
pub type Path = Vec<PathStep>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStats {
    pub people_visited: usize,
    pub duration_secs: f64,
}

enum Phase {
    Expanding,
    Found(NodeId),
    Exhausted,
}

/// Breadth-first search over the co-appearance graph. Owns the frontier,
/// explored set, and node tree for exactly one invocation; nothing survives
/// the call.
struct BfsEngine<'g> {
    graph: &'g StarGraph,
    target: PersonId,
    frontier: QueueFrontier,
    explored: FxHashSet<PersonId>,
    arena: NodeArena,
}

impl<'g> BfsEngine<'g> {
    fn new(graph: &'g StarGraph, source: PersonId, target: PersonId) -> Self {
        let mut arena = NodeArena::new();
        let mut frontier = QueueFrontier::new();
        let root = arena.push(SearchNode {
            state: source,
            parent: None,
            action: None,
        });
        frontier.add(root, source);

        Self {
            graph,
            target,
            frontier,
            explored: FxHashSet::default(),
            arena,
        }
    }

    fn run(&mut self) -> Result<Option<Path>, GraphError> {
        loop {
            match self.step()? {
                Phase::Expanding => continue,
                Phase::Found(goal) => return Ok(Some(self.backtrack(goal))),
                Phase::Exhausted => return Ok(None),
            }
        }
    }

    /// One expansion: dequeue the oldest frontier node, mark its state
    /// explored, and discover its neighbors.
    fn step(&mut self) -> Result<Phase, GraphError> {
        if self.frontier.is_empty() {
            return Ok(Phase::Exhausted);
        }
        let (current, state) = self.frontier.remove()?;
        self.explored.insert(state);

        for (movie, neighbor) in self.graph.neighbors_for_person(state)? {
            // A state already expanded or already queued is skipped outright,
            // even when a different movie reaches it; the first discovery wins.
            if self.explored.contains(&neighbor) || self.frontier.contains_state(neighbor) {
                continue;
            }
            let child = self.arena.push(SearchNode {
                state: neighbor,
                parent: Some(current),
                action: Some(movie),
            });
            if neighbor == self.target {
                return Ok(Phase::Found(child));
            }
            self.frontier.add(child, neighbor);
        }

        Ok(Phase::Expanding)
    }

    /// Walk parent handles from the goal back to the root, collecting the
    /// (movie, person) hop at each node except the root, then flip the
    /// sequence into source -> target order.
    fn backtrack(&self, goal: NodeId) -> Path {
        let mut path = Vec::new();
        let mut node = self.arena.get(goal);
        while let (Some(parent), Some(action)) = (node.parent, node.action) {
            path.push((action, node.state));
            node = self.arena.get(parent);
        }
        path.reverse();
        path
    }
}

/// Shortest chain of shared-movie hops from `source` to `target`, with
/// search statistics. `Ok(None)` means the two are not connected, a normal
/// outcome. Both endpoints must already be resolved against this graph; an
/// unknown id is a caller defect and fails before any expansion.
pub fn bfs_search(
    graph: &StarGraph,
    source: PersonId,
    target: PersonId,
) -> Result<(Option<Path>, SearchStats), GraphError> {
    graph.person(source)?;
    graph.person(target)?;

    let timer = Instant::now();
    if source == target {
        return Ok((
            Some(Vec::new()),
            SearchStats {
                people_visited: 0,
                duration_secs: timer.elapsed().as_secs_f64(),
            },
        ));
    }

    let mut engine = BfsEngine::new(graph, source, target);
    let path = engine.run()?;
    let stats = SearchStats {
        people_visited: engine.explored.len(),
        duration_secs: timer.elapsed().as_secs_f64(),
    };
    Ok((path, stats))
}

/// [`bfs_search`] without the statistics.
pub fn shortest_path(
    graph: &StarGraph,
    source: PersonId,
    target: PersonId,
) -> Result<Option<Path>, GraphError> {
    bfs_search(graph, source, target).map(|(path, _)| path)
}
