/*!
Graph traversal iterators.

BFS and DFS share one implementation, [`TraversalSearch`], parameterized by
the frontier data structure: a queue yields breadth-first order, a stack
depth-first order. Nodes can be excluded up front, which several algorithms
use to traverse the graph "as if" a vertex set had been removed.
*/

use std::collections::VecDeque;

use crate::{node::*, ops::*};

/// Abstraction for the traversal frontier: the order in which it releases
/// nodes determines the traversal order.
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier
    fn pop(&mut self) -> Option<Node>;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Checks if a given node `u` has already been visited
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Excludes a node from the search. It will be treated as if it was
    /// already visited, i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the
    /// frontier. It is therefore highly recommended to call this method
    /// directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Excludes multiple nodes from the search, analogously to
    /// [`TraversalSearch::exclude_node`].
    pub fn with_nodes_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
        self
    }

    /// Consumes the traversal and returns true iff the requested node is
    /// reached from the start node.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v == u)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }
        Some(u)
    }
}

/// Provides convenient traversal methods directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in breadth-first search order.
    ///
    /// # Examples
    /// ```
    /// use menger::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in depth-first search order.
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns *true* if every node is reachable from every other node
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayUndir;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (4, 5)]);
        let order = graph.bfs(0).collect_vec();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn dfs_reaches_all() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (4, 5)]);
        let mut order = graph.dfs(0).collect_vec();
        assert_eq!(order[0], 0);
        order.sort_unstable();
        assert_eq!(order, (0..6).collect_vec());
    }

    #[test]
    fn excluded_nodes_block_paths() {
        // path 0 - 1 - 2 - 3
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(graph.bfs(0).is_node_reachable(3));
        assert!(!graph.bfs(0).with_nodes_excluded([2]).is_node_reachable(3));
    }

    #[test]
    fn connectivity_check() {
        let mut graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert!(!graph.is_connected());
        graph.add_edge(1, 2);
        assert!(graph.is_connected());
    }
}
