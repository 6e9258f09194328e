/*!
# Substructure Generators

Utility methods to insert common motifs — paths, cycles, cliques — into an
already existing graph. Useful for building benchmark instances and test
fixtures with known connectivity structure.
*/

use itertools::Itertools;

use crate::{node::*, ops::*};

/// Trait for creating additional substructures (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a simple path.
    ///
    /// # Example
    /// ```
    /// use menger::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a cycle: consecutive nodes are joined
    /// by edges and the last node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a clique (complete subgraph).
    /// Edges that already exist are kept as they are.
    fn connect_clique(&mut self, nodes: &[Node]);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();
        let Some(first) = iter.next() else {
            return;
        };

        let mut last = first;
        for v in iter {
            self.add_edge(last, v);
            last = v;
        }
        if last != first {
            self.add_edge(last, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                self.try_add_edge(u, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayUndir;

    #[test]
    fn path() {
        let mut graph = AdjArrayUndir::new(4);
        graph.connect_path(0..4);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.has_edge(0, 1) && graph.has_edge(1, 2) && graph.has_edge(2, 3));
        assert!(!graph.has_edge(0, 3));
    }

    #[test]
    fn cycle() {
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_cycle(0..5);
        assert_eq!(graph.number_of_edges(), 5);
        assert!(graph.has_edge(4, 0));
    }

    #[test]
    fn cycle_of_two_adds_single_edge() {
        let mut graph = AdjArrayUndir::new(2);
        graph.connect_cycle([0, 1]);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn clique() {
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_clique(&[0, 2, 4]);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.has_edge(0, 2) && graph.has_edge(2, 4) && graph.has_edge(0, 4));

        // overlapping cliques tolerate existing edges
        graph.connect_clique(&[0, 1, 2]);
        assert_eq!(graph.number_of_edges(), 5);
    }
}
