/*!
# Greedy Vertex Separators

A **vertex separator** partitions the vertices of a graph into a left shore,
a separator, and a right shore such that no edge joins the two shores.
[`GreedySeparator`] grows the left shore greedily from a minimum-degree
vertex until the right shore fits under a configurable maximum shore size.

There is no guarantee that the separator produced this way is of minimum
size; the algorithm is a heuristic and works directly on the graph, without
any flow machinery.

# Examples
```
use menger::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
let separator = GreedySeparator::with_max_shore_size(&graph, 2).separator().clone();

assert!(separator.is_valid(&graph));
assert!(separator.right_shore().len() <= 2);
```
*/

use std::cell::OnceCell;

use crate::{node::*, ops::*, utils::*};

/// A partition of the vertices of a graph into separator, left shore and
/// right shore such that no edge joins the left and the right shore.
#[derive(Debug, Clone)]
pub struct VertexSeparator {
    separator: VertexSet,
    left_shore: VertexSet,
    right_shore: VertexSet,
}

impl VertexSeparator {
    /// The separating vertex set
    pub fn separator(&self) -> &VertexSet {
        &self.separator
    }

    /// The left shore. Never empty for a non-empty graph.
    pub fn left_shore(&self) -> &VertexSet {
        &self.left_shore
    }

    /// The right shore. May be empty, e.g. for complete graphs.
    pub fn right_shore(&self) -> &VertexSet {
        &self.right_shore
    }

    /// Checks the separator invariants: the three sets partition all
    /// vertices of the graph exactly once and no edge joins the two shores.
    pub fn is_valid<G>(&self, graph: &G) -> bool
    where
        G: AdjacencyList,
    {
        let total = self.separator.len() + self.left_shore.len() + self.right_shore.len();
        if total != graph.len() {
            return false;
        }

        let mut seen = graph.vertex_bitset_unset();
        for v in self
            .separator
            .iter()
            .chain(self.left_shore.iter())
            .chain(self.right_shore.iter())
        {
            if seen.set_bit(v) {
                return false;
            }
        }

        self.left_shore.iter().all(|u| {
            graph
                .neighbors_of(u)
                .all(|w| !self.right_shore.contains(w))
        })
    }
}

/// Greedy heuristic computing a [`VertexSeparator`] whose right shore holds
/// at most `max_shore_size` vertices.
///
/// Starting from a globally minimum-degree vertex as the left shore, the
/// algorithm repeatedly moves the candidate with the fewest neighbors in the
/// right shore into the left shore (separator members are considered before
/// right-shore members, the first minimum wins) and recomputes separator and
/// right shore. Once the left shore would exceed the bound, remaining excess
/// vertices of the right shore are moved into the separator.
///
/// The computed separator is cached for the lifetime of the instance.
pub struct GreedySeparator<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    max_shore_size: NumNodes,
    solution: OnceCell<VertexSeparator>,
}

impl<'a, G> GreedySeparator<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the heuristic with the default maximum shore size of
    /// `max(1, 2n/3)` vertices.
    pub fn new(graph: &'a G) -> Self {
        let default_size = (2 * graph.number_of_nodes() / 3).max(1);
        Self::with_max_shore_size(graph, default_size)
    }

    /// Creates the heuristic with a custom maximum shore size.
    /// ** Panics if `max_shore_size == 0` **
    pub fn with_max_shore_size(graph: &'a G, max_shore_size: NumNodes) -> Self {
        assert!(max_shore_size > 0);
        Self {
            graph,
            max_shore_size,
            solution: OnceCell::new(),
        }
    }

    /// Computes and returns the vertex separator. The result is cached;
    /// repeated calls return the same solution.
    pub fn separator(&self) -> &VertexSeparator {
        self.solution.get_or_init(|| self.compute())
    }

    fn compute(&self) -> VertexSeparator {
        let n = self.graph.number_of_nodes();

        let seed = self.graph.min_degree_vertex();
        let mut left_shore = VertexSet::new(n);
        left_shore.insert(seed);
        let mut separator = VertexSet::from_vertices(n, self.graph.neighbors_of(seed));

        let mut right_shore = VertexSet::full(n);
        right_shore.remove(seed);
        right_shore.remove_all(separator.iter());

        // grow the left shore
        while (left_shore.len() as NumNodes) < self.max_shore_size
            && (right_shore.len() as NumNodes) > self.max_shore_size
        {
            let v = self.choose(&separator, &right_shore);
            left_shore.insert(v);
            separator = self.neighborhood_of(&left_shore);
            right_shore = VertexSet::full(n);
            right_shore.remove_all(left_shore.iter());
            right_shore.remove_all(separator.iter());
        }

        // reduce the right shore, to not exceed the maximum size
        while (right_shore.len() as NumNodes) > self.max_shore_size {
            let v = right_shore.pop().expect("right shore is non-empty");
            separator.insert(v);
        }

        let solution = VertexSeparator {
            separator,
            left_shore,
            right_shore,
        };
        debug_assert!(solution.is_valid(self.graph));
        solution
    }

    /// Chooses the vertex to be moved into the left shore: the first
    /// candidate with the fewest neighbors in the right shore, scanning the
    /// separator before the right shore.
    fn choose(&self, separator: &VertexSet, right_shore: &VertexSet) -> Node {
        let mut min_vertex = INVALID_NODE;
        let mut min_count = usize::MAX;
        for &u in separator.vertices().iter().chain(right_shore.vertices()) {
            let count = self
                .graph
                .neighbors_of(u)
                .filter(|&w| right_shore.contains(w))
                .count();
            if count < min_count {
                min_count = count;
                min_vertex = u;
            }
        }
        debug_assert_ne!(min_vertex, INVALID_NODE);
        min_vertex
    }

    /// The open neighborhood of a vertex set: all neighbors of members that
    /// are not members themselves
    fn neighborhood_of(&self, set: &VertexSet) -> VertexSet {
        let mut neighborhood = VertexSet::new(self.graph.number_of_nodes());
        for u in set.iter() {
            neighborhood.insert_all(self.graph.neighbors_of(u));
        }
        neighborhood.remove_all(set.iter());
        neighborhood
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::GeneratorSubstructures;
    use crate::repr::{AdjArrayUndir, AdjMatrixUndir};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn assert_separator_invariants<G: AdjacencyList>(
        graph: &G,
        separator: &VertexSeparator,
        max_shore_size: NumNodes,
    ) {
        assert!(separator.is_valid(graph));
        assert!(separator.right_shore().len() as NumNodes <= max_shore_size);
    }

    #[test]
    fn path_graph_separator() {
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_path(0..5);

        let algorithm = GreedySeparator::with_max_shore_size(&graph, 2);
        let separator = algorithm.separator();

        assert_separator_invariants(&graph, separator, 2);
        assert!(!separator.left_shore().is_empty());
        assert!(!separator.separator().is_empty());
    }

    #[test]
    fn complete_graph_leaves_right_shore_empty() {
        let mut graph = AdjMatrixUndir::new(6);
        graph.connect_clique(&(0..6).collect_vec());

        let algorithm = GreedySeparator::with_max_shore_size(&graph, 2);
        let separator = algorithm.separator();

        assert_separator_invariants(&graph, separator, 2);
        // the neighborhood of any vertex is everything else
        assert_eq!(separator.left_shore().len(), 1);
        assert_eq!(separator.separator().len(), 5);
        assert!(separator.right_shore().is_empty());
    }

    #[test]
    fn two_cliques_with_bridge_vertex() {
        // cliques {0,1,2} and {4,5,6} joined through vertex 3
        let mut graph = AdjArrayUndir::new(7);
        graph.connect_clique(&[0, 1, 2]);
        graph.connect_clique(&[4, 5, 6]);
        graph.add_edges([(2, 3), (3, 4)]);

        // vertex 3 has minimum degree; its neighborhood {2, 4} separates
        let algorithm = GreedySeparator::with_max_shore_size(&graph, 4);
        let separator = algorithm.separator();

        assert_separator_invariants(&graph, separator, 4);
        assert_eq!(separator.left_shore().vertices(), &[3]);
        assert_eq!(separator.separator().vertices(), &[2, 4]);
        assert_eq!(separator.right_shore().len(), 4);
    }

    #[test]
    fn separator_is_cached() {
        let mut graph = AdjArrayUndir::new(6);
        graph.connect_cycle(0..6);

        let algorithm = GreedySeparator::new(&graph);
        let first = algorithm.separator() as *const VertexSeparator;
        let second = algorithm.separator() as *const VertexSeparator;
        assert_eq!(first, second);
    }

    #[test]
    fn single_vertex_graph() {
        let graph = AdjArrayUndir::new(1);
        let separator = GreedySeparator::with_max_shore_size(&graph, 1)
            .separator()
            .clone();

        assert!(separator.is_valid(&graph));
        assert_eq!(separator.left_shore().vertices(), &[0]);
        assert!(separator.separator().is_empty());
        assert!(separator.right_shore().is_empty());
    }

    #[test]
    fn invariants_hold_on_random_graphs() {
        let rng = &mut Pcg64::seed_from_u64(987);

        for _ in 0..20 {
            let n: NumNodes = rng.random_range(2..30);
            let mut graph = AdjArrayUndir::new(n);
            for _ in 0..rng.random_range(0..3 * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v {
                    graph.try_add_edge(u, v);
                }
            }

            for max_shore_size in [1, n / 2 + 1, n] {
                let algorithm = GreedySeparator::with_max_shore_size(&graph, max_shore_size);
                assert_separator_invariants(&graph, algorithm.separator(), max_shore_size);
            }
        }
    }
}
