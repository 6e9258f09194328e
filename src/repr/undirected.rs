use super::*;
use crate::{edge::*, node::*, ops::*};

/// An undirected graph representation
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrixUndir = UndirectedGraph<BitNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
        let mut edges: Vec<Edge> = (0..m_ub)
            .map(|_| {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                Edge(u, v).normalized()
            })
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    macro_rules! repr_tests {
        ($env:ident, $graph:ident) => {
            mod $env {
                use super::*;

                #[test]
                fn graph_new() {
                    for n in 1..20 {
                        let graph = <$graph>::new(n);
                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), 0);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    }
                }

                #[test]
                fn adjacency() {
                    let rng = &mut Pcg64Mcg::seed_from_u64(3);

                    for n in [10 as NumNodes, 20, 50] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, n * 4);

                            let mut adj_matrix: Vec<NodeBitSet> =
                                vec![NodeBitSet::new(n); n as usize];
                            for &Edge(u, v) in &edges {
                                adj_matrix[u as usize].set_bit(v);
                                adj_matrix[v as usize].set_bit(u);
                            }

                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                            assert_eq!(
                                graph.ordered_edges(true).collect_vec(),
                                edges.iter().copied().collect_vec()
                            );

                            for u in 0..n {
                                assert_eq!(
                                    graph.degree_of(u),
                                    adj_matrix[u as usize].cardinality() as NumNodes
                                );
                                for v in 0..n {
                                    assert_eq!(
                                        graph.has_edge(u, v),
                                        adj_matrix[u as usize].get_bit(v)
                                    );
                                }
                            }
                        }
                    }
                }

                #[test]
                fn edge_editing() {
                    let rng = &mut Pcg64Mcg::seed_from_u64(7);
                    let n = 30;
                    let edges = random_edges(rng, n, n * 3);

                    let mut graph = <$graph>::new(n);
                    for &Edge(u, v) in &edges {
                        assert!(!graph.try_add_edge(u, v));
                        assert!(graph.try_add_edge(u, v));
                    }
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                    for &Edge(u, v) in &edges {
                        assert!(graph.try_remove_edge(v, u));
                        assert!(!graph.try_remove_edge(v, u));
                    }
                    assert!(graph.is_singleton_graph());
                }

                #[test]
                fn self_loops() {
                    let mut graph = <$graph>::new(4);
                    graph.add_edge(2, 2);
                    assert!(graph.has_self_loop(2));
                    assert!(!graph.has_self_loop(1));
                    assert_eq!(graph.number_of_edges(), 1);
                    assert_eq!(graph.degree_of(2), 1);
                }
            }
        };
    }

    repr_tests!(adj_array, AdjArrayUndir);
    repr_tests!(sparse_adj_array, SparseAdjArrayUndir);
    repr_tests!(adj_matrix, AdjMatrixUndir);
}
