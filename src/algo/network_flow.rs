/*!
# Flow Networks and Maximum Flow

This module provides the directed capacitated [`FlowNetwork`] together with
the [`MaxFlowSolver`] strategy trait and the default [`EdmondsKarp`] solver.

The central construction is [`FlowNetwork::vertex_split`]: it transforms an
undirected graph into a network in which every maximum flow corresponds to a
maximum family of **vertex-disjoint paths** (Menger's theorem). Every vertex
`v` of the input graph becomes a pair of network vertices — an in-vertex
`a_v = v` and an out-vertex `b_v = n + v` — joined by an arc of capacity 1,
while the arcs derived from graph edges are [`UNBOUNDED`]. Any flow unit
passing through `v` must pay for the unit arc, so at most one path may use
`v`, and every finite-capacity arc of a minimum cut identifies a cut vertex.

Solvers keep all mutable state (their residual network) per query, so a
single read-only network can serve many source/target pairs.
*/

use std::collections::VecDeque;

use crate::{edge::*, node::*, ops::*};

/// Capacity sentinel for arcs that never constrain a flow.
pub const UNBOUNDED: f64 = f64::INFINITY;

/// A directed arc of a [`FlowNetwork`]
#[derive(Debug, Clone, Copy)]
pub struct FlowArc {
    /// The node this arc points to
    pub head: Node,
    /// The capacity of this arc; [`UNBOUNDED`] if unconstrained
    pub capacity: f64,
}

/// A directed network with per-arc capacities.
///
/// The network is append-only: once built it is treated as read-only by all
/// solvers, which operate on private residual copies.
pub struct FlowNetwork {
    arcs: Vec<Vec<FlowArc>>,
    num_arcs: NumEdges,
}

impl FlowNetwork {
    /// Creates a network with `n` nodes and no arcs
    pub fn new(n: NumNodes) -> Self {
        Self {
            arcs: vec![Vec::new(); n as usize],
            num_arcs: 0,
        }
    }

    /// Returns the number of nodes of the network
    pub fn number_of_nodes(&self) -> NumNodes {
        self.arcs.len() as NumNodes
    }

    /// Returns the number of arcs of the network
    pub fn number_of_arcs(&self) -> NumEdges {
        self.num_arcs
    }

    /// Adds the arc `(tail, head)` with the given capacity.
    /// ** Panics if `tail >= n || head >= n || tail == head` or `capacity < 0` **
    pub fn add_arc(&mut self, tail: Node, head: Node, capacity: f64) {
        assert!((head as usize) < self.arcs.len());
        assert_ne!(tail, head);
        assert!(capacity >= 0.0);
        self.arcs[tail as usize].push(FlowArc { head, capacity });
        self.num_arcs += 1;
    }

    /// Returns the outgoing arcs of `u`.
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[FlowArc] {
        &self.arcs[u as usize]
    }

    /// Builds the vertex-splitting network of an undirected graph.
    ///
    /// For a graph with `n` vertices the network has `2n` vertices: in-vertex
    /// `a_v = v` and out-vertex `b_v = n + v`. Each vertex contributes the
    /// unit arc `(a_v, b_v)`; each undirected edge `{v, w}` (iterated once,
    /// self-loops ignored) contributes the arcs `(b_v, a_w)` and `(b_w, a_v)`
    /// with [`UNBOUNDED`] capacity.
    pub fn vertex_split<G>(graph: &G) -> Self
    where
        G: AdjacencyList,
    {
        let n = graph.number_of_nodes();
        let mut network = Self::new(2 * n);

        for v in graph.vertices_range() {
            network.add_arc(v, n + v, 1.0);
            for w in graph.neighbors_of(v) {
                // visit every edge once; this also drops self-loops
                if v >= w {
                    continue;
                }
                network.add_arc(n + v, w, UNBOUNDED);
                network.add_arc(n + w, v, UNBOUNDED);
            }
        }

        network
    }
}

/// The result of a maximum-flow computation.
///
/// Holds the flow value, the flow carried by every arc of the network
/// (indexed by tail and position within [`FlowNetwork::arcs_of`]), and the
/// arcs of a minimum cut separating source from target.
pub struct FlowSolution {
    value: f64,
    flows: Vec<Vec<f64>>,
    cut_arcs: Vec<(Node, Node)>,
}

impl FlowSolution {
    /// Returns the maximum flow value.
    /// [`UNBOUNDED`] if no finite-capacity cut separates source and target.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the flow carried by the `arc_index`-th arc out of `tail`
    pub fn flow_on(&self, tail: Node, arc_index: usize) -> f64 {
        self.flows[tail as usize][arc_index]
    }

    /// Returns the arcs `(tail, head)` of a minimum cut.
    /// Empty if the flow value is zero or unbounded.
    pub fn cut_arcs(&self) -> &[(Node, Node)] {
        &self.cut_arcs
    }
}

/// Strategy trait for maximum-flow algorithms.
///
/// Implementations must support [`UNBOUNDED`] capacities and must not mutate
/// the network; engines hold a solver chosen at construction time and issue
/// repeated queries against one shared network.
pub trait MaxFlowSolver {
    /// Computes a maximum flow from `source` to `target`.
    /// ** Panics if `source >= n || target >= n || source == target` **
    fn solve(&self, network: &FlowNetwork, source: Node, target: Node) -> FlowSolution;
}

/// Arc of the residual network: paired with its reverse arc via `rev`,
/// the index into the adjacency of `head`.
#[derive(Debug, Clone, Copy)]
struct ResidualArc {
    head: Node,
    residual: f64,
    rev: u32,
}

/// The Edmonds–Karp algorithm: maximum flow via shortest augmenting paths.
///
/// Flow is tracked on the reverse arcs of the residual network rather than
/// derived as `capacity - residual`, which stays well-defined for
/// [`UNBOUNDED`] capacities. If an augmenting path consists of unbounded
/// arcs only, the flow value is reported as [`UNBOUNDED`] and neither flows
/// nor cut are meaningful.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdmondsKarp;

impl EdmondsKarp {
    /// BFS over arcs with positive residual capacity. Returns the visited
    /// set, the predecessor array of `(node, arc_index)` pairs, and whether
    /// the target was reached.
    fn residual_bfs(
        residual: &[Vec<ResidualArc>],
        source: Node,
        target: Node,
    ) -> (NodeBitSet, Vec<(Node, u32)>, bool) {
        let n = residual.len();
        let mut predecessor = vec![(INVALID_NODE, 0); n];
        let mut visited = NodeBitSet::new(n as NumNodes);
        visited.set_bit(source);

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for (i, arc) in residual[u as usize].iter().enumerate() {
                if arc.residual <= 0.0 || visited.get_bit(arc.head) {
                    continue;
                }
                visited.set_bit(arc.head);
                predecessor[arc.head as usize] = (u, i as u32);
                if arc.head == target {
                    return (visited, predecessor, true);
                }
                queue.push_back(arc.head);
            }
        }

        (visited, predecessor, false)
    }
}

impl MaxFlowSolver for EdmondsKarp {
    fn solve(&self, network: &FlowNetwork, source: Node, target: Node) -> FlowSolution {
        let n = network.number_of_nodes();
        assert!(source < n && target < n);
        assert_ne!(source, target);

        // Build the residual network: every network arc becomes a pair of
        // residual arcs. `back_of[u][i]` locates the reverse arc of the
        // i-th arc out of u; its residual capacity equals the flow pushed.
        let mut residual: Vec<Vec<ResidualArc>> = vec![Vec::new(); n as usize];
        let mut back_of: Vec<Vec<u32>> = (0..n)
            .map(|u| vec![0; network.arcs_of(u).len()])
            .collect();

        for u in 0..n {
            for (i, arc) in network.arcs_of(u).iter().enumerate() {
                let forward_pos = residual[u as usize].len() as u32;
                let backward_pos = residual[arc.head as usize].len() as u32;

                residual[u as usize].push(ResidualArc {
                    head: arc.head,
                    residual: arc.capacity,
                    rev: backward_pos,
                });
                residual[arc.head as usize].push(ResidualArc {
                    head: u,
                    residual: 0.0,
                    rev: forward_pos,
                });
                back_of[u as usize][i] = backward_pos;
            }
        }

        let mut value = 0.0;
        let source_side = loop {
            let (visited, predecessor, reached) = Self::residual_bfs(&residual, source, target);
            if !reached {
                break visited;
            }

            let mut bottleneck = f64::INFINITY;
            let mut v = target;
            while v != source {
                let (u, i) = predecessor[v as usize];
                bottleneck = bottleneck.min(residual[u as usize][i as usize].residual);
                v = u;
            }

            if !bottleneck.is_finite() {
                // a path of unbounded arcs only: the maximum flow is infinite
                value = UNBOUNDED;
                break NodeBitSet::new(n);
            }

            let mut v = target;
            while v != source {
                let (u, i) = predecessor[v as usize];
                let rev = residual[u as usize][i as usize].rev;
                residual[u as usize][i as usize].residual -= bottleneck;
                residual[v as usize][rev as usize].residual += bottleneck;
                v = u;
            }

            value += bottleneck;
        };

        // The flow on a network arc equals the residual capacity of its
        // reverse arc (the amount that could be pushed back).
        let flows: Vec<Vec<f64>> = (0..n)
            .map(|u| {
                network
                    .arcs_of(u)
                    .iter()
                    .enumerate()
                    .map(|(i, arc)| {
                        residual[arc.head as usize][back_of[u as usize][i] as usize].residual
                    })
                    .collect()
            })
            .collect();

        // Min cut: network arcs leaving the residual-reachable source side
        let mut cut_arcs = Vec::new();
        if value.is_finite() {
            for u in source_side.iter_set_bits() {
                for arc in network.arcs_of(u) {
                    if arc.capacity > 0.0 && !source_side.get_bit(arc.head) {
                        cut_arcs.push((u, arc.head));
                    }
                }
            }
        }

        FlowSolution {
            value,
            flows,
            cut_arcs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayUndir;

    #[test]
    fn vertex_split_shape() {
        // 4-cycle plus a self-loop, which must be ignored
        let mut graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        graph.add_edge(2, 2);

        let network = FlowNetwork::vertex_split(&graph);
        assert_eq!(network.number_of_nodes(), 8);
        // 4 unit arcs + 2 unbounded arcs per proper edge
        assert_eq!(network.number_of_arcs(), 4 + 2 * 4);

        for v in 0..4 {
            let unit_arcs = network
                .arcs_of(v)
                .iter()
                .filter(|a| a.capacity == 1.0)
                .count();
            assert_eq!(unit_arcs, 1);
            assert_eq!(network.arcs_of(v)[0].head, 4 + v);
            // all arcs out of an out-vertex are unbounded
            assert!(network
                .arcs_of(4 + v)
                .iter()
                .all(|a| a.capacity == UNBOUNDED && a.head < 4));
        }
    }

    #[test]
    fn max_flow_on_unit_network() {
        // two arc-disjoint routes 0 -> 3, one with a shared bottleneck
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 1.0);
        network.add_arc(0, 2, 1.0);
        network.add_arc(1, 3, 1.0);
        network.add_arc(2, 3, 1.0);

        let solution = EdmondsKarp.solve(&network, 0, 3);
        assert_eq!(solution.value(), 2.0);
        assert_eq!(solution.flow_on(0, 0), 1.0);
        assert_eq!(solution.flow_on(0, 1), 1.0);
        assert_eq!(solution.cut_arcs().len(), 2);
    }

    #[test]
    fn max_flow_needs_augmenting_back_arcs() {
        // the classic example where a greedy path must be partially undone
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 1.0);
        network.add_arc(0, 2, 1.0);
        network.add_arc(1, 2, 1.0);
        network.add_arc(1, 3, 1.0);
        network.add_arc(2, 3, 1.0);

        let solution = EdmondsKarp.solve(&network, 0, 3);
        assert_eq!(solution.value(), 2.0);
    }

    #[test]
    fn unbounded_arcs_do_not_appear_in_cuts() {
        // 0 -> 1 unbounded, 1 -> 2 unit, 2 -> 3 unbounded
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, UNBOUNDED);
        network.add_arc(1, 2, 1.0);
        network.add_arc(2, 3, UNBOUNDED);

        let solution = EdmondsKarp.solve(&network, 0, 3);
        assert_eq!(solution.value(), 1.0);
        assert_eq!(solution.cut_arcs(), &[(1, 2)]);
        assert_eq!(solution.flow_on(0, 0), 1.0);
        assert_eq!(solution.flow_on(1, 0), 1.0);
    }

    #[test]
    fn all_unbounded_path_reports_unbounded_value() {
        let mut network = FlowNetwork::new(3);
        network.add_arc(0, 1, UNBOUNDED);
        network.add_arc(1, 2, UNBOUNDED);

        let solution = EdmondsKarp.solve(&network, 0, 2);
        assert_eq!(solution.value(), UNBOUNDED);
        assert!(solution.cut_arcs().is_empty());
    }

    #[test]
    fn disconnected_pair_has_zero_flow_and_empty_cut() {
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 1.0);
        network.add_arc(2, 3, 1.0);

        let solution = EdmondsKarp.solve(&network, 0, 3);
        assert_eq!(solution.value(), 0.0);
        // the source side is {0, 1}; no arc leaves it
        assert!(solution.cut_arcs().is_empty());
    }
}
