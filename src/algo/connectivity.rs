/*!
# Vertex Connectivity

Determines a maximum size set of vertex-disjoint paths between two vertices,
a minimum size set of vertices whose removal disconnects two vertices, and
the vertex connectivity number of a graph.

All queries are answered via maximum flows on the [vertex-splitting
network](crate::algo::FlowNetwork::vertex_split) of the graph, which is
built once per engine and shared by every query.

# Examples
```
use menger::{prelude::*, algo::*};

// a 4-cycle: two disjoint paths between opposite vertices
let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
let engine = VertexConnectivity::new(&graph);

assert_eq!(engine.count_disjoint_paths(0, 2).unwrap(), 2);
let cut = engine.min_vertex_cut(0, 2).unwrap().unwrap();
assert_eq!(cut.len(), 2);
assert_eq!(engine.connectivity_number(), 2);
```
*/

use std::cell::OnceCell;
use std::fmt::Display;

use fxhash::FxHashSet;
use num::Integer;

use super::network_flow::*;
use crate::{node::*, ops::*, utils::*};

/// Error raised when a vertex argument does not belong to the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidVertex(pub Node);

impl Display for InvalidVertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vertex {} does not belong to the graph", self.0)
    }
}

impl std::error::Error for InvalidVertex {}

/// Engine answering vertex-connectivity queries on an undirected graph.
///
/// The engine owns the vertex-splitting [`FlowNetwork`] of the graph (built
/// lazily on the first query, then reused) and a [`MaxFlowSolver`] strategy
/// chosen at construction time. It is intentionally not `Sync`: every engine
/// instance is meant to be driven from a single thread.
///
/// Pairwise queries on equal or adjacent endpoints are *not applicable*
/// under the vertex-capacity model: they report zero paths respectively an
/// absent cut instead of raising an error.
pub struct VertexConnectivity<'a, G, S = EdmondsKarp>
where
    G: AdjacencyList + AdjacencyTest,
    S: MaxFlowSolver,
{
    graph: &'a G,
    solver: S,
    network: OnceCell<FlowNetwork>,
    global_cut: OnceCell<Option<VertexSet>>,
}

impl<'a, G> VertexConnectivity<'a, G>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
{
    /// Creates an engine using the default [`EdmondsKarp`] solver
    pub fn new(graph: &'a G) -> Self {
        Self::with_solver(graph, EdmondsKarp)
    }
}

impl<'a, G, S> VertexConnectivity<'a, G, S>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    S: MaxFlowSolver,
{
    /// Creates an engine using the provided maximum-flow solver
    pub fn with_solver(graph: &'a G, solver: S) -> Self {
        Self {
            graph,
            solver,
            network: OnceCell::new(),
            global_cut: OnceCell::new(),
        }
    }

    fn check_vertex(&self, v: Node) -> Result<(), InvalidVertex> {
        if v < self.graph.number_of_nodes() {
            Ok(())
        } else {
            Err(InvalidVertex(v))
        }
    }

    fn network(&self) -> &FlowNetwork {
        self.network
            .get_or_init(|| FlowNetwork::vertex_split(self.graph))
    }

    /// Solves the flow problem from `b_source` to `a_target`.
    /// Requires distinct, non-adjacent, valid vertices.
    fn solve(&self, source: Node, target: Node) -> FlowSolution {
        let n = self.graph.number_of_nodes();
        self.solver.solve(self.network(), n + source, target)
    }

    /// Returns *true* if the pair admits no meaningful disjoint-path query
    fn is_undefined_pair(&self, source: Node, target: Node) -> bool {
        source == target || self.graph.has_edge(source, target)
    }

    /// Determines the maximum number of vertex-disjoint paths between
    /// `source` and `target` without creating the paths.
    ///
    /// Returns 0 if `source == target` or the two form an edge (the
    /// path count is undefined under the vertex-capacity model then).
    pub fn count_disjoint_paths(
        &self,
        source: Node,
        target: Node,
    ) -> Result<NumNodes, InvalidVertex> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if self.is_undefined_pair(source, target) {
            return Ok(0);
        }
        Ok(self.solve(source, target).value() as NumNodes)
    }

    /// Determines the smallest maximum number of vertex-disjoint paths
    /// between `source` and any non-adjacent target.
    ///
    /// Returns `None` if no such target exists, i.e. `source` forms an
    /// edge with every other vertex.
    pub fn count_disjoint_paths_from(
        &self,
        source: Node,
    ) -> Result<Option<NumNodes>, InvalidVertex> {
        self.check_vertex(source)?;
        let mut min_count = None;
        for target in self.graph.vertices_range() {
            if self.is_undefined_pair(source, target) {
                continue;
            }
            let count = self.solve(source, target).value() as NumNodes;
            if min_count.is_none() || count < min_count.unwrap() {
                min_count = Some(count);
            }
        }
        Ok(min_count)
    }

    /// Computes a maximum size set of vertex-disjoint paths between `source`
    /// and `target`. Each path is a sequence of graph vertices from `source`
    /// to `target`; the paths share no vertex apart from the endpoints.
    ///
    /// Returns an empty list for equal or adjacent endpoints.
    pub fn disjoint_paths(
        &self,
        source: Node,
        target: Node,
    ) -> Result<Vec<Vec<Node>>, InvalidVertex> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let mut all_paths = Vec::new();
        if self.is_undefined_pair(source, target) {
            return Ok(all_paths);
        }

        let n = self.graph.number_of_nodes();
        let network = self.network();
        let solution = self.solve(source, target);
        let flow_value = solution.value() as usize;

        // The maximum flow decomposes into flows of value 1, each of which
        // follows a path from source to target. For every network vertex,
        // queue up the successors whose arc carries exactly one flow unit.
        let mut saturated: Vec<VertexQueue> = (0..network.number_of_nodes())
            .map(|_| VertexQueue::new())
            .collect();
        for v in 0..network.number_of_nodes() {
            for (i, arc) in network.arcs_of(v).iter().enumerate() {
                if solution.flow_on(v, i) == 1.0 {
                    saturated[v as usize].push(arc.head);
                }
            }
        }

        // Walk from b_source, consuming one saturated successor per step.
        // Every original vertex appears as in-vertex and out-vertex; only
        // record it when landing on the in-vertex (index < n).
        for _ in 0..flow_value {
            let mut path = vec![source];
            let mut v = n + source;
            while v != target {
                v = saturated[v as usize]
                    .poll()
                    .expect("flow decomposes into value-many paths");
                if v < n {
                    path.push(v);
                }
            }
            all_paths.push(path);
        }

        Ok(all_paths)
    }

    /// Maps the cut arcs of a flow solution back to graph vertices: only the
    /// unit vertex-splitting arcs `(a_v, b_v)` have finite capacity, so each
    /// cut arc identifies the vertex `min(tail, head) = a_v = v`.
    fn cut_from_solution(&self, solution: &FlowSolution) -> VertexSet {
        let mut cut = VertexSet::with_capacity(
            self.graph.number_of_nodes(),
            solution.cut_arcs().len(),
        );
        for &(tail, head) in solution.cut_arcs() {
            cut.insert(tail.min(head));
        }
        cut
    }

    /// Computes a minimum size set of vertices whose removal disconnects
    /// `source` and `target`.
    ///
    /// Returns `None` if `source == target` or the two form an edge: no
    /// vertex set can separate the endpoints of an edge.
    pub fn min_vertex_cut(
        &self,
        source: Node,
        target: Node,
    ) -> Result<Option<VertexSet>, InvalidVertex> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if self.is_undefined_pair(source, target) {
            return Ok(None);
        }
        let solution = self.solve(source, target);
        Ok(Some(self.cut_from_solution(&solution)))
    }

    /// Computes the smallest cut among all minimum vertex cuts separating
    /// `source` from some non-adjacent target.
    ///
    /// Returns `None` if no such target exists.
    pub fn min_vertex_cut_from(&self, source: Node) -> Result<Option<VertexSet>, InvalidVertex> {
        self.check_vertex(source)?;
        let mut min_cut: Option<VertexSet> = None;
        for target in self.graph.vertices_range() {
            if self.is_undefined_pair(source, target) {
                continue;
            }
            let cut = self.cut_from_solution(&self.solve(source, target));
            if min_cut.as_ref().map_or(true, |best| cut.len() < best.len()) {
                min_cut = Some(cut);
            }
        }
        Ok(min_cut)
    }

    /// Computes a minimum vertex cut of the whole graph, that is a set of
    /// vertices of minimum size whose removal disconnects the graph.
    ///
    /// Some vertex of degree at most `2m/n` lies outside any minimum cut
    /// together with a non-adjacent partner, so it suffices to try the first
    /// `ceil(2m/n) + 1` vertices as sources against all targets.
    ///
    /// Returns `None` if the graph is complete (no two vertices are
    /// non-adjacent). The result is memoized.
    pub fn global_min_vertex_cut(&self) -> Option<VertexSet> {
        self.global_cut
            .get_or_init(|| self.compute_global_min_cut())
            .clone()
    }

    fn compute_global_min_cut(&self) -> Option<VertexSet> {
        let n = self.graph.number_of_nodes();
        if n == 0 {
            return None;
        }

        let m = self.graph.number_of_edges() as u64;
        let num_sources = (Integer::div_ceil(&(2 * m), &(n as u64)) + 1).min(n as u64) as Node;

        let mut tried: FxHashSet<(Node, Node)> = FxHashSet::default();
        let mut min_cut: Option<VertexSet> = None;

        for source in 0..num_sources {
            for target in self.graph.vertices_range() {
                if self.is_undefined_pair(source, target)
                    || !tried.insert((source.min(target), source.max(target)))
                {
                    continue;
                }
                let cut = self.cut_from_solution(&self.solve(source, target));
                if min_cut.as_ref().map_or(true, |best| cut.len() < best.len()) {
                    min_cut = Some(cut);
                }
            }
        }

        min_cut
    }

    /// Computes the vertex connectivity number, that is the minimum number
    /// of vertices whose removal disconnects the graph. For complete graphs
    /// (which no vertex set disconnects) it returns `n - 1`.
    pub fn connectivity_number(&self) -> NumNodes {
        match self.global_min_vertex_cut() {
            Some(cut) => cut.len() as NumNodes,
            None => self.graph.number_of_nodes().saturating_sub(1),
        }
    }
}
