/*!
`menger` analyzes the connectivity structure of **undirected graphs**:
how many vertex-disjoint paths exist between two vertices, which minimum
vertex sets disconnect them, what the vertex connectivity number of the
graph is, and how the vertex set can be partitioned into two shores and a
separating set.

# Representation

**Nodes** are `u32` values in the range `0..n` where `n` is the number of
nodes in the graph. **Edges** are a simple tuple-struct `Edge(Node, Node)`;
`Edge(u, v)` is treated as equivalent to `Edge(v, u)`.

See the [`repr`] module for the available graph storage backends:
- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)
- [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir)

# Design

The connectivity queries reduce to maximum flows by **vertex splitting**
(Menger's theorem): every graph vertex becomes an in/out pair joined by a
unit-capacity arc, so that a maximum flow corresponds to a maximum family of
vertex-disjoint paths and every minimum cut identifies a vertex cut. The
[`VertexConnectivity`](crate::algo::VertexConnectivity) engine builds this
network once per graph and issues repeated queries against it; the max-flow
algorithm itself is a strategy
([`MaxFlowSolver`](crate::algo::MaxFlowSolver)) chosen at construction time.

The [`GreedySeparator`](crate::algo::GreedySeparator) heuristic is
independent of the flow machinery and partitions the vertex set into
(left shore, separator, right shore) with a bounded right shore.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations,
  and all standard graph representations,
- [`algo`] includes the connectivity engine, the separator heuristic, the
  flow machinery, and graph traversals,
- [`gens`] includes deterministic substructure generators (paths, cycles,
  cliques),
- [`utils`] includes the vertex container types ([`VertexSet`](crate::utils::VertexSet)
  and friends) used by the algorithms and their results.

In most use-cases, `use menger::{prelude::*, algo::*};` suffices for your needs.

```
use menger::{prelude::*, algo::*};

// a 6-cycle with one chord
let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (1, 4)]);

let engine = VertexConnectivity::new(&graph);
assert_eq!(engine.count_disjoint_paths(0, 3).unwrap(), 2);
assert_eq!(engine.connectivity_number(), 2);

let separator = GreedySeparator::new(&graph).separator().clone();
assert!(separator.is_valid(&graph));
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

/// `menger::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
