/*!
# Graph Algorithms

This module provides the connectivity algorithms of this crate, built on top
of the graph representations in [`crate::repr`]:

- [`VertexConnectivity`]: disjoint-path counting, path decomposition,
  minimum vertex cuts, and the vertex connectivity number via maximum flows,
- [`GreedySeparator`]: a flow-free heuristic for balanced vertex separators,
- [`FlowNetwork`] / [`MaxFlowSolver`] / [`EdmondsKarp`]: the flow machinery
  behind the connectivity engine,
- [`Traversal`]: BFS/DFS directly on graphs.
*/

mod connectivity;
mod network_flow;
mod separator;
mod traversal;

pub use crate::gens::GeneratorSubstructures;
pub use connectivity::*;
pub use network_flow::*;
pub use separator::*;
pub use traversal::*;
