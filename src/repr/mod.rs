/*!
# Graph Representations

This module defines the undirected graph representations of this crate.

A graph is represented by parameterizing [`UndirectedGraph`] with a
[`Neighborhood`] type, which controls how adjacency information is stored:

- [`AdjArrayUndir`] — adjacency arrays (`Vec<Node>` per vertex),
- [`SparseAdjArrayUndir`] — inline small vectors, preferable for sparse graphs,
- [`AdjMatrixUndir`] — bitset rows, giving O(1) edge tests on dense graphs.
*/

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
