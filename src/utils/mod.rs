/*!
# Utilities

Provides the vertex container types used throughout the crate:
- [`VertexCollection`]: an ordered container of vertices with a lazily built
  membership bitset,
- [`VertexSet`]: a duplicate-free [`VertexCollection`] with set algebra,
- [`VertexQueue`]: a FIFO over vertices used by flow-path reconstruction.
*/

mod collection;

pub use collection::*;
