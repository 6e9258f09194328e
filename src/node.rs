/*!
# Node Representation

Nodes are plain `u32` values in the range `0..n` where `n` is the number of
nodes of the graph they belong to. This keeps node arrays compact and lets
nodes double as indices without any wrapper type.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
