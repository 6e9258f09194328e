use std::fmt::Debug;

use crate::node::*;

/// Collections at or below this size answer membership queries by linear
/// scan and never allocate a bitset.
pub const SMALL_COLLECTION: usize = 10;

/// An ordered collection of vertices of a graph.
///
/// Vertices are kept in insertion order in a growable backing array. Once the
/// collection grows beyond [`SMALL_COLLECTION`] elements, a membership bitset
/// over all `num_nodes` vertices of the graph is built exactly once and kept
/// consistent with every later mutation, so that [`VertexCollection::contains`]
/// runs in O(1) for large collections while small collections stay allocation-free.
///
/// The base type does not enforce uniqueness; owners that need set semantics
/// (see [`VertexSet`]) must not insert duplicates, as the membership bitset
/// cannot track multiplicities.
#[derive(Clone)]
pub struct VertexCollection {
    num_nodes: NumNodes,
    vertices: Vec<Node>,
    bitset: Option<NodeBitSet>,
}

impl VertexCollection {
    /// Creates an empty collection for a graph with `num_nodes` vertices.
    pub fn new(num_nodes: NumNodes) -> Self {
        Self {
            num_nodes,
            vertices: Vec::new(),
            bitset: None,
        }
    }

    /// Creates an empty collection with room for `capacity` vertices.
    pub fn with_capacity(num_nodes: NumNodes, capacity: usize) -> Self {
        Self {
            num_nodes,
            vertices: Vec::with_capacity(capacity),
            bitset: None,
        }
    }

    /// Creates a collection holding the given vertices in order.
    pub fn from_vertices<I>(num_nodes: NumNodes, vertices: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut collection = Self::new(num_nodes);
        collection.add_all(vertices);
        collection
    }

    /// Returns the number of vertices in the collection
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns *true* if this collection has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of nodes of the graph this collection belongs to
    pub fn number_of_graph_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    /// Returns the vertices of the collection as a read-only view of the
    /// backing storage. No copy is made.
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// Returns an iterator over the vertices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.iter().copied()
    }

    /// Returns *true* if this collection contains the vertex `v`.
    ///
    /// Small collections are scanned linearly; larger ones use the
    /// membership bitset.
    pub fn contains(&self, v: Node) -> bool {
        match &self.bitset {
            Some(bitset) => bitset.get_bit(v),
            None => self.vertices.contains(&v),
        }
    }

    /// Appends `v` to the collection in amortized O(1).
    /// No uniqueness check is performed.
    /// ** Panics if `v >= num_nodes` **
    pub fn add(&mut self, v: Node) {
        assert!(v < self.num_nodes);
        self.vertices.push(v);

        if let Some(bitset) = self.bitset.as_mut() {
            bitset.set_bit(v);
        } else if self.vertices.len() > SMALL_COLLECTION {
            // one-time build once the collection outgrows linear scans
            self.bitset = Some(NodeBitSet::new_with_bits_set(
                self.num_nodes,
                self.vertices.iter().copied(),
            ));
        }
    }

    /// Appends all vertices of the iterator
    pub fn add_all<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for v in vertices {
            self.add(v);
        }
    }

    /// Removes the first occurrence of `v`, shifting all later elements one
    /// position to the left so that relative order is preserved.
    /// Returns whether a removal occurred; removing a non-member is a no-op.
    pub fn remove(&mut self, v: Node) -> bool {
        let Some(pos) = self.vertices.iter().position(|&x| x == v) else {
            return false;
        };
        self.vertices.remove(pos);
        if let Some(bitset) = self.bitset.as_mut() {
            bitset.clear_bit(v);
        }
        true
    }

    /// Removes and returns the last vertex of the collection
    pub fn pop(&mut self) -> Option<Node> {
        let v = self.vertices.pop()?;
        if let Some(bitset) = self.bitset.as_mut() {
            bitset.clear_bit(v);
        }
        Some(v)
    }

    /// Removes all vertices. The backing storage (and bitset allocation, if
    /// any) is kept for reuse.
    pub fn clear(&mut self) {
        self.vertices.clear();
        if let Some(bitset) = self.bitset.as_mut() {
            bitset.clear_all();
        }
    }
}

impl Debug for VertexCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.vertices.iter()).finish()
    }
}

/// A set of vertices of a graph: a [`VertexCollection`] without duplicates
/// and with set algebra. Iteration order is insertion order, which several
/// algorithms in this crate rely on for deterministic tie-breaking.
#[derive(Clone)]
pub struct VertexSet {
    inner: VertexCollection,
}

impl VertexSet {
    /// Creates an empty set for a graph with `num_nodes` vertices.
    pub fn new(num_nodes: NumNodes) -> Self {
        Self {
            inner: VertexCollection::new(num_nodes),
        }
    }

    /// Creates an empty set with room for `capacity` vertices.
    pub fn with_capacity(num_nodes: NumNodes, capacity: usize) -> Self {
        Self {
            inner: VertexCollection::with_capacity(num_nodes, capacity),
        }
    }

    /// Creates the full vertex set `{0, .., num_nodes - 1}`.
    pub fn full(num_nodes: NumNodes) -> Self {
        let mut set = Self::with_capacity(num_nodes, num_nodes as usize);
        set.insert_all(0..num_nodes);
        set
    }

    /// Creates a set from the given vertices, ignoring duplicates.
    pub fn from_vertices<I>(num_nodes: NumNodes, vertices: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(num_nodes);
        set.insert_all(vertices);
        set
    }

    /// Returns the number of vertices in the set
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns *true* if the set is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the vertices of the set as a read-only view of the backing storage
    pub fn vertices(&self) -> &[Node] {
        self.inner.vertices()
    }

    /// Returns an iterator over the vertices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.inner.iter()
    }

    /// Returns *true* if the set contains `v`
    pub fn contains(&self, v: Node) -> bool {
        self.inner.contains(v)
    }

    /// Inserts `v` into the set.
    /// Returns *true* exactly if the set changed, i.e. `v` was not present.
    /// ** Panics if `v >= num_nodes` **
    pub fn insert(&mut self, v: Node) -> bool {
        if self.inner.contains(v) {
            return false;
        }
        self.inner.add(v);
        true
    }

    /// Inserts all vertices of the iterator, skipping already present ones
    pub fn insert_all<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for v in vertices {
            self.insert(v);
        }
    }

    /// Removes `v` from the set, preserving the relative order of the
    /// remaining vertices. Returns whether a removal occurred.
    pub fn remove(&mut self, v: Node) -> bool {
        self.inner.remove(v)
    }

    /// Removes all vertices of the iterator from the set
    pub fn remove_all<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for v in vertices {
            self.inner.remove(v);
        }
    }

    /// Removes and returns the last vertex of the set
    pub fn pop(&mut self) -> Option<Node> {
        self.inner.pop()
    }

    /// Removes all vertices, keeping the backing storage for reuse
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the union of both sets.
    /// The result first holds the vertices of `self`, then the new ones of `other`.
    pub fn union(&self, other: &VertexSet) -> VertexSet {
        let mut result = self.clone();
        result.insert_all(other.iter());
        result
    }

    /// Returns the intersection of both sets in the iteration order of `self`
    pub fn intersection(&self, other: &VertexSet) -> VertexSet {
        VertexSet::from_vertices(
            self.inner.num_nodes,
            self.iter().filter(|&v| other.contains(v)),
        )
    }

    /// Returns the set of vertices of `self` that are not in `other`
    pub fn difference(&self, other: &VertexSet) -> VertexSet {
        VertexSet::from_vertices(
            self.inner.num_nodes,
            self.iter().filter(|&v| !other.contains(v)),
        )
    }
}

impl Debug for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

/// A FIFO queue of vertices. Unlike [`VertexCollection`], polling does not
/// shift the backing array; a cursor advances over it instead, so a full
/// push-then-drain cycle is linear overall.
#[derive(Clone, Default)]
pub struct VertexQueue {
    items: Vec<Node>,
    head: usize,
}

impl VertexQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices currently waiting in the queue
    pub fn len(&self) -> usize {
        self.items.len() - self.head
    }

    /// Returns *true* if no vertex is waiting in the queue
    pub fn is_empty(&self) -> bool {
        self.head == self.items.len()
    }

    /// Appends a vertex at the back of the queue
    pub fn push(&mut self, v: Node) {
        self.items.push(v);
    }

    /// Removes and returns the vertex at the front of the queue
    pub fn poll(&mut self) -> Option<Node> {
        let v = *self.items.get(self.head)?;
        self.head += 1;
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_add_and_contains() {
        let mut collection = VertexCollection::new(100);
        for v in 0..(SMALL_COLLECTION as Node) {
            collection.add(v * 2);
        }
        // still below the threshold: linear scans
        assert!(collection.contains(0));
        assert!(collection.contains(18));
        assert!(!collection.contains(1));

        // crossing the threshold builds the bitset
        collection.add(99);
        assert_eq!(collection.len(), SMALL_COLLECTION + 1);
        assert!(collection.contains(99));
        assert!(collection.contains(18));
        assert!(!collection.contains(98));

        // the bitset must stay consistent with later mutations
        collection.add(42);
        assert!(collection.contains(42));
        assert!(collection.remove(42));
        assert!(!collection.contains(42));
    }

    #[test]
    fn collection_remove_keeps_order() {
        let mut collection = VertexCollection::from_vertices(10, [5, 3, 8, 1, 9]);
        assert!(collection.remove(8));
        assert_eq!(collection.vertices(), &[5, 3, 1, 9]);
        assert!(!collection.remove(8));
        assert_eq!(collection.vertices(), &[5, 3, 1, 9]);
    }

    #[test]
    fn collection_pop_and_clear() {
        let mut collection = VertexCollection::from_vertices(50, 0..20);
        assert_eq!(collection.pop(), Some(19));
        assert!(!collection.contains(19));

        collection.clear();
        assert!(collection.is_empty());
        assert!(!collection.contains(0));
        assert_eq!(collection.pop(), None);

        // reusable after clear, including the bitset
        collection.add_all(0..15);
        assert_eq!(collection.len(), 15);
        assert!(collection.contains(14));
        assert!(!collection.contains(19));
    }

    #[test]
    fn set_rejects_duplicates() {
        let mut set = VertexSet::new(30);
        assert!(set.insert(7));
        assert!(!set.insert(7));
        set.insert_all([7, 8, 7, 9]);
        assert_eq!(set.vertices(), &[7, 8, 9]);

        // also for large sets backed by the bitset
        set.insert_all(10..25);
        assert!(!set.insert(20));
        assert_eq!(set.len(), 18);
    }

    #[test]
    fn set_algebra() {
        let a = VertexSet::from_vertices(20, [1, 2, 3, 4, 5]);
        let b = VertexSet::from_vertices(20, [4, 5, 6, 7]);

        assert_eq!(a.union(&b).vertices(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(a.intersection(&b).vertices(), &[4, 5]);
        assert_eq!(a.difference(&b).vertices(), &[1, 2, 3]);
        assert_eq!(b.difference(&a).vertices(), &[6, 7]);
    }

    #[test]
    fn full_set() {
        let mut set = VertexSet::full(6);
        assert_eq!(set.vertices(), &[0, 1, 2, 3, 4, 5]);
        set.remove_all([0, 3]);
        assert_eq!(set.vertices(), &[1, 2, 4, 5]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = VertexQueue::new();
        queue.push(3);
        queue.push(1);
        assert_eq!(queue.poll(), Some(3));
        queue.push(2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.poll(), Some(1));
        assert_eq!(queue.poll(), Some(2));
        assert_eq!(queue.poll(), None);
        assert!(queue.is_empty());
    }
}
