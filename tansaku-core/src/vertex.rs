//! Graph vertices.

use std::{collections::BTreeSet, fmt};

/// A vertex with a stable id and its minimum spanning tree neighbours.
///
/// The id equals the vertex's position in the owning [`crate::Graph`]. The
/// adjacency set only lists vertices joined to this one by edges that the
/// most recent spanning tree computation selected; it stays empty until
/// [`crate::Graph::minimum_spanning_tree_cost`] runs.
///
/// # Examples
/// ```
/// use tansaku_core::Vertex;
///
/// let vertex = Vertex::new(3);
/// assert_eq!(vertex.id(), 3);
/// assert_eq!(vertex.adjacency().count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    id: usize,
    adjacency: BTreeSet<usize>,
}

impl Vertex {
    /// Creates a vertex with no spanning tree neighbours.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            adjacency: BTreeSet::new(),
        }
    }

    /// Returns the vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> usize { self.id }

    /// Iterates the spanning tree neighbours in ascending id order.
    pub fn adjacency(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.adjacency.iter().copied()
    }

    /// Returns `true` when a spanning tree edge joins this vertex to `other`.
    #[must_use]
    pub fn is_adjacent(&self, other: usize) -> bool {
        self.adjacency.contains(&other)
    }

    pub(crate) fn add_adjacency(&mut self, other: usize) {
        self.adjacency.insert(other);
    }

    pub(crate) fn clear_adjacency(&mut self) {
        self.adjacency.clear();
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier {}", self.id)
    }
}
