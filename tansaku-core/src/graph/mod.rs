//! Fixed-capacity weighted undirected graphs.
//!
//! A [`Graph`] owns its vertices, every edge added to it, and a dense
//! [`WeightMatrix`]. Kruskal's algorithm works from the retained edge list
//! and records the selected edges as vertex adjacency; Dijkstra's algorithm
//! reads the full matrix; breadth-first search follows the recorded spanning
//! tree adjacency only.

mod matrix;
mod mst;
#[cfg(test)]
mod property;
mod traversal;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    vertex::Vertex,
};

pub use self::{matrix::WeightMatrix, mst::SpanningForest};

/// Weighted undirected graph with a vertex capacity fixed at construction.
///
/// # Examples
/// ```
/// use tansaku_core::{Edge, Graph, GraphError, Vertex};
///
/// let mut graph = Graph::new(2);
/// graph.add_vertex(Vertex::new(0))?;
/// graph.add_vertex(Vertex::new(1))?;
/// graph.add_edge(Edge::new(0, 1, 3.0))?;
///
/// assert_eq!(graph.weight(1, 0), Some(3.0));
/// assert!(matches!(
///     graph.add_vertex(Vertex::new(2)),
///     Err(GraphError::CapacityExceeded { capacity: 2 })
/// ));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    capacity: usize,
    weights: WeightMatrix,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph able to hold `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics if the `capacity * capacity` weight matrix cannot be
    /// allocated. Use [`Graph::try_new`] for capacities taken from input.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            weights: WeightMatrix::new(capacity),
            vertices: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Creates a graph holding vertices `0..count`.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::Graph;
    ///
    /// let graph = Graph::with_vertices(4);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.capacity(), 4);
    /// ```
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self::new(count);
        graph.vertices.extend((0..count).map(Vertex::new));
        graph
    }

    /// Creates an empty graph, reporting allocation failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityTooLarge`] when the weight matrix cell
    /// count overflows or the allocator refuses the reservation.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::{Graph, GraphErrorCode};
    ///
    /// assert_eq!(Graph::try_new(8)?.capacity(), 8);
    /// let err = Graph::try_new(usize::MAX).unwrap_err();
    /// assert_eq!(err.code(), GraphErrorCode::CapacityTooLarge);
    /// # Ok::<(), tansaku_core::GraphError>(())
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self> {
        let weights = WeightMatrix::try_new(capacity)?;
        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(capacity)
            .map_err(|_| GraphError::CapacityTooLarge { capacity })?;
        Ok(Self {
            capacity,
            weights,
            vertices,
            edges: Vec::new(),
        })
    }

    /// Fallible counterpart of [`Graph::with_vertices`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityTooLarge`] under the same conditions as
    /// [`Graph::try_new`].
    pub fn try_with_vertices(count: usize) -> Result<Self> {
        let mut graph = Self::try_new(count)?;
        graph.vertices.extend((0..count).map(Vertex::new));
        Ok(graph)
    }

    /// Returns the vertex capacity.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns the number of vertices added so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertices in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Returns every edge added so far, in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the dense weight matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn weights(&self) -> &WeightMatrix { &self.weights }

    /// Returns the direct edge weight between two vertices, if any.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<f64> {
        self.weights.get(left, right)
    }

    /// Looks up a vertex by id.
    #[must_use]
    pub fn get_vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Appends a vertex.
    ///
    /// # Errors
    ///
    /// - [`GraphError::CapacityExceeded`] when the graph is full.
    /// - [`GraphError::NonSequentialVertex`] when the vertex id is not the
    ///   next free position.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        if self.vertices.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let expected = self.vertices.len();
        if vertex.id() != expected {
            return Err(GraphError::NonSequentialVertex {
                expected,
                got: vertex.id(),
            });
        }
        self.vertices.push(vertex);
        Ok(())
    }

    /// Adds an undirected edge.
    ///
    /// The weight is written into both matrix cells for the pair, replacing
    /// any earlier weight; parallel edges are kept in the edge list.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] when an endpoint has not been added.
    /// - [`GraphError::SelfLoop`] when both endpoints are the same vertex.
    /// - [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    /// - [`GraphError::NegativeWeight`] for weights below zero.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (source, destination) = (edge.source(), edge.destination());
        self.require_vertex(source)?;
        self.require_vertex(destination)?;
        if source == destination {
            return Err(GraphError::SelfLoop { vertex: source });
        }

        let weight = edge.weight();
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                from: source,
                to: destination,
            });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: source,
                to: destination,
                weight,
            });
        }

        self.weights.set_symmetric(source, destination, weight);
        self.edges.push(edge);
        Ok(())
    }

    fn require_vertex(&self, id: usize) -> Result<()> {
        if id < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }
}
