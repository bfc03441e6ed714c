//! Minimum spanning tree construction with Kruskal's algorithm.
//!
//! Every computation re-sorts the retained edge list lightest first (stable,
//! so identical parallel edges keep insertion order), replaces the
//! spanning tree adjacency recorded on the vertices, and merges components
//! with a fresh union-find. Running it repeatedly yields the same forest.

use rayon::slice::ParallelSliceMut;
use tracing::{Span, debug, field, instrument};

use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, ascending_weight},
};

use super::Graph;

/// Edges selected by Kruskal's algorithm.
///
/// When the graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the selected edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed weight of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest connects every vertex.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count <= 1
    }
}

impl Graph {
    /// Computes a minimum spanning forest and records it as vertex adjacency.
    ///
    /// Accepts at most `vertex_count - 1` edges. Disconnected graphs yield one
    /// tree per component. Adjacency from earlier computations is discarded.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::{Edge, Graph};
    ///
    /// let mut graph = Graph::with_vertices(4);
    /// graph.add_edge(Edge::new(0, 1, 1.0))?;
    /// graph.add_edge(Edge::new(2, 3, 2.0))?;
    ///
    /// let forest = graph.minimum_spanning_tree();
    /// assert_eq!(forest.edges().len(), 2);
    /// assert_eq!(forest.component_count(), 2);
    /// assert!(graph.get_vertex(0).is_some_and(|vertex| vertex.is_adjacent(1)));
    /// # Ok::<(), tansaku_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.minimum_spanning_tree",
        skip(self),
        fields(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            accepted = field::Empty,
        ),
    )]
    pub fn minimum_spanning_tree(&mut self) -> SpanningForest {
        for vertex in &mut self.vertices {
            vertex.clear_adjacency();
        }

        let vertex_count = self.vertices.len();
        let target = vertex_count.saturating_sub(1);
        let mut ordered = self.edges.clone();
        ordered.par_sort_by(ascending_weight);

        let mut components = DisjointSet::new(vertex_count);
        let mut accepted = Vec::with_capacity(target);
        let mut total_weight = 0.0;

        for edge in ordered {
            if accepted.len() >= target {
                break;
            }
            let (source, destination) = (edge.source(), edge.destination());
            if components.same_component(source, destination) {
                continue;
            }
            components.union(source, destination);
            self.link(source, destination);
            total_weight += edge.weight();
            debug!(
                source,
                destination,
                weight = edge.weight(),
                "accepted spanning tree edge"
            );
            accepted.push(edge);
        }

        #[cfg(feature = "metrics")]
        metrics::counter!("tansaku_mst_edges_accepted")
            .increment(u64::try_from(accepted.len()).unwrap_or(u64::MAX));

        Span::current().record("accepted", accepted.len());
        SpanningForest {
            component_count: vertex_count.saturating_sub(accepted.len()),
            edges: accepted,
            total_weight,
        }
    }

    /// Returns the total weight of a minimum spanning tree.
    ///
    /// Also records the selected edges as vertex adjacency, which
    /// [`Graph::bfs`] follows. For a disconnected graph the cost of the
    /// spanning forest is returned.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::{Edge, Graph};
    ///
    /// let mut graph = Graph::with_vertices(4);
    /// for (source, destination, weight) in [
    ///     (0, 1, 1.0),
    ///     (1, 2, 2.0),
    ///     (2, 3, 3.0),
    ///     (0, 3, 10.0),
    ///     (0, 2, 4.0),
    /// ] {
    ///     graph.add_edge(Edge::new(source, destination, weight))?;
    /// }
    /// assert_eq!(graph.minimum_spanning_tree_cost(), 6.0);
    /// # Ok::<(), tansaku_core::GraphError>(())
    /// ```
    pub fn minimum_spanning_tree_cost(&mut self) -> f64 {
        self.minimum_spanning_tree().total_weight()
    }

    fn link(&mut self, left: usize, right: usize) {
        if let Some(vertex) = self.vertices.get_mut(left) {
            vertex.add_adjacency(right);
        }
        if let Some(vertex) = self.vertices.get_mut(right) {
            vertex.add_adjacency(left);
        }
    }
}
