//! Fixture types shared by the graph property strategies and runners.

use test_strategy::Arbitrary;

use crate::{Graph, test_utils::graph_from_edges};

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Random spanning tree plus a handful of extra edges.
    #[weight(3)]
    Sparse,
    /// Most vertex pairs joined by an edge.
    #[weight(2)]
    Dense,
    /// Edges drawn from a pool of one to three integral weights.
    #[weight(3)]
    IdenticalWeights,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Vertices placed on a plane and joined by Euclidean distance.
    #[weight(2)]
    Geometric,
}

/// Generated graph together with the traversal source to query.
///
/// Vertex pairs are unique, so the weight matrix and the edge list describe
/// the same graph.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub source: usize,
    pub shape: GraphShape,
}

impl GraphFixture {
    /// Builds the graph described by the fixture.
    pub(super) fn build(&self) -> Graph {
        graph_from_edges(self.vertex_count, &self.edges)
    }
}
