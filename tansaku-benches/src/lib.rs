//! Benchmark support crate for tansaku.
//!
//! Generates seeded random geometric graphs for the Criterion benchmarks
//! covering minimum spanning tree construction, Dijkstra, and breadth-first
//! search.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tansaku_core::{Edge, Graph, GraphError, Point};

/// Side length of the square the generated points are scattered over.
const SIDE: f64 = 1_000.0;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The generated graph rejected an edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

/// Shape of a synthetic geometric graph.
#[derive(Clone, Debug)]
pub struct GeometricGraphConfig {
    /// Number of vertices, each placed at a random point.
    pub vertex_count: usize,
    /// Extra random neighbours drawn per vertex on top of the spine.
    pub extra_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl fmt::Display for GeometricGraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.extra_degree)
    }
}

/// Builds a connected graph whose edge weights are Euclidean distances.
///
/// Vertex `i` is joined to `i - 1` so every vertex is reachable from `0`,
/// then to `extra_degree` further vertices chosen uniformly at random.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
/// [`BenchSetupError::Graph`] if the graph rejects a generated edge.
///
/// # Examples
/// ```
/// use tansaku_benches::{GeometricGraphConfig, geometric_graph};
///
/// let graph = geometric_graph(&GeometricGraphConfig {
///     vertex_count: 16,
///     extra_degree: 2,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 16);
/// assert!(graph.dijkstra(0)?.distance_to(15).is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn geometric_graph(config: &GeometricGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let points: Vec<Point> = (0..config.vertex_count)
        .map(|_| Point::new(rng.gen_range(0.0..SIDE), rng.gen_range(0.0..SIDE)))
        .collect();
    let mut graph = Graph::with_vertices(config.vertex_count);

    for (id, point) in points.iter().enumerate().skip(1) {
        let previous = id.saturating_sub(1);
        if let Some(previous_point) = points.get(previous) {
            graph.add_edge(Edge::between_points(previous, previous_point, id, point))?;
        }
        for _ in 0..config.extra_degree {
            let other = rng.gen_range(0..config.vertex_count);
            if other == id {
                continue;
            }
            if let Some(other_point) = points.get(other) {
                graph.add_edge(Edge::between_points(id, point, other, other_point))?;
            }
        }
    }
    Ok(graph)
}
