//! Shared test utilities for `tansaku-core`.

use proptest::test_runner::Config as ProptestConfig;
use tansaku_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROGTEST_CASES` and
/// `TANSAKU_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph holding vertices `0..vertex_count` and the given edges.
///
/// Panics when any edge is rejected, so fixtures fail loudly.
#[must_use]
pub(crate) fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::with_vertices(vertex_count);
    for &(source, destination, weight) in edges {
        graph
            .add_edge(Edge::new(source, destination, weight))
            .expect("fixture edge must be valid");
    }
    graph
}
