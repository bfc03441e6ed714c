//! Property runners comparing the graph algorithms with their oracles.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, PathEntry, PathReport};

use super::{
    oracle::{approx_eq, component_labels, floyd_warshall, prim_forest_weight},
    types::GraphFixture,
};

fn describe(fixture: &GraphFixture) -> String {
    format!(
        "shape={:?}, vertices={}, edges={}, source={}",
        fixture.shape,
        fixture.vertex_count,
        fixture.edges.len(),
        fixture.source,
    )
}

/// Kruskal's total matches Prim over the weight matrix and the forest has
/// one edge fewer than vertices per component.
pub(super) fn run_spanning_tree_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = fixture.build();
    let forest = graph.minimum_spanning_tree();
    let expected = prim_forest_weight(graph.weights());

    if !approx_eq(forest.total_weight(), expected) {
        return Err(TestCaseError::fail(format!(
            "spanning tree weight mismatch: kruskal={}, prim={expected} ({})",
            forest.total_weight(),
            describe(fixture),
        )));
    }

    let mut labels = component_labels(fixture.vertex_count, &fixture.edges);
    labels.sort_unstable();
    labels.dedup();
    if forest.component_count() != labels.len()
        || forest.edges().len() != fixture.vertex_count - labels.len()
    {
        return Err(TestCaseError::fail(format!(
            "forest shape mismatch: edges={}, components={}, expected components={} ({})",
            forest.edges().len(),
            forest.component_count(),
            labels.len(),
            describe(fixture),
        )));
    }
    Ok(())
}

/// Dijkstra distances match Floyd-Warshall and every reported path is a
/// walk over matrix edges whose weights sum to the reported distance.
pub(super) fn run_dijkstra_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let report = graph
        .dijkstra(fixture.source)
        .map_err(|err| TestCaseError::fail(format!("dijkstra failed: {err} ({})", describe(fixture))))?;
    let expected = floyd_warshall(graph.weights());
    let row = expected
        .get(fixture.source)
        .ok_or_else(|| TestCaseError::fail("oracle is missing the source row"))?;

    for destination in (0..fixture.vertex_count).filter(|&id| id != fixture.source) {
        let oracle = row.get(destination).copied().flatten();
        let matches = match (report.distance_to(destination), oracle) {
            (None, None) => true,
            (Some(actual), Some(wanted)) => approx_eq(actual, wanted),
            _ => false,
        };
        if !matches {
            return Err(TestCaseError::fail(format!(
                "distance to {destination} mismatch: dijkstra={:?}, oracle={oracle:?} ({})",
                report.distance_to(destination),
                describe(fixture),
            )));
        }
    }

    check_paths(&graph, &report, |_, _| true)
        .map_err(|reason| TestCaseError::fail(format!("{reason} ({})", describe(fixture))))
}

/// After the spanning tree is built, BFS reaches exactly the source's
/// component and every path uses spanning tree edges only.
pub(super) fn run_bfs_reachability_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = fixture.build();
    graph.minimum_spanning_tree_cost();
    let report = graph
        .bfs(fixture.source)
        .map_err(|err| TestCaseError::fail(format!("bfs failed: {err} ({})", describe(fixture))))?;
    let labels = component_labels(fixture.vertex_count, &fixture.edges);
    let source_label = labels.get(fixture.source).copied();

    for entry in report.entries() {
        let destination = entry.destination();
        let connected = labels.get(destination).copied() == source_label;
        let reached = matches!(entry, PathEntry::Reachable { .. });
        if connected != reached {
            return Err(TestCaseError::fail(format!(
                "vertex {destination}: connected={connected}, reached={reached} ({})",
                describe(fixture),
            )));
        }
    }

    check_paths(&graph, &report, |from, to| {
        graph.get_vertex(from).is_some_and(|vertex| vertex.is_adjacent(to))
    })
    .map_err(|reason| TestCaseError::fail(format!("{reason} ({})", describe(fixture))))
}

/// Repeating any algorithm on an unchanged graph yields identical results.
pub(super) fn run_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = fixture.build();
    let first_forest = graph.minimum_spanning_tree();
    let first_bfs = graph.bfs(fixture.source);
    let first_dijkstra = graph.dijkstra(fixture.source);

    let second_forest = graph.minimum_spanning_tree();
    if first_forest != second_forest {
        return Err(TestCaseError::fail(format!(
            "spanning tree changed between runs ({})",
            describe(fixture)
        )));
    }
    if first_bfs != graph.bfs(fixture.source) || first_dijkstra != graph.dijkstra(fixture.source) {
        return Err(TestCaseError::fail(format!(
            "traversal changed between runs ({})",
            describe(fixture)
        )));
    }
    Ok(())
}

/// Verifies each reachable entry's path starts at the source, ends at the
/// destination, steps only over permitted edges, and sums to the distance.
fn check_paths(
    graph: &Graph,
    report: &PathReport,
    permitted: impl Fn(usize, usize) -> bool,
) -> Result<(), String> {
    for entry in report.entries() {
        let PathEntry::Reachable {
            destination,
            distance,
            path,
        } = entry
        else {
            continue;
        };
        if path.first() != Some(&report.source()) || path.last() != Some(destination) {
            return Err(format!("path {path:?} does not join the endpoints"));
        }
        let mut walked = 0.0;
        for step in path.windows(2) {
            let [from, to] = *step else {
                continue;
            };
            if !permitted(from, to) {
                return Err(format!("path {path:?} steps over forbidden edge ({from}, {to})"));
            }
            walked += graph
                .weight(from, to)
                .ok_or_else(|| format!("path {path:?} uses missing edge ({from}, {to})"))?;
        }
        if !approx_eq(walked, *distance) {
            return Err(format!(
                "path {path:?} weighs {walked} but distance to {destination} is {distance}"
            ));
        }
    }
    Ok(())
}
