use tansaku_core::{Edge, Graph};

/// Four vertices in a line plus two heavier shortcuts.
pub const LADDER: &[(usize, usize, f64)] = &[
    (0, 1, 1.0),
    (1, 2, 2.0),
    (2, 3, 3.0),
    (0, 3, 10.0),
    (0, 2, 4.0),
];

#[must_use]
pub fn build_graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::with_vertices(vertex_count);
    for &(source, destination, weight) in edges {
        graph
            .add_edge(Edge::new(source, destination, weight))
            .expect("fixture edge must be valid");
    }
    graph
}
