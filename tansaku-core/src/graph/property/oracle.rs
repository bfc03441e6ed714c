//! Independent reference algorithms used as property-test oracles.

use crate::WeightMatrix;

/// All-pairs shortest distances via Floyd-Warshall.
///
/// `None` marks pairs with no connecting path.
pub(super) fn floyd_warshall(matrix: &WeightMatrix) -> Vec<Vec<Option<f64>>> {
    let order = matrix.order();
    let mut distances: Vec<Vec<Option<f64>>> =
        (0..order).map(|row| matrix.row(row).collect()).collect();
    for via in 0..order {
        for from in 0..order {
            for to in 0..order {
                let (Some(first), Some(second)) = (distances[from][via], distances[via][to]) else {
                    continue;
                };
                let candidate = first + second;
                if distances[from][to].is_none_or(|current| candidate < current) {
                    distances[from][to] = Some(candidate);
                }
            }
        }
    }
    distances
}

/// Total weight of a minimum spanning forest found with Prim's algorithm.
///
/// Restarts from the lowest unvisited vertex whenever the current tree can
/// grow no further, so disconnected matrices yield the forest weight.
pub(super) fn prim_forest_weight(matrix: &WeightMatrix) -> f64 {
    let order = matrix.order();
    let mut in_tree = vec![false; order];
    let mut best: Vec<Option<f64>> = vec![None; order];
    let mut total = 0.0;

    for _ in 0..order {
        let closest = (0..order)
            .filter(|&vertex| !in_tree[vertex])
            .filter_map(|vertex| best[vertex].map(|weight| (weight, vertex)))
            .min_by(|left, right| left.0.total_cmp(&right.0));
        let vertex = match closest {
            Some((weight, vertex)) => {
                total += weight;
                vertex
            }
            None => match (0..order).find(|&vertex| !in_tree[vertex]) {
                Some(vertex) => vertex,
                None => break,
            },
        };
        in_tree[vertex] = true;
        for neighbour in 0..order {
            if in_tree[neighbour] {
                continue;
            }
            if let Some(weight) = matrix.get(vertex, neighbour)
                && best[neighbour].is_none_or(|current| weight < current)
            {
                best[neighbour] = Some(weight);
            }
        }
    }
    total
}

/// Labels each vertex with the smallest vertex id in its component.
pub(super) fn component_labels(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    fn find(parent: &mut [usize], mut node: usize) -> usize {
        while parent[node] != node {
            parent[node] = parent[parent[node]];
            node = parent[node];
        }
        node
    }
    for &(left, right, _) in edges {
        let left_root = find(&mut parent, left);
        let right_root = find(&mut parent, right);
        if left_root != right_root {
            let (low, high) = if left_root < right_root {
                (left_root, right_root)
            } else {
                (right_root, left_root)
            };
            parent[high] = low;
        }
    }
    (0..vertex_count).map(|node| find(&mut parent, node)).collect()
}

/// Compares floating-point totals accumulated in different orders.
pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}
