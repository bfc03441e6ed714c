//! Seeded graph generators for the property suites.
//!
//! Each generator emits unique undirected vertex pairs with non-negative
//! finite weights, then picks a traversal source uniformly.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::Point;

use super::types::{GraphFixture, GraphShape};

const MIN_VERTICES: usize = 1;
const MAX_VERTICES: usize = 40;
/// Dense graphs stay small to keep the cubic oracle cheap.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across every [`GraphShape`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let (vertex_count, edges) = match shape {
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => generate_dense(rng),
        GraphShape::IdenticalWeights => generate_identical_weights(rng),
        GraphShape::Disconnected => generate_disconnected(rng),
        GraphShape::Geometric => generate_geometric(rng),
    };
    let source = rng.gen_range(0..vertex_count);
    GraphFixture {
        vertex_count,
        edges: edges.into_edges(),
        source,
        shape,
    }
}

/// Accumulates edges, dropping repeated vertex pairs and self-loops.
#[derive(Default)]
struct EdgeSet {
    pairs: BTreeSet<(usize, usize)>,
    edges: Vec<(usize, usize, f64)>,
}

impl EdgeSet {
    fn insert(&mut self, left: usize, right: usize, weight: f64) {
        if left == right {
            return;
        }
        let pair = if left < right { (left, right) } else { (right, left) };
        if self.pairs.insert(pair) {
            self.edges.push((left, right, weight));
        }
    }

    fn into_edges(self) -> Vec<(usize, usize, f64)> {
        self.edges
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.0..100.0)
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, EdgeSet) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = EdgeSet::default();

    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for window in order.windows(2) {
        if let [left, right] = *window {
            edges.insert(left, right, continuous_weight(rng));
        }
    }

    let extra = rng.gen_range(0..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.insert(left, right, continuous_weight(rng));
    }
    (vertex_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, EdgeSet) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let mut edges = EdgeSet::default();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.insert(left, right, continuous_weight(rng));
            }
        }
    }
    (vertex_count, edges)
}

fn generate_identical_weights(rng: &mut SmallRng) -> (usize, EdgeSet) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool: Vec<f64> = (0..rng.gen_range(1..=3_usize))
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let probability = rng.gen_range(0.2..=0.6);
    let mut edges = EdgeSet::default();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let weight = pool.get(rng.gen_range(0..pool.len())).copied().unwrap_or(1.0);
                edges.insert(left, right, weight);
            }
        }
    }
    (vertex_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, EdgeSet) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5_usize))
        .map(|_| rng.gen_range(1..=8))
        .collect();
    let mut edges = EdgeSet::default();
    let mut offset = 0;
    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(probability) {
                    edges.insert(left, right, continuous_weight(rng));
                }
            }
        }
        offset += size;
    }
    (offset, edges)
}

fn generate_geometric(rng: &mut SmallRng) -> (usize, EdgeSet) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let points: Vec<Point> = (0..vertex_count)
        .map(|_| Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    let radius = rng.gen_range(15.0..=60.0);
    let mut edges = EdgeSet::default();
    for (left, left_point) in points.iter().enumerate() {
        for (right, right_point) in points.iter().enumerate().skip(left + 1) {
            let distance = left_point.distance_to(right_point);
            if distance <= radius {
                edges.insert(left, right, distance);
            }
        }
    }
    (vertex_count, edges)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for index in (1..slice.len()).rev() {
        let other = rng.gen_range(0..=index);
        slice.swap(index, other);
    }
}
