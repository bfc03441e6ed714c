//! Single-source traversals: Dijkstra over the weight matrix and
//! breadth-first search over the spanning tree adjacency.
//!
//! Each traversal owns a `TraversalState` table keyed by vertex id, so
//! traversals never observe state left behind by earlier calls.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use tracing::{Span, field, instrument};

use crate::{
    error::{GraphError, Result},
    report::{PathEntry, PathReport},
};

use super::Graph;

#[derive(Clone, Copy, Debug)]
struct TraversalRecord {
    discovered: bool,
    predecessor: usize,
    min_distance: Option<f64>,
}

/// Per-call traversal bookkeeping, indexed by vertex id.
#[derive(Clone, Debug)]
struct TraversalState {
    source: usize,
    records: Vec<TraversalRecord>,
}

impl TraversalState {
    fn new(source: usize, len: usize, initial_distance: impl Fn(usize) -> Option<f64>) -> Self {
        let records = (0..len)
            .map(|id| TraversalRecord {
                discovered: false,
                predecessor: source,
                min_distance: initial_distance(id),
            })
            .collect();
        Self { source, records }
    }

    fn record_mut(&mut self, id: usize) -> Result<&mut TraversalRecord> {
        self.records
            .get_mut(id)
            .ok_or(GraphError::InvariantViolation {
                invariant: "traversal must only visit known vertices",
                vertex: id,
            })
    }

    fn into_report(self) -> Result<PathReport> {
        let mut entries = Vec::with_capacity(self.records.len().saturating_sub(1));
        for (destination, record) in self.records.iter().enumerate() {
            if destination == self.source {
                continue;
            }
            let entry = match record.min_distance {
                None => PathEntry::Unreachable { destination },
                Some(distance) => PathEntry::Reachable {
                    destination,
                    distance,
                    path: self.path_to(destination)?,
                },
            };
            entries.push(entry);
        }
        Ok(PathReport::new(self.source, entries))
    }

    /// Walks predecessor links back to the source and returns the path in
    /// travel order.
    fn path_to(&self, destination: usize) -> Result<Vec<usize>> {
        let mut path = vec![destination];
        let mut current = destination;
        while current != self.source {
            if path.len() > self.records.len() {
                return Err(GraphError::InvariantViolation {
                    invariant: "predecessor chain must reach the source",
                    vertex: destination,
                });
            }
            current = self
                .records
                .get(current)
                .map(|record| record.predecessor)
                .ok_or(GraphError::InvariantViolation {
                    invariant: "predecessor must be a known vertex",
                    vertex: current,
                })?;
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }
}

/// Tentative distance queued for Dijkstra's algorithm.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    distance: f64,
    vertex: usize,
}

/// Orders frontier entries by ascending distance, then ascending vertex id.
fn closest_first(left: &Frontier, right: &Frontier) -> Ordering {
    left.distance
        .total_cmp(&right.distance)
        .then_with(|| left.vertex.cmp(&right.vertex))
}

// `BinaryHeap` pops its greatest entry; reversing `closest_first` makes the
// closest vertex the greatest.
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        closest_first(other, self)
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Graph {
    /// Computes shortest paths from `source` over every edge of the graph.
    ///
    /// Each vertex starts at its direct distance from the source, then the
    /// closest undiscovered vertex is settled repeatedly and its neighbours
    /// relaxed. Superseded queue entries are skipped when popped.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when `source` has not been
    /// added.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::{Edge, Graph};
    ///
    /// let mut graph = Graph::with_vertices(3);
    /// graph.add_edge(Edge::new(0, 1, 1.0))?;
    /// graph.add_edge(Edge::new(1, 2, 1.0))?;
    /// graph.add_edge(Edge::new(0, 2, 5.0))?;
    ///
    /// let report = graph.dijkstra(0)?;
    /// assert_eq!(report.distance_to(2), Some(2.0));
    /// assert_eq!(report.path_to(2), Some(&[0, 1, 2][..]));
    /// # Ok::<(), tansaku_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.dijkstra",
        err,
        skip(self),
        fields(
            vertices = self.vertices.len(),
            relaxations = field::Empty,
            reachable = field::Empty,
        ),
    )]
    pub fn dijkstra(&self, source: usize) -> Result<PathReport> {
        self.require_vertex(source)?;
        let vertex_count = self.vertices.len();
        let mut state = TraversalState::new(source, vertex_count, |id| {
            self.weights.get(source, id)
        });

        let mut frontier: BinaryHeap<Frontier> = state
            .records
            .iter()
            .enumerate()
            .filter_map(|(vertex, record)| {
                record
                    .min_distance
                    .map(|distance| Frontier { distance, vertex })
            })
            .collect();
        let mut relaxations = 0_usize;

        while let Some(Frontier { distance, vertex }) = frontier.pop() {
            let settled = state.record_mut(vertex)?;
            let stale = settled.min_distance.is_some_and(|best| distance > best);
            if settled.discovered || stale {
                continue;
            }
            settled.discovered = true;

            for neighbour in 0..vertex_count {
                if neighbour == vertex {
                    continue;
                }
                let Some(weight) = self.weights.get(vertex, neighbour) else {
                    continue;
                };
                let record = state.record_mut(neighbour)?;
                if record.discovered {
                    continue;
                }
                let candidate = distance + weight;
                if record.min_distance.is_none_or(|current| candidate < current) {
                    record.min_distance = Some(candidate);
                    record.predecessor = vertex;
                    frontier.push(Frontier {
                        distance: candidate,
                        vertex: neighbour,
                    });
                    relaxations = relaxations.saturating_add(1);
                }
            }
        }

        #[cfg(feature = "metrics")]
        metrics::counter!("tansaku_dijkstra_relaxations")
            .increment(u64::try_from(relaxations).unwrap_or(u64::MAX));

        let report = state.into_report()?;
        let span = Span::current();
        span.record("relaxations", relaxations);
        span.record("reachable", report.reachable_count());
        Ok(report)
    }

    /// Computes paths from `source` using only spanning tree edges.
    ///
    /// Follows the adjacency recorded by the most recent
    /// [`Graph::minimum_spanning_tree_cost`] call in breadth-first order.
    /// Vertices the search never reaches are reported as unreachable, so
    /// before any spanning tree computation every other vertex is.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] when `source` has not been
    /// added.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::{Edge, Graph};
    ///
    /// let mut graph = Graph::with_vertices(3);
    /// graph.add_edge(Edge::new(0, 1, 1.0))?;
    /// graph.add_edge(Edge::new(1, 2, 1.0))?;
    /// graph.add_edge(Edge::new(0, 2, 5.0))?;
    ///
    /// assert_eq!(graph.bfs(0)?.reachable_count(), 0);
    ///
    /// graph.minimum_spanning_tree_cost();
    /// let report = graph.bfs(2)?;
    /// assert_eq!(report.distance_to(0), Some(2.0));
    /// assert_eq!(report.path_to(0), Some(&[2, 1, 0][..]));
    /// # Ok::<(), tansaku_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.bfs",
        err,
        skip(self),
        fields(vertices = self.vertices.len(), reachable = field::Empty),
    )]
    pub fn bfs(&self, source: usize) -> Result<PathReport> {
        self.require_vertex(source)?;
        let mut state = TraversalState::new(source, self.vertices.len(), |id| {
            (id == source).then_some(0.0)
        });
        state.record_mut(source)?.discovered = true;

        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            let current_distance = state.record_mut(current)?.min_distance.ok_or(
                GraphError::InvariantViolation {
                    invariant: "discovered vertex must carry a distance",
                    vertex: current,
                },
            )?;
            let vertex = self
                .vertices
                .get(current)
                .ok_or(GraphError::InvariantViolation {
                    invariant: "queued vertex must exist",
                    vertex: current,
                })?;

            for neighbour in vertex.adjacency() {
                let record = state.record_mut(neighbour)?;
                if record.discovered {
                    continue;
                }
                let weight = self.weights.get(current, neighbour).ok_or(
                    GraphError::InvariantViolation {
                        invariant: "spanning tree edge must carry a weight",
                        vertex: neighbour,
                    },
                )?;
                record.discovered = true;
                record.predecessor = current;
                record.min_distance = Some(current_distance + weight);
                queue.push_back(neighbour);
            }
        }

        let report = state.into_report()?;

        #[cfg(feature = "metrics")]
        metrics::counter!("tansaku_bfs_visits")
            .increment(u64::try_from(report.reachable_count()).unwrap_or(u64::MAX));

        Span::current().record("reachable", report.reachable_count());
        Ok(report)
    }
}
