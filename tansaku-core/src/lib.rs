//! Tansaku core library.
//!
//! Builds weighted undirected graphs of fixed capacity and answers three
//! questions about them: the cost of a minimum spanning tree (Kruskal),
//! single-source shortest paths over every edge (Dijkstra), and
//! single-source paths restricted to the spanning tree (breadth-first
//! search).
//!
//! # Examples
//! ```
//! use tansaku_core::{Edge, Graph};
//!
//! let mut graph = Graph::with_vertices(3);
//! graph.add_edge(Edge::new(0, 1, 1.0))?;
//! graph.add_edge(Edge::new(1, 2, 2.0))?;
//! graph.add_edge(Edge::new(0, 2, 5.0))?;
//!
//! assert_eq!(graph.minimum_spanning_tree_cost(), 3.0);
//! let report = graph.dijkstra(0)?;
//! assert_eq!(report.distance_to(2), Some(3.0));
//! assert_eq!(report.path_to(2), Some(&[0, 1, 2][..]));
//! # Ok::<(), tansaku_core::GraphError>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the algorithms emit:
//!
//! - `tansaku_mst_edges_accepted` (counter)
//! - `tansaku_dijkstra_relaxations` (counter)
//! - `tansaku_bfs_visits` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod graph;
mod memory;
mod point;
mod report;
#[cfg(test)]
mod test_utils;
mod vertex;

pub use crate::{
    edge::{Edge, ascending_weight},
    error::{GraphError, GraphErrorCode, Result},
    graph::{Graph, SpanningForest, WeightMatrix},
    memory::{estimate_graph_bytes, format_bytes},
    point::Point,
    report::{PathEntry, PathReport},
    vertex::Vertex,
};
