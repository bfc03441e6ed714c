//! Property-based tests for the graph algorithms.
//!
//! Checks Kruskal against a Prim oracle over the weight matrix, Dijkstra
//! against Floyd-Warshall, and breadth-first search against union-find
//! reachability, across graph shapes drawn from seeded generators.

mod oracle;
mod properties;
mod strategies;
mod types;
