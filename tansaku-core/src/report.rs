//! Shortest-path reports produced by graph traversals.
//!
//! A [`PathReport`] lists every vertex other than the traversal source in id
//! order, either with the distance and vertex sequence of the best path the
//! traversal found or as unreachable. The `Display` implementation renders
//! one line per vertex:
//!
//! ```text
//! Distance from 0 to 2 =   3.00 travelling via 0 1 2
//! NO PATH from 0 to 3
//! ```

use std::fmt;

/// Outcome of a traversal for a single destination vertex.
#[derive(Clone, Debug, PartialEq)]
pub enum PathEntry {
    /// The traversal found a path to `destination`.
    Reachable {
        /// Destination vertex id.
        destination: usize,
        /// Total weight of the path.
        distance: f64,
        /// Vertex ids from the source to the destination, both inclusive.
        path: Vec<usize>,
    },
    /// The traversal never reached `destination`.
    Unreachable {
        /// Destination vertex id.
        destination: usize,
    },
}

impl PathEntry {
    /// Returns the destination vertex id.
    #[must_use]
    pub const fn destination(&self) -> usize {
        match self {
            Self::Reachable { destination, .. } | Self::Unreachable { destination } => *destination,
        }
    }
}

/// Per-destination results of a single-source traversal.
///
/// # Examples
/// ```
/// use tansaku_core::{Edge, Graph};
///
/// let mut graph = Graph::with_vertices(3);
/// graph.add_edge(Edge::new(0, 1, 1.5))?;
/// let report = graph.dijkstra(0)?;
///
/// assert_eq!(report.source(), 0);
/// assert_eq!(report.entries().len(), 2);
/// assert_eq!(
///     report.to_string(),
///     "Distance from 0 to 1 =   1.50 travelling via 0 1\nNO PATH from 0 to 2\n",
/// );
/// # Ok::<(), tansaku_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathReport {
    source: usize,
    entries: Vec<PathEntry>,
}

impl PathReport {
    pub(crate) const fn new(source: usize, entries: Vec<PathEntry>) -> Self {
        Self { source, entries }
    }

    /// Returns the traversal source.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns one entry per non-source vertex, ordered by id.
    #[must_use]
    #[rustfmt::skip]
    pub fn entries(&self) -> &[PathEntry] { &self.entries }

    /// Returns the distance to `destination`, or `None` when it is
    /// unreachable or not listed.
    ///
    /// The source itself is not listed and yields `None`.
    #[must_use]
    pub fn distance_to(&self, destination: usize) -> Option<f64> {
        match self.entry(destination)? {
            PathEntry::Reachable { distance, .. } => Some(*distance),
            PathEntry::Unreachable { .. } => None,
        }
    }

    /// Returns the vertex sequence leading to `destination`.
    #[must_use]
    pub fn path_to(&self, destination: usize) -> Option<&[usize]> {
        match self.entry(destination)? {
            PathEntry::Reachable { path, .. } => Some(path),
            PathEntry::Unreachable { .. } => None,
        }
    }

    /// Returns the number of listed destinations the traversal reached.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, PathEntry::Reachable { .. }))
            .count()
    }

    fn entry(&self, destination: usize) -> Option<&PathEntry> {
        self.entries
            .binary_search_by_key(&destination, PathEntry::destination)
            .ok()
            .and_then(|index| self.entries.get(index))
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry {
                PathEntry::Unreachable { destination } => {
                    writeln!(f, "NO PATH from {} to {destination}", self.source)?;
                }
                PathEntry::Reachable {
                    destination,
                    distance,
                    path,
                } => {
                    write!(
                        f,
                        "Distance from {} to {destination} = {distance:>6.2} travelling via",
                        self.source
                    )?;
                    for id in path {
                        write!(f, " {id}")?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}
