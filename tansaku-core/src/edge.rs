//! Weighted undirected edges and the ordering Kruskal's algorithm uses.

use std::{cmp::Ordering, fmt};

use crate::point::Point;

/// An undirected edge between two vertex ids.
///
/// Edges refer to vertices by id; the owning [`crate::Graph`] validates the
/// ids and the weight when the edge is added.
///
/// # Examples
/// ```
/// use tansaku_core::Edge;
///
/// let edge = Edge::new(0, 1, 2.5);
/// assert_eq!(edge.source(), 0);
/// assert_eq!(edge.destination(), 1);
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge joining `source` and `destination`.
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: f64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Creates an edge weighted by the Euclidean distance between two points.
    ///
    /// # Examples
    /// ```
    /// use tansaku_core::{Edge, Point};
    ///
    /// let edge = Edge::between_points(0, &Point::new(0.0, 0.0), 1, &Point::new(3.0, 4.0));
    /// assert_eq!(edge.weight(), 5.0);
    /// ```
    #[must_use]
    pub fn between_points(
        source: usize,
        source_point: &Point,
        destination: usize,
        destination_point: &Point,
    ) -> Self {
        Self::new(source, destination, source_point.distance_to(destination_point))
    }

    /// Returns the source vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the destination vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Source: {}, Destination: {}, Weight: {}",
            self.source, self.destination, self.weight
        )
    }
}

/// Orders edges by ascending weight, then by source and destination id.
///
/// Kruskal's algorithm visits edges in this order. Weights compare with
/// [`f64::total_cmp`], so the ordering is total.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use tansaku_core::{Edge, ascending_weight};
///
/// let light = Edge::new(0, 1, 1.0);
/// let heavy = Edge::new(0, 2, 4.0);
/// assert_eq!(ascending_weight(&light, &heavy), Ordering::Less);
/// ```
#[must_use]
pub fn ascending_weight(left: &Edge, right: &Edge) -> Ordering {
    left.weight
        .total_cmp(&right.weight)
        .then_with(|| left.source.cmp(&right.source))
        .then_with(|| left.destination.cmp(&right.destination))
}
