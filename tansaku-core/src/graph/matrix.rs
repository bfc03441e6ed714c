//! Dense symmetric weight matrix backing every graph algorithm.

use std::fmt;

use crate::error::{GraphError, Result};

/// Square matrix of direct edge weights.
///
/// Cell `(row, column)` holds the weight of the most recently added edge
/// between the two vertices, or `None` when no edge joins them. The diagonal
/// always reads as zero.
///
/// `Display` renders one line per row with each weight right-aligned in six
/// columns and two decimals, and `-` for absent edges.
///
/// # Examples
/// ```
/// use tansaku_core::{Edge, Graph};
///
/// let mut graph = Graph::with_vertices(2);
/// graph.add_edge(Edge::new(0, 1, 4.25))?;
/// assert_eq!(graph.weights().get(1, 0), Some(4.25));
/// assert_eq!(graph.weights().to_string(), "   0.00   4.25\n   4.25   0.00\n");
/// # Ok::<(), tansaku_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix {
    order: usize,
    cells: Vec<Option<f64>>,
}

impl WeightMatrix {
    pub(crate) fn new(order: usize) -> Self {
        Self::with_diagonal(order, vec![None; order.saturating_mul(order)])
    }

    /// Allocates the matrix, failing instead of aborting when `order * order`
    /// cells overflow or cannot be reserved.
    pub(crate) fn try_new(order: usize) -> Result<Self> {
        let too_large = || GraphError::CapacityTooLarge { capacity: order };
        let len = order.checked_mul(order).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, None);
        Ok(Self::with_diagonal(order, cells))
    }

    fn with_diagonal(order: usize, mut cells: Vec<Option<f64>>) -> Self {
        for index in 0..order {
            if let Some(cell) = cells.get_mut(index.saturating_mul(order).saturating_add(index)) {
                *cell = Some(0.0);
            }
        }
        Self { order, cells }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> usize { self.order }

    /// Returns the weight stored for `(row, column)`.
    ///
    /// Out-of-range coordinates read as `None`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.offset(row, column)
            .and_then(|offset| self.cells.get(offset).copied().flatten())
    }

    /// Iterates the cells of `row`; empty when `row` is out of range.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        let cells = if row < self.order {
            let start = row.saturating_mul(self.order);
            self.cells.get(start..start.saturating_add(self.order))
        } else {
            None
        };
        cells.unwrap_or_default().iter().copied()
    }

    pub(crate) fn set_symmetric(&mut self, left: usize, right: usize, weight: f64) {
        for (row, column) in [(left, right), (right, left)] {
            if let Some(cell) = self
                .offset(row, column)
                .and_then(|offset| self.cells.get_mut(offset))
            {
                *cell = Some(weight);
            }
        }
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.order && column < self.order)
            .then(|| row.saturating_mul(self.order).saturating_add(column))
    }
}

impl fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.order {
            for cell in self.row(row) {
                match cell {
                    Some(weight) => write!(f, " {weight:>6.2}")?,
                    None => write!(f, " {:>6}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
