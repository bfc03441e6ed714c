//! Points on the Cartesian plane used to derive edge weights.

use std::fmt;

/// A 2D point.
///
/// # Examples
/// ```
/// use tansaku_core::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// let corner = Point::new(3.0, 4.0);
/// assert_eq!(origin.distance_to(&corner), 5.0);
/// assert_eq!(corner.to_string(), "3 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub fn x(&self) -> f64 { self.x }

    /// Returns the y coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub fn y(&self) -> f64 { self.y }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
