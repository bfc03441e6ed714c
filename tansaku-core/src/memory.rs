//! Pre-flight memory estimation for graphs.
//!
//! A [`crate::Graph`] allocates its dense weight matrix up front, so the
//! footprint is known from the vertex count alone. Callers reading counts
//! from untrusted input can compare this estimate against a budget before
//! building anything.

use std::mem::size_of;

use crate::vertex::Vertex;

/// Bytes per weight matrix cell (`Option<f64>`).
const CELL_BYTES: u64 = size_of::<Option<f64>>() as u64;

/// Bytes per vertex slot, excluding spanning tree adjacency nodes.
const VERTEX_BYTES: u64 = size_of::<Vertex>() as u64;

/// Returns the bytes a graph of `vertex_count` vertices allocates before any
/// edge is added.
///
/// Covers the `n * n` weight matrix and the vertex table. Saturates at
/// [`u64::MAX`] instead of overflowing.
///
/// # Examples
/// ```
/// use tansaku_core::estimate_graph_bytes;
///
/// assert_eq!(estimate_graph_bytes(0), 0);
/// assert!(estimate_graph_bytes(1_000) > estimate_graph_bytes(100));
/// assert_eq!(estimate_graph_bytes(usize::MAX), u64::MAX);
/// ```
#[must_use]
pub fn estimate_graph_bytes(vertex_count: usize) -> u64 {
    let n = u64::try_from(vertex_count).unwrap_or(u64::MAX);
    let matrix = n.saturating_mul(n).saturating_mul(CELL_BYTES);
    let vertices = n.saturating_mul(VERTEX_BYTES);
    matrix.saturating_add(vertices)
}

/// Formats a byte count using binary units.
///
/// Returns values like `"0 B"`, `"1.0 KiB"`, `"2.4 GiB"`; one decimal place
/// from 1 KiB upwards.
///
/// # Examples
/// ```
/// use tansaku_core::format_bytes;
///
/// assert_eq!(format_bytes(1023), "1023 B");
/// assert_eq!(format_bytes(1536), "1.5 KiB");
/// assert_eq!(format_bytes(1_073_741_824), "1.0 GiB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (1 << 40, "TiB"),
        (1 << 30, "GiB"),
        (1 << 20, "MiB"),
        (1 << 10, "KiB"),
    ];

    UNITS
        .iter()
        .find(|(scale, _)| bytes >= *scale)
        .map_or_else(
            || format!("{bytes} B"),
            |(scale, unit)| format!("{:.1} {unit}", bytes as f64 / *scale as f64),
        )
}
