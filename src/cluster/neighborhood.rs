//! Epsilon-neighborhood queries.
//!
//! Brute-force scan: every query compares the pivot against all points, so a full DBSCAN
//! run costs O(n²) distance evaluations.

use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::point::Point;

/// Indices of all points within `epsilon` of `points[pivot]`, excluding `pivot` itself.
///
/// Indices are returned in ascending order. A point at distance exactly `epsilon` is a
/// neighbor; a NaN distance never is.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `pivot` is out of bounds.
/// - [`Error::ResourceExhausted`] if the neighbor set cannot grow. No partial set is
///   returned.
pub fn epsilon_neighbors<M>(
    pivot: usize,
    points: &[Point],
    epsilon: f64,
    metric: &M,
) -> Result<Vec<usize>>
where
    M: Metric + ?Sized,
{
    let center = points.get(pivot).ok_or(Error::InvalidParameter {
        name: "pivot",
        message: "out of bounds",
    })?;
    let mut neighbors = Vec::new();
    for (idx, other) in points.iter().enumerate() {
        if idx == pivot {
            continue;
        }
        // NaN compares false, so a NaN distance never makes a neighbor.
        if metric.distance(center, other) <= epsilon {
            neighbors.try_reserve(1)?;
            neighbors.push(idx);
        }
    }
    Ok(neighbors)
}
