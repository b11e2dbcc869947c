//! Points and cluster labels.
//!
//! A [`Point`] stores up to [`MAX_DIM`] coordinates inline (no heap allocation per point)
//! together with the [`Label`] the engine assigns to it.

use std::fmt;

use crate::error::{Error, Result};

/// Maximum number of coordinates a [`Point`] can hold.
pub const MAX_DIM: usize = 8;

/// Cluster assignment of a single point.
///
/// Ordering is `Unclassified < Noise < Cluster(0) < Cluster(1) < ...`, which keeps noise
/// first when labels are used as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Label {
    /// Not visited yet.
    #[default]
    Unclassified,
    /// Visited, but not absorbed by any cluster (so far).
    Noise,
    /// Member of the cluster with this ordinal. Ordinals start at 0 in discovery order.
    Cluster(usize),
}

impl Label {
    /// Whether this label marks a noise point.
    pub fn is_noise(self) -> bool {
        self == Label::Noise
    }

    /// Whether this point has been classified (as noise or as a cluster member).
    pub fn is_classified(self) -> bool {
        self != Label::Unclassified
    }

    /// Cluster ordinal, or `None` for noise and unclassified points.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            Label::Unclassified | Label::Noise => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Unclassified => f.write_str("unclassified"),
            Label::Noise => f.write_str("noise"),
            Label::Cluster(id) => write!(f, "cluster {id}"),
        }
    }
}

/// A point in feature space with its cluster label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: [f64; MAX_DIM],
    dim: usize,
    label: Label,
}

impl Point {
    /// Create an unclassified point from its coordinates.
    ///
    /// Fails with [`Error::DimensionTooLarge`] if `coords` has more than [`MAX_DIM`] entries.
    pub fn new(coords: &[f64]) -> Result<Self> {
        if coords.len() > MAX_DIM {
            return Err(Error::DimensionTooLarge {
                max: MAX_DIM,
                found: coords.len(),
            });
        }
        let mut buf = [0.0; MAX_DIM];
        buf[..coords.len()].copy_from_slice(coords);
        Ok(Self {
            coords: buf,
            dim: coords.len(),
            label: Label::Unclassified,
        })
    }

    /// The coordinates actually present (`dim()` of them).
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords[..self.dim]
    }

    /// Number of coordinates.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Current cluster label.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    pub(crate) fn set_label(&mut self, label: Label) {
        self.label = label;
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = Error;

    fn try_from(coords: &[f64]) -> Result<Self> {
        Point::new(coords)
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Point {
    type Error = Error;

    fn try_from(coords: [f64; N]) -> Result<Self> {
        Point::new(&coords)
    }
}

/// Build points from rows, checking that every row has the same dimensionality.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Vec<Point>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();

    let mut points = Vec::new();
    points.try_reserve_exact(rows.len())?;
    for row in rows {
        if row.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: row.len(),
            });
        }
        points.push(Point::new(row)?);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p.coords(), &[1.0, 2.0, 3.0]);
        assert_eq!(p.dim(), 3);
        assert_eq!(p.label(), Label::Unclassified);
    }

    #[test]
    fn test_point_too_many_coords() {
        let coords = [0.0; MAX_DIM + 1];
        let err = Point::new(&coords).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionTooLarge {
                max: MAX_DIM,
                found: 9
            }
        ));
    }

    #[test]
    fn test_point_max_dim_ok() {
        let p = Point::try_from([1.0; MAX_DIM]).unwrap();
        assert_eq!(p.dim(), MAX_DIM);
    }

    #[test]
    fn test_points_from_rows_mismatch() {
        let rows = vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0]];
        let err = points_from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_points_from_rows_empty() {
        assert!(points_from_rows(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_label_ordering_and_accessors() {
        let mut labels = vec![Label::Cluster(1), Label::Noise, Label::Cluster(0)];
        labels.sort();
        assert_eq!(labels, vec![Label::Noise, Label::Cluster(0), Label::Cluster(1)]);

        assert!(Label::Noise.is_noise());
        assert!(!Label::Unclassified.is_classified());
        assert_eq!(Label::Cluster(3).cluster_id(), Some(3));
        assert_eq!(Label::Noise.cluster_id(), None);
        assert_eq!(Label::Cluster(2).to_string(), "cluster 2");
    }
}
