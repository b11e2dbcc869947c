//! Distance metrics.
//!
//! The engine only compares distances against the neighborhood radius, so any symmetric,
//! non-negative function with `d(a, a) == 0` works. Metrics must be pure: the same pair of
//! points always yields the same distance.
//!
//! Any closure `Fn(&Point, &Point) -> f64` is a [`Metric`], which is how domain-specific
//! similarities are plugged in:
//!
//! ```rust
//! use dbscan_clusterer::{Dbscan, Point};
//!
//! let manhattan = |a: &Point, b: &Point| {
//!     a.coords().iter().zip(b.coords()).map(|(x, y)| (x - y).abs()).sum::<f64>()
//! };
//! let dbscan = Dbscan::new(1.0, 1).with_metric(manhattan);
//! # let _ = dbscan;
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::point::Point;

/// A distance function between two points.
pub trait Metric {
    /// Distance between `a` and `b`. Must be `>= 0` and symmetric.
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

impl<F> Metric for F
where
    F: Fn(&Point, &Point) -> f64,
{
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        self(a, b)
    }
}

/// Coordinate `i`, with absent coordinates read as 0.
#[inline]
fn coord(p: &Point, i: usize) -> f64 {
    p.coords().get(i).copied().unwrap_or(0.0)
}

/// Euclidean distance over the coordinates present in both points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        a.coords()
            .iter()
            .zip(b.coords())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Euclidean distance restricted to the first two coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean2d;

impl Metric for Euclidean2d {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = coord(a, 0) - coord(b, 0);
        let dy = coord(a, 1) - coord(b, 1);
        dx.hypot(dy)
    }
}

/// Cheap approximation of 2D Euclidean distance.
///
/// Blends Manhattan and Chebyshev distance over the first two coordinates:
///
/// ```text
/// d = 0.394 * (|dx| + |dy|) + 0.554 * max(|dx|, |dy|)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproxEuclidean2d;

impl ApproxEuclidean2d {
    const MANHATTAN_WEIGHT: f64 = 0.394;
    const CHEBYSHEV_WEIGHT: f64 = 0.554;
}

impl Metric for ApproxEuclidean2d {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = (coord(a, 0) - coord(b, 0)).abs();
        let dy = (coord(a, 1) - coord(b, 1)).abs();
        Self::MANHATTAN_WEIGHT * (dx + dy) + Self::CHEBYSHEV_WEIGHT * dx.max(dy)
    }
}

/// Runtime selector over the built-in metrics.
///
/// Parses from `"euclidean"`, `"euclidean-2d"` and `"approx-euclidean-2d"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BuiltinMetric {
    /// See [`Euclidean`].
    #[default]
    Euclidean,
    /// See [`Euclidean2d`].
    Euclidean2d,
    /// See [`ApproxEuclidean2d`].
    ApproxEuclidean2d,
}

impl BuiltinMetric {
    /// All built-in metrics.
    pub const ALL: [BuiltinMetric; 3] = [
        BuiltinMetric::Euclidean,
        BuiltinMetric::Euclidean2d,
        BuiltinMetric::ApproxEuclidean2d,
    ];

    /// Canonical name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            BuiltinMetric::Euclidean => "euclidean",
            BuiltinMetric::Euclidean2d => "euclidean-2d",
            BuiltinMetric::ApproxEuclidean2d => "approx-euclidean-2d",
        }
    }
}

impl Metric for BuiltinMetric {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        match self {
            BuiltinMetric::Euclidean => Euclidean.distance(a, b),
            BuiltinMetric::Euclidean2d => Euclidean2d.distance(a, b),
            BuiltinMetric::ApproxEuclidean2d => ApproxEuclidean2d.distance(a, b),
        }
    }
}

impl fmt::Display for BuiltinMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BuiltinMetric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}
