//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points based on neighborhood density. It:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors (inclusive).
//! - **MinPts**: Minimum number of *other* points within ε for a point to be "core".
//!   The point itself is not counted.
//! - **Core point**: Has at least MinPts neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unclassified point P, in index order:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark P as noise (may change later)
//!    - Else P is core: label P and its neighbors with a new cluster id, then grow
//!
//! 2. Growth: drain a seed queue (initially P's neighbors). For each seed that is itself
//!    core, absorb its noise/unclassified neighbors; unclassified ones join the queue.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations (brute-force neighborhood scan).
//! - **Space**: O(n) for labels and the seed queue.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::BTreeMap;

use log::{debug, trace};

use super::grouping::group_by_label;
use super::neighborhood::epsilon_neighbors;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::metric::{BuiltinMetric, Euclidean, Metric};
use crate::point::{points_from_rows, Label, Point};

/// DBSCAN parameters with a runtime-selected built-in metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DbscanParams {
    /// Neighborhood radius. Must be `>= 0` (and not NaN).
    pub epsilon: f64,

    /// Minimum number of other points within `epsilon` for a point to be core.
    pub min_pts: usize,

    /// Distance metric.
    pub metric: BuiltinMetric,
}

impl Default for DbscanParams {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            min_pts: 5,
            metric: BuiltinMetric::Euclidean,
        }
    }
}

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan<M = Euclidean> {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f64,
    /// Minimum neighbors for core point classification.
    min_pts: usize,
    metric: M,
}

/// Outcome of expanding from one pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expansion {
    /// The pivot was core and seeded a new cluster.
    Core,
    /// The pivot was marked noise.
    NotCore,
}

impl Dbscan<Euclidean> {
    /// Create a new DBSCAN clusterer using Euclidean distance.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of neighbors (excluding the point itself) for a core point.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            metric: Euclidean,
        }
    }
}

impl Dbscan<BuiltinMetric> {
    /// Create a clusterer from parameters with a runtime-selected metric.
    pub fn from_params(params: DbscanParams) -> Self {
        Self {
            epsilon: params.epsilon,
            min_pts: params.min_pts,
            metric: params.metric,
        }
    }
}

impl Default for Dbscan<Euclidean> {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl<M: Metric> Dbscan<M> {
    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum neighbors for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Replace the distance metric.
    pub fn with_metric<N: Metric>(self, metric: N) -> Dbscan<N> {
        Dbscan {
            epsilon: self.epsilon,
            min_pts: self.min_pts,
            metric,
        }
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Core point threshold.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Distance metric in use.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Cluster `points` in place.
    ///
    /// Every label is reset to [`Label::Unclassified`] first. On success each point ends as
    /// [`Label::Noise`] or [`Label::Cluster`], with cluster ids contiguous from 0 in discovery
    /// order, and the number of clusters is returned.
    ///
    /// On error every label is left [`Label::Unclassified`]; no partial clustering is
    /// reported.
    pub fn run(&self, points: &mut [Point]) -> Result<usize> {
        for p in points.iter_mut() {
            p.set_label(Label::Unclassified);
        }
        self.validate(points)?;

        // Labels are only written back once the whole pass has succeeded.
        let labels = self.classify(points)?;

        let mut n_clusters = 0;
        for (p, label) in points.iter_mut().zip(labels) {
            if let Label::Cluster(id) = label {
                n_clusters = n_clusters.max(id + 1);
            }
            p.set_label(label);
        }
        Ok(n_clusters)
    }

    /// Cluster rows and group the resulting points by label.
    ///
    /// Each group keeps its points in input order with their original coordinates.
    pub fn fit_groups(&self, rows: &[Vec<f64>]) -> Result<BTreeMap<Label, Vec<Point>>> {
        let mut points = points_from_rows(rows)?;
        self.run(&mut points)?;
        Ok(group_by_label(&points))
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }

        if let Some(first) = points.first() {
            let expected = first.dim();
            if let Some(bad) = points.iter().find(|p| p.dim() != expected) {
                return Err(Error::DimensionMismatch {
                    expected,
                    found: bad.dim(),
                });
            }
        }
        Ok(())
    }

    /// Single pass over all points; labels are only committed by the caller on success.
    fn classify(&self, points: &[Point]) -> Result<Vec<Label>> {
        let n = points.len();
        debug!(
            "dbscan: clustering {} points (epsilon={}, min_pts={})",
            n, self.epsilon, self.min_pts
        );

        let mut labels = Vec::new();
        labels.try_reserve_exact(n)?;
        labels.resize(n, Label::Unclassified);

        let mut cluster_id = 0;
        for idx in 0..n {
            if labels[idx].is_classified() {
                continue;
            }
            if self.expand(idx, cluster_id, points, &mut labels)? == Expansion::Core {
                cluster_id += 1;
            }
        }

        debug!(
            "dbscan: found {} clusters, {} noise points",
            cluster_id,
            labels.iter().filter(|l| l.is_noise()).count()
        );
        Ok(labels)
    }

    /// Classify `pivot` and, if it is core, grow a new cluster `cluster_id` from it.
    ///
    /// Labels are untouched if the pivot's neighborhood query fails.
    fn expand(
        &self,
        pivot: usize,
        cluster_id: usize,
        points: &[Point],
        labels: &mut [Label],
    ) -> Result<Expansion> {
        let mut seeds = epsilon_neighbors(pivot, points, self.epsilon, &self.metric)?;

        if seeds.len() < self.min_pts {
            trace!(
                "dbscan: point {} has {} neighbors, marked noise",
                pivot,
                seeds.len()
            );
            labels[pivot] = Label::Noise;
            return Ok(Expansion::NotCore);
        }

        trace!(
            "dbscan: point {} has {} neighbors, starts cluster {}",
            pivot,
            seeds.len(),
            cluster_id
        );
        let label = Label::Cluster(cluster_id);
        labels[pivot] = label;
        for &idx in &seeds {
            labels[idx] = label;
        }

        self.grow(&mut seeds, cluster_id, points, labels)?;
        Ok(Expansion::Core)
    }

    /// Drain the seed queue, including seeds appended while draining.
    ///
    /// Only unclassified points are appended, and they are labelled before the next check,
    /// so every index enters the queue at most once.
    fn grow(
        &self,
        seeds: &mut Vec<usize>,
        cluster_id: usize,
        points: &[Point],
        labels: &mut [Label],
    ) -> Result<()> {
        let label = Label::Cluster(cluster_id);
        let mut cursor = 0;

        while let Some(&seed) = seeds.get(cursor) {
            cursor += 1;

            let reached = epsilon_neighbors(seed, points, self.epsilon, &self.metric)?;
            if reached.len() < self.min_pts {
                // Border point: stays in the cluster, not expanded further.
                continue;
            }

            for idx in reached {
                match labels[idx] {
                    Label::Unclassified => {
                        seeds.try_reserve(1)?;
                        seeds.push(idx);
                        labels[idx] = label;
                    }
                    // Noise is not final: a core point's growth absorbs it as a border point.
                    Label::Noise => labels[idx] = label,
                    Label::Cluster(_) => {}
                }
            }
        }

        trace!(
            "dbscan: cluster {} grown from {} seeds",
            cluster_id,
            seeds.len()
        );
        Ok(())
    }
}

impl<M: Metric> Clustering for Dbscan<M> {
    fn fit_predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Label>> {
        let mut points = points_from_rows(rows)?;
        self.run(&mut points)?;
        Ok(points.iter().map(Point::label).collect())
    }
}

/// Extended DBSCAN interface with noise as `None`.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, rows: &[Vec<f64>]) -> Result<Vec<Option<usize>>>;
}

impl<M: Metric> DbscanExt for Dbscan<M> {
    fn fit_predict_with_noise(&self, rows: &[Vec<f64>]) -> Result<Vec<Option<usize>>> {
        Ok(self
            .fit_predict(rows)?
            .into_iter()
            .map(Label::cluster_id)
            .collect())
    }
}
