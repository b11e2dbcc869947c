//! Density-based spatial clustering.
//!
//! `dbscan_clusterer` groups points of a small, fixed-dimension feature space into
//! clusters of dense regions (DBSCAN) and labels outliers as noise. Callers supply a
//! neighborhood radius, a density threshold and a distance metric, either one of the
//! built-ins or any closure `Fn(&Point, &Point) -> f64`.
//!
//! - [`point`]: [`Point`] (up to [`MAX_DIM`] coordinates) and its [`Label`]
//! - [`metric`]: the [`Metric`] trait and built-in distances
//! - [`cluster`]: the DBSCAN engine
//!
//! The library logs through the [`log`](https://docs.rs/log) facade (`debug` per run,
//! `trace` per cluster) and never installs a logger itself.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod metric;
pub mod point;

pub use cluster::{
    epsilon_neighbors, group_by_label, Clustering, Dbscan, DbscanExt, DbscanParams,
};
pub use error::{Error, Result};
pub use metric::{ApproxEuclidean2d, BuiltinMetric, Euclidean, Euclidean2d, Metric};
pub use point::{points_from_rows, Label, Point, MAX_DIM};
