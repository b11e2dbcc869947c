//! Density-based clustering.
//!
//! ## DBSCAN
//!
//! DBSCAN grows clusters out of dense regions and labels everything it cannot reach as
//! noise. It needs no cluster count, only a neighborhood radius (`epsilon`) and a density
//! threshold (`min_pts`, the number of *other* points within `epsilon` that makes a point
//! core).
//!
//! The pieces, leaves first:
//!
//! - [`epsilon_neighbors`]: brute-force neighborhood query.
//! - [`Dbscan::run`]: single pass over the points; each unclassified point is either
//!   marked noise or seeds a new cluster that is grown through density-reachable points.
//! - [`group_by_label`]: label → points view of a finished run.
//!
//! ## Usage
//!
//! ```rust
//! use dbscan_clusterer::cluster::{Clustering, Dbscan};
//! use dbscan_clusterer::Label;
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let labels = Dbscan::new(0.5, 1).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! assert_eq!(labels[4], Label::Noise);
//! ```

mod dbscan;
mod grouping;
mod neighborhood;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, DbscanParams};
pub use grouping::group_by_label;
pub use neighborhood::epsilon_neighbors;
pub use traits::Clustering;
