use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Allocation failed while growing a neighbor set or the seed queue.
    ///
    /// The run is aborted and no labels are reported.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(#[from] TryReserveError),

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point has more coordinates than a [`Point`](crate::Point) can hold.
    #[error("dimension too large: at most {max} coordinates supported, found {found}")]
    DimensionTooLarge {
        /// Supported capacity.
        max: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A metric name did not match any built-in metric.
    #[error("unknown metric {0:?}")]
    UnknownMetric(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
