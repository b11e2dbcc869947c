use crate::error::Result;
use crate::point::Label;

/// Common interface for hard clustering over raw rows (one label per row).
pub trait Clustering {
    /// Cluster `rows` and return one label per input row, in input order.
    ///
    /// All rows must have the same length.
    fn fit_predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Label>>;
}
