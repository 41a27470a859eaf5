use thiserror::Error;

/// Errors reported by the clustering engines.
///
/// Every variant aborts the run; there is no partial-result mode and nothing
/// is retried (a pure in-memory computation has no transient failures).
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Invalid cluster count k={k}: must be between 1 and {n} (number of points)")]
    InvalidK { k: usize, n: usize },

    #[error("Invalid epsilon {0}: must be greater than zero")]
    InvalidEps(f64),

    #[error("Invalid min_pts {0}: must be at least 1")]
    InvalidMinPts(usize),

    #[error("Epsilon estimation failed: {0}")]
    EstimationFailed(String),

    #[error("K-means did not converge within {0} refinement passes")]
    NoConvergence(usize),
}
