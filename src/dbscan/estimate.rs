use crate::distance::DistanceMatrix;
use crate::error::ClusterError;

/// Estimate a neighborhood radius from the data.
///
/// For every point, take the mean distance to its `min_pts` nearest neighbors
/// (self excluded). Sorting these per-point means ascending gives a convex,
/// increasing curve for clusterable data; the value at its knee — the point
/// of maximum curvature change — is the estimate.
pub fn estimate_eps(matrix: &DistanceMatrix, min_pts: usize) -> Result<f64, ClusterError> {
    let n = matrix.len();
    if n < min_pts + 1 {
        return Err(ClusterError::EstimationFailed(format!(
            "need at least {} points for min_pts={}, got {}",
            min_pts + 1,
            min_pts,
            n
        )));
    }

    let mut avg_dists: Vec<f64> = (0..n)
        .map(|i| {
            let mut dists: Vec<f64> = (0..n)
                .filter(|&j| j != i)
                .map(|j| matrix.get(i, j))
                .collect();
            dists.sort_by(|a, b| a.total_cmp(b));
            dists[..min_pts].iter().sum::<f64>() / min_pts as f64
        })
        .collect();
    avg_dists.sort_by(|a, b| a.total_cmp(b));

    let knee = knee_point(&avg_dists).ok_or_else(|| {
        ClusterError::EstimationFailed(
            "no knee in the sorted neighbor-distance curve".to_string(),
        )
    })?;

    let eps = avg_dists[knee];
    if eps <= 0.0 {
        return Err(ClusterError::EstimationFailed(
            "estimated epsilon is zero".to_string(),
        ));
    }
    Ok(eps)
}

/// Knee of a sorted increasing curve: the sample farthest below the chord
/// through its endpoints, after normalizing both axes to [0, 1].
///
/// Returns `None` when the curve is too short, flat, or never dips below the
/// chord (no convex knee to locate).
pub(super) fn knee_point(values: &[f64]) -> Option<usize> {
    let n = values.len();
    if n < 3 {
        return None;
    }

    let (first, last) = (values[0], values[n - 1]);
    let span = last - first;
    if span <= 0.0 {
        return None;
    }

    let mut best = 0usize;
    let mut best_diff = 0.0f64;
    for (i, &v) in values.iter().enumerate() {
        let x = i as f64 / (n - 1) as f64;
        let y = (v - first) / span;
        let diff = x - y;
        if diff > best_diff {
            best_diff = diff;
            best = i;
        }
    }

    (best_diff > 0.0).then_some(best)
}
