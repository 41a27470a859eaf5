mod estimate;


pub use estimate::estimate_eps;

use crate::distance::DistanceMatrix;
use crate::error::ClusterError;
use crate::partition::{group_by_assignment, Cluster};
use crate::pointset::PointSet;

/// Cluster identifier reserved for noise points. Always present in the
/// result, even when no point is noise.
pub const NOISE: usize = 0;

/// Parameters for a DBSCAN clustering call.
#[derive(Debug, Clone)]
pub struct DbscanConfig {
    /// Neighborhood radius; estimated from the data when `None`.
    pub eps: Option<f64>,
    /// Minimum neighborhood size (the point itself counts) for a core point.
    pub min_pts: usize,
}

impl DbscanConfig {
    pub fn new(min_pts: usize) -> Self {
        Self { eps: None, min_pts }
    }

    pub fn with_eps(min_pts: usize, eps: f64) -> Self {
        Self {
            eps: Some(eps),
            min_pts,
        }
    }
}

/// Result of a DBSCAN run.
#[derive(Debug, Clone)]
pub struct DbscanResult {
    /// Cluster 0 holds the noise points; real clusters start at id 1.
    pub clusters: Vec<Cluster>,
    /// Cluster id per point; 0 means noise.
    pub assignments: Vec<usize>,
    /// The radius actually used, whether supplied or estimated.
    pub eps: f64,
}

/// Cluster a point set into density-connected groups plus a noise group.
///
/// Deterministic for fixed eps, min_pts and point order: cluster ids are
/// assigned in scan order, membership is invariant to reordering within a
/// density region.
pub fn dbscan(points: &PointSet, config: &DbscanConfig) -> Result<DbscanResult, ClusterError> {
    if config.min_pts < 1 {
        return Err(ClusterError::InvalidMinPts(config.min_pts));
    }

    let matrix = DistanceMatrix::from_points(points);
    let eps = match config.eps {
        Some(e) if e > 0.0 => e,
        Some(e) => return Err(ClusterError::InvalidEps(e)),
        None => estimate_eps(&matrix, config.min_pts)?,
    };

    let n = points.len();
    let mut assignments = vec![NOISE; n];
    let mut visited = vec![false; n];
    let mut clusters = 0usize;

    for i in 0..n {
        if visited[i] {
            continue;
        }
        visited[i] = true;

        let neighbors = region_query(&matrix, i, eps);
        if neighbors.len() < config.min_pts {
            // provisionally noise; may be reclaimed as a border point later
            continue;
        }

        clusters += 1;
        assignments[i] = clusters;
        expand_cluster(
            &matrix,
            &mut assignments,
            &mut visited,
            neighbors,
            clusters,
            eps,
            config.min_pts,
        );
    }

    Ok(DbscanResult {
        clusters: group_by_assignment(&assignments, clusters + 1),
        assignments,
        eps,
    })
}

/// Indices of every point within `eps` of point `i`, inclusive — the point
/// itself always qualifies at distance zero.
fn region_query(matrix: &DistanceMatrix, i: usize, eps: f64) -> Vec<usize> {
    (0..matrix.len())
        .filter(|&j| matrix.get(i, j) <= eps)
        .collect()
}

/// Grow cluster `cluster_id` outward from a core point's neighborhood.
///
/// Worklist traversal, no recursion: candidates are handled in list order
/// and the list grows whenever another core point is discovered. A candidate
/// previously rejected as noise becomes a border member and is not expanded;
/// a candidate already owned by an earlier cluster keeps its first
/// assignment.
fn expand_cluster(
    matrix: &DistanceMatrix,
    assignments: &mut [usize],
    visited: &mut [bool],
    seed: Vec<usize>,
    cluster_id: usize,
    eps: f64,
    min_pts: usize,
) {
    let n = matrix.len();
    let mut worklist = seed;
    let mut queued = vec![false; n];
    for &p in &worklist {
        queued[p] = true;
    }

    let mut next = 0;
    while next < worklist.len() {
        let p = worklist[next];
        next += 1;

        if visited[p] {
            if assignments[p] == NOISE {
                // border point: adopt into the cluster, do not expand from it
                assignments[p] = cluster_id;
            }
            continue;
        }

        visited[p] = true;
        let neighbors = region_query(matrix, p, eps);
        if neighbors.len() >= min_pts {
            for q in neighbors {
                if !queued[q] {
                    queued[q] = true;
                    worklist.push(q);
                }
            }
        }
        assignments[p] = cluster_id;
    }
}
