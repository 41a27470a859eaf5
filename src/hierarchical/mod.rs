
use clap::ValueEnum;

use crate::distance::DistanceMatrix;
use crate::error::ClusterError;
use crate::partition::Cluster;
use crate::pointset::PointSet;

/// Inter-cluster distance rule applied when two clusters merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Linkage {
    /// Nearest-member distance.
    Single,
    /// Farthest-member distance.
    Complete,
    /// Mean of the two merged clusters' stored distances.
    Average,
}

impl Linkage {
    /// Combine the retained and discarded cluster's distances to a third
    /// cluster into the merged cluster's distance.
    fn combine(self, kept: f64, discarded: f64) -> f64 {
        match self {
            Linkage::Single => kept.min(discarded),
            Linkage::Complete => kept.max(discarded),
            Linkage::Average => (kept + discarded) / 2.0,
        }
    }
}

/// Parameters for an agglomerative clustering call.
#[derive(Debug, Clone)]
pub struct HierarchicalConfig {
    /// Number of clusters to stop at.
    pub k: usize,
    pub linkage: Linkage,
}

impl HierarchicalConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            linkage: Linkage::Average,
        }
    }

    pub fn with_linkage(k: usize, linkage: Linkage) -> Self {
        Self { k, linkage }
    }
}

/// Result of an agglomerative clustering run.
#[derive(Debug, Clone)]
pub struct HierarchicalResult {
    /// Exactly k non-empty clusters, ids 0..k in surviving-row order.
    pub clusters: Vec<Cluster>,
    /// Cluster index per point.
    pub assignments: Vec<usize>,
}

/// Agglomerative clustering: start from one singleton cluster per point and
/// merge the globally closest active pair until exactly `k` remain.
///
/// Terminates after exactly N−k merge steps.
pub fn hierarchical(
    points: &PointSet,
    config: &HierarchicalConfig,
) -> Result<HierarchicalResult, ClusterError> {
    let n = points.len();
    if config.k < 1 || config.k > n {
        return Err(ClusterError::InvalidK { k: config.k, n });
    }

    let mut matrix = DistanceMatrix::from_points(points);
    // membership bitset per row cluster; row i starts owning point i
    let mut members: Vec<Vec<bool>> = (0..n)
        .map(|i| {
            let mut row = vec![false; n];
            row[i] = true;
            row
        })
        .collect();
    let mut sizes = vec![1usize; n];
    let mut active = n;

    while active > config.k {
        let (row, col) = closest_pair(&matrix);

        // retain the cluster with the larger membership; ties go to the
        // lower index
        let (keep, discard) = if sizes[col] > sizes[row] {
            (col, row)
        } else {
            (row, col)
        };

        for p in 0..n {
            if members[discard][p] {
                members[keep][p] = true;
            }
        }
        sizes[keep] += sizes[discard];

        for x in 0..n {
            if x == keep || x == discard || !matrix.is_active(x) {
                continue;
            }
            let merged = config
                .linkage
                .combine(matrix.get(keep, x), matrix.get(discard, x));
            matrix.set(keep, x, merged);
        }

        matrix.deactivate(discard);
        active -= 1;
    }

    // relabel the surviving rows 0..k in ascending row order
    let mut assignments = vec![0usize; n];
    let mut clusters = Vec::with_capacity(config.k);
    for row in 0..n {
        if !matrix.is_active(row) {
            continue;
        }
        let id = clusters.len() as u32;
        let point_ids: Vec<u32> = (0..n)
            .filter(|&p| members[row][p])
            .map(|p| p as u32)
            .collect();
        for &p in &point_ids {
            assignments[p as usize] = id as usize;
        }
        clusters.push(Cluster { id, point_ids });
    }

    Ok(HierarchicalResult {
        clusters,
        assignments,
    })
}

/// Globally closest active pair, scanning the upper triangle in row-major
/// order; the strict `<` keeps the first — lowest (row, col) — pair on ties.
fn closest_pair(matrix: &DistanceMatrix) -> (usize, usize) {
    let n = matrix.len();
    let mut best = (0, 0);
    let mut best_dist = f64::INFINITY;

    for i in 0..n {
        if !matrix.is_active(i) {
            continue;
        }
        for j in (i + 1)..n {
            if !matrix.is_active(j) {
                continue;
            }
            let d = matrix.get(i, j);
            if d < best_dist {
                best_dist = d;
                best = (i, j);
            }
        }
    }

    best
}
