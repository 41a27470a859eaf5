//! Euclidean distance primitives and the pairwise distance matrix.

use crate::pointset::PointSet;

/// Euclidean distance between two points of equal dimension.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    euclidean_sq(a, b).sqrt()
}

/// Squared Euclidean distance. Exists to skip the square root on hot paths
/// (k-means++ weighting).
pub fn euclidean_sq(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Symmetric pairwise distance matrix with an active-row mask.
///
/// Only the upper triangle (i <= j) is computed; lookups with i > j answer by
/// swapping indices and the diagonal is zero. The mask lets hierarchical
/// clustering retire merged clusters without reallocation: once an index is
/// deactivated, its distances must never be read again.
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
    active: Vec<bool>,
}

impl DistanceMatrix {
    /// Build the full upper triangle over a point set. O(N²) time and memory.
    pub fn from_points(points: &PointSet) -> Self {
        let n = points.len();
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                values[i * n + j] = euclidean(points.point(i), points.point(j));
            }
        }

        Self {
            n,
            values,
            active: vec![true; n],
        }
    }

    /// Number of rows (points or clusters, active or not).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between `i` and `j`. Reading a deactivated index is a
    /// programming error, not a recoverable one.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(
            self.active[i] && self.active[j],
            "distance read for deactivated index"
        );
        let (row, col) = if i <= j { (i, j) } else { (j, i) };
        self.values[row * self.n + col]
    }

    /// Overwrite the stored distance between `i` and `j` (linkage updates
    /// after a merge).
    pub fn set(&mut self, i: usize, j: usize, d: f64) {
        debug_assert!(
            self.active[i] && self.active[j],
            "distance write for deactivated index"
        );
        let (row, col) = if i <= j { (i, j) } else { (j, i) };
        self.values[row * self.n + col] = d;
    }

    /// Retire row/column `i` after its cluster has been merged away.
    pub fn deactivate(&mut self, i: usize) {
        self.active[i] = false;
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.active[i]
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }
}
