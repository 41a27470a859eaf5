mod seeding;

#[cfg(test)]
mod tests;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::distance::euclidean;
use crate::error::ClusterError;
use crate::partition::{group_by_assignment, Cluster};
use crate::pointset::PointSet;

/// Centroid initialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeding {
    /// Random draws inside the data bounding box.
    Uniform,
    /// k-means++: distance-weighted draws from the data points.
    PlusPlus,
}

/// Parameters for a k-means clustering call.
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters to form.
    pub k: usize,
    pub seeding: Seeding,
    /// Independent runs; the run with the lowest average intra-cluster
    /// distance wins.
    pub runs: usize,
    /// Seed for the ChaCha RNG stream shared by all runs.
    pub seed: u64,
    /// Optional cap on refinement passes per run. `None` preserves the
    /// reference behavior of iterating until the assignment fixed point,
    /// which on degenerate inputs may never be reached.
    pub max_iters: Option<usize>,
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seeding: Seeding::PlusPlus,
            runs: 1,
            seed: 42,
            max_iters: None,
        }
    }
}

/// Outcome of the best k-means run.
#[derive(Debug, Clone)]
pub struct KMeansResult {
    /// Exactly k clusters; a cluster that ended up empty is kept.
    pub clusters: Vec<Cluster>,
    pub centroids: Vec<Vec<f64>>,
    /// Cluster index per point.
    pub assignments: Vec<usize>,
    /// Refinement passes of the winning run that changed at least one
    /// membership.
    pub iterations: usize,
    /// Sum of point-to-assigned-centroid distances divided by the number of
    /// points; the run-selection score.
    pub avg_intra_dist: f64,
}

/// Cluster a point set into k clusters with Lloyd's algorithm, returning the
/// best of `config.runs` independent runs.
pub fn kmeans(points: &PointSet, config: &KMeansConfig) -> Result<KMeansResult, ClusterError> {
    let n = points.len();
    if config.k < 1 || config.k > n {
        return Err(ClusterError::InvalidK { k: config.k, n });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut best: Option<RunOutcome> = None;

    for _ in 0..config.runs.max(1) {
        let centroids = match config.seeding {
            Seeding::Uniform => seeding::uniform(points, config.k, &mut rng),
            Seeding::PlusPlus => seeding::plus_plus(points, config.k, &mut rng),
        };
        let outcome = lloyd(points, centroids, config.max_iters)?;

        let better = match &best {
            Some(current) => outcome.avg_intra_dist < current.avg_intra_dist,
            None => true,
        };
        if better {
            best = Some(outcome);
        }
    }

    let run = best.expect("at least one run was executed");
    Ok(KMeansResult {
        clusters: group_by_assignment(&run.assignments, config.k),
        centroids: run.centroids,
        assignments: run.assignments,
        iterations: run.iterations,
        avg_intra_dist: run.avg_intra_dist,
    })
}

#[derive(Debug)]
struct RunOutcome {
    centroids: Vec<Vec<f64>>,
    assignments: Vec<usize>,
    iterations: usize,
    avg_intra_dist: f64,
}

/// Lloyd refinement from a fixed set of initial centroids.
///
/// Alternates assignment and centroid recomputation until an assignment pass
/// changes no membership. A cluster that loses all members keeps its previous
/// centroid untouched.
fn lloyd(
    points: &PointSet,
    mut centroids: Vec<Vec<f64>>,
    max_iters: Option<usize>,
) -> Result<RunOutcome, ClusterError> {
    let n = points.len();
    let k = centroids.len();
    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0usize;

    loop {
        let mut changed = false;
        for i in 0..n {
            let nearest = nearest_centroid(points.point(i), &centroids);
            if assignments[i] != nearest {
                assignments[i] = nearest;
                changed = true;
            }
        }

        if !changed {
            break;
        }

        iterations += 1;
        if let Some(cap) = max_iters {
            if iterations > cap {
                return Err(ClusterError::NoConvergence(cap));
            }
        }

        let mut sums = vec![vec![0.0; points.dim()]; k];
        let mut counts = vec![0usize; k];
        for (i, &c) in assignments.iter().enumerate() {
            counts[c] += 1;
            for (sum, x) in sums[c].iter_mut().zip(points.point(i)) {
                *sum += x;
            }
        }
        for c in 0..k {
            if counts[c] > 0 {
                for (slot, sum) in centroids[c].iter_mut().zip(&sums[c]) {
                    *slot = sum / counts[c] as f64;
                }
            }
        }
    }

    let total: f64 = assignments
        .iter()
        .enumerate()
        .map(|(i, &c)| euclidean(points.point(i), &centroids[c]))
        .sum();

    Ok(RunOutcome {
        centroids,
        assignments,
        iterations,
        avg_intra_dist: total / n as f64,
    })
}

/// Index of the nearest centroid; ties break toward the lower cluster index.
fn nearest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;

    for (c, centroid) in centroids.iter().enumerate() {
        let d = euclidean(point, centroid);
        if d < best_dist {
            best_dist = d;
            best = c;
        }
    }

    best
}
