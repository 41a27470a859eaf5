use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::distance::euclidean_sq;
use crate::pointset::PointSet;

/// Draw k centroids uniformly at random inside the data bounding box.
pub(super) fn uniform(points: &PointSet, k: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    let (min, max) = points.bounds();

    (0..k)
        .map(|_| {
            min.iter()
                .zip(&max)
                .map(|(&lo, &hi)| lo + rng.gen::<f64>() * (hi - lo))
                .collect()
        })
        .collect()
}

/// k-means++ seeding.
///
/// The first centroid is a uniformly drawn data point; every further centroid
/// is a data point drawn with probability proportional to its squared distance
/// to the nearest centroid chosen so far.
pub(super) fn plus_plus(points: &PointSet, k: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);

    let first = rng.gen_range(0..n);
    centroids.push(points.point(first).to_vec());

    // squared distance of every point to its nearest chosen centroid,
    // maintained incrementally as centroids are added
    let mut min_sq: Vec<f64> = (0..n)
        .map(|i| euclidean_sq(points.point(i), &centroids[0]))
        .collect();

    while centroids.len() < k {
        let next = match WeightedIndex::new(&min_sq) {
            Ok(weighted) => weighted.sample(rng),
            // every point coincides with a chosen centroid
            Err(_) => rng.gen_range(0..n),
        };
        centroids.push(points.point(next).to_vec());

        for (i, slot) in min_sq.iter_mut().enumerate() {
            let d = euclidean_sq(points.point(i), points.point(next));
            if d < *slot {
                *slot = d;
            }
        }
    }

    centroids
}
