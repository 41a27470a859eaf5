use super::*;
use crate::distance::euclidean;
use crate::error::ClusterError;
use crate::pointset::PointSet;

fn two_pair_points() -> PointSet {
    PointSet::new(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![10.0, 10.0],
        vec![10.0, 11.0],
    ])
    .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_rejects_invalid_k() {
    let points = two_pair_points();

    assert!(matches!(
        kmeans(&points, &KMeansConfig::new(0)),
        Err(ClusterError::InvalidK { k: 0, n: 4 })
    ));
    assert!(matches!(
        kmeans(&points, &KMeansConfig::new(5)),
        Err(ClusterError::InvalidK { k: 5, n: 4 })
    ));
}

#[test]
fn test_converges_in_one_pass_from_seeded_centroids() {
    let points = two_pair_points();
    let seeds = vec![vec![0.0, 0.0], vec![10.0, 10.0]];

    let run = lloyd(&points, seeds, None).unwrap();

    assert_eq!(run.assignments, vec![0, 0, 1, 1]);
    assert_eq!(run.iterations, 1);
    assert!(approx(run.centroids[0][0], 0.0));
    assert!(approx(run.centroids[0][1], 0.5));
    assert!(approx(run.centroids[1][0], 10.0));
    assert!(approx(run.centroids[1][1], 10.5));
}

#[test]
fn test_empty_cluster_keeps_its_centroid() {
    let points = PointSet::new(vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
    ])
    .unwrap();
    // second centroid is far outside the data and attracts nothing
    let seeds = vec![vec![0.5, 0.5], vec![100.0, 100.0]];

    let run = lloyd(&points, seeds, None).unwrap();

    assert_eq!(run.assignments, vec![0, 0, 0, 0]);
    assert_eq!(run.centroids[1], vec![100.0, 100.0]);
}

#[test]
fn test_result_is_a_reassignment_fixed_point() {
    let points = PointSet::new(vec![
        vec![0.0, 0.0],
        vec![0.5, 0.5],
        vec![0.0, 1.0],
        vec![9.0, 9.0],
        vec![10.0, 10.0],
        vec![9.5, 10.5],
    ])
    .unwrap();
    let mut config = KMeansConfig::new(2);
    config.seed = 7;

    let result = kmeans(&points, &config).unwrap();

    for (i, &own) in result.assignments.iter().enumerate() {
        let d_own = euclidean(points.point(i), &result.centroids[own]);
        for centroid in &result.centroids {
            assert!(d_own <= euclidean(points.point(i), centroid) + 1e-9);
        }
    }
}

#[test]
fn test_rerun_from_final_centroids_reproduces_partition() {
    let points = two_pair_points();
    let mut config = KMeansConfig::new(2);
    config.seed = 3;

    let result = kmeans(&points, &config).unwrap();
    let rerun = lloyd(&points, result.centroids.clone(), None).unwrap();

    assert_eq!(rerun.assignments, result.assignments);
    assert_eq!(rerun.centroids, result.centroids);
}

#[test]
fn test_k_equals_one_yields_global_mean() {
    let points = two_pair_points();

    let result = kmeans(&points, &KMeansConfig::new(1)).unwrap();

    assert_eq!(result.assignments, vec![0, 0, 0, 0]);
    assert!(approx(result.centroids[0][0], 5.0));
    assert!(approx(result.centroids[0][1], 5.5));
}

#[test]
fn test_best_of_runs_never_worse_than_first_run() {
    let points = PointSet::new(vec![
        vec![0.0, 0.0],
        vec![1.0, 0.5],
        vec![0.5, 1.0],
        vec![8.0, 8.0],
        vec![9.0, 8.5],
        vec![8.5, 9.5],
        vec![4.0, 4.5],
    ])
    .unwrap();

    let mut single = KMeansConfig::new(3);
    single.seeding = Seeding::Uniform;
    single.seed = 11;
    let mut multi = single.clone();
    multi.runs = 5;

    // the first of the 5 runs draws from the same RNG stream as the single
    // run, so the winner can only improve on it
    let one = kmeans(&points, &single).unwrap();
    let five = kmeans(&points, &multi).unwrap();

    assert!(five.avg_intra_dist <= one.avg_intra_dist + 1e-12);
}

#[test]
fn test_plus_plus_is_deterministic_for_a_seed() {
    let points = two_pair_points();
    let mut config = KMeansConfig::new(2);
    config.seed = 99;

    let a = kmeans(&points, &config).unwrap();
    let b = kmeans(&points, &config).unwrap();

    assert_eq!(a.assignments, b.assignments);
    assert_eq!(a.centroids, b.centroids);
}

#[test]
fn test_uniform_seeds_stay_inside_bounding_box() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let points = two_pair_points();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let seeds = seeding::uniform(&points, 8, &mut rng);
    let (min, max) = points.bounds();

    assert_eq!(seeds.len(), 8);
    for seed in seeds {
        for d in 0..points.dim() {
            assert!(seed[d] >= min[d] && seed[d] <= max[d]);
        }
    }
}

#[test]
fn test_plus_plus_seeds_are_data_points() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let points = two_pair_points();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let seeds = seeding::plus_plus(&points, 3, &mut rng);

    assert_eq!(seeds.len(), 3);
    for seed in &seeds {
        assert!(points.iter().any(|p| p == seed.as_slice()));
    }
}

#[test]
fn test_iteration_cap_reports_non_convergence() {
    let points = two_pair_points();
    // seeds far from the converged positions force at least one changed pass
    let seeds = vec![vec![-5.0, -5.0], vec![20.0, 20.0]];

    let err = lloyd(&points, seeds, Some(0)).unwrap_err();

    assert!(matches!(err, ClusterError::NoConvergence(0)));
}

#[test]
fn test_empty_clusters_survive_in_result() {
    // two identical points, k=2 with uniform seeding: one centroid wins both
    let points = PointSet::new(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
    let mut config = KMeansConfig::new(2);
    config.seeding = Seeding::Uniform;
    config.seed = 1;

    let result = kmeans(&points, &config).unwrap();

    assert_eq!(result.clusters.len(), 2);
    let total: usize = result.clusters.iter().map(|c| c.len()).sum();
    assert_eq!(total, 2);
}
