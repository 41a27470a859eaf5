use serde::Serialize;

/// A single cluster: an identifier plus the indices of its member points.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub id: u32,
    pub point_ids: Vec<u32>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }
}

/// Group a dense assignment vector into per-cluster member lists.
///
/// Returns exactly `num_clusters` clusters. Clusters nothing was assigned to
/// come back empty: k-means keeps empty clusters around (their centroids
/// survive), and DBSCAN reserves id 0 for noise even when no point is noise.
pub fn group_by_assignment(assignments: &[usize], num_clusters: usize) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = (0..num_clusters)
        .map(|id| Cluster {
            id: id as u32,
            point_ids: Vec::new(),
        })
        .collect();

    for (point, &cluster) in assignments.iter().enumerate() {
        clusters[cluster].point_ids.push(point as u32);
    }

    clusters
}
