// Public API exports
pub mod dbscan;
pub mod distance;
pub mod error;
pub mod hierarchical;
pub mod kmeans;
pub mod partition;
pub mod pointset;

// Re-export main types for convenience
pub use dbscan::{dbscan, DbscanConfig, DbscanResult, NOISE};
pub use error::ClusterError;
pub use hierarchical::{hierarchical, HierarchicalConfig, HierarchicalResult, Linkage};
pub use kmeans::{kmeans, KMeansConfig, KMeansResult, Seeding};
pub use partition::Cluster;
pub use pointset::{LoadError, PointSet};
