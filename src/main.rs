use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use clustertown::{
    dbscan, hierarchical, kmeans, Cluster, DbscanConfig, HierarchicalConfig, KMeansConfig,
    Linkage, PointSet, Seeding, NOISE,
};

#[derive(Parser)]
#[command(
    name = "clustertown",
    version,
    about = "Cluster delimited point data with k-means, DBSCAN or hierarchical clustering"
)]
struct Cli {
    /// Field delimiter of the input file (default: whitespace)
    #[arg(short, long, global = true)]
    delimiter: Option<String>,

    /// Write the cluster report as JSON to a file
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Print the cluster report as JSON instead of a text summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Centroid-based clustering into k clusters
    Kmeans {
        /// Path to the input file containing data points
        input_file: PathBuf,
        /// Number of clusters to form
        k: usize,
        /// Use k-means++ centroid initialization
        #[arg(short, long)]
        plusplus: bool,
        /// Pick the best run (lowest average intra-cluster distance) out of N
        #[arg(short, long, default_value_t = 1)]
        runs: usize,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Abort a run that has not converged after N refinement passes
        #[arg(long)]
        max_iters: Option<usize>,
    },
    /// Density-based clustering with noise detection
    Dbscan {
        /// Path to the input file containing data points
        input_file: PathBuf,
        /// Neighborhood radius; estimated from the data when omitted
        #[arg(short, long)]
        epsilon: Option<f64>,
        /// Minimum neighborhood size of a core point
        #[arg(short, long, default_value_t = 4)]
        minpts: usize,
        /// Estimate epsilon from the data even when --epsilon is given
        #[arg(short, long)]
        auto: bool,
    },
    /// Agglomerative hierarchical clustering into k clusters
    Hierarchical {
        /// Path to the input file containing data points
        input_file: PathBuf,
        /// Number of clusters to form
        k: usize,
        /// Inter-cluster distance rule
        #[arg(short, long, value_enum, default_value_t = Linkage::Average)]
        method: Linkage,
    },
}

/// JSON document emitted by --out / --json.
#[derive(Serialize)]
struct ClusterReport {
    algorithm: &'static str,
    clusters: Vec<Cluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    centroids: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eps: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let delimiter = cli.delimiter.as_deref();

    let report = match &cli.command {
        Command::Kmeans {
            input_file,
            k,
            plusplus,
            runs,
            seed,
            max_iters,
        } => {
            let points = load_points(input_file, delimiter)?;
            let config = KMeansConfig {
                k: *k,
                seeding: if *plusplus {
                    Seeding::PlusPlus
                } else {
                    Seeding::Uniform
                },
                runs: *runs,
                seed: *seed,
                max_iters: *max_iters,
            };

            println!(
                "k-means clustering: {} cluster(s), {} run(s), {} seeding",
                k,
                runs,
                if *plusplus { "k-means++" } else { "uniform" }
            );
            let result = kmeans(&points, &config)?;

            println!(
                "✓ Converged in {} pass(es), avg intra-cluster distance {:.4}\n",
                result.iterations, result.avg_intra_dist
            );
            for cluster in &result.clusters {
                println!(
                    "  Cluster {}: {} point(s), centroid {}",
                    cluster.id + 1,
                    cluster.len(),
                    format_point(&result.centroids[cluster.id as usize])
                );
            }

            ClusterReport {
                algorithm: "kmeans",
                clusters: result.clusters,
                centroids: Some(result.centroids),
                eps: None,
            }
        }
        Command::Dbscan {
            input_file,
            epsilon,
            minpts,
            auto,
        } => {
            let points = load_points(input_file, delimiter)?;
            let config = DbscanConfig {
                // --auto overrides an explicit epsilon, as in the original tool
                eps: if *auto { None } else { *epsilon },
                min_pts: *minpts,
            };

            println!("DBSCAN clustering: min_pts={}", minpts);
            let result = dbscan(&points, &config)?;

            println!("✓ eps = {:.4}\n", result.eps);
            for cluster in &result.clusters {
                if cluster.id as usize == NOISE {
                    println!("  Noise: {} point(s)", cluster.len());
                } else {
                    println!("  Cluster {}: {} point(s)", cluster.id, cluster.len());
                }
            }

            let eps = result.eps;
            ClusterReport {
                algorithm: "dbscan",
                clusters: result.clusters,
                centroids: None,
                eps: Some(eps),
            }
        }
        Command::Hierarchical {
            input_file,
            k,
            method,
        } => {
            let points = load_points(input_file, delimiter)?;
            let config = HierarchicalConfig::with_linkage(*k, *method);

            println!(
                "Hierarchical clustering: {} cluster(s), {:?} linkage",
                k, method
            );
            let result = hierarchical(&points, &config)?;

            println!("✓ {} merge step(s)\n", points.len() - k);
            for cluster in &result.clusters {
                println!("  Cluster {}: {} point(s)", cluster.id + 1, cluster.len());
            }

            ClusterReport {
                algorithm: "hierarchical",
                clusters: result.clusters,
                centroids: None,
                eps: None,
            }
        }
    };

    if let Some(path) = &cli.out {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("\n✓ Report written to {}", path.display());
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn load_points(path: &PathBuf, delimiter: Option<&str>) -> Result<PointSet> {
    PointSet::from_path(path, delimiter)
        .with_context(|| format!("Failed to load points from {}", path.display()))
}

fn format_point(coords: &[f64]) -> String {
    let fields: Vec<String> = coords.iter().map(|c| format!("{:.4}", c)).collect();
    format!("({})", fields.join(", "))
}
