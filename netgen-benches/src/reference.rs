//! Seeded inputs shared by the benchmarks.

use netgen_core::{
    BarabasiAlbertParams, BfsMetrics, Graph, PathLengthMode, barabasi_albert_graph,
};
use rand::{SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Seed used for all benchmark inputs.
pub const SEED: u64 = 42;

/// Builds a connected scale-free reference graph with `node_count` nodes.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when `edges_per_node` is zero or
/// not smaller than `node_count`.
pub fn reference_graph(node_count: usize, edges_per_node: usize) -> Result<Graph, BenchSetupError> {
    let params = BarabasiAlbertParams::new(node_count, edges_per_node)?.with_rng_seed(SEED);
    Ok(barabasi_albert_graph(&params)?)
}

/// Returns a fresh random stream seeded with [`SEED`].
#[must_use]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

/// Metrics collaborator for the given path-length sampling choice.
#[must_use]
pub fn metrics_for(path_samples: Option<usize>) -> BfsMetrics {
    let mode = path_samples.map_or(PathLengthMode::Exact, |sources| PathLengthMode::Sampled {
        sources,
        seed: SEED,
    });
    BfsMetrics::new().with_path_mode(mode)
}
