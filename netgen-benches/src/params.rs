//! Benchmark parameter types.
//!
//! Each type renders as the Criterion parameter label of one benchmark input.

use std::fmt;

/// Parameters for a generator benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Lattice degree for Watts–Strogatz, edges per node for Barabási–Albert.
    pub degree: usize,
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.node_count, self.degree)
    }
}

/// Parameters for a metrics benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MetricsBenchParams {
    /// Number of nodes in the analysed graph.
    pub node_count: usize,
    /// BFS sources when path lengths are sampled; `None` for exact runs.
    pub path_samples: Option<usize>,
}

impl fmt::Display for MetricsBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_samples {
            Some(samples) => write!(f, "n={},samples={samples}", self.node_count),
            None => write!(f, "n={},exact", self.node_count),
        }
    }
}
