//! Derivation of model parameters from a reference network.

use crate::{
    error::Result,
    graph::Graph,
    params::{BarabasiAlbertParams, WattsStrogatzParams},
    random::{DEFAULT_RNG_SEED, mix_stream_seed},
};

/// Rewiring probability used when none is configured.
pub const DEFAULT_BETA: f64 = 0.1;

const WATTS_STROGATZ_STREAM: u64 = 0;
const BARABASI_ALBERT_STREAM: u64 = 1;

/// Caller-tunable inputs to [`super::run_comparison`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonConfig {
    beta: f64,
    seed: u64,
}

impl ComparisonConfig {
    /// Creates a configuration with the default rewiring probability and seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            beta: DEFAULT_BETA,
            seed: DEFAULT_RNG_SEED,
        }
    }

    /// Overrides the Watts–Strogatz rewiring probability.
    ///
    /// The value is validated when the model is generated.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Overrides the base seed both model seeds are derived from.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the rewiring probability.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the base seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Model parameters sized after a reference network.
///
/// Both models use the reference node count. Watts–Strogatz takes the
/// floored average degree as its lattice degree and Barabási–Albert attaches
/// with half of it. Invalid derived values are kept as-is so generation
/// reports them.
///
/// # Examples
/// ```
/// use netgen_core::{ComparisonConfig, ModelPlan, build_ring_lattice};
///
/// let lattice = build_ring_lattice(12, 6).expect("parameters are valid");
/// let plan = ModelPlan::from_reference(lattice.graph(), &ComparisonConfig::new());
/// assert_eq!(plan.nodes(), 12);
/// assert_eq!(plan.ws_degree(), 6);
/// assert_eq!(plan.ba_edges_per_node(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ModelPlan {
    nodes: usize,
    ws_degree: usize,
    beta: f64,
    ba_edges_per_node: usize,
    ws_seed: u64,
    ba_seed: u64,
}

impl ModelPlan {
    /// Derives the plan from `reference` and `config`.
    #[must_use]
    pub fn from_reference(reference: &Graph, config: &ComparisonConfig) -> Self {
        let nodes = reference.node_count();
        let ws_degree = (2 * reference.edge_count()).checked_div(nodes).unwrap_or(0);
        Self {
            nodes,
            ws_degree,
            beta: config.beta(),
            ba_edges_per_node: ws_degree / 2,
            ws_seed: mix_stream_seed(config.seed(), WATTS_STROGATZ_STREAM),
            ba_seed: mix_stream_seed(config.seed(), BARABASI_ALBERT_STREAM),
        }
    }

    /// Node count of both models.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Lattice degree of the Watts–Strogatz model.
    #[must_use]
    pub fn ws_degree(&self) -> usize {
        self.ws_degree
    }

    /// Rewiring probability of the Watts–Strogatz model.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Edges each new Barabási–Albert node attaches with.
    #[must_use]
    pub fn ba_edges_per_node(&self) -> usize {
        self.ba_edges_per_node
    }

    /// Seed of the Watts–Strogatz stream.
    #[must_use]
    pub fn ws_seed(&self) -> u64 {
        self.ws_seed
    }

    /// Seed of the Barabási–Albert stream.
    #[must_use]
    pub fn ba_seed(&self) -> u64 {
        self.ba_seed
    }

    /// Builds validated Watts–Strogatz parameters.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::InvalidParameter`] when a derived
    /// value is out of range.
    pub fn watts_strogatz_params(&self) -> Result<WattsStrogatzParams> {
        Ok(WattsStrogatzParams::new(self.nodes, self.ws_degree, self.beta)?
            .with_rng_seed(self.ws_seed))
    }

    /// Builds validated Barabási–Albert parameters.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::InvalidParameter`] when a derived
    /// value is out of range, for example an attachment count of zero.
    pub fn barabasi_albert_params(&self) -> Result<BarabasiAlbertParams> {
        Ok(BarabasiAlbertParams::new(self.nodes, self.ba_edges_per_node)?
            .with_rng_seed(self.ba_seed))
    }
}
