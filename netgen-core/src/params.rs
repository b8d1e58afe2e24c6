//! Parameter objects for the seeded generator entry points.

use crate::{
    error::{GeneratorError, Result},
    random::DEFAULT_RNG_SEED,
};

/// Validated configuration for a Watts–Strogatz small-world graph.
#[derive(Clone, Debug, PartialEq)]
pub struct WattsStrogatzParams {
    nodes: usize,
    degree: usize,
    beta: f64,
    rng_seed: u64,
}

impl WattsStrogatzParams {
    /// Creates a parameter set for `nodes` nodes of lattice degree `degree`
    /// rewired with probability `beta`.
    ///
    /// An odd `degree` is realised as `degree - 1`: each node links to
    /// `degree / 2` neighbours on either side of the ring.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] when `nodes` is zero,
    /// when `degree >= nodes`, or when `beta` is not a probability.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::WattsStrogatzParams;
    /// let params = WattsStrogatzParams::new(20, 4, 0.1).expect("parameters must be valid");
    /// assert_eq!(params.degree(), 4);
    /// ```
    pub fn new(nodes: usize, degree: usize, beta: f64) -> Result<Self> {
        validate_lattice(nodes, degree)?;
        validate_beta(beta)?;
        Ok(Self {
            nodes,
            degree,
            beta,
            rng_seed: DEFAULT_RNG_SEED,
        })
    }

    /// Seeds the RNG to make generation deterministic.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the requested lattice degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the rewiring probability.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the RNG seed.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

/// Validated configuration for a Barabási–Albert preferential-attachment graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BarabasiAlbertParams {
    nodes: usize,
    edges_per_node: usize,
    rng_seed: u64,
}

impl BarabasiAlbertParams {
    /// Creates a parameter set for `nodes` nodes, each new node attaching to
    /// `edges_per_node` existing nodes.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameter`] unless
    /// `1 <= edges_per_node < nodes`.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::BarabasiAlbertParams;
    /// let params = BarabasiAlbertParams::new(50, 3)
    ///     .expect("parameters must be valid")
    ///     .with_rng_seed(11);
    /// assert_eq!(params.edges_per_node(), 3);
    /// assert_eq!(params.rng_seed(), 11);
    /// ```
    pub fn new(nodes: usize, edges_per_node: usize) -> Result<Self> {
        validate_attachment(nodes, edges_per_node)?;
        Ok(Self {
            nodes,
            edges_per_node,
            rng_seed: DEFAULT_RNG_SEED,
        })
    }

    /// Seeds the RNG to make generation deterministic.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of edges each new node attaches with.
    #[must_use]
    pub fn edges_per_node(&self) -> usize {
        self.edges_per_node
    }

    /// Returns the RNG seed.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

pub(crate) fn validate_lattice(nodes: usize, degree: usize) -> Result<()> {
    if nodes == 0 {
        return Err(GeneratorError::invalid(
            "nodes",
            "a ring lattice needs at least one node",
        ));
    }
    if degree >= nodes {
        return Err(GeneratorError::invalid(
            "degree",
            format!("degree ({degree}) must be smaller than nodes ({nodes})"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_beta(beta: f64) -> Result<()> {
    if (0.0..=1.0).contains(&beta) {
        Ok(())
    } else {
        Err(GeneratorError::invalid(
            "beta",
            format!("rewiring probability ({beta}) must lie in [0, 1]"),
        ))
    }
}

pub(crate) fn validate_attachment(nodes: usize, edges_per_node: usize) -> Result<()> {
    if edges_per_node == 0 {
        return Err(GeneratorError::invalid(
            "edges_per_node",
            "each new node must attach with at least one edge",
        ));
    }
    if edges_per_node >= nodes {
        return Err(GeneratorError::invalid(
            "edges_per_node",
            format!("edges_per_node ({edges_per_node}) must be smaller than nodes ({nodes})"),
        ));
    }
    Ok(())
}
