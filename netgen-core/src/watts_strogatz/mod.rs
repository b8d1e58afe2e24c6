//! Watts–Strogatz small-world generator.
//!
//! Generation runs in two sequential stages: [`build_ring_lattice`] lays out
//! the regular ring, then [`rewire`] perturbs it edge by edge. Each stage
//! depends on every earlier random draw, so neither is parallelised.

mod lattice;
mod rewire;

pub use lattice::{RingLattice, build_ring_lattice};
pub use rewire::{Rewired, rewire};

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{error::Result, graph::Graph, params::WattsStrogatzParams};

/// Generates a Watts–Strogatz graph from a seeded parameter set.
///
/// # Errors
/// Propagates [`crate::GeneratorError::NoEligibleTarget`] from the rewiring
/// stage; the parameters themselves were validated on construction.
///
/// # Examples
/// ```
/// use netgen_core::{WattsStrogatzParams, watts_strogatz_graph};
///
/// let params = WattsStrogatzParams::new(30, 4, 0.1)
///     .expect("parameters are valid")
///     .with_rng_seed(5);
/// let graph = watts_strogatz_graph(&params).expect("generation succeeds");
/// assert_eq!(graph.node_count(), 30);
/// assert_eq!(graph.edge_count(), 60);
/// ```
#[instrument(
    name = "core.watts_strogatz",
    err,
    skip(params),
    fields(
        nodes = params.nodes(),
        degree = params.degree(),
        beta = params.beta(),
        seed = params.rng_seed()
    ),
)]
pub fn watts_strogatz_graph(params: &WattsStrogatzParams) -> Result<Graph> {
    let mut rng = SmallRng::seed_from_u64(params.rng_seed());
    let lattice = build_ring_lattice(params.nodes(), params.degree())?;
    let (graph, rewired) = rewire(lattice, params.beta(), &mut rng)?.into_parts();
    info!(
        edges = graph.edge_count(),
        rewired, "generated Watts–Strogatz graph"
    );
    Ok(graph)
}

#[cfg(feature = "metrics")]
fn record_rewired(rewired: usize) {
    metrics::counter!("netgen_rewired_edges_total").increment(rewired as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_rewired(_rewired: usize) {}
