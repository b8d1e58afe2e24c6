//! Barabási–Albert preferential-attachment generator.

mod pool;

pub use pool::RepeatedNodePool;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{
    error::Result,
    graph::Graph,
    params::{BarabasiAlbertParams, validate_attachment},
    random::RandomSource,
};

/// Grows a Barabási–Albert graph of `nodes` nodes, attaching each new node
/// with `edges_per_node` edges.
///
/// Growth starts from a complete graph on `0..edges_per_node` whose nodes
/// enter the attachment pool once each. Every later node `i` draws
/// `edges_per_node` distinct targets from the pool, connects to them, and
/// then appends the targets followed by `i` to the pool. Targets within one
/// step are distinct and `i` has no earlier edges, so the result always has
/// `m * (n - m) + m * (m - 1) / 2` edges.
///
/// # Errors
/// Returns [`crate::GeneratorError::InvalidParameter`] unless
/// `1 <= edges_per_node < nodes`, and
/// [`crate::GeneratorError::InsufficientCandidates`] if the pool cannot supply
/// enough distinct targets.
///
/// # Examples
/// ```
/// use netgen_core::generate_barabasi_albert;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(8);
/// let graph = generate_barabasi_albert(5, 2, &mut rng).expect("parameters are valid");
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 7);
/// ```
#[instrument(name = "core.barabasi_albert", err, skip(rng))]
pub fn generate_barabasi_albert<R>(nodes: usize, edges_per_node: usize, rng: &mut R) -> Result<Graph>
where
    R: RandomSource + ?Sized,
{
    validate_attachment(nodes, edges_per_node)?;
    let mut graph = Graph::with_nodes(edges_per_node);
    for left in 0..edges_per_node {
        for right in left + 1..edges_per_node {
            graph.add_edge(left, right)?;
        }
    }
    let mut pool = RepeatedNodePool::from_nodes(0..edges_per_node);
    for node in edges_per_node..nodes {
        graph.add_node(node);
        let targets = pool.sample_distinct(edges_per_node, rng)?;
        for &target in &targets {
            graph.add_edge(node, target)?;
        }
        pool.extend(targets);
        pool.append(node);
    }
    debug!(pool = pool.len(), "attachment pool final size");
    record_growth_steps(nodes - edges_per_node);
    Ok(graph)
}

/// Generates a Barabási–Albert graph from a seeded parameter set.
///
/// # Errors
/// Propagates [`crate::GeneratorError::InsufficientCandidates`] from the
/// growth loop; the parameters themselves were validated on construction.
///
/// # Examples
/// ```
/// use netgen_core::{BarabasiAlbertParams, barabasi_albert_graph};
///
/// let params = BarabasiAlbertParams::new(100, 3).expect("parameters are valid");
/// let graph = barabasi_albert_graph(&params).expect("generation succeeds");
/// assert_eq!(graph.edge_count(), 3 * 97 + 3);
/// ```
#[instrument(
    name = "core.barabasi_albert_seeded",
    err,
    skip(params),
    fields(
        nodes = params.nodes(),
        edges_per_node = params.edges_per_node(),
        seed = params.rng_seed()
    ),
)]
pub fn barabasi_albert_graph(params: &BarabasiAlbertParams) -> Result<Graph> {
    let mut rng = SmallRng::seed_from_u64(params.rng_seed());
    let graph = generate_barabasi_albert(params.nodes(), params.edges_per_node(), &mut rng)?;
    info!(edges = graph.edge_count(), "generated Barabási–Albert graph");
    Ok(graph)
}

#[cfg(feature = "metrics")]
fn record_growth_steps(steps: usize) {
    metrics::counter!("netgen_attachment_steps_total").increment(steps as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_growth_steps(_steps: usize) {}
