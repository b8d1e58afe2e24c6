//! Probabilistic edge rewiring over a ring lattice.

use tracing::{debug, instrument};

use crate::{
    error::{GeneratorError, Result},
    graph::{Graph, NodeId},
    params::validate_beta,
    random::RandomSource,
};

use super::lattice::RingLattice;

/// Outcome of a rewiring pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rewired {
    graph: Graph,
    rewired: usize,
}

impl Rewired {
    /// Returns the rewired graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns how many edges had their target replaced.
    #[must_use]
    pub fn rewired_count(&self) -> usize {
        self.rewired
    }

    /// Consumes the outcome and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Consumes the outcome and returns the graph with the rewired count.
    #[must_use]
    pub fn into_parts(self) -> (Graph, usize) {
        (self.graph, self.rewired)
    }
}

/// Rewires each lattice edge with probability `beta`.
///
/// Edges are visited once, in the lattice's creation order. For a visited
/// edge `(u, v)` a uniform draw below `beta` replaces `v` with a node chosen
/// uniformly among those that are neither `u` nor currently adjacent to `u`.
/// Adjacency is read live, so earlier replacements in the same pass are
/// visible to later ones. The node set and edge count never change.
///
/// # Errors
/// Returns [`GeneratorError::InvalidParameter`] when `beta` lies outside
/// `[0, 1]` and [`GeneratorError::NoEligibleTarget`] when a rewired node is
/// already adjacent to every other node.
///
/// # Examples
/// ```
/// use netgen_core::{build_ring_lattice, rewire};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let lattice = build_ring_lattice(20, 4).expect("parameters are valid");
/// let mut rng = SmallRng::seed_from_u64(3);
/// let rewired = rewire(lattice, 0.2, &mut rng).expect("rewiring succeeds");
/// assert_eq!(rewired.graph().edge_count(), 40);
/// ```
#[instrument(
    name = "core.rewire",
    err,
    skip(lattice, rng),
    fields(nodes = lattice.node_count(), edges = lattice.edges().len()),
)]
pub fn rewire<R>(lattice: RingLattice, beta: f64, rng: &mut R) -> Result<Rewired>
where
    R: RandomSource + ?Sized,
{
    validate_beta(beta)?;
    let (mut graph, edges) = lattice.into_parts();
    let mut rewired = 0_usize;
    for (source, target) in edges {
        if rng.next_unit() >= beta {
            continue;
        }
        let replacement = choose_replacement(&graph, source, rng)?;
        graph.remove_edge(source, target);
        graph.add_edge(source, replacement)?;
        rewired += 1;
    }
    debug!(rewired, "rewiring pass complete");
    super::record_rewired(rewired);
    Ok(Rewired { graph, rewired })
}

/// Picks a uniform node that is neither `source` nor adjacent to it.
///
/// Lattice nodes are `0..n`, so candidates are drawn from that range and
/// rejected until one is eligible.
fn choose_replacement<R>(graph: &Graph, source: NodeId, rng: &mut R) -> Result<NodeId>
where
    R: RandomSource + ?Sized,
{
    let neighbours = graph.neighbours(source)?;
    let node_count = graph.node_count();
    let eligible = node_count
        .saturating_sub(1)
        .saturating_sub(neighbours.len());
    if eligible == 0 {
        return Err(GeneratorError::NoEligibleTarget { node: source });
    }
    loop {
        let candidate = rng
            .choose_index(node_count)
            .ok_or(GeneratorError::NoEligibleTarget { node: source })?;
        if candidate != source && !neighbours.contains(&candidate) {
            return Ok(candidate);
        }
    }
}
