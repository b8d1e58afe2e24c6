//! Regular ring lattice that seeds the Watts–Strogatz model.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Graph, NodeId},
    params::validate_lattice,
};

/// A ring lattice together with the order in which its edges were created.
///
/// The creation order is the order [`super::rewire`] visits edges in, so it
/// is captured once here and never re-derived from the mutated graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RingLattice {
    graph: Graph,
    edges: Vec<(NodeId, NodeId)>,
}

impl RingLattice {
    /// Returns the lattice graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the edges in creation order as `(source, target)` pairs.
    ///
    /// `source` is the node whose loop iteration created the edge; rewiring
    /// keeps `source` and replaces `target`.
    #[must_use]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Number of lattice nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn into_parts(self) -> (Graph, Vec<(NodeId, NodeId)>) {
        (self.graph, self.edges)
    }
}

/// Builds a ring lattice of `nodes` nodes, each linked to its `degree / 2`
/// nearest neighbours on either side.
///
/// An odd `degree` rounds down, so the realised degree of every node is
/// `2 * (degree / 2)`. Edges are created for `i` in `0..nodes` and `j` in
/// `1..=degree / 2`, linking `i` to `i + j` and then `i - j` (mod `nodes`);
/// a pair that already exists is skipped.
///
/// # Errors
/// Returns [`crate::GeneratorError::InvalidParameter`] when `nodes` is zero or
/// `degree >= nodes`.
///
/// # Examples
/// ```
/// use netgen_core::build_ring_lattice;
///
/// let lattice = build_ring_lattice(6, 2).expect("parameters are valid");
/// assert_eq!(
///     lattice.edges(),
///     &[(0, 1), (0, 5), (1, 2), (2, 3), (3, 4), (4, 5)],
/// );
/// ```
#[instrument(name = "core.ring_lattice", err)]
pub fn build_ring_lattice(nodes: usize, degree: usize) -> Result<RingLattice> {
    validate_lattice(nodes, degree)?;
    let half = degree / 2;
    let mut graph = Graph::with_nodes(nodes);
    let mut edges = Vec::with_capacity(nodes * half);
    for node in 0..nodes {
        for offset in 1..=half {
            let forward = (node + offset) % nodes;
            let backward = (node + nodes - offset) % nodes;
            for target in [forward, backward] {
                if graph.add_edge(node, target)? {
                    edges.push((node, target));
                }
            }
        }
    }
    debug!(edges = edges.len(), "ring lattice built");
    Ok(RingLattice { graph, edges })
}
