//! Structural statistics over a built [`Graph`].
//!
//! The comparison pipeline consumes statistics through the [`GraphMetrics`]
//! trait so alternative implementations can be swapped in. [`BfsMetrics`] is
//! the default: breadth-first search for path lengths and triangle counting
//! for clustering, both parallelised over nodes with `rayon`.

mod clustering;
mod indexed;
mod paths;

use crate::{error::MetricsError, graph::Graph};

use self::indexed::IndexedAdjacency;

/// Statistics the comparison pipeline reports for each network.
///
/// Implementations are shared across `rayon` workers, hence the `Sync` bound.
pub trait GraphMetrics: Sync {
    /// Number of nodes in `graph`.
    fn node_count(&self, graph: &Graph) -> usize {
        graph.node_count()
    }

    /// Mean node degree, `2 * edges / nodes`.
    ///
    /// # Errors
    /// Returns [`MetricsError::EmptyGraph`] when `graph` has no nodes.
    fn average_degree(&self, graph: &Graph) -> Result<f64, MetricsError> {
        if graph.is_empty() {
            return Err(MetricsError::EmptyGraph);
        }
        Ok((2 * graph.edge_count()) as f64 / graph.node_count() as f64)
    }

    /// Mean shortest-path length between node pairs.
    ///
    /// # Errors
    /// Implementation specific; see [`BfsMetrics`].
    fn average_shortest_path_length(&self, graph: &Graph) -> Result<f64, MetricsError>;

    /// Mean local clustering coefficient over all nodes.
    ///
    /// # Errors
    /// Returns [`MetricsError::EmptyGraph`] when `graph` has no nodes.
    fn average_clustering(&self, graph: &Graph) -> Result<f64, MetricsError>;
}

/// How [`BfsMetrics`] computes the average shortest-path length.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PathLengthMode {
    /// Breadth-first search from every node. The graph must be connected.
    #[default]
    Exact,
    /// Breadth-first search from `sources` distinct nodes picked with a
    /// `SmallRng` seeded from `seed`, averaging over the pairs each source
    /// reaches. Requests beyond the node count use every node.
    Sampled {
        /// Number of BFS sources.
        sources: usize,
        /// Seed for source selection.
        seed: u64,
    },
}

/// Default [`GraphMetrics`] implementation.
///
/// # Examples
/// ```
/// use netgen_core::{BfsMetrics, Graph, GraphMetrics};
///
/// let mut triangle = Graph::with_nodes(3);
/// for (left, right) in [(0, 1), (1, 2), (0, 2)] {
///     triangle.add_edge(left, right).expect("valid edge");
/// }
/// let metrics = BfsMetrics::new();
/// assert_eq!(metrics.average_degree(&triangle), Ok(2.0));
/// assert_eq!(metrics.average_shortest_path_length(&triangle), Ok(1.0));
/// assert_eq!(metrics.average_clustering(&triangle), Ok(1.0));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BfsMetrics {
    path_mode: PathLengthMode,
}

impl BfsMetrics {
    /// Creates a collaborator using exact path lengths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how path lengths are computed.
    #[must_use]
    pub fn with_path_mode(mut self, path_mode: PathLengthMode) -> Self {
        self.path_mode = path_mode;
        self
    }

    /// Returns the configured path-length mode.
    #[must_use]
    pub fn path_mode(&self) -> PathLengthMode {
        self.path_mode
    }
}

impl GraphMetrics for BfsMetrics {
    /// Follows the `networkx` conventions: a single node yields `0.0`.
    ///
    /// # Errors
    /// Returns [`MetricsError::EmptyGraph`] for a graph without nodes. In
    /// [`PathLengthMode::Exact`] a disconnected graph yields
    /// [`MetricsError::Disconnected`]; in [`PathLengthMode::Sampled`] a zero
    /// source count yields [`MetricsError::InvalidSampleSize`].
    fn average_shortest_path_length(&self, graph: &Graph) -> Result<f64, MetricsError> {
        if graph.is_empty() {
            return Err(MetricsError::EmptyGraph);
        }
        match self.path_mode {
            PathLengthMode::Exact => {
                let components = graph.connected_components().len();
                if components > 1 {
                    return Err(MetricsError::Disconnected { components });
                }
                Ok(paths::exact_average(&IndexedAdjacency::from_graph(graph)))
            }
            PathLengthMode::Sampled { sources, seed } => {
                if sources == 0 {
                    return Err(MetricsError::InvalidSampleSize {
                        requested: sources,
                        available: graph.node_count(),
                    });
                }
                Ok(paths::sampled_average(
                    &IndexedAdjacency::from_graph(graph),
                    sources,
                    seed,
                ))
            }
        }
    }

    fn average_clustering(&self, graph: &Graph) -> Result<f64, MetricsError> {
        if graph.is_empty() {
            return Err(MetricsError::EmptyGraph);
        }
        Ok(clustering::average_clustering(
            &IndexedAdjacency::from_graph(graph),
        ))
    }
}

#[cfg(test)]
mod tests;
