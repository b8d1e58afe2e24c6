//! Comparison of a reference network against Watts–Strogatz and
//! Barabási–Albert models of the same size.
//!
//! Graphs are immutable once built, so statistics for the three networks and
//! the four statistics of each network are computed concurrently with
//! `rayon::join`.

mod plan;

pub use plan::{ComparisonConfig, DEFAULT_BETA, ModelPlan};

use std::{fmt, sync::Arc};

use tracing::{info, instrument};

use crate::{
    barabasi_albert::barabasi_albert_graph,
    error::{AnalysisError, GeneratorError, MetricsError},
    graph::Graph,
    stats::GraphMetrics,
    watts_strogatz::watts_strogatz_graph,
};

/// Label of the reference network within a comparison.
pub const ORIGINAL_LABEL: &str = "Original";
/// Label of the Watts–Strogatz model within a comparison.
pub const WATTS_STROGATZ_LABEL: &str = "WS Model";
/// Label of the Barabási–Albert model within a comparison.
pub const BARABASI_ALBERT_LABEL: &str = "BA Model";

/// Statistics computed for one network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkStats {
    name: Arc<str>,
    nodes: usize,
    average_degree: f64,
    average_path_length: f64,
    average_clustering: f64,
}

impl NetworkStats {
    /// Label of the analysed network.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node count.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Mean node degree.
    #[must_use]
    pub fn average_degree(&self) -> f64 {
        self.average_degree
    }

    /// Mean shortest-path length.
    #[must_use]
    pub fn average_path_length(&self) -> f64 {
        self.average_path_length
    }

    /// Mean local clustering coefficient.
    #[must_use]
    pub fn average_clustering(&self) -> f64 {
        self.average_clustering
    }
}

/// One comparison row: the reference network against both models.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkComparison {
    network: Arc<str>,
    original: NetworkStats,
    watts_strogatz: NetworkStats,
    barabasi_albert: NetworkStats,
}

impl NetworkComparison {
    /// Column headers of [`NetworkComparison::values`], in order.
    pub const COLUMNS: [&'static str; 9] = [
        "Network",
        "Original Size",
        "Original Avg Degree",
        "Original Path Length",
        "Original Clustering",
        "WS Path Length",
        "WS Clustering",
        "BA Path Length",
        "BA Clustering",
    ];

    /// Name of the reference network the row is keyed by.
    #[must_use]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Statistics of the reference network.
    #[must_use]
    pub fn original(&self) -> &NetworkStats {
        &self.original
    }

    /// Statistics of the Watts–Strogatz model.
    #[must_use]
    pub fn watts_strogatz(&self) -> &NetworkStats {
        &self.watts_strogatz
    }

    /// Statistics of the Barabási–Albert model.
    #[must_use]
    pub fn barabasi_albert(&self) -> &NetworkStats {
        &self.barabasi_albert
    }

    /// Cell values matching [`NetworkComparison::COLUMNS`].
    #[must_use]
    pub fn values(&self) -> [String; 9] {
        [
            self.network.to_string(),
            self.original.nodes.to_string(),
            format_statistic(self.original.average_degree),
            format_statistic(self.original.average_path_length),
            format_statistic(self.original.average_clustering),
            format_statistic(self.watts_strogatz.average_path_length),
            format_statistic(self.watts_strogatz.average_clustering),
            format_statistic(self.barabasi_albert.average_path_length),
            format_statistic(self.barabasi_albert.average_clustering),
        ]
    }
}

impl fmt::Display for NetworkComparison {
    /// Renders a tab-separated header line followed by the value line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::COLUMNS.join("\t"))?;
        write!(f, "{}", self.values().join("\t"))
    }
}

fn format_statistic(value: f64) -> String {
    format!("{value:.6}")
}

/// Outcome of [`run_comparison`]: the derived model plan and the comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    plan: ModelPlan,
    comparison: NetworkComparison,
}

impl ComparisonReport {
    /// Model parameters derived from the reference network.
    #[must_use]
    pub fn plan(&self) -> &ModelPlan {
        &self.plan
    }

    /// The comparison row.
    #[must_use]
    pub fn comparison(&self) -> &NetworkComparison {
        &self.comparison
    }
}

/// Computes node count, average degree, average shortest-path length, and
/// average clustering for `graph`, running the four statistics concurrently.
///
/// # Errors
/// Returns [`AnalysisError::Metrics`] tagged with `name` when a statistic
/// cannot be computed.
///
/// # Examples
/// ```
/// use netgen_core::{BfsMetrics, analyze_network, build_ring_lattice};
///
/// let lattice = build_ring_lattice(10, 4).expect("parameters are valid");
/// let stats = analyze_network(lattice.graph(), "ring", &BfsMetrics::new())
///     .expect("ring lattices are connected");
/// assert_eq!(stats.nodes(), 10);
/// assert_eq!(stats.average_degree(), 4.0);
/// ```
#[instrument(
    name = "core.analyze_network",
    err,
    skip(graph, metrics),
    fields(nodes = graph.node_count())
)]
pub fn analyze_network<M>(
    graph: &Graph,
    name: &str,
    metrics: &M,
) -> Result<NetworkStats, AnalysisError>
where
    M: GraphMetrics + ?Sized,
{
    info!(network = name, "starting network analysis");
    let ((nodes, degree), (path_length, clustering)) = rayon::join(
        || {
            rayon::join(
                || metrics.node_count(graph),
                || metrics.average_degree(graph),
            )
        },
        || {
            rayon::join(
                || metrics.average_shortest_path_length(graph),
                || metrics.average_clustering(graph),
            )
        },
    );
    let tag = |source: MetricsError| AnalysisError::Metrics {
        network: Arc::from(name),
        source,
    };
    let stats = NetworkStats {
        name: Arc::from(name),
        nodes,
        average_degree: degree.map_err(tag)?,
        average_path_length: path_length.map_err(tag)?,
        average_clustering: clustering.map_err(tag)?,
    };
    info!(
        network = name,
        nodes = stats.nodes,
        average_degree = stats.average_degree,
        average_path_length = stats.average_path_length,
        average_clustering = stats.average_clustering,
        "network analysis completed"
    );
    Ok(stats)
}

/// Analyses the reference network and both models concurrently and
/// assembles the comparison row keyed by `name`.
///
/// # Errors
/// Returns the first [`AnalysisError`] in reference, Watts–Strogatz,
/// Barabási–Albert order.
#[instrument(name = "core.compare_networks", err, skip_all, fields(network = name))]
pub fn compare_networks<M>(
    original: &Graph,
    watts_strogatz: &Graph,
    barabasi_albert: &Graph,
    name: &str,
    metrics: &M,
) -> Result<NetworkComparison, AnalysisError>
where
    M: GraphMetrics + ?Sized,
{
    let (original, (watts_strogatz, barabasi_albert)) = rayon::join(
        || analyze_network(original, ORIGINAL_LABEL, metrics),
        || {
            rayon::join(
                || analyze_network(watts_strogatz, WATTS_STROGATZ_LABEL, metrics),
                || analyze_network(barabasi_albert, BARABASI_ALBERT_LABEL, metrics),
            )
        },
    );
    let comparison = NetworkComparison {
        network: Arc::from(name),
        original: original?,
        watts_strogatz: watts_strogatz?,
        barabasi_albert: barabasi_albert?,
    };
    info!(
        ws_nodes = comparison.watts_strogatz.nodes,
        ws_average_degree = comparison.watts_strogatz.average_degree,
        ba_nodes = comparison.barabasi_albert.nodes,
        ba_average_degree = comparison.barabasi_albert.average_degree,
        "network comparison completed"
    );
    Ok(comparison)
}

/// Runs the full pipeline for a reference network.
///
/// The reference is reduced to its largest connected component, model
/// parameters are derived from it with [`ModelPlan::from_reference`], both
/// models are generated from independent seeded streams, and the three
/// networks are compared.
///
/// # Errors
/// Returns [`AnalysisError::Generator`] when a derived model parameter is
/// invalid or generation fails, and [`AnalysisError::Metrics`] when a
/// statistic cannot be computed.
#[instrument(
    name = "core.run_comparison",
    err,
    skip(reference, config, metrics),
    fields(reference_nodes = reference.node_count())
)]
pub fn run_comparison<M>(
    reference: &Graph,
    name: &str,
    config: &ComparisonConfig,
    metrics: &M,
) -> Result<ComparisonReport, AnalysisError>
where
    M: GraphMetrics + ?Sized,
{
    let component = reference.largest_component();
    info!(
        component_nodes = component.node_count(),
        component_edges = component.edge_count(),
        "largest connected component extracted"
    );
    let plan = ModelPlan::from_reference(&component, config);
    info!(
        nodes = plan.nodes(),
        ws_degree = plan.ws_degree(),
        beta = plan.beta(),
        ba_edges_per_node = plan.ba_edges_per_node(),
        "derived model parameters"
    );
    let (watts_strogatz, barabasi_albert) = rayon::join(
        || {
            plan.watts_strogatz_params()
                .and_then(|params| watts_strogatz_graph(&params))
                .map_err(|source| generator_failure(WATTS_STROGATZ_LABEL, source))
        },
        || {
            plan.barabasi_albert_params()
                .and_then(|params| barabasi_albert_graph(&params))
                .map_err(|source| generator_failure(BARABASI_ALBERT_LABEL, source))
        },
    );
    let comparison = compare_networks(
        &component,
        &watts_strogatz?,
        &barabasi_albert?,
        name,
        metrics,
    )?;
    Ok(ComparisonReport { plan, comparison })
}

fn generator_failure(model: &'static str, source: GeneratorError) -> AnalysisError {
    AnalysisError::Generator { model, source }
}
