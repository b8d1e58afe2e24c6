//! Tests for the statistics collaborator on graphs with known values.

use proptest::{prelude::any, prop_assert, prop_assert_eq, proptest};
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};

use super::*;
use crate::{
    barabasi_albert::generate_barabasi_albert,
    error::MetricsErrorCode,
    test_utils::{graph_from_edges, suite_proptest_config},
};

const TOLERANCE: f64 = 1e-12;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[fixture]
fn metrics() -> BfsMetrics {
    BfsMetrics::new()
}

fn complete(nodes: usize) -> Graph {
    let edges: Vec<_> = (0..nodes)
        .flat_map(|left| (left + 1..nodes).map(move |right| (left, right)))
        .collect();
    graph_from_edges(nodes, &edges)
}

fn path(nodes: usize) -> Graph {
    let edges: Vec<_> = (1..nodes).map(|node| (node - 1, node)).collect();
    graph_from_edges(nodes, &edges)
}

fn star(leaves: usize) -> Graph {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    graph_from_edges(leaves + 1, &edges)
}

fn triangle_with_pendant() -> Graph {
    graph_from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)])
}

#[rstest]
#[case::complete(complete(4), 3.0, 1.0, 1.0)]
#[case::path(path(4), 1.5, 20.0 / 12.0, 0.0)]
#[case::star(star(4), 1.6, 32.0 / 20.0, 0.0)]
#[case::triangle_with_pendant(triangle_with_pendant(), 2.0, 16.0 / 12.0, 7.0 / 12.0)]
fn known_graphs(
    metrics: BfsMetrics,
    #[case] graph: Graph,
    #[case] degree: f64,
    #[case] path_length: f64,
    #[case] clustering: f64,
) {
    assert_close(
        metrics.average_degree(&graph).expect("graph is non-empty"),
        degree,
    );
    assert_close(
        metrics
            .average_shortest_path_length(&graph)
            .expect("graph is connected"),
        path_length,
    );
    assert_close(
        metrics.average_clustering(&graph).expect("graph is non-empty"),
        clustering,
    );
}

#[rstest]
fn empty_graph_is_rejected(metrics: BfsMetrics) {
    let graph = Graph::new();
    assert_eq!(metrics.average_degree(&graph), Err(MetricsError::EmptyGraph));
    assert_eq!(
        metrics.average_shortest_path_length(&graph),
        Err(MetricsError::EmptyGraph)
    );
    assert_eq!(metrics.average_clustering(&graph), Err(MetricsError::EmptyGraph));
    assert_eq!(MetricsError::EmptyGraph.code(), MetricsErrorCode::EmptyGraph);
}

#[rstest]
fn single_node_has_zero_path_length(metrics: BfsMetrics) {
    let graph = Graph::with_nodes(1);
    assert_eq!(metrics.average_shortest_path_length(&graph), Ok(0.0));
    assert_eq!(metrics.average_clustering(&graph), Ok(0.0));
    assert_eq!(metrics.node_count(&graph), 1);
}

#[rstest]
fn exact_mode_rejects_disconnected_graphs(metrics: BfsMetrics) {
    let graph = graph_from_edges(5, &[(0, 1), (2, 3)]);
    let err = metrics
        .average_shortest_path_length(&graph)
        .expect_err("graph has three components");
    assert_eq!(err, MetricsError::Disconnected { components: 3 });
    assert_eq!(err.code().as_str(), "METRICS_DISCONNECTED");
}

#[rstest]
fn sampling_every_node_matches_exact_mode() {
    let graph = path(4);
    let sampled = BfsMetrics::new().with_path_mode(PathLengthMode::Sampled {
        sources: 10,
        seed: 3,
    });
    assert_close(
        sampled
            .average_shortest_path_length(&graph)
            .expect("sources are positive"),
        20.0 / 12.0,
    );
}

#[rstest]
fn sampling_averages_reachable_pairs_only() {
    let graph = graph_from_edges(4, &[(0, 1), (2, 3)]);
    let sampled = BfsMetrics::new().with_path_mode(PathLengthMode::Sampled {
        sources: 2,
        seed: 11,
    });
    assert_eq!(sampled.average_shortest_path_length(&graph), Ok(1.0));
}

#[rstest]
fn sampling_isolated_nodes_yields_zero() {
    let graph = Graph::with_nodes(3);
    let sampled = BfsMetrics::new().with_path_mode(PathLengthMode::Sampled {
        sources: 3,
        seed: 0,
    });
    assert_eq!(sampled.average_shortest_path_length(&graph), Ok(0.0));
}

#[rstest]
fn sampling_requires_a_source() {
    let sampled = BfsMetrics::new().with_path_mode(PathLengthMode::Sampled {
        sources: 0,
        seed: 0,
    });
    assert_eq!(
        sampled.average_shortest_path_length(&path(3)),
        Err(MetricsError::InvalidSampleSize {
            requested: 0,
            available: 3,
        })
    );
}

#[rstest]
fn sparse_identifiers_are_supported(metrics: BfsMetrics) {
    let mut graph = Graph::new();
    for node in [5, 50, 500] {
        graph.add_node(node);
    }
    graph.add_edge(5, 50).expect("valid edge");
    graph.add_edge(50, 500).expect("valid edge");
    graph.add_edge(5, 500).expect("valid edge");
    assert_eq!(metrics.average_clustering(&graph), Ok(1.0));
    assert_eq!(metrics.average_shortest_path_length(&graph), Ok(1.0));
}

proptest! {
    #![proptest_config(suite_proptest_config(32))]

    #[test]
    fn statistics_stay_in_range(nodes in 4_usize..60, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generate_barabasi_albert(nodes, 2, &mut rng)
            .expect("parameters are valid");
        let metrics = BfsMetrics::new();
        let clustering = metrics.average_clustering(&graph).expect("graph is non-empty");
        prop_assert!((0.0..=1.0).contains(&clustering));
        let exact = metrics
            .average_shortest_path_length(&graph)
            .expect("preferential attachment graphs are connected");
        prop_assert!(exact >= 1.0);
        prop_assert!(exact <= (nodes - 1) as f64);

        let sampled = metrics.with_path_mode(PathLengthMode::Sampled { sources: nodes, seed });
        let full = sampled
            .average_shortest_path_length(&graph)
            .expect("sources are positive");
        prop_assert!((full - exact).abs() < 1e-9);
        prop_assert_eq!(
            sampled.average_shortest_path_length(&graph),
            sampled.average_shortest_path_length(&graph)
        );
    }
}
