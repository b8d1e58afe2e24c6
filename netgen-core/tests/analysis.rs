//! End-to-end comparison tests, including the instrumentation they emit.

mod common;

use common::{add_component, graph_from_edges};
use netgen_core::{
    AnalysisError, BfsMetrics, ComparisonConfig, GeneratorErrorCode, PathLengthMode,
    WattsStrogatzParams, build_ring_lattice, run_comparison, watts_strogatz_graph,
};
use netgen_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing::Level;

/// Ring of 24 nodes with degree 6, plus a detached triangle.
#[fixture]
fn reference() -> netgen_core::Graph {
    let lattice = build_ring_lattice(24, 6).expect("parameters are valid");
    let mut graph = lattice.graph().clone();
    add_component(&mut graph, 1_000, &[(0, 1), (1, 2), (0, 2)]);
    graph
}

fn sampled() -> BfsMetrics {
    BfsMetrics::new().with_path_mode(PathLengthMode::Sampled {
        sources: 24,
        seed: 5,
    })
}

#[rstest]
fn comparison_reports_reference_component_statistics(reference: netgen_core::Graph) {
    let report = run_comparison(&reference, "ring", &ComparisonConfig::new(), &sampled())
        .expect("pipeline succeeds");
    let comparison = report.comparison();
    assert_eq!(comparison.network(), "ring");
    assert_eq!(comparison.original().nodes(), 24);
    assert_eq!(comparison.original().average_degree(), 6.0);
    // A ring lattice of degree 6 has clustering 3(k-2) / 4(k-1) = 0.6.
    assert!((comparison.original().average_clustering() - 0.6).abs() < 1e-12);
    assert_eq!(report.plan().ws_degree(), 6);
    assert_eq!(report.plan().ba_edges_per_node(), 3);
    assert_eq!(comparison.barabasi_albert().nodes(), 24);
}

#[rstest]
fn comparison_emits_pipeline_spans(reference: netgen_core::Graph) {
    let (result, layer) = RecordingLayer::capture(|| {
        run_comparison(&reference, "ring", &ComparisonConfig::new(), &sampled())
    });
    result.expect("pipeline succeeds");

    let run = layer.span("core.run_comparison").expect("run span recorded");
    assert_eq!(run.field("reference_nodes"), Some("27"));

    let compare = layer
        .span("core.compare_networks")
        .expect("compare span recorded");
    assert_eq!(compare.field("network"), Some("ring"));

    let component = layer
        .event("largest connected component extracted")
        .expect("component event recorded");
    assert_eq!(component.field("component_nodes"), Some("24"));

    let plan = layer
        .event("derived model parameters")
        .expect("plan event recorded");
    assert_eq!(plan.level, Level::INFO);
    assert_eq!(plan.field("ws_degree"), Some("6"));
    assert_eq!(plan.field("ba_edges_per_node"), Some("3"));
}

#[rstest]
fn failed_generation_is_logged_as_error() {
    let reference = graph_from_edges(2, &[(0, 1)]);
    let (result, layer) = RecordingLayer::capture(|| {
        run_comparison(&reference, "pair", &ComparisonConfig::new(), &BfsMetrics::new())
    });
    let err = result.expect_err("zero attachment count");
    assert!(matches!(err, AnalysisError::Generator { .. }));
    assert_eq!(err.generator_code(), Some(GeneratorErrorCode::InvalidParameter));

    let error_event = layer
        .events()
        .into_iter()
        .find(|event| event.level == Level::ERROR)
        .expect("instrumented error recorded");
    assert_eq!(error_event.field("error"), Some(err.to_string().as_str()));
}

#[rstest]
fn generator_spans_carry_parameters() {
    let params = WattsStrogatzParams::new(16, 4, 0.5)
        .expect("parameters are valid")
        .with_rng_seed(77);
    let (graph, layer) = RecordingLayer::capture(|| watts_strogatz_graph(&params));
    let graph = graph.expect("generation succeeds");

    let span = layer.span("core.watts_strogatz").expect("span recorded");
    assert_eq!(span.field("nodes"), Some("16"));
    assert_eq!(span.field("degree"), Some("4"));
    assert_eq!(span.field("beta"), Some("0.5"));
    assert_eq!(span.field("seed"), Some("77"));
    assert!(layer.span("core.ring_lattice").is_some());

    let rewire = layer.span("core.rewire").expect("rewire span recorded");
    assert_eq!(rewire.field("edges"), Some("32"));

    let done = layer
        .event("generated Watts–Strogatz graph")
        .expect("completion event recorded");
    assert_eq!(done.field("edges"), Some(graph.edge_count().to_string().as_str()));
}
