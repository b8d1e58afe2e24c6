use std::sync::Arc;

use netgen_core::{
    AnalysisError, AnalysisErrorCode, GeneratorError, GeneratorErrorCode, GraphError,
    GraphErrorCode, MetricsError, MetricsErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(GraphError::SelfLoop { node: 1 }, GraphErrorCode::SelfLoop, "GRAPH_SELF_LOOP")]
#[case(GraphError::MissingNode { node: 2 }, GraphErrorCode::MissingNode, "GRAPH_MISSING_NODE")]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
}

#[rstest]
#[case(
    GeneratorError::InvalidParameter { parameter: "nodes", reason: "zero".into() },
    GeneratorErrorCode::InvalidParameter,
    "GENERATOR_INVALID_PARAMETER",
)]
#[case(
    GeneratorError::InsufficientCandidates { required: 3, available: 2 },
    GeneratorErrorCode::InsufficientCandidates,
    "GENERATOR_INSUFFICIENT_CANDIDATES",
)]
#[case(
    GeneratorError::NoEligibleTarget { node: 4 },
    GeneratorErrorCode::NoEligibleTarget,
    "GENERATOR_NO_ELIGIBLE_TARGET",
)]
#[case(
    GeneratorError::from(GraphError::SelfLoop { node: 0 }),
    GeneratorErrorCode::GraphFailure,
    "GENERATOR_GRAPH_FAILURE",
)]
fn returns_expected_generator_code(
    #[case] error: GeneratorError,
    #[case] expected: GeneratorErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), code);
}

#[rstest]
#[case(MetricsError::EmptyGraph, MetricsErrorCode::EmptyGraph)]
#[case(MetricsError::Disconnected { components: 2 }, MetricsErrorCode::Disconnected)]
#[case(
    MetricsError::InvalidSampleSize { requested: 0, available: 9 },
    MetricsErrorCode::InvalidSampleSize,
)]
fn returns_expected_metrics_code(#[case] error: MetricsError, #[case] expected: MetricsErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case(
    AnalysisError::Generator {
        model: "BA Model",
        source: GeneratorError::InsufficientCandidates { required: 2, available: 1 },
    },
    AnalysisErrorCode::GeneratorFailure,
    Some(GeneratorErrorCode::InsufficientCandidates),
)]
#[case(
    AnalysisError::Metrics {
        network: Arc::from("Original"),
        source: MetricsError::EmptyGraph,
    },
    AnalysisErrorCode::MetricsFailure,
    None,
)]
fn returns_expected_analysis_code(
    #[case] error: AnalysisError,
    #[case] expected: AnalysisErrorCode,
    #[case] generator_code: Option<GeneratorErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.generator_code(), generator_code);
}

#[rstest]
fn messages_name_the_failing_piece() {
    let err = AnalysisError::Generator {
        model: "WS Model",
        source: GeneratorError::NoEligibleTarget { node: 7 },
    };
    assert_eq!(
        err.to_string(),
        "failed to generate `WS Model`: node 7 is adjacent to every other node; \
         no rewiring target exists"
    );
    let source = std::error::Error::source(&err).expect("generator errors carry a source");
    assert_eq!(source.to_string(), GeneratorError::NoEligibleTarget { node: 7 }.to_string());
}
