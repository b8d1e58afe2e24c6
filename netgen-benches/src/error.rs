//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark inputs
//! so setup functions can propagate them with `?` instead of `.expect()`.

use netgen_core::{AnalysisError, GeneratorError, MetricsError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Parameter validation or graph generation failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A statistic could not be computed.
    #[error("metric computation failed: {0}")]
    Metrics(#[from] MetricsError),
    /// The comparison pipeline failed.
    #[error("comparison failed: {0}")]
    Analysis(#[from] AnalysisError),
}
