//! Error types for the netgen core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] mutations and queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Simple graphs cannot hold an edge from a node to itself.
    #[error("self-loop on node {node} is not permitted in a simple graph")]
    SelfLoop {
        /// The node that would have been connected to itself.
        node: NodeId,
    },
    /// A query referenced a node that is not part of the graph.
    #[error("node {node} is not present in the graph")]
    MissingNode {
        /// The absent node identifier.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Simple graphs cannot hold an edge from a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A query referenced a node that is not part of the graph.
        MissingNode => MissingNode { .. } => "GRAPH_MISSING_NODE",
    }
}

/// Error type produced by the random graph generators.
///
/// A generator that fails returns no graph; nothing is retried internally.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// A size, degree, or probability parameter was malformed.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable explanation of the constraint that was violated.
        reason: String,
    },
    /// The attachment pool held fewer distinct nodes than one growth step
    /// must select.
    #[error("attachment pool holds {available} distinct nodes but {required} are required")]
    InsufficientCandidates {
        /// Number of distinct targets the step must select.
        required: usize,
        /// Number of distinct node identifiers present in the pool.
        available: usize,
    },
    /// Rewiring found no node that `node` is not already connected to.
    #[error("node {node} is adjacent to every other node; no rewiring target exists")]
    NoEligibleTarget {
        /// Source endpoint of the edge being rewired.
        node: NodeId,
    },
    /// A graph mutation failed while a generator was building its output.
    #[error("graph mutation failed: {source}")]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// A size, degree, or probability parameter was malformed.
        InvalidParameter => InvalidParameter { .. } => "GENERATOR_INVALID_PARAMETER",
        /// The attachment pool held too few distinct nodes.
        InsufficientCandidates => InsufficientCandidates { .. } => "GENERATOR_INSUFFICIENT_CANDIDATES",
        /// Rewiring found no eligible replacement endpoint.
        NoEligibleTarget => NoEligibleTarget { .. } => "GENERATOR_NO_ELIGIBLE_TARGET",
        /// A graph mutation failed while building the output.
        GraphFailure => Graph { .. } => "GENERATOR_GRAPH_FAILURE",
    }
}

impl GeneratorError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Error type produced by the graph statistics collaborator.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MetricsError {
    /// The statistic is undefined for a graph without nodes.
    #[error("statistic is undefined for an empty graph")]
    EmptyGraph,
    /// Exact path lengths need every pair of nodes to be mutually reachable.
    #[error("graph is not connected: found {components} components")]
    Disconnected {
        /// Number of connected components found.
        components: usize,
    },
    /// Sampled path lengths need at least one source.
    #[error("requested {requested} BFS sources from a graph of {available} nodes")]
    InvalidSampleSize {
        /// Number of sources requested.
        requested: usize,
        /// Number of nodes available as sources.
        available: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MetricsError`] variants.
    enum MetricsErrorCode for MetricsError {
        /// The statistic is undefined for a graph without nodes.
        EmptyGraph => EmptyGraph => "METRICS_EMPTY_GRAPH",
        /// Exact path lengths need a connected graph.
        Disconnected => Disconnected { .. } => "METRICS_DISCONNECTED",
        /// Sampled path lengths need at least one source.
        InvalidSampleSize => InvalidSampleSize { .. } => "METRICS_INVALID_SAMPLE_SIZE",
    }
}

/// Error type produced while generating and analysing networks for comparison.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AnalysisError {
    /// One of the model generators failed.
    #[error("failed to generate `{model}`: {source}")]
    Generator {
        /// Label of the model that could not be generated.
        model: &'static str,
        /// Underlying generator failure.
        #[source]
        source: GeneratorError,
    },
    /// A metric could not be computed for a network.
    #[error("failed to analyse network `{network}`: {source}")]
    Metrics {
        /// Name of the network whose analysis failed.
        network: Arc<str>,
        /// Underlying metrics failure.
        #[source]
        source: MetricsError,
    },
}

define_error_codes! {
    /// Stable codes describing [`AnalysisError`] variants.
    enum AnalysisErrorCode for AnalysisError {
        /// One of the model generators failed.
        GeneratorFailure => Generator { .. } => "ANALYSIS_GENERATOR_FAILURE",
        /// A metric could not be computed for a network.
        MetricsFailure => Metrics { .. } => "ANALYSIS_METRICS_FAILURE",
    }
}

impl AnalysisError {
    /// Retrieve the inner [`GeneratorErrorCode`] when a generator failed.
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator { source, .. } => Some(source.code()),
            Self::Metrics { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the generators.
pub type Result<T> = core::result::Result<T, GeneratorError>;
