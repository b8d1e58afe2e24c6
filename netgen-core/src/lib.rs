//! Netgen core library.
//!
//! Random network generators (Watts–Strogatz small-world rewiring and
//! Barabási–Albert preferential attachment) and the pipeline that compares
//! them with a reference network.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod barabasi_albert;
mod error;
mod graph;
mod params;
mod random;
mod stats;
#[cfg(test)]
mod test_utils;
mod watts_strogatz;

pub use crate::{
    analysis::{
        BARABASI_ALBERT_LABEL, ComparisonConfig, ComparisonReport, DEFAULT_BETA, ModelPlan,
        NetworkComparison, NetworkStats, ORIGINAL_LABEL, WATTS_STROGATZ_LABEL, analyze_network,
        compare_networks, run_comparison,
    },
    barabasi_albert::{RepeatedNodePool, barabasi_albert_graph, generate_barabasi_albert},
    error::{
        AnalysisError, AnalysisErrorCode, GeneratorError, GeneratorErrorCode, GraphError,
        GraphErrorCode, MetricsError, MetricsErrorCode, Result,
    },
    graph::{Graph, NodeId},
    params::{BarabasiAlbertParams, WattsStrogatzParams},
    random::{DEFAULT_RNG_SEED, RandomSource, mix_stream_seed},
    stats::{BfsMetrics, GraphMetrics, PathLengthMode},
    watts_strogatz::{
        RingLattice, Rewired, build_ring_lattice, rewire, watts_strogatz_graph,
    },
};
