//! Shared test utilities for `netgen-core`.

use std::collections::VecDeque;

use netgen_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{graph::Graph, random::RandomSource};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `NETGEN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] that replays scripted draws.
///
/// Unit draws and index draws come from separate queues; an exhausted queue
/// repeats `0.0` and index `0`. Distinct sampling returns the lowest indices.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    #[must_use]
    pub(crate) fn new(
        units: impl IntoIterator<Item = f64>,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            units: units.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.indices.pop_front().unwrap_or(0) % len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(len)).collect()
    }
}

/// Builds a graph on `0..node_count` from an edge list.
#[must_use]
pub(crate) fn graph_from_edges(node_count: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::with_nodes(node_count);
    for &(left, right) in edges {
        graph
            .add_edge(left, right)
            .expect("test edges must reference existing distinct nodes");
    }
    graph
}

/// Returns `true` when every pair drawn from `nodes` is adjacent in `graph`.
#[must_use]
pub(crate) fn is_clique(graph: &Graph, nodes: impl IntoIterator<Item = usize> + Clone) -> bool {
    nodes.clone().into_iter().all(|left| {
        nodes
            .clone()
            .into_iter()
            .all(|right| left == right || graph.contains_edge(left, right))
    })
}
