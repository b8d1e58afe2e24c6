//! Compressed adjacency with dense indices for traversal-heavy statistics.

use crate::graph::Graph;

/// Compressed sparse row view of a [`Graph`].
///
/// Node identifiers are remapped to `0..len` in ascending order. Each
/// neighbour slice is sorted.
#[derive(Clone, Debug)]
pub(super) struct IndexedAdjacency {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl IndexedAdjacency {
    pub(super) fn from_graph(graph: &Graph) -> Self {
        let ids: Vec<_> = graph.nodes().collect();
        let mut offsets = Vec::with_capacity(ids.len() + 1);
        let mut targets = Vec::with_capacity(2 * graph.edge_count());
        offsets.push(0);
        for &node in &ids {
            if let Ok(neighbours) = graph.neighbours(node) {
                targets.extend(
                    neighbours
                        .iter()
                        .filter_map(|neighbour| ids.binary_search(neighbour).ok()),
                );
            }
            offsets.push(targets.len());
        }
        Self { offsets, targets }
    }

    pub(super) fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub(super) fn neighbours(&self, index: usize) -> &[usize] {
        &self.targets[self.offsets[index]..self.offsets[index + 1]]
    }
}
