//! Breadth-first shortest-path averages.

use rand::{SeedableRng, rngs::SmallRng};
use rayon::prelude::*;
use tracing::debug;

use crate::random::RandomSource;

use super::indexed::IndexedAdjacency;

const UNVISITED: usize = usize::MAX;

/// Per-worker BFS buffers, reset after each traversal.
struct BfsScratch {
    distance: Vec<usize>,
    order: Vec<usize>,
}

impl BfsScratch {
    fn new(len: usize) -> Self {
        Self {
            distance: vec![UNVISITED; len],
            order: Vec::with_capacity(len),
        }
    }

    /// Returns the summed hop distance from `source` and the number of other
    /// nodes it reaches.
    fn traverse(&mut self, adjacency: &IndexedAdjacency, source: usize) -> (u64, u64) {
        self.distance[source] = 0;
        self.order.push(source);
        let mut head = 0;
        let mut total = 0_u64;
        while let Some(&node) = self.order.get(head) {
            head += 1;
            let next = self.distance[node] + 1;
            for &neighbour in adjacency.neighbours(node) {
                if self.distance[neighbour] == UNVISITED {
                    self.distance[neighbour] = next;
                    total += next as u64;
                    self.order.push(neighbour);
                }
            }
        }
        let reached = (self.order.len() - 1) as u64;
        for &node in &self.order {
            self.distance[node] = UNVISITED;
        }
        self.order.clear();
        (total, reached)
    }
}

/// Mean distance over all ordered pairs of a connected graph.
pub(super) fn exact_average(adjacency: &IndexedAdjacency) -> f64 {
    let len = adjacency.len();
    if len < 2 {
        return 0.0;
    }
    let total: u64 = (0..len)
        .into_par_iter()
        .map_init(
            || BfsScratch::new(len),
            |scratch, source| scratch.traverse(adjacency, source).0,
        )
        .sum();
    total as f64 / (len as f64 * (len - 1) as f64)
}

/// Mean distance over the pairs reached from a seeded sample of sources.
pub(super) fn sampled_average(adjacency: &IndexedAdjacency, sources: usize, seed: u64) -> f64 {
    let len = adjacency.len();
    let mut rng = SmallRng::seed_from_u64(seed);
    let picks = rng.sample_indices(len, sources);
    let (total, pairs) = picks
        .par_iter()
        .map_init(
            || BfsScratch::new(len),
            |scratch, &source| scratch.traverse(adjacency, source),
        )
        .reduce(|| (0, 0), |left, right| (left.0 + right.0, left.1 + right.1));
    debug!(sources = picks.len(), pairs, "sampled path lengths");
    if pairs == 0 {
        0.0
    } else {
        total as f64 / pairs as f64
    }
}
