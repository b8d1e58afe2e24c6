//! Local clustering coefficients via triangle counting.

use rayon::prelude::*;

use super::indexed::IndexedAdjacency;

/// Mean local clustering coefficient; nodes of degree below two count as 0.
pub(super) fn average_clustering(adjacency: &IndexedAdjacency) -> f64 {
    let len = adjacency.len();
    if len == 0 {
        return 0.0;
    }
    // Summed in node order so repeated runs agree bit for bit.
    let local: Vec<f64> = (0..len)
        .into_par_iter()
        .map(|node| local_clustering(adjacency, node))
        .collect();
    local.iter().sum::<f64>() / len as f64
}

fn local_clustering(adjacency: &IndexedAdjacency, node: usize) -> f64 {
    let neighbours = adjacency.neighbours(node);
    let degree = neighbours.len();
    if degree < 2 {
        return 0.0;
    }
    // Each triangle through `node` is seen once from each of its two
    // neighbours on the triangle.
    let links: usize = neighbours
        .iter()
        .map(|&neighbour| sorted_overlap(neighbours, adjacency.neighbours(neighbour)))
        .sum();
    links as f64 / (degree * (degree - 1)) as f64
}

/// Counts elements shared by two ascending slices.
fn sorted_overlap(left: &[usize], right: &[usize]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}
