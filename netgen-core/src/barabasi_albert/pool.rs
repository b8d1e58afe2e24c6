//! Degree-weighted node pool backing preferential attachment.

use std::collections::BTreeSet;

use crate::{
    error::{GeneratorError, Result},
    graph::NodeId,
    random::RandomSource,
};

/// Sequence of node identifiers where each identifier's multiplicity is its
/// sampling weight.
///
/// The pool only grows. Sampling picks uniformly among entries, so a node
/// that appears `w` times is `w` times as likely to be drawn as a node that
/// appears once.
///
/// # Examples
/// ```
/// use netgen_core::RepeatedNodePool;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut pool = RepeatedNodePool::from_nodes([0, 1, 2]);
/// pool.append(2);
/// assert_eq!(pool.len(), 4);
/// assert_eq!(pool.distinct_len(), 3);
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let picks = pool.sample_distinct(3, &mut rng).expect("three distinct nodes exist");
/// assert_eq!(picks.len(), 3);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RepeatedNodePool {
    entries: Vec<NodeId>,
    distinct: BTreeSet<NodeId>,
}

impl RepeatedNodePool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool holding each of `nodes` in iteration order.
    #[must_use]
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut pool = Self::new();
        pool.extend(nodes);
        pool
    }

    /// Appends one occurrence of `node`.
    pub fn append(&mut self, node: NodeId) {
        self.entries.push(node);
        self.distinct.insert(node);
    }

    /// Total number of entries, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the pool holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct node identifiers in the pool.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.distinct.len()
    }

    /// Draws `amount` pairwise-distinct nodes, weighted by multiplicity.
    ///
    /// Draws repeat until `amount` distinct identifiers have been seen; a
    /// repeated identifier is discarded. The result lists nodes in the order
    /// they were first drawn.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InsufficientCandidates`] when the pool holds
    /// fewer than `amount` distinct identifiers.
    pub fn sample_distinct<R>(&self, amount: usize, rng: &mut R) -> Result<Vec<NodeId>>
    where
        R: RandomSource + ?Sized,
    {
        let insufficient = || GeneratorError::InsufficientCandidates {
            required: amount,
            available: self.distinct_len(),
        };
        if self.distinct_len() < amount {
            return Err(insufficient());
        }
        let mut chosen = Vec::with_capacity(amount);
        while chosen.len() < amount {
            let index = rng.choose_index(self.entries.len()).ok_or_else(insufficient)?;
            let node = self.entries[index];
            if !chosen.contains(&node) {
                chosen.push(node);
            }
        }
        Ok(chosen)
    }
}

impl Extend<NodeId> for RepeatedNodePool {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, nodes: I) {
        for node in nodes {
            self.append(node);
        }
    }
}
