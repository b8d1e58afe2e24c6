//! Undirected simple graph shared by the generators, the statistics
//! collaborator, and the edge-list provider.
//!
//! Adjacency lives in ordered maps and sets so every traversal (node order,
//! edge order, neighbour order) is deterministic. Seeded generator runs rely
//! on this to be reproducible.

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    ops::Bound,
};

use crate::error::GraphError;

/// Identifier of a node within a [`Graph`].
///
/// Generated graphs use the dense range `0..n`; graphs loaded from edge lists
/// keep whatever identifiers the file used.
pub type NodeId = usize;

/// An undirected graph without self-loops or parallel edges.
///
/// # Examples
/// ```
/// use netgen_core::Graph;
///
/// let mut graph = Graph::with_nodes(3);
/// graph.add_edge(0, 1).expect("distinct endpoints are accepted");
/// graph.add_edge(1, 0).expect("re-adding an edge is a no-op");
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding the isolated nodes `0..node_count`.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: (0..node_count).map(|node| (node, BTreeSet::new())).collect(),
            edge_count: 0,
        }
    }

    /// Inserts `node` if absent. Returns `true` when the node is new.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        true
    }

    /// Connects `left` and `right`.
    ///
    /// Returns `Ok(true)` when the edge is new and `Ok(false)` when it was
    /// already present.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `left == right` and
    /// [`GraphError::MissingNode`] when either endpoint has not been added.
    pub fn add_edge(&mut self, left: NodeId, right: NodeId) -> Result<bool, GraphError> {
        if left == right {
            return Err(GraphError::SelfLoop { node: left });
        }
        self.ensure_present(right)?;
        let inserted = self
            .adjacency
            .get_mut(&left)
            .ok_or(GraphError::MissingNode { node: left })?
            .insert(right);
        if inserted {
            self.adjacency
                .get_mut(&right)
                .ok_or(GraphError::MissingNode { node: right })?
                .insert(left);
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Disconnects `left` and `right`. Returns `true` when an edge was removed.
    pub fn remove_edge(&mut self, left: NodeId, right: NodeId) -> bool {
        let removed = self
            .adjacency
            .get_mut(&left)
            .is_some_and(|neighbours| neighbours.remove(&right));
        if removed {
            if let Some(neighbours) = self.adjacency.get_mut(&right) {
                neighbours.remove(&left);
            }
            self.edge_count -= 1;
        }
        removed
    }

    /// Returns whether `node` belongs to the graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns whether `left` and `right` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, left: NodeId, right: NodeId) -> bool {
        self.adjacency
            .get(&left)
            .is_some_and(|neighbours| neighbours.contains(&right))
    }

    /// Returns the current neighbour set of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingNode`] when `node` is absent.
    pub fn neighbours(&self, node: NodeId) -> Result<&BTreeSet<NodeId>, GraphError> {
        self.adjacency
            .get(&node)
            .ok_or(GraphError::MissingNode { node })
    }

    /// Returns the number of edges incident to `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingNode`] when `node` is absent.
    pub fn degree(&self, node: NodeId) -> Result<usize, GraphError> {
        self.neighbours(node).map(BTreeSet::len)
    }

    /// Iterates node identifiers in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates edges as `(min, max)` pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(&node, neighbours)| {
            neighbours
                .range((Bound::Excluded(node), Bound::Unbounded))
                .map(move |&neighbour| (node, neighbour))
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Partitions the nodes into connected components.
    ///
    /// Each component lists its nodes in ascending order and components are
    /// ordered by their smallest node.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        let mut visited = BTreeSet::new();
        let mut components = Vec::new();
        let mut queue = VecDeque::new();
        for &start in self.adjacency.keys() {
            if !visited.insert(start) {
                continue;
            }
            let mut component = vec![start];
            queue.push_back(start);
            while let Some(node) = queue.pop_front() {
                for &neighbour in &self.adjacency[&node] {
                    if visited.insert(neighbour) {
                        component.push(neighbour);
                        queue.push_back(neighbour);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }

    /// Returns the subgraph induced by the largest connected component.
    ///
    /// Ties go to the component holding the smallest node identifier. An
    /// empty graph yields an empty graph.
    #[must_use]
    pub fn largest_component(&self) -> Self {
        let components = self.connected_components();
        // `max_by_key` keeps the last maximum, so scan in reverse to favour
        // the earliest component.
        let Some(largest) = components.iter().rev().max_by_key(|nodes| nodes.len()) else {
            return Self::new();
        };
        self.induced_by_present(largest)
    }

    /// Returns the subgraph induced by `nodes`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingNode`] when a requested node is absent.
    pub fn induced_subgraph<I>(&self, nodes: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let keep = nodes
            .into_iter()
            .map(|node| self.ensure_present(node).map(|()| node))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(self.induced_by_present(keep.iter()))
    }

    fn induced_by_present<'a, I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let keep: BTreeSet<NodeId> = nodes.into_iter().copied().collect();
        let mut edge_count = 0;
        let adjacency = keep
            .iter()
            .map(|&node| {
                let neighbours: BTreeSet<NodeId> = self.adjacency[&node]
                    .iter()
                    .copied()
                    .filter(|neighbour| keep.contains(neighbour))
                    .collect();
                edge_count += neighbours.len();
                (node, neighbours)
            })
            .collect();
        Self {
            adjacency,
            edge_count: edge_count / 2,
        }
    }

    fn ensure_present(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::MissingNode { node })
        }
    }
}
