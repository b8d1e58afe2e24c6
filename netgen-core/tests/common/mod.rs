use netgen_core::{Graph, NodeId};

/// Builds a graph on `0..node_count` from an edge list.
#[must_use]
pub fn graph_from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> Graph {
    let mut graph = Graph::with_nodes(node_count);
    for &(left, right) in edges {
        graph
            .add_edge(left, right)
            .expect("fixture edges must reference existing distinct nodes");
    }
    graph
}

/// Appends a disconnected copy of `edges`, shifted by `offset`, to `graph`.
pub fn add_component(graph: &mut Graph, offset: NodeId, edges: &[(NodeId, NodeId)]) {
    for &(left, right) in edges {
        graph.add_node(left + offset);
        graph.add_node(right + offset);
        graph
            .add_edge(left + offset, right + offset)
            .expect("fixture edges must be distinct");
    }
}
