//! Common test utilities for building workflow graphs and drafts.
use flowgate::prelude::*;

/// Creates an unconfigured node at the canvas origin.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> Node {
    Node::new(id, kind, Position::default())
}

/// Creates a batch of unconfigured `wait` nodes; the kind is irrelevant to
/// structural validation.
#[allow(dead_code)]
pub fn wait_nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| node(id, NodeKind::Wait)).collect()
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(id, source, target)
}

/// Edges `e0: ids[0] -> ids[1]`, `e1: ids[1] -> ids[2]`, … forming a chain.
#[allow(dead_code)]
pub fn chain_edges(ids: &[&str]) -> Vec<Edge> {
    ids.windows(2)
        .enumerate()
        .map(|(i, pair)| Edge::new(format!("e{i}"), pair[0], pair[1]))
        .collect()
}

#[allow(dead_code)]
pub fn draft(name: &str, owner: &str, nodes: Vec<Node>, edges: Vec<Edge>) -> WorkflowDraft {
    WorkflowDraft {
        name: name.to_string(),
        owner: owner.to_string(),
        nodes,
        edges,
    }
}
