//! The node/edge container mutated by the editing surface.
//!
//! A [`WorkflowGraph`] owns the nodes and edges of one workflow being edited.
//! Mutations uphold referential integrity (unique ids, edges only between
//! present nodes) and fail closed on contract violations; structural quality
//! (cycles, orphans) is judged separately by [`validation`](crate::validation).

use crate::config::{derive_label, NodeConfig, NodeKind};
use crate::error::GraphError;
use crate::validation::{validate_workflow, ValidationResult};
use serde::{Deserialize, Serialize};

/// Canvas coordinate of a node. Presentational only; validation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One automation step in a workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<NodeConfig>,
    pub position: Position,
}

impl Node {
    /// Creates an unconfigured node labelled after its kind.
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Position) -> Self {
        Self {
            id: id.into(),
            kind,
            label: kind.title().to_string(),
            config: None,
            position,
        }
    }

    /// Attaches a configuration payload, refreshing the derived label.
    ///
    /// Fails if the payload's variant does not match the node's kind.
    pub fn set_config(&mut self, config: NodeConfig) -> Result<(), GraphError> {
        if config.kind() != self.kind {
            return Err(GraphError::ConfigKindMismatch {
                node_id: self.id.clone(),
                kind: self.kind.to_string(),
                config_kind: config.kind().to_string(),
            });
        }
        self.label = config.label();
        self.config = Some(config);
        Ok(())
    }

    /// Builder-style variant of [`set_config`](Node::set_config) for
    /// constructing pre-configured nodes.
    pub fn with_config(mut self, config: NodeConfig) -> Result<Self, GraphError> {
        self.set_config(config)?;
        Ok(self)
    }

    /// Recomputes the derived label from the current kind and config.
    pub fn refresh_label(&mut self) {
        self.label = derive_label(self.kind, self.config.as_ref());
    }
}

/// Directed connection between two nodes, representing sequencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The mutable aggregate behind one editing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl WorkflowGraph {
    /// Creates an empty graph, the state of a brand-new workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a graph from stored parts, re-checking id uniqueness and edge
    /// endpoints so a corrupted record cannot produce an inconsistent graph.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Adds a node. Fails if its id is already taken.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.node(&node.id).is_some() {
            return Err(GraphError::DuplicateNodeId(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node and, cascading, every edge touching it. Returns whether
    /// the node was present.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    /// Adds an edge. Fails if its id is taken or either endpoint is not a
    /// present node.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if self.edges.iter().any(|e| e.id == edge.id) {
            return Err(GraphError::DuplicateEdgeId(edge.id));
        }
        for endpoint in [&edge.source, &edge.target] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::UnknownEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Removes an edge if present; removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Target ids reachable via one outgoing edge from `node_id`, in edge
    /// insertion order.
    pub fn neighbors<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.edges
            .iter()
            .filter(move |e| e.source == node_id)
            .map(|e| e.target.as_str())
    }

    /// Attaches a configuration payload to a node, refreshing its label.
    pub fn set_node_config(&mut self, node_id: &str, config: NodeConfig) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))?;
        node.set_config(config)
    }

    /// Runs the structural validation engine over the current snapshot.
    pub fn validate(&self) -> ValidationResult {
        validate_workflow(&self.nodes, &self.edges)
    }
}
