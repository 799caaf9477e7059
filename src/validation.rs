//! Structural validation of a workflow graph snapshot.
//!
//! [`validate_workflow`] is a pure function of the node and edge sets it is
//! given: no hidden state, safe to call repeatedly and from any number of
//! concurrent callers on independent snapshots. Structural findings are
//! reported as data in a [`ValidationResult`], never as errors, so a malformed
//! graph it can characterize (cycles, orphans) does not raise.

use crate::graph::{Edge, Node};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;

/// How bad a finding is. Errors block persistence; warnings are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

/// The outcome of one validation pass.
///
/// `is_valid` reflects structure only: it is true iff there are zero errors.
/// Warnings never affect it, and node-level configuration problems are
/// reported through a separate channel
/// ([`NodeConfig::validate`](crate::config::NodeConfig::validate)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

/// Validates the structure of a workflow graph snapshot.
///
/// An empty node set is trivially valid. Otherwise two independent checks run,
/// and both may fire on the same graph:
///
/// - **Orphans** (warning): in a graph of two or more nodes, any node that
///   appears in no edge at all. A single unconnected node is the normal
///   starting state, not a defect.
/// - **Cycles** (error): any directed cycle, self-loops included. The engine
///   reports existence only; it stops at the first cycle found and does not
///   name the participating nodes.
pub fn validate_workflow(nodes: &[Node], edges: &[Edge]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if nodes.is_empty() {
        return ValidationResult {
            is_valid: true,
            errors,
            warnings,
        };
    }

    let orphaned = count_orphaned_nodes(nodes, edges);
    if orphaned > 0 {
        warnings.push(Issue {
            severity: Severity::Warning,
            message: format!(
                "Found {orphaned} orphaned node(s). Consider connecting them to the main workflow."
            ),
            node_id: None,
        });
    }

    if has_cycle(nodes, edges) {
        errors.push(Issue {
            severity: Severity::Error,
            message: "Circular dependency detected. This will cause infinite loops.".to_string(),
            node_id: None,
        });
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Counts nodes that appear in no edge. A single-node graph has no orphans by
/// definition.
fn count_orphaned_nodes(nodes: &[Node], edges: &[Edge]) -> usize {
    if nodes.len() <= 1 {
        return 0;
    }

    let connected: AHashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();

    nodes
        .iter()
        .filter(|n| !connected.contains(n.id.as_str()))
        .count()
}

/// Detects whether any directed cycle exists, using an iterative depth-first
/// search with an explicit stack so adversarially deep graphs cannot overflow
/// the call stack.
///
/// Edges whose endpoints are not present nodes are skipped rather than
/// traversed; referential integrity is the graph container's job.
fn has_cycle(nodes: &[Node], edges: &[Edge]) -> bool {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::with_capacity(nodes.len());
    for node in nodes {
        adjacency.insert(node.id.as_str(), Vec::new());
    }
    for edge in edges {
        if !adjacency.contains_key(edge.target.as_str()) {
            continue;
        }
        if let Some(neighbors) = adjacency.get_mut(edge.source.as_str()) {
            neighbors.push(edge.target.as_str());
        }
    }

    let mut visited: AHashSet<&str> = AHashSet::with_capacity(nodes.len());
    let mut on_stack: AHashSet<&str> = AHashSet::new();
    // Each frame is a node plus the index of its next unexplored neighbor.
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for node in nodes {
        let start = node.id.as_str();
        if visited.contains(start) {
            continue;
        }
        visited.insert(start);
        on_stack.insert(start);
        stack.push((start, 0));

        while let Some((current, next_index)) = stack.last_mut() {
            let neighbors = &adjacency[*current];
            if let Some(&neighbor) = neighbors.get(*next_index) {
                *next_index += 1;
                if on_stack.contains(neighbor) {
                    return true;
                }
                if !visited.contains(neighbor) {
                    visited.insert(neighbor);
                    on_stack.insert(neighbor);
                    stack.push((neighbor, 0));
                }
            } else {
                on_stack.remove(*current);
                stack.pop();
            }
        }
    }

    false
}
