use crate::validation::ValidationResult;
use thiserror::Error;

/// Errors raised by [`WorkflowGraph`](crate::graph::WorkflowGraph) mutations.
///
/// These are contract violations on the caller's side (the editing surface is
/// expected to prevent them), not structural findings: cycles and orphans are
/// reported as data by the validation engine, never through this enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("A node with id '{0}' already exists in this graph")]
    DuplicateNodeId(String),

    #[error("An edge with id '{0}' already exists in this graph")]
    DuplicateEdgeId(String),

    #[error("Edge '{edge_id}' references node '{node_id}', which is not in this graph")]
    UnknownEndpoint { edge_id: String, node_id: String },

    #[error("Node '{node_id}' has kind '{kind}' and cannot hold a '{config_kind}' configuration")]
    ConfigKindMismatch {
        node_id: String,
        kind: String,
        config_kind: String,
    },

    #[error("Node '{0}' is not in this graph")]
    NodeNotFound(String),
}

/// Errors raised by [`WorkflowStore`](crate::store::WorkflowStore) operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Workflow name must not be empty")]
    EmptyName,

    #[error("Workflow owner must not be empty")]
    EmptyOwner,

    #[error("Workflow '{0}' was not found")]
    NotFound(String),

    #[error("Workflow '{id}' is not owned by '{owner}'")]
    OwnerMismatch { id: String, owner: String },

    #[error("Workflow failed structural validation with {} error(s)", .0.errors.len())]
    ValidationFailed(ValidationResult),
}
