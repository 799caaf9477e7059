//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowgate crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust
//! use flowgate::prelude::*;
//!
//! let mut graph = WorkflowGraph::new();
//! graph
//!     .add_node(Node::new("wait-1", NodeKind::Wait, Position::default()))
//!     .unwrap();
//! let result = graph.validate();
//! assert!(result.is_valid);
//! ```

// Graph model
pub use crate::graph::{Edge, Node, Position, WorkflowGraph};

// Node configuration
pub use crate::config::{
    derive_label, Condition, ConditionOperator, DecisionSplitConfig, FieldError, NodeConfig,
    NodeKind, ProfileUpdate, RecipientType, SendEmailConfig, UpdateOperation, UpdateProfileConfig,
    WaitConfig,
};

// Validation engine
pub use crate::validation::{validate_workflow, Issue, Severity, ValidationResult};

// Persistence
pub use crate::store::{Workflow, WorkflowDraft, WorkflowStore};

// Error types
pub use crate::error::{GraphError, StoreError};
