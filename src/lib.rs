//! # Flowgate - Workflow Graph Model and Validation Engine
//!
//! **Flowgate** is the design-time core of a node-based automation builder. It
//! models a workflow as a directed graph of automation steps (wait, send-email,
//! decision-split, update-profile), validates the graph's structure before it is
//! allowed to persist, and defines the owner-scoped record shape the persistence
//! layer stores.
//!
//! ## Core Workflow
//!
//! The editing surface owns a [`WorkflowGraph`](graph::WorkflowGraph) and mutates
//! it as the user drags nodes and draws edges. Every mutation is followed by a
//! call into the validation engine, whose result gates saving:
//!
//! 1.  **Build the graph**: add [`Node`](graph::Node)s and [`Edge`](graph::Edge)s,
//!     attach kind-specific [`NodeConfig`](config::NodeConfig) payloads.
//! 2.  **Validate**: [`validate_workflow`](validation::validate_workflow) reports
//!     structural problems (cycles block, orphans warn) as data, never as errors.
//! 3.  **Persist**: [`WorkflowStore`](store::WorkflowStore) refuses to write any
//!     workflow whose graph fails validation, and scopes every read and mutation
//!     by owner.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowgate::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = WorkflowGraph::new();
//!     graph.add_node(Node::new("n1", NodeKind::Wait, Position::new(100.0, 80.0)))?;
//!     graph.add_node(Node::new("n2", NodeKind::SendEmail, Position::new(300.0, 80.0)))?;
//!     graph.add_edge(Edge::new("e1", "n1", "n2"))?;
//!
//!     graph.set_node_config("n1", NodeConfig::Wait(WaitConfig {
//!         hours: 0,
//!         minutes: 30,
//!         seconds: 0,
//!     }))?;
//!
//!     let result = graph.validate();
//!     assert!(result.is_valid);
//!
//!     let mut store = WorkflowStore::new();
//!     let workflow = store.create(WorkflowDraft {
//!         name: "Welcome series".to_string(),
//!         owner: "ada".to_string(),
//!         nodes: graph.nodes().to_vec(),
//!         edges: graph.edges().to_vec(),
//!     })?;
//!     println!("saved workflow {}", workflow.id);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod store;
pub mod validation;
