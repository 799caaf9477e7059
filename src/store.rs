//! Owner-scoped workflow persistence.
//!
//! [`WorkflowStore`] is the in-memory realization of the persistence contract
//! consumed by the external CRUD collaborator: ids are store-assigned and
//! immutable, every lookup and mutation is authorized against the record's
//! owner before anything else happens, and no write is attempted for a graph
//! that fails structural validation. Warnings never block persistence.

use crate::error::StoreError;
use crate::graph::{Edge, Node};
use crate::validation::validate_workflow;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A named, owned, persisted graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied parts of a workflow; the store assigns id and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDraft {
    pub name: String,
    pub owner: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// In-memory workflow store.
#[derive(Debug, Default)]
pub struct WorkflowStore {
    workflows: AHashMap<Uuid, Workflow>,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a new workflow. Rejected before any write if the name or owner is
    /// blank, or if the graph fails structural validation.
    pub fn create(&mut self, draft: WorkflowDraft) -> Result<Workflow, StoreError> {
        let draft = Self::check_draft(draft)?;

        let now = Utc::now();
        let workflow = Workflow {
            id: Uuid::new_v4(),
            name: draft.name,
            owner: draft.owner,
            nodes: draft.nodes,
            edges: draft.edges,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %workflow.id, owner = %workflow.owner, "created workflow");
        self.workflows.insert(workflow.id, workflow.clone());
        Ok(workflow)
    }

    /// Fetches a workflow, authorized against its owner.
    pub fn get(&self, id: Uuid, owner: &str) -> Result<&Workflow, StoreError> {
        self.authorize(id, owner)
    }

    /// All workflows belonging to `owner`, most recently created first.
    pub fn list(&self, owner: &str) -> Vec<&Workflow> {
        let mut workflows: Vec<&Workflow> = self
            .workflows
            .values()
            .filter(|w| w.owner == owner)
            .collect();
        workflows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        workflows
    }

    /// Replaces a workflow's name and graph, refreshing `updated_at`. The id
    /// and `created_at` never change. Authorization runs before the draft is
    /// even inspected, so an unauthorized caller learns nothing and mutates
    /// nothing.
    pub fn update(&mut self, id: Uuid, draft: WorkflowDraft) -> Result<Workflow, StoreError> {
        self.authorize(id, &draft.owner)?;
        let draft = Self::check_draft(draft)?;

        let workflow = self
            .workflows
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        workflow.name = draft.name;
        workflow.nodes = draft.nodes;
        workflow.edges = draft.edges;
        workflow.updated_at = Utc::now();
        debug!(id = %workflow.id, owner = %workflow.owner, "updated workflow");
        Ok(workflow.clone())
    }

    /// Deletes a workflow, authorized against its owner.
    pub fn delete(&mut self, id: Uuid, owner: &str) -> Result<(), StoreError> {
        self.authorize(id, owner)?;
        self.workflows.remove(&id);
        debug!(%id, %owner, "deleted workflow");
        Ok(())
    }

    /// Deletes every workflow belonging to `owner`, returning how many were
    /// removed.
    pub fn delete_all(&mut self, owner: &str) -> usize {
        let before = self.workflows.len();
        self.workflows.retain(|_, w| w.owner != owner);
        let removed = before - self.workflows.len();
        if removed > 0 {
            debug!(%owner, removed, "deleted all workflows for owner");
        }
        removed
    }

    /// Capability check: resolves the record and matches its owner, before any
    /// other work proceeds.
    fn authorize(&self, id: Uuid, owner: &str) -> Result<&Workflow, StoreError> {
        let workflow = self
            .workflows
            .get(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if workflow.owner != owner {
            return Err(StoreError::OwnerMismatch {
                id: id.to_string(),
                owner: owner.to_string(),
            });
        }
        Ok(workflow)
    }

    /// The validation gate shared by create and update: non-blank identity
    /// fields and a structurally valid graph, checked before any write.
    fn check_draft(draft: WorkflowDraft) -> Result<WorkflowDraft, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if draft.owner.trim().is_empty() {
            return Err(StoreError::EmptyOwner);
        }
        let result = validate_workflow(&draft.nodes, &draft.edges);
        if !result.is_valid {
            return Err(StoreError::ValidationFailed(result));
        }
        Ok(draft)
    }
}
