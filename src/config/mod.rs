//! Kind-specific node configuration payloads.
//!
//! Each node kind carries a typed configuration variant with its own defaults,
//! derived label text, and field-level validation. Field validation is local to
//! a single node's edit dialog and is reported through [`FieldError`] values,
//! independent of the whole-graph structural pass in
//! [`validation`](crate::validation).

use serde::{Deserialize, Serialize};
use std::fmt;

mod decision;
mod email;
mod profile;
mod wait;

pub use decision::{Condition, ConditionOperator, DecisionSplitConfig};
pub use email::{RecipientType, SendEmailConfig};
pub use profile::{ProfileUpdate, UpdateOperation, UpdateProfileConfig};
pub use wait::WaitConfig;

/// The closed set of automation step kinds.
///
/// A node's kind is explicit and immutable after creation; it is never inferred
/// from the shape of the configuration payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Wait,
    SendEmail,
    DecisionSplit,
    UpdateProfile,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Wait => "wait",
            NodeKind::SendEmail => "send-email",
            NodeKind::DecisionSplit => "decision-split",
            NodeKind::UpdateProfile => "update-profile",
        }
    }

    /// Title-cased kind name, used as the label of an unconfigured node.
    pub fn title(&self) -> &'static str {
        match self {
            NodeKind::Wait => "Wait",
            NodeKind::SendEmail => "Send Email",
            NodeKind::DecisionSplit => "Decision Split",
            NodeKind::UpdateProfile => "Update Profile",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node's configuration payload, tagged by its kind.
///
/// Adding a new node kind means adding a variant here and a match arm in every
/// place configs are interpreted; there is no runtime shape probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeConfig {
    Wait(WaitConfig),
    SendEmail(SendEmailConfig),
    DecisionSplit(DecisionSplitConfig),
    UpdateProfile(UpdateProfileConfig),
}

impl NodeConfig {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Wait(_) => NodeKind::Wait,
            NodeConfig::SendEmail(_) => NodeKind::SendEmail,
            NodeConfig::DecisionSplit(_) => NodeKind::DecisionSplit,
            NodeConfig::UpdateProfile(_) => NodeKind::UpdateProfile,
        }
    }

    /// The default payload for a kind, as presented by a freshly opened dialog.
    pub fn default_for(kind: NodeKind) -> NodeConfig {
        match kind {
            NodeKind::Wait => NodeConfig::Wait(WaitConfig::default()),
            NodeKind::SendEmail => NodeConfig::SendEmail(SendEmailConfig::default()),
            NodeKind::DecisionSplit => NodeConfig::DecisionSplit(DecisionSplitConfig::default()),
            NodeKind::UpdateProfile => NodeConfig::UpdateProfile(UpdateProfileConfig::default()),
        }
    }

    /// Human-readable label derived from the payload. Purely presentational;
    /// structural validation never reads it.
    pub fn label(&self) -> String {
        match self {
            NodeConfig::Wait(c) => c.label(),
            NodeConfig::SendEmail(c) => c.label(),
            NodeConfig::DecisionSplit(c) => c.label(),
            NodeConfig::UpdateProfile(c) => c.label(),
        }
    }

    /// Field-level semantic validation. An empty result means the payload can
    /// be saved onto its node.
    pub fn validate(&self) -> Vec<FieldError> {
        match self {
            NodeConfig::Wait(c) => c.validate(),
            NodeConfig::SendEmail(c) => c.validate(),
            NodeConfig::DecisionSplit(c) => c.validate(),
            NodeConfig::UpdateProfile(c) => c.validate(),
        }
    }
}

/// Derives the display label for a node, configured or not.
pub fn derive_label(kind: NodeKind, config: Option<&NodeConfig>) -> String {
    match config {
        Some(config) => config.label(),
        None => kind.title().to_string(),
    }
}

/// A single rejected field in a node's configuration dialog.
///
/// Blocks saving that node's configuration only; a whole-graph validation pass
/// does not aggregate these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
