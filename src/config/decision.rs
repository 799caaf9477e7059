use super::FieldError;
use serde::{Deserialize, Serialize};

/// Configuration for a `decision-split` step: route the workflow down one of
/// several conditional branches, with a fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSplitConfig {
    pub conditions: Vec<Condition>,
    pub default_path: String,
}

/// One branching condition over a profile field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub field: String,
    pub operator: ConditionOperator,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

impl Default for DecisionSplitConfig {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            default_path: "Default".to_string(),
        }
    }
}

impl DecisionSplitConfig {
    pub fn label(&self) -> String {
        if self.conditions.is_empty() {
            "Decision Split".to_string()
        } else {
            format!("Decision Split ({} condition(s))", self.conditions.len())
        }
    }

    /// A decision split with no conditions is a valid no-op step.
    pub fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}
