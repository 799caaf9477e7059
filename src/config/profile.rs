use super::FieldError;
use serde::{Deserialize, Serialize};

/// Configuration for an `update-profile` step: apply a batch of field
/// mutations to the contact's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateProfileConfig {
    pub updates: Vec<ProfileUpdate>,
}

/// One field mutation. The value is free-form JSON so that `increment` can
/// carry a number while `set`/`append`/`prepend` carry strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub id: String,
    pub field: String,
    pub value: serde_json::Value,
    pub operation: UpdateOperation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOperation {
    Set,
    Increment,
    Append,
    Prepend,
}

impl UpdateProfileConfig {
    pub fn label(&self) -> String {
        if self.updates.is_empty() {
            "Update Profile".to_string()
        } else {
            format!("Update Profile ({} field(s))", self.updates.len())
        }
    }

    /// An empty update list is a valid no-op step.
    pub fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}
