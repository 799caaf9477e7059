use super::FieldError;
use serde::{Deserialize, Serialize};

/// Configuration for a `send-email` step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailConfig {
    pub subject: String,
    pub template: String,
    pub recipients: Vec<String>,
    pub recipient_type: RecipientType,
}

/// Who the email goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    All,
    Specific,
    Segment,
}

impl Default for SendEmailConfig {
    fn default() -> Self {
        Self {
            subject: "New Email".to_string(),
            template: String::new(),
            recipients: Vec::new(),
            recipient_type: RecipientType::All,
        }
    }
}

impl SendEmailConfig {
    /// `"Send Email: <subject>"`, falling back to `Untitled` for a blank
    /// subject.
    pub fn label(&self) -> String {
        let subject = self.subject.trim();
        if subject.is_empty() {
            "Send Email: Untitled".to_string()
        } else {
            format!("Send Email: {subject}")
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.subject.trim().is_empty() {
            errors.push(FieldError::new("subject", "Please enter an email subject"));
        }
        errors
    }

    /// Adds a recipient, trimming surrounding whitespace. Blank input and
    /// addresses already present are ignored. Returns whether the list grew.
    pub fn add_recipient(&mut self, address: &str) -> bool {
        let address = address.trim();
        if address.is_empty() || self.recipients.iter().any(|r| r == address) {
            return false;
        }
        self.recipients.push(address.to_string());
        true
    }

    /// Removes a recipient if present.
    pub fn remove_recipient(&mut self, address: &str) {
        self.recipients.retain(|r| r != address);
    }
}
