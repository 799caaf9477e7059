use super::FieldError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Configuration for a `wait` step: pause the workflow for a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 1,
            seconds: 0,
        }
    }
}

impl WaitConfig {
    /// Non-zero components joined as `"2h 30m 15s"`; an all-zero duration
    /// renders as `"0m"`.
    pub fn label(&self) -> String {
        let parts = [
            (self.hours, "h"),
            (self.minutes, "m"),
            (self.seconds, "s"),
        ];
        let label = parts
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|(value, unit)| format!("{value}{unit}"))
            .join(" ");
        if label.is_empty() {
            "0m".to_string()
        } else {
            label
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 {
            errors.push(FieldError::new(
                "duration",
                "Please enter at least one time value (hours, minutes, or seconds)",
            ));
        }
        if self.minutes >= 60 || self.seconds >= 60 {
            errors.push(FieldError::new(
                "duration",
                "Minutes and seconds must be less than 60",
            ));
        }
        errors
    }

    /// The composed duration in seconds.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}
