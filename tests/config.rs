//! Tests for node configuration defaults, labels, and field validation.
mod common;
use flowgate::prelude::*;

#[test]
fn test_default_configs_match_dialog_defaults() {
    match NodeConfig::default_for(NodeKind::Wait) {
        NodeConfig::Wait(c) => {
            assert_eq!((c.hours, c.minutes, c.seconds), (0, 1, 0));
        }
        other => panic!("expected wait config, got {other:?}"),
    }

    match NodeConfig::default_for(NodeKind::SendEmail) {
        NodeConfig::SendEmail(c) => {
            assert_eq!(c.subject, "New Email");
            assert_eq!(c.template, "");
            assert!(c.recipients.is_empty());
            assert_eq!(c.recipient_type, RecipientType::All);
        }
        other => panic!("expected send-email config, got {other:?}"),
    }

    match NodeConfig::default_for(NodeKind::DecisionSplit) {
        NodeConfig::DecisionSplit(c) => {
            assert!(c.conditions.is_empty());
            assert_eq!(c.default_path, "Default");
        }
        other => panic!("expected decision-split config, got {other:?}"),
    }

    match NodeConfig::default_for(NodeKind::UpdateProfile) {
        NodeConfig::UpdateProfile(c) => assert!(c.updates.is_empty()),
        other => panic!("expected update-profile config, got {other:?}"),
    }
}

#[test]
fn test_wait_label_joins_nonzero_components() {
    let config = WaitConfig {
        hours: 1,
        minutes: 30,
        seconds: 45,
    };
    assert_eq!(config.label(), "1h 30m 45s");

    let config = WaitConfig {
        hours: 2,
        minutes: 30,
        seconds: 0,
    };
    assert_eq!(config.label(), "2h 30m");

    let config = WaitConfig {
        hours: 0,
        minutes: 0,
        seconds: 15,
    };
    assert_eq!(config.label(), "15s");
}

#[test]
fn test_wait_label_all_zero_renders_0m() {
    let config = WaitConfig {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };
    assert_eq!(config.label(), "0m");
}

#[test]
fn test_wait_rejects_all_zero_duration() {
    let config = WaitConfig {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };
    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Please enter at least one time value (hours, minutes, or seconds)"
    );
}

#[test]
fn test_wait_rejects_overflowing_minutes_and_seconds() {
    let config = WaitConfig {
        hours: 0,
        minutes: 60,
        seconds: 0,
    };
    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Minutes and seconds must be less than 60");

    let config = WaitConfig {
        hours: 1,
        minutes: 0,
        seconds: 75,
    };
    assert_eq!(config.validate().len(), 1);
}

#[test]
fn test_wait_accepts_valid_duration() {
    let config = WaitConfig {
        hours: 1,
        minutes: 30,
        seconds: 45,
    };
    assert!(config.validate().is_empty());
    assert_eq!(config.total_seconds(), 5445);
}

#[test]
fn test_email_label_uses_subject_or_untitled() {
    let mut config = SendEmailConfig {
        subject: "Welcome aboard".to_string(),
        ..SendEmailConfig::default()
    };
    assert_eq!(config.label(), "Send Email: Welcome aboard");

    config.subject = "   ".to_string();
    assert_eq!(config.label(), "Send Email: Untitled");
}

#[test]
fn test_email_rejects_blank_subject() {
    let config = SendEmailConfig {
        subject: "   ".to_string(),
        ..SendEmailConfig::default()
    };
    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "subject");
    assert_eq!(errors[0].message, "Please enter an email subject");
}

#[test]
fn test_email_recipients_deduplicate_on_insert() {
    let mut config = SendEmailConfig::default();
    assert!(config.add_recipient("ada@example.com"));
    assert!(config.add_recipient("  grace@example.com  "));
    // Duplicate and blank input are no-ops, not errors.
    assert!(!config.add_recipient("ada@example.com"));
    assert!(!config.add_recipient("   "));
    assert_eq!(config.recipients, vec!["ada@example.com", "grace@example.com"]);

    config.remove_recipient("ada@example.com");
    assert_eq!(config.recipients, vec!["grace@example.com"]);
}

#[test]
fn test_decision_split_label_counts_conditions() {
    let mut config = DecisionSplitConfig::default();
    assert_eq!(config.label(), "Decision Split");
    assert!(config.validate().is_empty());

    config.conditions.push(Condition {
        id: "c1".to_string(),
        field: "plan".to_string(),
        operator: ConditionOperator::Equals,
        value: "pro".to_string(),
        label: "Condition 1".to_string(),
    });
    assert_eq!(config.label(), "Decision Split (1 condition(s))");
    // An empty or populated condition list is valid either way.
    assert!(config.validate().is_empty());
}

#[test]
fn test_update_profile_label_counts_fields() {
    let mut config = UpdateProfileConfig::default();
    assert_eq!(config.label(), "Update Profile");

    config.updates.push(ProfileUpdate {
        id: "u1".to_string(),
        field: "visits".to_string(),
        value: serde_json::json!(1),
        operation: UpdateOperation::Increment,
    });
    config.updates.push(ProfileUpdate {
        id: "u2".to_string(),
        field: "tag".to_string(),
        value: serde_json::json!("vip"),
        operation: UpdateOperation::Set,
    });
    assert_eq!(config.label(), "Update Profile (2 field(s))");
    assert!(config.validate().is_empty());
}

#[test]
fn test_derive_label_falls_back_to_kind_title() {
    assert_eq!(derive_label(NodeKind::SendEmail, None), "Send Email");
    assert_eq!(derive_label(NodeKind::UpdateProfile, None), "Update Profile");

    let config = NodeConfig::Wait(WaitConfig {
        hours: 0,
        minutes: 5,
        seconds: 0,
    });
    assert_eq!(derive_label(NodeKind::Wait, Some(&config)), "5m");
}

#[test]
fn test_config_deserializes_editor_json() {
    // The editor emits camelCase fields with a kebab-case kind tag.
    let config: NodeConfig = serde_json::from_str(
        r#"{
            "kind": "send-email",
            "subject": "Hello",
            "template": "welcome",
            "recipients": ["ada@example.com"],
            "recipientType": "specific"
        }"#,
    )
    .unwrap();
    match &config {
        NodeConfig::SendEmail(c) => {
            assert_eq!(c.subject, "Hello");
            assert_eq!(c.recipient_type, RecipientType::Specific);
        }
        other => panic!("expected send-email config, got {other:?}"),
    }
    assert_eq!(config.kind(), NodeKind::SendEmail);

    let config: NodeConfig = serde_json::from_str(
        r#"{
            "kind": "decision-split",
            "conditions": [{
                "id": "c1",
                "field": "plan",
                "operator": "greater_than",
                "value": "10",
                "label": "Condition 1"
            }],
            "defaultPath": "Default"
        }"#,
    )
    .unwrap();
    match config {
        NodeConfig::DecisionSplit(c) => {
            assert_eq!(c.conditions[0].operator, ConditionOperator::GreaterThan);
        }
        other => panic!("expected decision-split config, got {other:?}"),
    }
}
