//! Per-kind schema validation
//!
//! Validates decoded JSON against the schema for its declared kind before
//! any typed event is constructed. Pure and side-effect free: the only
//! outputs are `Ok(())` or a `Fault::Validation` naming the offending field
//! and the rule it violated. Unknown extra fields are ignored - forward
//! compatibility with host additions takes precedence over strictness.

use serde_json::{Map, Value};

use crate::core::{Fault, ValidationRule};

use super::kind::EventKind;

/// Validate a decoded event object against the schema for `kind`
pub fn validate(kind: EventKind, object: &Map<String, Value>) -> Result<(), Fault> {
    // Envelope fields, common to every kind
    require_non_empty_string(object, "session_id")?;
    require_string(object, "transcript_path")?;
    require_string(object, "cwd")?;

    match kind {
        EventKind::PreToolUse => {
            require_string(object, "tool_name")?;
            require_object(object, "tool_input")?;
            // tool_response belongs to PostToolUse only; an explicit null
            // counts as absent, like everywhere else
            if object.get("tool_response").is_some_and(|v| !v.is_null()) {
                return Err(Fault::validation(
                    "tool_response",
                    ValidationRule::MutuallyExclusive,
                ));
            }
        }
        EventKind::PostToolUse => {
            require_string(object, "tool_name")?;
            require_object(object, "tool_input")?;
            optional_object(object, "tool_response")?;
        }
        EventKind::Notification => {
            require_string(object, "notification_type")?;
            optional_string(object, "message")?;
        }
        EventKind::UserPromptSubmit => {
            require_string(object, "prompt")?;
        }
        EventKind::Stop => {
            require_bool(object, "response_complete")?;
        }
        EventKind::SubagentStop => {
            require_string(object, "subagent_id")?;
            optional_object(object, "task_result")?;
        }
        EventKind::PreCompact => {
            require_string(object, "compact_reason")?;
        }
    }

    Ok(())
}

fn require_string<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str, Fault> {
    match object.get(field) {
        None => Err(Fault::validation(field, ValidationRule::MissingRequired)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Fault::validation(field, ValidationRule::WrongType)),
    }
}

fn require_non_empty_string(object: &Map<String, Value>, field: &str) -> Result<(), Fault> {
    let value = require_string(object, field)?;
    if value.is_empty() {
        return Err(Fault::validation(field, ValidationRule::MissingRequired));
    }
    Ok(())
}

fn require_object(object: &Map<String, Value>, field: &str) -> Result<(), Fault> {
    match object.get(field) {
        None => Err(Fault::validation(field, ValidationRule::MissingRequired)),
        Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(Fault::validation(field, ValidationRule::WrongType)),
    }
}

fn require_bool(object: &Map<String, Value>, field: &str) -> Result<(), Fault> {
    match object.get(field) {
        None => Err(Fault::validation(field, ValidationRule::MissingRequired)),
        Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(Fault::validation(field, ValidationRule::WrongType)),
    }
}

// Optional fields accept an explicit null as absent

fn optional_object(object: &Map<String, Value>, field: &str) -> Result<(), Fault> {
    match object.get(field) {
        None | Some(Value::Null) | Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(Fault::validation(field, ValidationRule::WrongType)),
    }
}

fn optional_string(object: &Map<String, Value>, field: &str) -> Result<(), Fault> {
    match object.get(field) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(Fault::validation(field, ValidationRule::WrongType)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_object(kind: &str) -> Map<String, Value> {
        let value = json!({
            "session_id": "test-session",
            "transcript_path": "/path/to/transcript.md",
            "cwd": "/home/user/project",
            "hook_event_name": kind,
        });
        value.as_object().unwrap().clone()
    }

    fn assert_fails_on(kind: EventKind, object: &Map<String, Value>, field: &str, rule: ValidationRule) {
        match validate(kind, object) {
            Err(Fault::Validation { field: f, rule: r }) => {
                assert_eq!(f, field);
                assert_eq!(r, rule);
            }
            other => panic!("expected validation fault on '{field}', got {other:?}"),
        }
    }

    #[test]
    fn test_valid_pre_tool_use() {
        let mut object = base_object("PreToolUse");
        object.insert("tool_name".into(), json!("Bash"));
        object.insert("tool_input".into(), json!({"command": "ls"}));
        assert!(validate(EventKind::PreToolUse, &object).is_ok());
    }

    #[test]
    fn test_missing_session_id() {
        let mut object = base_object("Stop");
        object.remove("session_id");
        assert_fails_on(EventKind::Stop, &object, "session_id", ValidationRule::MissingRequired);
    }

    #[test]
    fn test_empty_session_id_is_missing() {
        let mut object = base_object("Stop");
        object.insert("session_id".into(), json!(""));
        assert_fails_on(EventKind::Stop, &object, "session_id", ValidationRule::MissingRequired);
    }

    #[test]
    fn test_wrong_type_envelope_field() {
        let mut object = base_object("Stop");
        object.insert("cwd".into(), json!(42));
        assert_fails_on(EventKind::Stop, &object, "cwd", ValidationRule::WrongType);
    }

    #[test]
    fn test_missing_tool_name() {
        let mut object = base_object("PreToolUse");
        object.insert("tool_input".into(), json!({}));
        assert_fails_on(
            EventKind::PreToolUse,
            &object,
            "tool_name",
            ValidationRule::MissingRequired,
        );
    }

    #[test]
    fn test_tool_input_wrong_type() {
        let mut object = base_object("PreToolUse");
        object.insert("tool_name".into(), json!("Bash"));
        object.insert("tool_input".into(), json!("not an object"));
        assert_fails_on(
            EventKind::PreToolUse,
            &object,
            "tool_input",
            ValidationRule::WrongType,
        );
    }

    #[test]
    fn test_tool_response_forbidden_on_pre_tool_use() {
        let mut object = base_object("PreToolUse");
        object.insert("tool_name".into(), json!("Bash"));
        object.insert("tool_input".into(), json!({}));
        object.insert("tool_response".into(), json!({}));
        assert_fails_on(
            EventKind::PreToolUse,
            &object,
            "tool_response",
            ValidationRule::MutuallyExclusive,
        );
    }

    #[test]
    fn test_tool_response_optional_on_post_tool_use() {
        let mut object = base_object("PostToolUse");
        object.insert("tool_name".into(), json!("Bash"));
        object.insert("tool_input".into(), json!({}));
        assert!(validate(EventKind::PostToolUse, &object).is_ok());

        object.insert("tool_response".into(), json!({"output": "ok"}));
        assert!(validate(EventKind::PostToolUse, &object).is_ok());

        object.insert("tool_response".into(), json!(["not", "an", "object"]));
        assert_fails_on(
            EventKind::PostToolUse,
            &object,
            "tool_response",
            ValidationRule::WrongType,
        );
    }

    #[test]
    fn test_kind_specific_required_fields() {
        assert_fails_on(
            EventKind::UserPromptSubmit,
            &base_object("UserPromptSubmit"),
            "prompt",
            ValidationRule::MissingRequired,
        );
        assert_fails_on(
            EventKind::Notification,
            &base_object("Notification"),
            "notification_type",
            ValidationRule::MissingRequired,
        );
        assert_fails_on(
            EventKind::SubagentStop,
            &base_object("SubagentStop"),
            "subagent_id",
            ValidationRule::MissingRequired,
        );
        assert_fails_on(
            EventKind::PreCompact,
            &base_object("PreCompact"),
            "compact_reason",
            ValidationRule::MissingRequired,
        );
    }

    #[test]
    fn test_stop_requires_response_complete() {
        let mut object = base_object("Stop");
        assert_fails_on(
            EventKind::Stop,
            &object,
            "response_complete",
            ValidationRule::MissingRequired,
        );

        object.insert("response_complete".into(), json!("yes"));
        assert_fails_on(
            EventKind::Stop,
            &object,
            "response_complete",
            ValidationRule::WrongType,
        );

        object.insert("response_complete".into(), json!(true));
        assert!(validate(EventKind::Stop, &object).is_ok());
    }

    #[test]
    fn test_null_optional_fields_count_as_absent() {
        let mut object = base_object("PostToolUse");
        object.insert("tool_name".into(), json!("Bash"));
        object.insert("tool_input".into(), json!({}));
        object.insert("tool_response".into(), json!(null));
        assert!(validate(EventKind::PostToolUse, &object).is_ok());

        let mut object = base_object("Notification");
        object.insert("notification_type".into(), json!("info"));
        object.insert("message".into(), json!(null));
        assert!(validate(EventKind::Notification, &object).is_ok());

        // A null tool_response on PreToolUse is absent, not a conflict
        let mut object = base_object("PreToolUse");
        object.insert("tool_name".into(), json!("Bash"));
        object.insert("tool_input".into(), json!({}));
        object.insert("tool_response".into(), json!(null));
        assert!(validate(EventKind::PreToolUse, &object).is_ok());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut object = base_object("UserPromptSubmit");
        object.insert("prompt".into(), json!("hello"));
        object.insert("future_host_field".into(), json!({"anything": [1, 2, 3]}));
        assert!(validate(EventKind::UserPromptSubmit, &object).is_ok());
    }
}
