//! Event parsing
//!
//! The single entry point from raw bytes to a typed `HookEvent`. Parsing
//! never partially succeeds: either a fully valid event is produced, or
//! exactly one `Fault` is produced and no event exists. The parser is a
//! pure function of its input - no global state, no retries.

use serde_json::Value;

use crate::core::Fault;

use super::event::HookEvent;
use super::kind::EventKind;
use super::schema;

/// Parse raw bytes into a typed event
///
/// Steps, in order:
/// 1. decode the bytes as JSON (`Fault::Parse` on failure)
/// 2. read the `hook_event_name` discriminator (`Fault::Parse` when missing
///    or unrecognized - never a guessed kind)
/// 3. validate against that kind's schema (surfaces `Fault::Validation`
///    unchanged)
/// 4. construct the typed event
pub fn parse_event(input: &[u8]) -> Result<HookEvent, Fault> {
    let value: Value = serde_json::from_slice(input)
        .map_err(|e| Fault::parse(format!("invalid JSON: {e}")))?;
    parse_value(value)
}

/// Parse an already-decoded JSON value into a typed event
pub fn parse_value(value: Value) -> Result<HookEvent, Fault> {
    let object = value
        .as_object()
        .ok_or_else(|| Fault::parse(format!("expected a JSON object, got {}", type_name(&value))))?;

    let name = match object.get("hook_event_name") {
        None => return Err(Fault::parse("missing required field: hook_event_name")),
        Some(Value::String(name)) => name.as_str(),
        Some(other) => {
            return Err(Fault::parse(format!(
                "hook_event_name must be a string, got {}",
                type_name(other)
            )))
        }
    };
    let kind = EventKind::from_name(name)
        .ok_or_else(|| Fault::parse(format!("unknown event kind: {name}")))?;

    schema::validate(kind, object)?;

    // Validation guarantees every field serde needs; a failure here means
    // the schema and the typed model have drifted apart.
    serde_json::from_value(value)
        .map_err(|e| Fault::parse(format!("failed to construct {kind} event: {e}")))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
