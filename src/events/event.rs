//! Typed hook events
//!
//! `HookEvent` is the envelope every event kind shares; `EventPayload` holds
//! the kind-specific fields. The payload enum is internally tagged on
//! `hook_event_name`, so serializing an event reproduces the host's flat
//! JSON object and a typed event can never carry another kind's fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::EventKind;

/// One event reported by the host
///
/// Construction goes through the per-kind constructors (or the parser);
/// every mandatory field is required up front. The engine never dereferences
/// `transcript_path` - it is an opaque reference owned by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEvent {
    /// Opaque conversation identifier, always non-empty
    pub session_id: String,
    /// Opaque filesystem-like reference to the conversation transcript
    pub transcript_path: String,
    /// Working directory the host was invoked from
    pub cwd: String,
    /// Kind-specific fields, tagged by `hook_event_name`
    #[serde(flatten)]
    pub payload: EventPayload,
}

/// Kind-specific event fields
///
/// Tool input/response mappings are opaque to the engine - handlers
/// interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "hook_event_name")]
pub enum EventPayload {
    PreToolUse {
        tool_name: String,
        tool_input: Map<String, Value>,
    },
    PostToolUse {
        tool_name: String,
        tool_input: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_response: Option<Map<String, Value>>,
    },
    Notification {
        notification_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    UserPromptSubmit {
        prompt: String,
    },
    Stop {
        response_complete: bool,
    },
    SubagentStop {
        subagent_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_result: Option<Map<String, Value>>,
    },
    PreCompact {
        compact_reason: String,
    },
}

impl EventPayload {
    /// The kind this payload belongs to
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::PreToolUse { .. } => EventKind::PreToolUse,
            EventPayload::PostToolUse { .. } => EventKind::PostToolUse,
            EventPayload::Notification { .. } => EventKind::Notification,
            EventPayload::UserPromptSubmit { .. } => EventKind::UserPromptSubmit,
            EventPayload::Stop { .. } => EventKind::Stop,
            EventPayload::SubagentStop { .. } => EventKind::SubagentStop,
            EventPayload::PreCompact { .. } => EventKind::PreCompact,
        }
    }
}

impl HookEvent {
    /// Create a PreToolUse event
    pub fn pre_tool_use(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        tool_name: impl Into<String>,
        tool_input: Map<String, Value>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::PreToolUse {
                tool_name: tool_name.into(),
                tool_input,
            },
        }
    }

    /// Create a PostToolUse event
    pub fn post_tool_use(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        tool_name: impl Into<String>,
        tool_input: Map<String, Value>,
        tool_response: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::PostToolUse {
                tool_name: tool_name.into(),
                tool_input,
                tool_response,
            },
        }
    }

    /// Create a Notification event
    pub fn notification(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        notification_type: impl Into<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::Notification {
                notification_type: notification_type.into(),
                message,
            },
        }
    }

    /// Create a UserPromptSubmit event
    pub fn user_prompt_submit(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::UserPromptSubmit {
                prompt: prompt.into(),
            },
        }
    }

    /// Create a Stop event
    pub fn stop(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        response_complete: bool,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::Stop { response_complete },
        }
    }

    /// Create a SubagentStop event
    pub fn subagent_stop(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        subagent_id: impl Into<String>,
        task_result: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::SubagentStop {
                subagent_id: subagent_id.into(),
                task_result,
            },
        }
    }

    /// Create a PreCompact event
    pub fn pre_compact(
        session_id: impl Into<String>,
        transcript_path: impl Into<String>,
        cwd: impl Into<String>,
        compact_reason: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            transcript_path: transcript_path.into(),
            cwd: cwd.into(),
            payload: EventPayload::PreCompact {
                compact_reason: compact_reason.into(),
            },
        }
    }

    /// The kind of this event
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// Tool name, for tool events only
    pub fn tool_name(&self) -> Option<&str> {
        match &self.payload {
            EventPayload::PreToolUse { tool_name, .. }
            | EventPayload::PostToolUse { tool_name, .. } => Some(tool_name),
            _ => None,
        }
    }

    /// Tool input mapping, for tool events only
    pub fn tool_input(&self) -> Option<&Map<String, Value>> {
        match &self.payload {
            EventPayload::PreToolUse { tool_input, .. }
            | EventPayload::PostToolUse { tool_input, .. } => Some(tool_input),
            _ => None,
        }
    }

    /// Serialize to the host's canonical JSON shape
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
