//! Event kind enumeration

use serde::{Deserialize, Serialize};

/// The closed set of lifecycle moments the host can report
///
/// Variant names are exactly the wire strings the host sends in
/// `hook_event_name`. Adding a kind is a schema change, not a runtime
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Before a tool is executed - can block or give feedback
    PreToolUse,
    /// After a tool has executed
    PostToolUse,
    /// When the host sends a notification
    Notification,
    /// When the user submits a prompt
    UserPromptSubmit,
    /// When the main conversation finishes responding
    Stop,
    /// When a subagent task completes
    SubagentStop,
    /// Before conversation compaction
    PreCompact,
}

impl EventKind {
    /// All supported kinds, in host-documentation order
    pub const ALL: [EventKind; 7] = [
        EventKind::PreToolUse,
        EventKind::PostToolUse,
        EventKind::Notification,
        EventKind::UserPromptSubmit,
        EventKind::Stop,
        EventKind::SubagentStop,
        EventKind::PreCompact,
    ];

    /// The wire string for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PreToolUse => "PreToolUse",
            EventKind::PostToolUse => "PostToolUse",
            EventKind::Notification => "Notification",
            EventKind::UserPromptSubmit => "UserPromptSubmit",
            EventKind::Stop => "Stop",
            EventKind::SubagentStop => "SubagentStop",
            EventKind::PreCompact => "PreCompact",
        }
    }

    /// Look up a kind by its wire string
    ///
    /// Returns `None` for unrecognized names - the parser turns that into a
    /// parse fault, never a guessed kind.
    pub fn from_name(name: &str) -> Option<Self> {
        EventKind::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    /// Whether this kind carries tool fields (`tool_name`, `tool_input`)
    pub fn is_tool_event(&self) -> bool {
        matches!(self, EventKind::PreToolUse | EventKind::PostToolUse)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(EventKind::PreToolUse.as_str(), "PreToolUse");
        assert_eq!(EventKind::PostToolUse.as_str(), "PostToolUse");
        assert_eq!(EventKind::Notification.as_str(), "Notification");
        assert_eq!(EventKind::UserPromptSubmit.as_str(), "UserPromptSubmit");
        assert_eq!(EventKind::Stop.as_str(), "Stop");
        assert_eq!(EventKind::SubagentStop.as_str(), "SubagentStop");
        assert_eq!(EventKind::PreCompact.as_str(), "PreCompact");
    }

    #[test]
    fn test_from_name_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(EventKind::from_name("SessionStart"), None);
        assert_eq!(EventKind::from_name("pretooluse"), None);
        assert_eq!(EventKind::from_name(""), None);
    }

    #[test]
    fn test_is_tool_event() {
        assert!(EventKind::PreToolUse.is_tool_event());
        assert!(EventKind::PostToolUse.is_tool_event());
        assert!(!EventKind::Notification.is_tool_event());
        assert!(!EventKind::Stop.is_tool_event());
    }

    #[test]
    fn test_serde_matches_wire_string() {
        let json = serde_json::to_string(&EventKind::UserPromptSubmit).unwrap();
        assert_eq!(json, "\"UserPromptSubmit\"");

        let kind: EventKind = serde_json::from_str("\"PreCompact\"").unwrap();
        assert_eq!(kind, EventKind::PreCompact);
    }
}
