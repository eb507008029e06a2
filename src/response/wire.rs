//! Wire forms of a decision
//!
//! The host accepts two forms: a structured JSON object on stdout, or a
//! bare exit code. Both are serializations of the same `Decision` value;
//! when both are present the structured form takes precedence, so they are
//! produced from one place and can never disagree.

use serde::{Deserialize, Serialize};

use super::decision::Decision;

/// `decision` values of the structured wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireDecision {
    Continue,
    Block,
    Feedback,
}

/// The structured response written to the host
///
/// Exactly one of these is emitted per invocation. Absent optional keys are
/// omitted from the JSON, not serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookResponse {
    /// The composed decision
    pub decision: WireDecision,
    /// Reason for a block decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Concatenated feedback messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl HookResponse {
    /// Create a continue response, optionally carrying a note as the reason
    pub fn continue_response(note: Option<String>) -> Self {
        Self {
            decision: WireDecision::Continue,
            reason: note,
            feedback: None,
        }
    }

    /// Create a block response with a reason
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: WireDecision::Block,
            reason: Some(reason.into()),
            feedback: None,
        }
    }

    /// Create a feedback response with a message
    pub fn feedback(message: impl Into<String>) -> Self {
        Self {
            decision: WireDecision::Feedback,
            reason: None,
            feedback: Some(message.into()),
        }
    }

    /// The exit-code form of this response
    ///
    /// `0` signals continue (feedback is continue-with-feedback; the
    /// structured form carries the message), `2` signals block.
    pub fn exit_code(&self) -> i32 {
        match self.decision {
            WireDecision::Continue | WireDecision::Feedback => 0,
            WireDecision::Block => 2,
        }
    }

    /// Serialize to the JSON wire string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Decision> for HookResponse {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Continue { note } => HookResponse::continue_response(note),
            Decision::Block { reason } => HookResponse::block(reason),
            Decision::Feedback { message } => HookResponse::feedback(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_wire_shape() {
        let response = HookResponse::continue_response(None);
        assert_eq!(response.to_json().unwrap(), r#"{"decision":"continue"}"#);
        assert_eq!(response.exit_code(), 0);
    }

    #[test]
    fn test_block_wire_shape() {
        let response = HookResponse::block("secret detected");
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"decision":"block","reason":"secret detected"}"#
        );
        assert_eq!(response.exit_code(), 2);
    }

    #[test]
    fn test_feedback_wire_shape() {
        let response = HookResponse::feedback("formatted 3 files");
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"decision":"feedback","feedback":"formatted 3 files"}"#
        );
        assert_eq!(response.exit_code(), 0);
    }

    #[test]
    fn test_from_decision() {
        let response: HookResponse = Decision::block("nope").into();
        assert_eq!(response, HookResponse::block("nope"));

        let response: HookResponse = Decision::Continue {
            note: Some("all quiet".into()),
        }
        .into();
        assert_eq!(response.decision, WireDecision::Continue);
        assert_eq!(response.reason.as_deref(), Some("all quiet"));

        let response: HookResponse = Decision::Feedback {
            message: "note".into(),
        }
        .into();
        assert_eq!(response, HookResponse::feedback("note"));
    }

    #[test]
    fn test_wire_round_trip() {
        let response = HookResponse::block("reason text");
        let parsed: HookResponse =
            serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(parsed, response);
    }
}
