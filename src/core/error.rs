//! Engine error and fault types

use thiserror::Error;

use crate::events::EventKind;

/// Errors that can occur when assembling or driving the hook engine
#[derive(Error, Debug)]
pub enum HookError {
    /// A handler id was registered twice for the same event kind
    #[error("Handler '{handler_id}' already registered for {kind}")]
    DuplicateHandler { handler_id: String, kind: EventKind },

    /// A tool matcher pattern failed to compile
    #[error("Invalid tool matcher pattern: {0}")]
    InvalidMatcher(#[from] regex::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for engine operations
pub type HookResult<T> = Result<T, HookError>;

/// The schema rule a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// A required field is missing (or present but empty where emptiness
    /// is equivalent to absence, e.g. `session_id`)
    MissingRequired,
    /// A field is present with the wrong JSON type
    WrongType,
    /// A field is present on an event kind that forbids it
    MutuallyExclusive,
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationRule::MissingRequired => write!(f, "missing required field"),
            ValidationRule::WrongType => write!(f, "wrong type"),
            ValidationRule::MutuallyExclusive => write!(f, "field not allowed for this event kind"),
        }
    }
}

/// Structured evidence that something prevented a normal result
///
/// Faults never carry a verdict. The response composer folds them into the
/// final decision: any fault on an otherwise clean dispatch means the event
/// cannot be trusted and the decision fails closed to a block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Input could not be decoded into a recognized event
    #[error("parse failure: {message}")]
    Parse { message: String },

    /// Decoded input violated the schema for its declared kind
    #[error("validation failure on field '{field}': {rule}")]
    Validation { field: String, rule: ValidationRule },

    /// A handler did not produce a verdict within its declared timeout
    #[error("handler '{handler_id}' timed out")]
    HandlerTimeout { handler_id: String },

    /// A handler returned an error or terminated abnormally
    #[error("handler '{handler_id}' failed: {message}")]
    HandlerError { handler_id: String, message: String },
}

impl Fault {
    /// Create a parse fault from any displayable error
    pub fn parse(message: impl Into<String>) -> Self {
        Fault::Parse {
            message: message.into(),
        }
    }

    /// Create a validation fault naming the offending field
    pub fn validation(field: impl Into<String>, rule: ValidationRule) -> Self {
        Fault::Validation {
            field: field.into(),
            rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display() {
        let fault = Fault::parse("unexpected end of input");
        assert_eq!(fault.to_string(), "parse failure: unexpected end of input");

        let fault = Fault::validation("session_id", ValidationRule::MissingRequired);
        assert_eq!(
            fault.to_string(),
            "validation failure on field 'session_id': missing required field"
        );

        let fault = Fault::HandlerTimeout {
            handler_id: "secret-scan".into(),
        };
        assert_eq!(fault.to_string(), "handler 'secret-scan' timed out");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let hook_err: HookError = io_err.into();
        assert!(matches!(hook_err, HookError::Io(_)));
    }
}
