//! Composite decision and the reduction rule

use crate::dispatch::{DispatchOutcome, Verdict};

/// The single decision produced by folding all verdicts and faults for one
/// event
///
/// Derived deterministically from the dispatch outcome and never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the host proceed, optionally with a note
    Continue { note: Option<String> },
    /// Stop the host action
    Block { reason: String },
    /// Let the host proceed, feeding messages back to the agent
    Feedback { message: String },
}

impl Decision {
    /// A plain continue with no note
    pub fn continue_() -> Self {
        Decision::Continue { note: None }
    }

    /// A block with a reason
    pub fn block(reason: impl Into<String>) -> Self {
        Decision::Block {
            reason: reason.into(),
        }
    }
}

/// Fold a finished dispatch into one decision
///
/// Strict precedence, first match wins:
/// 1. any `Block` verdict -> block, taking the reason from the
///    lowest-priority-number blocker (ties by registration order);
/// 2. else any fault -> block with a synthesized reason naming every fault.
///    A handler that could not run is not evidence of safety, so
///    infrastructure failure fails closed;
/// 3. else any `Feedback` -> feedback, messages concatenated in priority
///    order;
/// 4. else -> continue.
pub fn compose(outcome: DispatchOutcome) -> Decision {
    let DispatchOutcome { mut verdicts, faults } = outcome;

    // Stable sort: the dispatcher records outcomes in registration order,
    // which breaks priority ties.
    verdicts.sort_by_key(|v| v.priority);

    for v in &verdicts {
        if let Verdict::Block { reason } = &v.verdict {
            return Decision::Block {
                reason: reason.clone(),
            };
        }
    }

    if !faults.is_empty() {
        let detail: Vec<String> = faults.iter().map(ToString::to_string).collect();
        return Decision::Block {
            reason: format!("hook execution failed: {}", detail.join("; ")),
        };
    }

    let feedback: Vec<&str> = verdicts
        .iter()
        .filter_map(|v| match &v.verdict {
            Verdict::Feedback { message } => Some(message.as_str()),
            _ => None,
        })
        .collect();
    if !feedback.is_empty() {
        return Decision::Feedback {
            message: feedback.join("\n"),
        };
    }

    Decision::continue_()
}
