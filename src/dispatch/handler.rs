//! Handler trait and verdicts

use anyhow::Result;
use async_trait::async_trait;

use crate::events::HookEvent;

/// One handler's answer for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Let the host proceed
    Continue,
    /// Stop the host action, with a reason shown to the agent
    Block { reason: String },
    /// Let the host proceed but feed a message back to the agent
    Feedback { message: String },
}

impl Verdict {
    /// Create a block verdict with a reason
    pub fn block(reason: impl Into<String>) -> Self {
        Verdict::Block {
            reason: reason.into(),
        }
    }

    /// Create a feedback verdict with a message
    pub fn feedback(message: impl Into<String>) -> Self {
        Verdict::Feedback {
            message: message.into(),
        }
    }
}

/// Trait for hook handler implementations
///
/// A handler receives a read-only view of the event and must produce exactly
/// one verdict. Returning `Err` is treated as a `HandlerError` fault by the
/// dispatcher; it never aborts the dispatch.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Produce a verdict for the given event
    async fn handle(&self, event: &HookEvent) -> Result<Verdict>;
}

/// Adapter implementing `Handler` for plain closures
///
/// Handlers written as closures are synchronous for simplicity; anything
/// that needs to await should implement `Handler` directly.
pub struct FnHandler<F>(F);

impl<F> FnHandler<F>
where
    F: for<'a> Fn(&'a HookEvent) -> Result<Verdict> + Send + Sync,
{
    /// Wrap a closure as a handler
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> Handler for FnHandler<F>
where
    F: for<'a> Fn(&'a HookEvent) -> Result<Verdict> + Send + Sync,
{
    async fn handle(&self, event: &HookEvent) -> Result<Verdict> {
        (self.0)(event)
    }
}

/// A verdict tagged with the identity of the handler that produced it
///
/// Immutable once produced; the priority is carried along so the composer
/// can order verdicts without consulting the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerVerdict {
    /// Stable id of the producing handler
    pub handler_id: String,
    /// The producing handler's registered priority
    pub priority: i32,
    /// The verdict itself
    pub verdict: Verdict,
}
