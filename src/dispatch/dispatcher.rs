//! Event dispatch
//!
//! Runs every eligible handler for one event, isolated from one another,
//! and collects exactly one outcome per attempted handler - a verdict, or a
//! fault when the handler timed out, errored, or panicked. One misbehaving
//! handler never prevents the others from running or composition from
//! completing.

use std::sync::Arc;

use futures::future;
use tokio::task::JoinError;

use crate::core::Fault;
use crate::events::HookEvent;

use super::handler::HandlerVerdict;
use super::registry::HandlerRegistry;

/// Everything one dispatch produced
///
/// Written only by the dispatcher; handed to the composer by value and never
/// mutated afterward.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Verdicts from handlers that completed normally
    pub verdicts: Vec<HandlerVerdict>,
    /// Faults from handlers that timed out or failed
    pub faults: Vec<Fault>,
}

impl DispatchOutcome {
    /// Total number of handler outcomes recorded
    pub fn attempted(&self) -> usize {
        self.verdicts.len() + self.faults.len()
    }

    /// True when every attempted handler produced a verdict
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Dispatches one event to its eligible handlers
///
/// The registry is read-only for the lifetime of the dispatch. Handlers run
/// concurrently, one task each, and each invocation is bound to its own
/// declared timeout - a slow handler extends the wait only up to that
/// timeout, and its expiry cancels only that invocation.
pub struct Dispatcher<'r> {
    registry: &'r HandlerRegistry,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher over a populated registry
    pub fn new(registry: &'r HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Run all eligible handlers for `event` and collect their outcomes
    pub async fn dispatch(&self, event: &HookEvent) -> DispatchOutcome {
        let eligible = self.registry.handlers_for(event.kind());
        let event = Arc::new(event.clone());

        let mut attempted = Vec::new();
        let mut tasks = Vec::new();
        for entry in eligible {
            // Tool-name matchers only apply to tool events
            if let Some(tool_name) = event.tool_name() {
                if !entry.registration.matches_tool(tool_name) {
                    continue;
                }
            }

            let registration = entry.registration.clone();
            let handler = entry.handler.clone();
            let event = event.clone();
            tracing::debug!(
                "[Dispatcher] Running handler '{}' for {} (timeout {:?})",
                registration.id,
                event.kind(),
                registration.timeout
            );

            let timeout = registration.timeout;
            tasks.push(tokio::spawn(async move {
                // Expiry drops the handler future, cancelling it best-effort
                tokio::time::timeout(timeout, handler.handle(&event)).await
            }));
            attempted.push(registration);
        }

        let results = future::join_all(tasks).await;

        let mut outcome = DispatchOutcome::default();
        for (registration, joined) in attempted.into_iter().zip(results) {
            let handler_id = registration.id.clone();
            match joined {
                Ok(Ok(Ok(verdict))) => {
                    tracing::debug!("[Dispatcher] Handler '{handler_id}' returned {verdict:?}");
                    outcome.verdicts.push(HandlerVerdict {
                        handler_id,
                        priority: registration.priority,
                        verdict,
                    });
                }
                Ok(Ok(Err(err))) => {
                    tracing::warn!("[Dispatcher] Handler '{handler_id}' failed: {err:#}");
                    outcome.faults.push(Fault::HandlerError {
                        handler_id,
                        message: err.to_string(),
                    });
                }
                Ok(Err(_elapsed)) => {
                    tracing::warn!(
                        "[Dispatcher] Handler '{handler_id}' exceeded its {:?} timeout",
                        registration.timeout
                    );
                    outcome.faults.push(Fault::HandlerTimeout { handler_id });
                }
                Err(join_err) => {
                    let message = join_error_message(join_err);
                    tracing::warn!("[Dispatcher] Handler '{handler_id}' aborted: {message}");
                    outcome.faults.push(Fault::HandlerError { handler_id, message });
                }
            }
        }
        outcome
    }
}

fn join_error_message(err: JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "opaque panic payload".to_string());
            format!("handler panicked: {detail}")
        }
        Err(err) => err.to_string(),
    }
}
