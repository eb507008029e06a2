//! End-to-end event processing
//!
//! The single path from raw host input to a wire response. Nothing here is
//! fatal: every input, however malformed, still produces exactly one
//! `HookResponse`. Parse and validation faults abort before any handler
//! runs and are reported as a block - an event the engine cannot trust is
//! never silently allowed through.

use std::io::Read;

use crate::dispatch::{Dispatcher, HandlerRegistry};
use crate::events::parse_event;
use crate::response::{compose, HookResponse};

/// Process one raw event against a populated registry
///
/// The registry must not be mutated while this call is in flight; in the
/// reference deployment each host invocation is a fresh process, so the
/// registry is populated once before this is called.
pub async fn process(input: &[u8], registry: &HandlerRegistry) -> HookResponse {
    let event = match parse_event(input) {
        Ok(event) => event,
        Err(fault) => {
            tracing::warn!("[Pipeline] Rejecting input: {fault}");
            return HookResponse::block(format!("invalid hook event: {fault}"));
        }
    };

    tracing::debug!(
        "[Pipeline] Dispatching {} event for session '{}'",
        event.kind(),
        event.session_id
    );

    let outcome = Dispatcher::new(registry).dispatch(&event).await;
    tracing::debug!(
        "[Pipeline] Dispatch complete: {} verdict(s), {} fault(s)",
        outcome.verdicts.len(),
        outcome.faults.len()
    );

    compose(outcome).into()
}

/// Read one raw event from `reader` and process it
///
/// A failing input channel is no more trustworthy than a malformed event:
/// the read error becomes a block response instead of aborting without a
/// wire response.
pub async fn process_from(reader: &mut dyn Read, registry: &HandlerRegistry) -> HookResponse {
    let mut input = Vec::new();
    if let Err(err) = reader.read_to_end(&mut input) {
        tracing::warn!("[Pipeline] Failed to read input: {err}");
        return HookResponse::block(format!("failed to read hook event: {err}"));
    }
    process(&input, registry).await
}
