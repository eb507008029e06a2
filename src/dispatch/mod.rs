//! Dispatch Module
//!
//! The routing/dispatch protocol between typed events and registered
//! handlers:
//! - `Handler` trait - the capability "given an event, produce a verdict"
//! - `Verdict` - one handler's answer (continue / block / feedback)
//! - `HandlerRegistry` / `HandlerRegistration` - per-kind ordered bookkeeping
//! - `Dispatcher` - concurrent execution with per-handler timeouts and
//!   error isolation
//!
//! All eligible handlers are attempted; a handler that blocks, errors, or
//! times out never stops its siblings from running. The outcome collection
//! reflects every attempted handler exactly once.

mod dispatcher;
mod handler;
mod registry;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use handler::{FnHandler, Handler, HandlerVerdict, Verdict};
pub use registry::{HandlerRegistration, HandlerRegistry, RegisteredHandler};
