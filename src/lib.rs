//! Event-processing core for Claude Code hooks
//!
//! Sits between the host and a set of registered automation handlers: one
//! JSON event in on stdin, zero or more handler verdicts, one well-formed
//! response out. The flow is
//!
//! raw input -> schema validation -> typed event -> dispatch -> verdicts +
//! faults -> composed decision -> wire response
//!
//! and every input produces exactly one response, failing closed on
//! anything the engine cannot trust.

pub mod core;
pub mod events;

// Routing and execution
pub mod dispatch;

// Decision folding and the host wire contract
pub mod response;

// End-to-end processing
pub mod pipeline;

// Log-to-file setup (stdout belongs to the wire response)
pub mod logging;
