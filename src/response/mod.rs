//! Response Module
//!
//! Reduces a finished dispatch into one decision and serializes it for the
//! host:
//! - `Decision` / `compose` - the precedence rule (block > fault > feedback
//!   > continue)
//! - `HookResponse` - the structured JSON wire form and its exit-code twin

mod decision;
mod wire;

pub use decision::{compose, Decision};
pub use wire::{HookResponse, WireDecision};
