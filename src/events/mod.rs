//! Events Module
//!
//! The typed event taxonomy and the validated ingestion boundary:
//! - `EventKind` - the closed set of host lifecycle moments
//! - `HookEvent` / `EventPayload` - typed envelope plus kind-specific fields
//! - `schema::validate` - per-kind structural validation of raw JSON
//! - `parse_event` - the single entry point from raw bytes to a typed event
//!
//! Data flows raw bytes -> JSON decode -> kind discriminator -> schema
//! validation -> typed construction. Every failure along the way is a
//! single `Fault`; no event is ever partially constructed.

mod event;
mod kind;
mod parser;
pub mod schema;

pub use event::{EventPayload, HookEvent};
pub use kind::EventKind;
pub use parser::{parse_event, parse_value};
