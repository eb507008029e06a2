//! Core Module
//!
//! Shared error and fault types used across the engine:
//! - `HookError` - errors from misusing the engine (duplicate registration, bad matcher)
//! - `Fault` - structured evidence of a parse, validation, or handler failure
//! - `ValidationRule` - which schema rule a field violated

mod error;

pub use error::{Fault, HookError, HookResult, ValidationRule};
