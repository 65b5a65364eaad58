//! Diagnostics for the rewrite engine.
//!
//! Everything reported here is advisory: a diagnostic never changes how a
//! symbol is classified. Conditions are collected rather than failing fast,
//! so one run reports every gap it ran into.
//!
//! - Codes for searchability (`W1xxx`)
//! - A message saying what went wrong
//! - An optional file location
//! - Notes for context

mod code;
mod diagnostic;
pub mod queue;

pub use code::DiagnosticCode;
pub use diagnostic::{Diagnostic, Location, Severity};
pub use queue::DiagnosticQueue;
