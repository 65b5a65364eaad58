//! Diagnostic queue for collecting, deduplicating, and ordering diagnostics.
//!
//! Scan phases visit files in whatever order the program model lists them;
//! the queue sorts on flush so reported output does not depend on that
//! order.

use std::collections::HashSet;

use crate::{Diagnostic, Severity};

#[derive(Default, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: HashSet<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic. Returns `false` if an identical one was already queued.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.seen.contains(&diagnostic) {
            return false;
        }
        self.seen.insert(diagnostic.clone());
        self.diagnostics.push(diagnostic);
        true
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Drain all diagnostics, ordered by location, then code, then message.
    ///
    /// Diagnostics without a location sort first.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then(a.code.cmp(&b.code))
                .then_with(|| a.message.cmp(&b.message))
        });
        diagnostics
    }
}
