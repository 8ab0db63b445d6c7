//! Output collaborators of the state machine
//!
//! The controller writes display text to a [`DisplaySurface`] and hands
//! evaluator failures to a [`DiagnosticSink`]. Neither is ever read back
//! for control flow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// A writable text target showing the calculator's display
pub trait DisplaySurface {
    /// Replaces the shown text with `text`
    fn render(&mut self, text: &str);
}

/// Out-of-band receiver for evaluator failures
pub trait DiagnosticSink {
    /// Records a failure raised while evaluating at `site`
    fn report(&mut self, site: EvaluationSite, error: &CalcError);
}

/// Which handler invoked the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationSite {
    /// An operator press applying the previous operation
    Chaining,
    /// The equals press
    Equals,
}

impl fmt::Display for EvaluationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chaining => f.write_str("chaining"),
            Self::Equals => f.write_str("equals"),
        }
    }
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Box<T> {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Box<T> {
    fn report(&mut self, site: EvaluationSite, error: &CalcError) {
        (**self).report(site, error);
    }
}

/// In-memory display keeping the current text and a render count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDisplay {
    text: String,
    renders: usize,
}

impl BufferDisplay {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last render
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of renders so far
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl DisplaySurface for BufferDisplay {
    fn render(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.renders += 1;
    }
}

/// Sink that logs each failure through `tracing` at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, site: EvaluationSite, error: &CalcError) {
        tracing::error!(%site, kind = error.kind(), %error, "evaluation failed");
    }
}

/// Sink that keeps every reported failure, then forwards to `tracing`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    reports: Vec<(EvaluationSite, CalcError)>,
}

impl RecordingSink {
    /// Creates an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures in the order they were reported
    #[must_use]
    pub fn reports(&self) -> &[(EvaluationSite, CalcError)] {
        &self.reports
    }

    /// Just the errors, oldest first
    #[must_use]
    pub fn errors(&self) -> Vec<CalcError> {
        self.reports.iter().map(|(_, e)| e.clone()).collect()
    }

    /// Forgets everything recorded
    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, site: EvaluationSite, error: &CalcError) {
        TracingSink.report(site, error);
        self.reports.push((site, error.clone()));
    }
}
