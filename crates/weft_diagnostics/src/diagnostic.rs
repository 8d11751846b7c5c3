//! Diagnostic records emitted by the place-and-route engine.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured message from the engine: a severity, a primary message, and
/// optional explanatory footnotes.
///
/// There are no source spans here — the engine operates on graphs, not text,
/// so everything it has to point at is named in the message itself (labels
/// resolved through the caller's label map, node indices, port names).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The main diagnostic message.
    pub message: String,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a new informational note.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Adds a footnote to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_error() {
        let diag = Diagnostic::error("label capacity exceeded");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "label capacity exceeded");
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn create_warning() {
        let diag = Diagnostic::warning("unroutable edge");
        assert_eq!(diag.severity, Severity::Warning);
    }

    #[test]
    fn create_note() {
        let diag = Diagnostic::note("iteration 10, cost 2000");
        assert_eq!(diag.severity, Severity::Note);
    }

    #[test]
    fn with_note_appends() {
        let diag = Diagnostic::error("unroutable design")
            .with_note("3 edges could not be mapped")
            .with_note("try a larger device");
        assert_eq!(diag.notes.len(), 2);
    }

    #[test]
    fn display_format() {
        let diag = Diagnostic::warning("no route").with_note("source at n3");
        assert_eq!(format!("{diag}"), "warning: no route\n  note: source at n3");
    }

    #[test]
    fn serde_roundtrip() {
        let diag = Diagnostic::error("boom").with_note("context");
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.severity, Severity::Error);
        assert_eq!(back.message, "boom");
        assert_eq!(back.notes, vec!["context".to_string()]);
    }
}
