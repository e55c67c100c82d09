//! Diagnostic message values.

use std::fmt;

/// How serious a diagnostic is.
///
/// Only [`Severity::Error`] affects the outcome of a compiler pass;
/// notes and warnings are informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Supplementary information, often attached to a preceding message.
    Note,
    /// Suspicious but accepted input.
    Warning,
    /// Malformed input; the pass reports failure.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(text)
    }
}

/// One diagnostic: a severity, a description, and optionally a pre-rendered
/// source location and a multi-line note (usually a caret excerpt).
///
/// The location is rendered at construction time (see [`location`]) so the
/// message never needs access to scanner-internal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    severity: Severity,
    description: String,
    location: Option<String>,
    note: Option<String>,
}

impl Message {
    /// Create a message with the given severity and description.
    pub fn new(severity: Severity, description: impl Into<String>) -> Self {
        Message {
            severity,
            description: description.into(),
            location: None,
            note: None,
        }
    }

    /// Shorthand for a [`Severity::Note`] message.
    pub fn note(description: impl Into<String>) -> Self {
        Message::new(Severity::Note, description)
    }

    /// Shorthand for a [`Severity::Warning`] message.
    pub fn warning(description: impl Into<String>) -> Self {
        Message::new(Severity::Warning, description)
    }

    /// Shorthand for a [`Severity::Error`] message.
    pub fn error(description: impl Into<String>) -> Self {
        Message::new(Severity::Error, description)
    }

    /// Attach a pre-rendered `source:line:col` location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attach a multi-line note (rendered after the description).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The message severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The pre-rendered location, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// The attached note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl fmt::Display for Message {
    /// Renders `[location: ]severity: description[\nnote]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}: {}", self.severity, self.description)?;
        if let Some(note) = &self.note {
            write!(f, "\n{note}")?;
        }
        Ok(())
    }
}

/// Render a `source:line:col` location string.
///
/// The column is stored 0-based but displayed 1-based. An empty
/// `source_name` omits the filename prefix entirely.
#[must_use]
pub fn location(source_name: &str, line: usize, column: usize) -> String {
    if source_name.is_empty() {
        format!("{line}:{}", column + 1)
    } else {
        format!("{source_name}:{line}:{}", column + 1)
    }
}
