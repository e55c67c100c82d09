//! Append-only diagnostic sink.

use std::fmt;

use crate::message::{location, Message, Severity};

/// Ordered collection of diagnostics for one compiler pass.
///
/// The sink only accumulates: messages are kept in insertion order and are
/// never filtered, merged, or overwritten. It is created by the caller,
/// passed by mutable reference into each pass, and cleared only by an
/// explicit [`clear`](Messages::clear).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    messages: Vec<Message>,
}

impl Messages {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Messages::default()
    }

    /// Remove every collected message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// `true` if no messages have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of collected messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `true` if at least one [`Severity::Error`] message was collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.severity() == Severity::Error)
    }

    /// Iterate over collected messages in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Append a fully constructed message.
    pub fn add(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a note whose location is just the source name.
    ///
    /// Used for remediation hints that apply to the file as a whole (for
    /// example "is the EOL in this source file a CR?"). An empty source
    /// name leaves the note without a location.
    pub fn add_note(&mut self, description: impl Into<String>, source_name: &str) {
        let mut message = Message::note(description);
        if !source_name.is_empty() {
            message = message.with_location(source_name);
        }
        self.add(message);
    }

    /// Append a note located at `line:column`.
    pub fn add_note_at(
        &mut self,
        description: impl Into<String>,
        source_name: &str,
        line: usize,
        column: usize,
    ) {
        self.add(Message::note(description).with_location(location(source_name, line, column)));
    }

    /// Append a warning located at `line:column`.
    pub fn add_warning(
        &mut self,
        description: impl Into<String>,
        source_name: &str,
        line: usize,
        column: usize,
    ) {
        self.add(Message::warning(description).with_location(location(source_name, line, column)));
    }

    /// Append a warning with an attached note.
    pub fn add_warning_with(
        &mut self,
        description: impl Into<String>,
        source_name: &str,
        line: usize,
        column: usize,
        note: impl Into<String>,
    ) {
        self.add(
            Message::warning(description)
                .with_location(location(source_name, line, column))
                .with_note(note),
        );
    }

    /// Append an error located at `line:column`.
    pub fn add_error(
        &mut self,
        description: impl Into<String>,
        source_name: &str,
        line: usize,
        column: usize,
    ) {
        self.add(Message::error(description).with_location(location(source_name, line, column)));
    }

    /// Append an error with an attached note (usually a caret excerpt).
    pub fn add_error_with(
        &mut self,
        description: impl Into<String>,
        source_name: &str,
        line: usize,
        column: usize,
        note: impl Into<String>,
    ) {
        self.add(
            Message::error(description)
                .with_location(location(source_name, line, column))
                .with_note(note),
        );
    }

    /// Print every message to stdout, blank-line separated.
    pub fn print(&self) {
        if !self.is_empty() {
            println!("{self}");
        }
    }
}

impl fmt::Display for Messages {
    /// Renders all messages in insertion order, separated by blank lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in &self.messages {
            if first {
                first = false;
            } else {
                f.write_str("\n\n")?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
