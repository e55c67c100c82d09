//! Diagnostic and error reporting for the Frost compiler.
//!
//! Lexing (and later, parsing) never aborts on malformed input: every
//! problem becomes a [`Message`] appended to a caller-owned [`Messages`]
//! sink, and scanning continues. The sink is append-only and
//! order-preserving — it never filters, deduplicates, or reorders — so a
//! single pass can surface every independent problem in source order.
//!
//! Rendering is plain text: each message formats as
//! `[location: ]severity: description[\nnote]`, where the note is typically
//! a caret-annotated source excerpt built by [`caret_excerpt`].

mod excerpt;
mod message;
mod sink;

pub use excerpt::caret_excerpt;
pub use message::{location, Message, Severity};
pub use sink::Messages;
