//! Lexer for the Frost compiler.
//!
//! [`Lexer::lex`] converts one UTF-8 source unit into a flat [`Token`]
//! sequence, reporting malformed input through a caller-owned
//! [`frost_diagnostic::Messages`] sink and recovering locally so a single
//! pass surfaces every independent problem. The token buffer is handed to
//! the parser with [`Lexer::take_tokens`], a destructive read.
//!
//! Scanning is line-oriented: the source splits at `'\n'`, each line is
//! walked codepoint by codepoint, and a synthetic [`TokenKind::EndOfLine`]
//! token closes every physical line that does not end in a continuation.

mod keywords;
mod lexer;
mod numbers;
mod operators;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
