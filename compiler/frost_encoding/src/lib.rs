//! Byte and codepoint classification for the Frost lexer.
//!
//! Everything in this crate is a total, allocation-free function over raw
//! bytes or decoded codepoints. The lexer asks byte-level questions
//! ([`codepoint_length`], [`is_digit`], [`is_whitespace`],
//! [`is_line_terminator`]) while walking a line; the diagnostic excerpt
//! renderer asks codepoint-level questions ([`decode_codepoint`],
//! [`is_full_width`]) to keep carets aligned under multi-byte glyphs.

mod codepoint;
mod width;

pub use codepoint::{
    codepoint_length, decode_codepoint, is_digit, is_line_terminator, is_whitespace,
};
pub use width::{is_full_width, is_half_width};
