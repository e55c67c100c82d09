//! The scanner: line splitting, per-codepoint dispatch, identifier
//! accumulation, quoted literals, operators, comments.
//!
//! One [`Scan`] value holds the transient state of a single `lex` pass
//! (current line, column, pending identifier span, comment/continuation
//! flags); sub-scanners mutate it in place. Numeric literals live in
//! `numbers.rs` as further methods on [`Scan`].

use frost_diagnostic::{caret_excerpt, Messages};
use frost_encoding::{codepoint_length, is_digit, is_whitespace};
use tracing::trace;

use crate::keywords;
use crate::operators::{self, OperatorEntry};
use crate::token::{Token, TokenKind};

/// The Frost lexer.
///
/// Constructed empty; [`lex`](Lexer::lex) fills the token buffer and
/// [`take_tokens`](Lexer::take_tokens) empties it again. A `Lexer` may be
/// reused for any number of passes — each call to `lex` starts from a clean
/// slate.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create an empty lexer.
    #[must_use]
    pub fn new() -> Self {
        Lexer::default()
    }

    /// Discard any buffered tokens.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// `true` if the token buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Destructive read of the token buffer: returns every token produced
    /// by the last `lex` call and leaves the lexer empty.
    pub fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    /// Scan `source` into tokens, reporting problems into `messages`.
    ///
    /// Clears any previously buffered tokens first. Returns `true` iff the
    /// pass recorded no Error-severity diagnostic; warnings and notes do not
    /// affect the result. The scan never aborts early — every error is
    /// recovered locally so one pass can report many independent problems.
    pub fn lex(&mut self, source_name: &str, source: &str, messages: &mut Messages) -> bool {
        self.tokens.clear();
        trace!(source = source_name, "lexing source unit");

        let mut scan = Scan::new(source_name, messages, &mut self.tokens);
        let bytes = source.as_bytes();
        let mut begin = 0;
        loop {
            match memchr::memchr(b'\n', &bytes[begin..]) {
                Some(offset) => {
                    scan.scan_line(strip_carriage_return(&source[begin..begin + offset]));
                    begin += offset + 1;
                }
                None => {
                    scan.scan_line(strip_carriage_return(&source[begin..]));
                    break;
                }
            }
        }

        let clean = !scan.has_error;
        trace!(tokens = self.tokens.len(), clean, "lexing complete");
        clean
    }
}

/// Strip at most one trailing `'\r'` (a CRLF line ending); a second
/// trailing CR survives and is seen by the scanner as a continuation.
fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Transient state of one `lex` pass.
///
/// The scan cursor walks one line at a time; `column` is a byte offset into
/// `line_src` and always lands on a codepoint boundary.
pub(crate) struct Scan<'a> {
    source_name: &'a str,
    messages: &'a mut Messages,
    tokens: &'a mut Vec<Token>,
    /// Current line, CR-stripped.
    pub(crate) line_src: &'a str,
    /// 1-based physical line number.
    pub(crate) line: usize,
    /// 0-based byte column of the codepoint being dispatched.
    pub(crate) column: usize,
    /// Byte length of the codepoint being dispatched.
    char_len: usize,
    /// Pending identifier span as `(begin, end)` byte offsets.
    identifier: Option<(usize, usize)>,
    /// Rest of the current line is a `//` comment.
    in_comment: bool,
    /// Current line ended in a continuation; suppress its `EndOfLine`.
    continuation: bool,
    /// An Error-severity diagnostic was recorded by this pass.
    pub(crate) has_error: bool,
}

impl<'a> Scan<'a> {
    fn new(source_name: &'a str, messages: &'a mut Messages, tokens: &'a mut Vec<Token>) -> Self {
        Scan {
            source_name,
            messages,
            tokens,
            line_src: "",
            line: 1,
            column: 0,
            char_len: 1,
            identifier: None,
            in_comment: false,
            continuation: false,
            has_error: false,
        }
    }

    /// Scan one CR-stripped physical line.
    fn scan_line(&mut self, line_src: &'a str) {
        self.line_src = line_src;
        self.column = 0;
        while self.column < line_src.len() {
            let byte = line_src.as_bytes()[self.column];
            self.char_len = codepoint_length(byte);
            if !self.next(byte) {
                break;
            }
            self.column += self.char_len;
        }

        self.flush_identifier();
        if self.continuation {
            self.continuation = false;
        } else {
            let end_of_line = Token::new(TokenKind::EndOfLine, "", self.line, line_src.len());
            self.tokens.push(end_of_line);
        }
        self.line += 1;
        self.in_comment = false;
    }

    /// Dispatch on the current codepoint. Returns `false` once the rest of
    /// the line is a comment.
    fn next(&mut self, byte: u8) -> bool {
        if self.identifier.is_none() && is_digit(byte) {
            self.lex_number();
        } else if byte == b'"' || byte == b'\'' {
            self.flush_identifier();
            self.lex_quoted(byte);
        } else if is_whitespace(byte) {
            self.flush_identifier();
        } else if byte == b'\\' {
            if self.column + 1 == self.line_src.len() {
                self.continuation = true;
            } else {
                self.flush_identifier();
                self.error_caret("unexpected invalid token", self.column, 1);
            }
        } else if byte == b'\r' {
            if self.column + 1 == self.line_src.len() {
                self.continuation = true;
            } else {
                self.flush_identifier();
                self.error_at("unexpected carriage return token", self.column);
                self.messages
                    .add_note("is the EOL in this source file a CR?", self.source_name);
            }
        } else if let Some(entry) = operators::lookup(byte) {
            self.flush_identifier();
            if byte == b'/' && self.line_bytes().get(self.column + 1) == Some(&b'/') {
                self.in_comment = true;
            } else {
                self.lex_operator(entry);
            }
        } else {
            match byte {
                b'`' | b'@' | b'#' | b'$' => {
                    self.flush_identifier();
                    self.error_caret("unexpected invalid token", self.column, 1);
                }
                _ => self.extend_identifier(),
            }
        }
        !self.in_comment
    }

    /// Scan a string or character literal starting at the opening quote.
    ///
    /// A closing quote whose immediately preceding byte is `\` does not
    /// terminate; the search re-extends past it. Reaching end of line first
    /// is an error and emits no token.
    fn lex_quoted(&mut self, quote: u8) {
        let bytes = self.line_bytes();
        let len = bytes.len();
        let start = self.column;
        let mut end = start + 1;
        loop {
            match memchr::memchr(quote, &bytes[end..]) {
                Some(offset) => end += offset,
                None => {
                    end = len;
                    self.error_caret("unexpected EOL", end - 1, 1);
                    self.column = end - 1;
                    return;
                }
            }
            end += 1; // past the closing quote
            if bytes[end - 2] != b'\\' {
                break;
            }
        }

        let kind = if quote == b'"' {
            TokenKind::String
        } else {
            TokenKind::Character
        };
        self.push_token(kind, start, end);
        self.column = end - 1;
    }

    /// Emit one operator/punctuation token with maximal munch.
    ///
    /// Lookahead order: doubled byte (preferring `doubled=` when a further
    /// `=` follows and the slot exists), then `=`-suffix, then `>`-suffix,
    /// then the bare single-byte kind. Only the emitted token's bytes are
    /// consumed.
    fn lex_operator(&mut self, entry: OperatorEntry) {
        let bytes = self.line_bytes();
        let start = self.column;
        let mut end = start + 1;
        let mut kind = entry.single;

        if end < bytes.len() {
            let next = bytes[end];
            if next == bytes[start] {
                let assign_follows = end + 1 < bytes.len() && bytes[end + 1] == b'=';
                match entry.doubled_assign {
                    Some(doubled_assign) if assign_follows => {
                        kind = doubled_assign;
                        end += 2;
                    }
                    _ => {
                        if let Some(doubled) = entry.doubled {
                            kind = doubled;
                            end += 1;
                        }
                    }
                }
            } else if next == b'=' {
                if let Some(assign) = entry.assign {
                    kind = assign;
                    end += 1;
                }
            } else if next == b'>' {
                if let Some(arrow) = entry.arrow {
                    kind = arrow;
                    end += 1;
                }
            }
        }

        self.push_token(kind, start, end);
        self.column = end - 1;
    }

    /// Open or grow the pending identifier span by the current codepoint.
    fn extend_identifier(&mut self) {
        match &mut self.identifier {
            Some((_, end)) => *end += self.char_len,
            None => self.identifier = Some((self.column, self.column + self.char_len)),
        }
    }

    /// Close the pending identifier span, if any: promote keywords and
    /// append the token.
    fn flush_identifier(&mut self) {
        if let Some((begin, end)) = self.identifier.take() {
            let mut token = Token::new(
                TokenKind::Identifier,
                &self.line_src[begin..end],
                self.line,
                begin,
            );
            if let Some(kind) = keywords::lookup(token.text()) {
                token.promote(kind);
            }
            self.tokens.push(token);
        }
    }

    // ─── shared helpers for the sub-scanners ───────────────────────────────

    /// The current line as bytes, free of the `&mut self` borrow.
    pub(crate) fn line_bytes(&self) -> &'a [u8] {
        self.line_src.as_bytes()
    }

    /// Slice of the current line, free of the `&mut self` borrow.
    pub(crate) fn line_slice(&self, start: usize, end: usize) -> &'a str {
        &self.line_src[start..end]
    }

    /// Append a token whose text is the line slice `start..end`.
    pub(crate) fn push_token(&mut self, kind: TokenKind, start: usize, end: usize) {
        let token = Token::new(kind, self.line_slice(start, end), self.line, start);
        self.tokens.push(token);
    }

    /// Record an error without an excerpt.
    pub(crate) fn error_at(&mut self, description: impl Into<String>, column: usize) {
        self.messages
            .add_error(description, self.source_name, self.line, column);
        self.has_error = true;
    }

    /// Record an error with a caret-annotated excerpt of the current line.
    pub(crate) fn error_caret(
        &mut self,
        description: impl Into<String>,
        column: usize,
        length: usize,
    ) {
        let note = caret_excerpt(self.line_src, self.line, column, length);
        self.messages
            .add_error_with(description, self.source_name, self.line, column, note);
        self.has_error = true;
    }
}
