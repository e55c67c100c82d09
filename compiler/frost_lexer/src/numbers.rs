//! Numeric literal sub-scanners.
//!
//! Layout of a scan: the dispatcher lands on a leading digit, picks the
//! base from the prefix, and a shared digit-run reader walks the literal's
//! full extent. Errors inside a run never stop it early — the whole
//! malformed literal is consumed, reported, and skipped, so the scan
//! resumes just past it and no token is emitted for it.
//!
//! Every `read_*` helper takes the running end offset by `&mut` and leaves
//! it one past the last consumed byte.

use frost_encoding::is_digit;

use crate::lexer::Scan;
use crate::token::TokenKind;

fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

impl Scan<'_> {
    /// Entry point: the current byte is a digit outside an identifier.
    pub(crate) fn lex_number(&mut self) {
        if self.line_bytes()[self.column] == b'0' {
            self.lex_radix_integer();
        } else {
            self.lex_dec_or_decimal();
        }
    }

    /// Decimal integer / fraction / exponent path.
    ///
    /// Also reached from [`lex_radix_integer`](Self::lex_radix_integer) when
    /// a `0`-prefixed run turns out to be a decimal in disguise (`0.5`,
    /// `0e3`, `08.1`).
    fn lex_dec_or_decimal(&mut self) {
        let start = self.column;
        let mut end = start + 1;
        if self.read_dec_digits(&mut end) {
            return; // the reader positioned the cursor past the bad run
        }

        let bytes = self.line_bytes();
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            let fraction_start = end;
            if self.read_dec_digits(&mut end) {
                return;
            }
            if end == fraction_start {
                self.error_caret("expected digit token after '.'", end - 1, 1);
                // consume a dangling exponent too, so it is not re-lexed
                if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
                    end += 1;
                    self.read_dec_digits(&mut end);
                }
            } else if !self.read_exponent(&mut end) {
                self.push_token(TokenKind::Decimal, start, end);
            }
        } else {
            let integer_end = end;
            if !self.read_exponent(&mut end) {
                let kind = if end == integer_end {
                    TokenKind::DecInteger
                } else {
                    TokenKind::Decimal
                };
                self.push_token(kind, start, end);
            }
        }
        self.column = end - 1;
    }

    /// `0`-prefixed literals: binary, hexadecimal, octal, or decimal
    /// fallthrough.
    fn lex_radix_integer(&mut self) {
        let bytes = self.line_bytes();
        let len = bytes.len();
        let start = self.column;
        if start + 1 == len {
            self.push_token(TokenKind::DecInteger, start, len);
            return;
        }

        let mut end;
        let kind;
        match bytes[start + 1] {
            b'b' | b'B' => {
                end = start + 2;
                if self.read_bin_digits(&mut end) {
                    return;
                }
                kind = TokenKind::BinInteger;
            }
            b'x' | b'X' => {
                end = start + 2;
                if self.read_hex_digits(&mut end) {
                    return;
                }
                kind = TokenKind::HexInteger;
            }
            _ => {
                // Peek the digit run: a fraction or exponent after it means
                // the literal was decimal all along.
                let mut probe = start + 1;
                while probe < len && (is_digit(bytes[probe]) || bytes[probe] == b'\'') {
                    probe += 1;
                }
                if probe < len
                    && (bytes[probe] == b'.' || bytes[probe] == b'e' || bytes[probe] == b'E')
                {
                    self.lex_dec_or_decimal();
                    return;
                }
                end = start + 1;
                if self.read_oct_digits(&mut end) {
                    return;
                }
                kind = TokenKind::OctInteger;
            }
        }

        // A complete run followed by more literal-looking text is a suffix
        // error: a fraction glued onto an integer base (`0x1.5`) or stray
        // alphanumerics (`0x1z`).
        if end < len {
            let suffix_start = end;
            if bytes[end] == b'.' {
                end += 1;
                self.read_dec_digits(&mut end);
                if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
                    self.read_exponent(&mut end);
                }
                self.invalid_suffix(suffix_start, end);
                return;
            }
            if bytes[end].is_ascii_alphanumeric() {
                while end < len && bytes[end].is_ascii_alphanumeric() {
                    end += 1;
                }
                self.invalid_suffix(suffix_start, end);
                return;
            }
        }

        self.push_token(kind, start, end);
        self.column = end - 1;
    }

    fn invalid_suffix(&mut self, suffix_start: usize, end: usize) {
        let text = self.line_slice(suffix_start, end);
        self.error_caret(
            format!("invalid suffix '{text}' in integer constant"),
            suffix_start,
            end - suffix_start,
        );
        self.column = end - 1;
    }

    /// Shared digit-run reader.
    ///
    /// Consumes bytes satisfying `more` (plus `'` separators), reporting
    /// every byte that fails `valid` and every doubled or run-terminating
    /// separator. Returns `true` when anything was reported; the cursor is
    /// then positioned on the run's last byte so the caller can bail out.
    fn read_digits(
        &mut self,
        end: &mut usize,
        more: fn(u8) -> bool,
        valid: fn(u8) -> bool,
        base: &str,
    ) -> bool {
        let bytes = self.line_bytes();
        let len = bytes.len();
        let mut reported = false;
        while *end < len && (more(bytes[*end]) || bytes[*end] == b'\'') {
            if !valid(bytes[*end]) {
                self.error_caret(
                    format!("invalid digit '{}' in {base} constant", bytes[*end] as char),
                    *end,
                    1,
                );
                reported = true;
            } else if bytes[*end] == b'\'' && bytes[*end - 1] == b'\'' {
                self.error_caret("expected digit token after '''", *end, 1);
                reported = true;
            }
            *end += 1;
        }
        if reported {
            self.column = *end - 1;
            return true;
        }
        if bytes[*end - 1] == b'\'' {
            self.error_caret("expected digit token after '''", *end - 1, 1);
            self.column = *end - 1;
            return true;
        }
        false
    }

    fn read_dec_digits(&mut self, end: &mut usize) -> bool {
        self.read_digits(end, is_digit, |_| true, "decimal")
    }

    fn read_bin_digits(&mut self, end: &mut usize) -> bool {
        self.read_digits(end, is_digit, |byte| byte <= b'1', "binary")
    }

    fn read_oct_digits(&mut self, end: &mut usize) -> bool {
        self.read_digits(end, is_digit, |byte| byte <= b'7', "octal")
    }

    fn read_hex_digits(&mut self, end: &mut usize) -> bool {
        self.read_digits(end, is_hex_digit, |_| true, "hexadecimal")
    }

    /// Scan a scientific-notation exponent at `*end`.
    ///
    /// Advances `*end` past a consumed exponent (`e`/`E`, optional sign,
    /// mandatory digit run). An `e` followed by neither a sign nor a digit
    /// is not an exponent: `*end` stays put and the literal ends before it.
    /// Returns `true` when an error was reported.
    fn read_exponent(&mut self, end: &mut usize) -> bool {
        let bytes = self.line_bytes();
        let len = bytes.len();
        if *end == len || (bytes[*end] != b'e' && bytes[*end] != b'E') {
            return false;
        }
        if *end + 1 == len {
            // dangling exponent marker at end of line
            self.error_caret(
                format!("expected digit token after '{}'", bytes[*end] as char),
                *end,
                1,
            );
            self.column = *end - 1;
            return true;
        }

        let after = *end + 1;
        if is_digit(bytes[after]) {
            *end = after;
            return self.read_dec_digits(end);
        }
        if bytes[after] == b'+' || bytes[after] == b'-' {
            if after + 1 == len || !is_digit(bytes[after + 1]) {
                self.error_caret(
                    format!("expected digit token after '{}'", bytes[after] as char),
                    after,
                    1,
                );
                *end = after + 1;
                self.column = *end - 1;
                return true;
            }
            *end = after + 1;
            return self.read_dec_digits(end);
        }
        false
    }
}
