//! Caret-annotated source excerpts.

use frost_encoding::{codepoint_length, decode_codepoint, is_full_width};

/// Spaces substituted for each tab when rendering an excerpt.
const TAB_WIDTH: usize = 4;

/// Render a source line with a caret underline:
///
/// ```text
///   |
/// 3 | let x = 0b12
///   |          ^^^
/// ```
///
/// `column` is the 0-based byte offset of the highlighted span within
/// `source_line`; `length` is the span's byte length. The caret line is laid
/// out in terminal cells: each tab expands to [`TAB_WIDTH`] cells and each
/// full-width codepoint occupies two, so codepoints *before* the span shift
/// the caret run right by their cell width and codepoints *inside* the span
/// lengthen it. Characters past the span cannot move carets and are ignored
/// by the column math.
#[must_use]
pub fn caret_excerpt(source_line: &str, line: usize, column: usize, length: usize) -> String {
    let line_label = line.to_string();
    let empty_bar = format!("{}|", " ".repeat(line_label.len() + 1));

    let mut rendered = format!("{empty_bar}\n{line_label} | ");
    let mut caret_column = 0;
    let mut caret_length = 0;

    let bytes = source_line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let width = codepoint_length(bytes[i]).min(bytes.len() - i);
        let cells = if bytes[i] == b'\t' {
            rendered.push_str(&" ".repeat(TAB_WIDTH));
            TAB_WIDTH
        } else {
            rendered.push_str(&source_line[i..i + width]);
            if is_full_width(decode_codepoint(&bytes[i..])) {
                2
            } else {
                1
            }
        };
        if i < column {
            caret_column += cells;
        } else if i < column + length {
            caret_length += cells;
        }
        i += width;
    }

    // A span pointing at or past the end of the line (e.g. an unterminated
    // literal) still deserves carets: count one cell per byte beyond EOL.
    if column > bytes.len() {
        caret_column += column - bytes.len();
    }
    if column + length > bytes.len() {
        caret_length += column + length - bytes.len().max(column);
    }

    rendered.push('\n');
    rendered.push_str(&empty_bar);
    rendered.push_str(&" ".repeat(caret_column + 1));
    rendered.push_str(&"^".repeat(caret_length));
    rendered
}

#[cfg(test)]
mod tests;
