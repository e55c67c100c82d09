use pretty_assertions::assert_eq;

use super::caret_excerpt;

// === plain ASCII ===

#[test]
fn caret_under_single_column() {
    assert_eq!(
        caret_excerpt("let x = $", 1, 8, 1),
        "  |\n1 | let x = $\n  |         ^"
    );
}

#[test]
fn caret_spans_multiple_columns() {
    assert_eq!(caret_excerpt("0x1.5", 2, 3, 2), "  |\n2 | 0x1.5\n  |    ^^");
}

#[test]
fn caret_at_line_start() {
    assert_eq!(caret_excerpt("abc", 1, 0, 1), "  |\n1 | abc\n  | ^");
}

// === line number width ===

#[test]
fn wide_line_numbers_widen_the_gutter() {
    assert_eq!(caret_excerpt("x", 42, 0, 1), "   |\n42 | x\n   | ^");
}

// === tabs ===

#[test]
fn tab_before_span_shifts_carets() {
    // "\tx" renders as four spaces then 'x'; the caret must sit under 'x'.
    assert_eq!(caret_excerpt("\tx", 1, 1, 1), "  |\n1 |     x\n  |     ^");
}

#[test]
fn tab_inside_span_stretches_carets() {
    // span covers the tab itself: one byte, four rendered cells
    assert_eq!(caret_excerpt("a\tb", 1, 1, 1), "  |\n1 | a    b\n  |  ^^^^");
}

#[test]
fn tab_after_span_changes_nothing() {
    assert_eq!(caret_excerpt("ab\tc", 1, 0, 1), "  |\n1 | ab    c\n  | ^");
}

// === full-width glyphs ===

#[test]
fn full_width_before_span_shifts_carets() {
    // '가' is 3 bytes but 2 cells; the caret belongs under 'x' (byte column 3).
    assert_eq!(caret_excerpt("가x", 1, 3, 1), "  |\n1 | 가x\n  |   ^");
}

#[test]
fn full_width_inside_span_widens_carets() {
    // span is the 3-byte '가' itself: rendered width 2
    assert_eq!(caret_excerpt("가", 1, 0, 3), "  |\n1 | 가\n  | ^^");
}

#[test]
fn half_width_multibyte_does_not_shift() {
    // 'é' is 2 bytes but 1 cell; the caret belongs under 'x' (byte column 2).
    assert_eq!(caret_excerpt("éx", 1, 2, 1), "  |\n1 | éx\n  |  ^");
}

// === spans at or past end of line ===

#[test]
fn caret_past_end_of_line() {
    // unterminated-literal diagnostics point at the last consumed column
    assert_eq!(caret_excerpt("ab", 1, 2, 1), "  |\n1 | ab\n  |   ^");
}

#[test]
fn empty_line_still_renders_a_caret() {
    assert_eq!(caret_excerpt("", 1, 0, 1), "  |\n1 | \n  | ^");
}

#[test]
fn zero_length_span_renders_no_carets() {
    assert_eq!(caret_excerpt("abc", 1, 1, 0), "  |\n1 | abc\n  |  ");
}
