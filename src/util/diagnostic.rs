use std::fmt::Write;

use crate::error::SyntaxError;

/// Converts a byte offset into a 1-based `(line, column)` pair.
///
/// Columns count characters, not bytes. Offsets past the end of `source` are
/// clamped to the end, which is where the end-of-input marker points.
///
/// ## Example
/// ```
/// use tally::util::diagnostic::locate;
///
/// assert_eq!(locate("1 +\n  (2", 0), (1, 1));
/// assert_eq!(locate("1 +\n  (2", 6), (2, 3));
/// assert_eq!(locate("1 +\n  (2", 8), (2, 5));
/// ```
#[must_use]
pub fn locate(source: &str, position: usize) -> (usize, usize) {
    let before = prefix(source, position);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Renders a syntax error against the source it came from.
///
/// ## Example
/// ```
/// use tally::{parse_source, util::diagnostic::render};
///
/// let source = "(2+3";
/// let err = parse_source(source).unwrap_err();
///
/// assert_eq!(render(source, &err),
///            "Error at position 4: Expected closing parenthesis ')' but found end of \
///             input.\n --> 1:5\n  |\n1 | (2+3\n  |     ^\n");
/// ```
#[must_use]
pub fn render(source: &str, error: &SyntaxError) -> String {
    render_at(source, error.position(), error)
}

/// Renders any message with a caret under `position`.
///
/// The output is the message, a `-->` location line, the
/// offending source line, and the caret.
#[must_use]
pub fn render_at(source: &str, position: usize, message: &impl std::fmt::Display) -> String {
    let (line, column) = locate(source, position);
    let text = source.lines().nth(line - 1).unwrap_or_default();
    let gutter = " ".repeat(line.to_string().len());

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{message}");
    let _ = writeln!(out, "{gutter}--> {line}:{column}");
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line} | {text}");
    let _ = writeln!(out, "{gutter} | {}^", " ".repeat(column - 1));
    out
}

fn prefix(source: &str, position: usize) -> &str {
    let mut end = position.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}
