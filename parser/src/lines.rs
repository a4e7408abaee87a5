//! Line splitting over a located table span.

use std::str::Split;

pub(crate) type LineSplit<'a> = Split<'a, fn(char) -> bool>;

/// Splits `text` at every line boundary.
///
/// Besides `\n` and `\r`, form feed, vertical tab, the ASCII group separators
/// and the Unicode line/paragraph separators end a line. A `\r\n` pair yields
/// an extra empty fragment, which classification skips like any blank line.
pub(crate) fn split_lines(text: &str) -> LineSplit<'_> {
    text.split(is_line_break as fn(char) -> bool)
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
