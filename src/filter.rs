//! Splits raw spec text into the lines that carry rules, dropping blank lines and
//! whole-line comments.

use crate::types::COMMENT_MARKER;

/// A line that survived filtering, with its 1-based position in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetainedLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Returns the rule-bearing lines of `input` in their original order.
///
/// Line numbers count every physical line, including the discarded ones, so they can be
/// reported back to the user as-is. A trailing `\r` is left in place; it is whitespace and
/// is stripped with the fields later on.
pub fn retained_lines(input: &str) -> impl Iterator<Item = RetainedLine<'_>> {
    input
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !is_ignored(line))
        .map(|(index, text)| RetainedLine {
            number: index + 1,
            text,
        })
}

/// Checks whether a line is blank or a comment.
pub fn is_ignored(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}
