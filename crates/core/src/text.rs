//! Inline code markers in authored prose.
//!
//! Goals, tips, and bodies mark inline code with single backticks, as in
//! "run `python3 --version`". A backtick pair must enclose at least one
//! character; an empty pair or an unmatched backtick stays literal text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum InlineSegment<'a> {
    Text(&'a str),
    Code(&'a str),
}

impl<'a> InlineSegment<'a> {
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            InlineSegment::Text(s) | InlineSegment::Code(s) => s,
        }
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self, InlineSegment::Code(_))
    }
}

/// Split prose into plain text and inline code runs, in order.
///
/// Empty text runs are omitted.
#[must_use]
pub fn split_inline_code(input: &str) -> Vec<InlineSegment<'_>> {
    let mut segments = Vec::new();
    // Start of the pending plain-text run.
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find('`') {
        let open = cursor + offset;
        let Some(close_offset) = input[open + 1..].find('`') else {
            break;
        };
        let close = open + 1 + close_offset;
        if close == open + 1 {
            // "``": the first backtick is literal, retry from the second.
            cursor = open + 1;
            continue;
        }
        if open > text_start {
            segments.push(InlineSegment::Text(&input[text_start..open]));
        }
        segments.push(InlineSegment::Code(&input[open + 1..close]));
        cursor = close + 1;
        text_start = cursor;
    }

    if text_start < input.len() {
        segments.push(InlineSegment::Text(&input[text_start..]));
    }
    segments
}

/// Drop the backticks, keeping the text.
#[must_use]
pub fn strip_inline_code(input: &str) -> String {
    split_inline_code(input)
        .iter()
        .map(InlineSegment::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::InlineSegment::{Code, Text};
    use super::*;

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(split_inline_code("no code here"), vec![Text("no code here")]);
        assert!(split_inline_code("").is_empty());
    }

    #[test]
    fn code_between_text() {
        assert_eq!(
            split_inline_code("If `python` is not found, try `python3`."),
            vec![
                Text("If "),
                Code("python"),
                Text(" is not found, try "),
                Code("python3"),
                Text("."),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_code() {
        assert_eq!(
            split_inline_code("`a` and `b`"),
            vec![Code("a"), Text(" and "), Code("b")]
        );
    }

    #[test]
    fn unmatched_backtick_stays_text() {
        assert_eq!(split_inline_code("it`s fine"), vec![Text("it`s fine")]);
        assert_eq!(
            split_inline_code("`x` then `dangling"),
            vec![Code("x"), Text(" then `dangling")]
        );
    }

    #[test]
    fn empty_pair_is_literal() {
        assert_eq!(split_inline_code("a `` b"), vec![Text("a `` b")]);
        assert_eq!(split_inline_code("```x`"), vec![Text("``"), Code("x")]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            split_inline_code("Convert °C → °F with `c * 9/5 + 32`"),
            vec![Text("Convert °C → °F with "), Code("c * 9/5 + 32")]
        );
        assert_eq!(strip_inline_code("Run `py -V`."), "Run py -V.");
    }
}
