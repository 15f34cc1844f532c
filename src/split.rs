//! Greedy paragraph splitting into line spans.

use core::ops::Range;

use crate::token::Token;

/// Why a line ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnd {
    /// The next word would not fit.
    Overflow,
    /// A break token closed the line. The break is the line's last token.
    ForcedBreak,
    /// The token sequence ran out.
    EndOfText,
}

impl LineEnd {
    /// Only lines that wrapped on width are candidates for justification.
    pub fn allows_justification(self) -> bool {
        matches!(self, Self::Overflow)
    }
}

/// Half-open token range forming one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSpan {
    pub range: Range<usize>,
    pub end: LineEnd,
}

/// Iterator yielding the lines of a token sequence for a maximum width.
///
/// Widths are read from `Token::natural_width`, so splitting is unaffected by
/// spacing assigned in an earlier layout pass.
#[derive(Clone, Debug)]
pub struct LineSplitter<'a> {
    tokens: &'a [Token],
    max_width: i32,
    pos: usize,
    line_start: usize,
    line_width: i32,
}

impl<'a> LineSplitter<'a> {
    pub fn new(tokens: &'a [Token], max_width: i32) -> Self {
        Self {
            tokens,
            max_width,
            pos: 0,
            line_start: 0,
            line_width: 0,
        }
    }

    fn flush(&mut self, end_idx: usize, end: LineEnd) -> LineSpan {
        let span = LineSpan {
            range: self.line_start..end_idx,
            end,
        };
        self.line_start = end_idx;
        self.line_width = 0;
        span
    }
}

impl Iterator for LineSplitter<'_> {
    type Item = LineSpan;

    fn next(&mut self) -> Option<Self::Item> {
        if self.max_width <= 0 {
            return None;
        }
        let last = self.tokens.len().checked_sub(1)?;

        while self.pos <= last {
            let idx = self.pos;
            let token = &self.tokens[idx];

            if token.is_break() {
                self.pos = idx + 1;
                return Some(self.flush(idx + 1, LineEnd::ForcedBreak));
            }

            if !token.is_space() {
                if idx > self.line_start
                    && self.line_width + token.natural_width > self.max_width
                {
                    return Some(self.flush(idx, LineEnd::Overflow));
                }
                if idx == self.line_start && token.natural_width > self.max_width {
                    log::debug!(
                        "token {} ({}px) overflows max width {}px on its own line",
                        idx,
                        token.natural_width,
                        self.max_width
                    );
                }
            }

            self.line_width += token.natural_width;
            self.pos = idx + 1;
            if idx == last {
                return Some(self.flush(idx + 1, LineEnd::EndOfText));
            }
        }
        None
    }
}
