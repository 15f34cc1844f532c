//! Conversion of already-parsed inline content into measured layout tokens.

use crate::metrics::FontMetrics;
use crate::style::InlineStyle;
use crate::token::Token;

const NO_BREAK_SPACE: char = '\u{00A0}';

/// Inline content handed over by the host after markup parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum InlineItem {
    /// Styled text run. May contain spaces, tabs, and newlines.
    Text { text: String, style: InlineStyle },
    /// Link kept as a single unbreakable unit.
    Link {
        text: String,
        target: String,
        style: InlineStyle,
    },
    /// Explicit line break.
    LineBreak,
}

impl InlineItem {
    pub fn text(text: impl Into<String>, style: InlineStyle) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>, style: InlineStyle) -> Self {
        Self::Link {
            text: text.into(),
            target: target.into(),
            style,
        }
    }
}

/// Tokenize inline items, measuring each token once.
pub fn tokenize<I>(items: I, metrics: &dyn FontMetrics) -> Vec<Token>
where
    I: IntoIterator<Item = InlineItem>,
{
    let mut tokens = Vec::new();
    for item in items {
        match item {
            InlineItem::Text { text, style } => push_text(&mut tokens, &text, style, metrics),
            InlineItem::Link {
                text,
                target,
                style,
            } => tokens.push(Token::link(text, target, style, metrics)),
            InlineItem::LineBreak => tokens.push(Token::line_break(metrics)),
        }
    }
    log::trace!("tokenized inline content into {} tokens", tokens.len());
    tokens
}

/// Split one text run into words, spaces, and breaks.
pub fn push_text(
    tokens: &mut Vec<Token>,
    text: &str,
    style: InlineStyle,
    metrics: &dyn FontMetrics,
) {
    let mut word_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if !ch.is_whitespace() || ch == NO_BREAK_SPACE {
            if word_start.is_none() {
                word_start = Some(idx);
            }
            continue;
        }

        if let Some(start) = word_start.take() {
            tokens.push(Token::word(&text[start..idx], style, metrics));
        }
        match ch {
            '\n' => tokens.push(Token::line_break(metrics)),
            '\r' => {}
            // whitespace runs collapse, including across item boundaries
            _ if tokens.last().is_some_and(Token::is_space) => {}
            _ => tokens.push(Token::space(style, metrics)),
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token::word(&text[start..], style, metrics));
    }
}
