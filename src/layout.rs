use core::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::LayoutError;
use crate::split::{LineEnd, LineSpan, LineSplitter};
use crate::token::Token;

const INLINE_LINE_CAPACITY: usize = 16;

/// Layout configuration for paragraph construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Justify lines that wrapped on width.
    pub justify: bool,
    /// Offset above the first line.
    pub leading_px: i32,
    /// Offset below the last line.
    pub trailing_px: i32,
}

impl LayoutConfig {
    /// Decode and validate a host-supplied JSON config.
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.leading_px < 0 {
            return Err(LayoutError::InvalidConfig {
                field: "leading_px",
                reason: "must not be negative",
            });
        }
        if self.trailing_px < 0 {
            return Err(LayoutError::InvalidConfig {
                field: "trailing_px",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            justify: true,
            leading_px: 1,
            trailing_px: 1,
        }
    }
}

/// Result of positioning a single line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMetrics {
    /// Sum of laid-out token widths.
    pub width: i32,
    /// Tallest token on the line.
    pub height: i32,
    /// Distributed spacing was applied.
    pub justified: bool,
}

/// Justified spacing for a line: every slot gets `base`, the first `remainder` slots one more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Distribution {
    base: i32,
    remainder: i32,
}

/// Space ending the line's content: the last token, or the one before a closing break.
fn trailing_space(line: &[Token]) -> Option<usize> {
    let mut idx = line.len().checked_sub(1)?;
    if line[idx].is_break() {
        idx = idx.checked_sub(1)?;
    }
    line[idx].is_space().then_some(idx)
}

fn distribute_spacing(line: &[Token], max_width: i32) -> Option<Distribution> {
    let mut words_width = 0;
    let mut spaces = 0;
    for token in line {
        if token.is_space() {
            spaces += 1;
        } else {
            words_width += token.natural_width;
        }
    }
    let slots = if trailing_space(line).is_some() {
        spaces - 1
    } else {
        spaces
    };
    if slots <= 0 {
        return None;
    }
    let leftover = max_width - words_width;
    if leftover < 0 {
        log::warn!(
            "justification skipped: words need {}px of {}px",
            words_width,
            max_width
        );
        return None;
    }
    Some(Distribution {
        base: leftover / slots,
        remainder: leftover % slots,
    })
}

/// Position one line of tokens starting at `(x, y)`.
///
/// With `justified`, spaces share `max_width` minus the word widths, left slots
/// taking the rounding remainder. Otherwise every space keeps its own natural
/// width, the width the splitter measured. A trailing space, including one right
/// before a closing break, always collapses to zero.
pub fn layout_line(
    line: &mut [Token],
    x: i32,
    y: i32,
    max_width: i32,
    justified: bool,
) -> LineMetrics {
    let distribution = if justified {
        distribute_spacing(line, max_width)
    } else {
        None
    };
    let trailing = trailing_space(line);
    let mut remainder = distribution.map_or(0, |d| d.remainder);
    let mut cursor = x;
    let mut height = 0;
    for (idx, token) in line.iter_mut().enumerate() {
        token.area.width = if !token.is_space() {
            token.natural_width
        } else if trailing == Some(idx) {
            0
        } else if let Some(d) = distribution {
            if remainder > 0 {
                remainder -= 1;
                d.base + 1
            } else {
                d.base
            }
        } else {
            token.natural_width
        };
        token.place(cursor, y);
        height = height.max(token.area.height);
        cursor += token.area.width;
    }

    LineMetrics {
        width: cursor - x,
        height,
        justified: distribution.is_some(),
    }
}

/// One positioned line of a paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBox {
    /// Tokens on this line.
    pub range: Range<usize>,
    /// Left x.
    pub x: i32,
    /// Top y.
    pub y: i32,
    /// Laid-out width.
    pub width: i32,
    /// Line height.
    pub height: i32,
    /// Why the line ended.
    pub end: LineEnd,
    /// Distributed spacing was applied.
    pub justified: bool,
}

impl LineBox {
    fn contains_y(&self, py: i32) -> bool {
        py >= self.y && py < self.y + self.height
    }
}

/// Positioned paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParagraphLayout {
    /// Total height including leading and trailing offsets.
    pub height: i32,
    pub lines: Vec<LineBox>,
}

impl ParagraphLayout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the token under `(px, py)`.
    ///
    /// `tokens` must be the slice this layout was computed for.
    pub fn hit_test(&self, tokens: &[Token], px: i32, py: i32) -> Option<usize> {
        self.lines
            .iter()
            .filter(|line| line.contains_y(py))
            .flat_map(|line| line.range.clone())
            .find(|&idx| {
                tokens
                    .get(idx)
                    .is_some_and(|token| token.area.contains(px, py))
            })
    }

    /// Target of the link under `(px, py)`.
    pub fn link_at<'t>(&self, tokens: &'t [Token], px: i32, py: i32) -> Option<&'t str> {
        let idx = self.hit_test(tokens, px, py)?;
        tokens.get(idx)?.link_target()
    }
}

/// Deterministic paragraph layout engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> LayoutConfig {
        self.cfg
    }

    /// Break `tokens` into lines no wider than `max_width` and position them in place.
    ///
    /// Lines closed by a forced break or by the end of the sequence are never
    /// justified. A non-positive `max_width` positions nothing and reports only
    /// the leading offset as height.
    pub fn layout_paragraph(
        &self,
        tokens: &mut [Token],
        x: i32,
        y: i32,
        max_width: i32,
    ) -> ParagraphLayout {
        if max_width <= 0 {
            return ParagraphLayout {
                height: self.cfg.leading_px,
                lines: Vec::new(),
            };
        }

        let spans: SmallVec<[LineSpan; INLINE_LINE_CAPACITY]> =
            LineSplitter::new(tokens, max_width).collect();
        let mut lines = Vec::with_capacity(spans.len());
        let mut offset = self.cfg.leading_px;

        for (line_idx, span) in spans.into_iter().enumerate() {
            let justify = self.cfg.justify && span.end.allows_justification();
            let line_y = y + offset;
            let metrics = layout_line(
                &mut tokens[span.range.clone()],
                x,
                line_y,
                max_width,
                justify,
            );
            log::trace!(
                "line {} tokens={:?} end={:?} width={} height={} justified={}",
                line_idx,
                span.range,
                span.end,
                metrics.width,
                metrics.height,
                metrics.justified
            );
            offset += metrics.height;
            lines.push(LineBox {
                range: span.range,
                x,
                y: line_y,
                width: metrics.width,
                height: metrics.height,
                end: span.end,
                justified: metrics.justified,
            });
        }
        offset += self.cfg.trailing_px;

        log::debug!(
            "paragraph laid out: {} tokens, {} lines, height {}px at max width {}px",
            tokens.len(),
            lines.len(),
            offset,
            max_width
        );
        ParagraphLayout {
            height: offset,
            lines,
        }
    }
}
