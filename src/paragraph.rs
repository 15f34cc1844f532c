use crate::layout::{LayoutConfig, LayoutEngine, ParagraphLayout};
use crate::metrics::FontMetrics;
use crate::token::Token;
use crate::tokenize::{tokenize, InlineItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placement {
    cfg: LayoutConfig,
    x: i32,
    y: i32,
    max_width: i32,
}

/// Measured tokens plus their most recent layout.
///
/// Hosts keep one per text block and call [`Paragraph::relayout`] whenever the
/// panel is resized or re-initialized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    tokens: Vec<Token>,
    layout: ParagraphLayout,
    placement: Option<Placement>,
}

impl Paragraph {
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            layout: ParagraphLayout::default(),
            placement: None,
        }
    }

    /// Tokenize and measure inline items.
    pub fn from_items<I>(items: I, metrics: &dyn FontMetrics) -> Self
    where
        I: IntoIterator<Item = InlineItem>,
    {
        Self::from_tokens(tokenize(items, metrics))
    }

    /// Lay out at `(x, y)` within `max_width` and return the paragraph height.
    ///
    /// Repeating the previous placement with the same engine config reuses the
    /// cached layout.
    pub fn relayout(&mut self, engine: &LayoutEngine, x: i32, y: i32, max_width: i32) -> i32 {
        let placement = Placement {
            cfg: engine.config(),
            x,
            y,
            max_width,
        };
        if self.placement == Some(placement) {
            return self.layout.height;
        }
        self.layout = engine.layout_paragraph(&mut self.tokens, x, y, max_width);
        self.placement = Some(placement);
        self.layout.height
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn layout(&self) -> &ParagraphLayout {
        &self.layout
    }

    /// Token under `(px, py)` in the current layout.
    pub fn token_at(&self, px: i32, py: i32) -> Option<&Token> {
        let idx = self.layout.hit_test(&self.tokens, px, py)?;
        self.tokens.get(idx)
    }

    /// Link target under `(px, py)` in the current layout.
    pub fn link_at(&self, px: i32, py: i32) -> Option<&str> {
        self.layout.link_at(&self.tokens, px, py)
    }

    /// Drop the cached placement so the next `relayout` recomputes, for hosts
    /// that edit tokens in place.
    pub fn invalidate(&mut self) {
        self.placement = None;
    }
}
