use crate::metrics::FontMetrics;
use crate::style::InlineStyle;

/// Axis-aligned box in panel pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left x.
    pub x: i32,
    /// Top y.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: right and bottom edges are outside.
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// What a token is, independent of where it ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Unbreakable run of text.
    Word(String),
    /// Breakable inter-word gap; width is reassigned by layout.
    Space,
    /// Forced line break.
    Break,
    /// Unbreakable link text with its target.
    Link { text: String, target: String },
}

/// Atomic layout unit: content, formatting, and the box layout assigned to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub style: InlineStyle,
    /// Layout output. Width of spaces is rewritten on every pass.
    pub area: Rect,
    /// Measured width before layout.
    pub natural_width: i32,
}

impl Token {
    /// Build a token with explicit dimensions.
    pub fn new(kind: TokenKind, style: InlineStyle, width: i32, height: i32) -> Self {
        let width = width.max(0);
        Self {
            kind,
            style,
            area: Rect::new(0, 0, width, height.max(0)),
            natural_width: width,
        }
    }

    /// Measure and build a word token.
    pub fn word(text: impl Into<String>, style: InlineStyle, metrics: &dyn FontMetrics) -> Self {
        let text = text.into();
        let width = metrics.text_width_px(&text, style.format, style.scale);
        let height = metrics.line_height_px(style.scale);
        Self::new(TokenKind::Word(text), style, width, height)
    }

    /// Measure and build a space token.
    pub fn space(style: InlineStyle, metrics: &dyn FontMetrics) -> Self {
        let width = metrics.space_width_px(style.format, style.scale);
        let height = metrics.line_height_px(style.scale);
        Self::new(TokenKind::Space, style, width, height)
    }

    /// Measure and build a link token.
    pub fn link(
        text: impl Into<String>,
        target: impl Into<String>,
        style: InlineStyle,
        metrics: &dyn FontMetrics,
    ) -> Self {
        let text = text.into();
        let width = metrics.text_width_px(&text, style.format, style.scale);
        let height = metrics.line_height_px(style.scale);
        Self::new(
            TokenKind::Link {
                text,
                target: target.into(),
            },
            style,
            width,
            height,
        )
    }

    /// Forced break: zero width, native line height.
    pub fn line_break(metrics: &dyn FontMetrics) -> Self {
        let style = InlineStyle::DEFAULT;
        Self::new(TokenKind::Break, style, 0, metrics.line_height_px(style.scale))
    }

    pub fn is_space(&self) -> bool {
        matches!(self.kind, TokenKind::Space)
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, TokenKind::Break)
    }

    /// Visible text, if any. Spaces and breaks have none.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(text) | TokenKind::Link { text, .. } => Some(text.as_str()),
            TokenKind::Space | TokenKind::Break => None,
        }
    }

    /// Link target, if this token is a link.
    pub fn link_target(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Link { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }

    /// Laid-out width.
    pub fn width(&self) -> i32 {
        self.area.width
    }

    /// Laid-out height.
    pub fn height(&self) -> i32 {
        self.area.height
    }

    pub(crate) fn place(&mut self, x: i32, y: i32) {
        self.area.x = x;
        self.area.y = y;
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            TokenKind::Word(text) => write!(f, "\"{}\"", text),
            TokenKind::Link { text, target } => write!(f, "[{}]({})", text, target),
            TokenKind::Space => write!(
                f,
                "space of width {} with format {:?}",
                self.area.width, self.style.format
            ),
            TokenKind::Break => write!(f, "break"),
        }
    }
}
