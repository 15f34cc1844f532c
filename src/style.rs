use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Inline text decorations carried by a token.
    ///
    /// Layout never branches on these. They feed glyph measurement (bold and
    /// italic change advances) and the host renderer.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TextFormat: u8 {
        /// Bold weight.
        const BOLD          = 0b0000_0001;
        /// Italic slant.
        const ITALIC        = 0b0000_0010;
        /// Underline decoration.
        const UNDERLINE     = 0b0000_0100;
        /// Strikethrough decoration.
        const STRIKETHROUGH = 0b0000_1000;
        /// Drop shadow.
        const SHADOW        = 0b0001_0000;
    }
}

impl TextFormat {
    pub fn bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    pub fn italic(self) -> bool {
        self.contains(Self::ITALIC)
    }

    pub fn underline(self) -> bool {
        self.contains(Self::UNDERLINE)
    }

    pub fn strikethrough(self) -> bool {
        self.contains(Self::STRIKETHROUGH)
    }

    pub fn shadow(self) -> bool {
        self.contains(Self::SHADOW)
    }
}

/// Immutable formatting state attached to every token.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineStyle {
    /// Decoration flags.
    pub format: TextFormat,
    /// Packed ARGB color.
    pub color: u32,
    /// Glyph scale multiplier (1.0 = native font size).
    pub scale: f32,
}

impl InlineStyle {
    /// Plain white text at native scale.
    pub const DEFAULT: Self = Self {
        format: TextFormat::empty(),
        color: 0xFFFF_FFFF,
        scale: 1.0,
    };

    pub const fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub const fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
