use crate::style::TextFormat;

/// Host font metrics used to size tokens before layout.
pub trait FontMetrics: Send + Sync {
    /// Rendered width of `text` for the given decorations and scale.
    fn text_width_px(&self, text: &str, format: TextFormat, scale: f32) -> i32;

    /// Line height at the given scale.
    fn line_height_px(&self, scale: f32) -> i32;

    /// Width of a single space.
    ///
    /// Default measures `" "` through `text_width_px`.
    fn space_width_px(&self, format: TextFormat, scale: f32) -> i32 {
        self.text_width_px(" ", format, scale)
    }
}

/// Deterministic fixed-advance metrics for hosts without glyph tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedAdvanceMetrics {
    /// Advance of every non-space glyph at scale 1.0.
    pub advance_px: i32,
    /// Advance of a space at scale 1.0.
    pub space_px: i32,
    /// Line height at scale 1.0.
    pub line_height_px: i32,
}

impl FixedAdvanceMetrics {
    pub const fn new(advance_px: i32, space_px: i32, line_height_px: i32) -> Self {
        Self {
            advance_px,
            space_px,
            line_height_px,
        }
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self::new(6, 4, 9)
    }
}

fn scaled(px: i32, scale: f32) -> i32 {
    (px as f32 * scale.max(0.0)).floor() as i32
}

impl FontMetrics for FixedAdvanceMetrics {
    fn text_width_px(&self, text: &str, format: TextFormat, scale: f32) -> i32 {
        let bold_extra = i32::from(format.bold());
        let raw: i32 = text
            .chars()
            .map(|ch| {
                if ch == ' ' {
                    self.space_px
                } else {
                    self.advance_px + bold_extra
                }
            })
            .sum();
        scaled(raw, scale)
    }

    fn line_height_px(&self, scale: f32) -> i32 {
        scaled(self.line_height_px, scale)
    }
}
