//! embedded-graphics mono-font metrics for `guidebook-layout`.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

use embedded_graphics::mono_font::{
    ascii::{
        FONT_10X20, FONT_6X13_BOLD, FONT_6X13_ITALIC, FONT_6X9, FONT_7X13_ITALIC, FONT_7X14,
        FONT_7X14_BOLD, FONT_8X13, FONT_8X13_BOLD, FONT_8X13_ITALIC, FONT_9X18, FONT_9X18_BOLD,
    },
    MonoFont,
};
use guidebook_layout::{FontMetrics, TextFormat};
use std::sync::Arc;

/// Backend-local font identifier: size bucket in the high bits, variant in the low two.
pub type FontId = u8;

/// Pixel size of text drawn at scale 1.0.
pub const BASE_SIZE_PX: f32 = 16.0;

/// Why a format/scale pair had to fall back to a different face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFallbackReason {
    UnsupportedWeightItalic,
}

/// Resolved font for a format/scale pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSelection {
    pub font_id: FontId,
    pub fallback_reason: Option<FontFallbackReason>,
}

/// Glyph cell metrics of one mono face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    pub char_width: i32,
    pub char_height: i32,
    pub char_spacing: i32,
}

#[derive(Clone, Copy)]
struct Face {
    font: &'static MonoFont<'static>,
    fallback: Option<FontFallbackReason>,
}

const fn exact(font: &'static MonoFont<'static>) -> Face {
    Face {
        font,
        fallback: None,
    }
}

const fn substitute(font: &'static MonoFont<'static>) -> Face {
    Face {
        font,
        fallback: Some(FontFallbackReason::UnsupportedWeightItalic),
    }
}

/// Faces by size bucket, then regular, italic, bold, bold italic.
const FACES: [[Face; 4]; 4] = [
    [
        exact(&FONT_6X9),
        exact(&FONT_6X13_ITALIC),
        exact(&FONT_6X13_BOLD),
        substitute(&FONT_6X13_BOLD),
    ],
    [
        exact(&FONT_7X14),
        exact(&FONT_7X13_ITALIC),
        exact(&FONT_7X14_BOLD),
        substitute(&FONT_7X14_BOLD),
    ],
    [
        exact(&FONT_8X13),
        exact(&FONT_8X13_ITALIC),
        exact(&FONT_8X13_BOLD),
        substitute(&FONT_8X13_BOLD),
    ],
    [
        exact(&FONT_10X20),
        substitute(&FONT_9X18),
        exact(&FONT_9X18_BOLD),
        substitute(&FONT_9X18_BOLD),
    ],
];

/// `FontMetrics` backed by the embedded-graphics ASCII mono fonts.
///
/// Scale picks one of four size buckets; bold and italic pick the variant.
/// Underline, strikethrough, and shadow do not change advances.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonoFontMetrics;

impl MonoFontMetrics {
    const SIZE_SMALL: FontId = 0;
    const SIZE_MEDIUM: FontId = 1;
    const SIZE_LARGE: FontId = 2;
    const SIZE_XL: FontId = 3;

    const VARIANT_REGULAR: FontId = 0;
    const VARIANT_ITALIC: FontId = 1;
    const VARIANT_BOLD: FontId = 2;
    const VARIANT_BOLD_ITALIC: FontId = 3;

    pub fn new() -> Self {
        Self
    }

    /// Shared trait object for hosts that hand metrics around by `Arc`.
    pub fn shared() -> Arc<dyn FontMetrics> {
        Arc::new(Self)
    }

    fn encode_font_id(size_bucket: FontId, variant: FontId) -> FontId {
        (size_bucket << 2) | (variant & 0x03)
    }

    fn decode_font_id(font_id: FontId) -> (FontId, FontId) {
        ((font_id >> 2) & 0x03, font_id & 0x03)
    }

    fn size_bucket_for(scale: f32) -> FontId {
        let size_px = BASE_SIZE_PX * scale;
        if size_px >= 24.0 {
            Self::SIZE_XL
        } else if size_px >= 20.0 {
            Self::SIZE_LARGE
        } else if size_px >= 16.0 {
            Self::SIZE_MEDIUM
        } else {
            Self::SIZE_SMALL
        }
    }

    fn variant_for(format: TextFormat) -> FontId {
        match (format.bold(), format.italic()) {
            (true, true) => Self::VARIANT_BOLD_ITALIC,
            (true, false) => Self::VARIANT_BOLD,
            (false, true) => Self::VARIANT_ITALIC,
            (false, false) => Self::VARIANT_REGULAR,
        }
    }

    fn face_for(font_id: FontId) -> Face {
        let (size_bucket, variant) = Self::decode_font_id(font_id);
        FACES[usize::from(size_bucket)][usize::from(variant)]
    }

    /// Resolve the face used for a format at a scale.
    pub fn resolve_font(&self, format: TextFormat, scale: f32) -> FontSelection {
        let font_id = Self::encode_font_id(Self::size_bucket_for(scale), Self::variant_for(format));
        let fallback_reason = Self::face_for(font_id).fallback;
        if let Some(reason) = fallback_reason {
            log::trace!("mono font fallback for {:?}: {:?}", format, reason);
        }
        FontSelection {
            font_id,
            fallback_reason,
        }
    }

    /// Cell metrics of a resolved face.
    pub fn cell_metrics(&self, font_id: FontId) -> CellMetrics {
        let font = Self::face_for(font_id).font;
        CellMetrics {
            char_width: font.character_size.width as i32,
            char_height: font.character_size.height as i32,
            char_spacing: font.character_spacing as i32,
        }
    }
}

/// Glyph count after the substitutions the mono fonts need (ASCII only).
fn mono_glyph_count(text: &str) -> usize {
    text.chars()
        .map(|ch| match ch {
            '\u{2026}' => 3,
            _ => 1,
        })
        .sum()
}

impl FontMetrics for MonoFontMetrics {
    fn text_width_px(&self, text: &str, format: TextFormat, scale: f32) -> i32 {
        let glyphs = mono_glyph_count(text) as i32;
        if glyphs == 0 {
            return 0;
        }
        let cell = self.cell_metrics(self.resolve_font(format, scale).font_id);
        glyphs * cell.char_width + (glyphs - 1) * cell.char_spacing
    }

    fn line_height_px(&self, scale: f32) -> i32 {
        let regular = Self::encode_font_id(Self::size_bucket_for(scale), Self::VARIANT_REGULAR);
        self.cell_metrics(regular).char_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_selects_size_bucket() {
        let metrics = MonoFontMetrics::new();
        assert_eq!(metrics.line_height_px(0.5), 9);
        assert_eq!(metrics.line_height_px(1.0), 14);
        assert_eq!(metrics.line_height_px(1.25), 13);
        assert_eq!(metrics.line_height_px(2.0), 20);
    }

    #[test]
    fn width_counts_cells() {
        let metrics = MonoFontMetrics::new();
        assert_eq!(metrics.text_width_px("pipe", TextFormat::empty(), 1.0), 28);
        assert_eq!(metrics.space_width_px(TextFormat::empty(), 1.0), 7);
        assert_eq!(metrics.text_width_px("", TextFormat::empty(), 1.0), 0);
    }

    #[test]
    fn ellipsis_measures_as_three_dots() {
        let metrics = MonoFontMetrics::new();
        assert_eq!(
            metrics.text_width_px("\u{2026}", TextFormat::empty(), 1.0),
            metrics.text_width_px("...", TextFormat::empty(), 1.0)
        );
    }

    #[test]
    fn every_font_id_maps_to_a_face() {
        let metrics = MonoFontMetrics::new();
        for font_id in 0..16 {
            let cell = metrics.cell_metrics(font_id);
            assert!(cell.char_width >= 6, "font {} has no width", font_id);
            assert!(cell.char_height >= 9, "font {} has no height", font_id);
        }
        // ids past the table wrap onto it
        assert_eq!(metrics.cell_metrics(0x10), metrics.cell_metrics(0));
    }

    #[test]
    fn xl_italic_substitutes_regular_face() {
        let metrics = MonoFontMetrics::new();
        let selection = metrics.resolve_font(TextFormat::ITALIC, 2.0);
        assert_eq!(
            selection.fallback_reason,
            Some(FontFallbackReason::UnsupportedWeightItalic)
        );
        assert_eq!(metrics.text_width_px("ab", TextFormat::ITALIC, 2.0), 18);
    }

    #[test]
    fn bold_italic_reports_fallback() {
        let metrics = MonoFontMetrics::new();
        let selection = metrics.resolve_font(TextFormat::BOLD | TextFormat::ITALIC, 1.0);
        assert_eq!(
            selection.fallback_reason,
            Some(FontFallbackReason::UnsupportedWeightItalic)
        );
        let plain = metrics.resolve_font(TextFormat::UNDERLINE | TextFormat::SHADOW, 1.0);
        assert_eq!(plain.fallback_reason, None);
    }
}
