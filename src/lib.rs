//! Line breaking and justification for guide book text panels.
//!
//! Inline content is measured once into [`Token`]s through a host
//! [`FontMetrics`] provider, then [`LayoutEngine`] breaks the tokens into
//! lines and assigns every token a position and laid-out width. Drawing stays
//! with the host.

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

mod error;
mod layout;
mod metrics;
mod paragraph;
mod split;
mod style;
mod token;
mod tokenize;

pub use error::LayoutError;
pub use layout::{layout_line, LayoutConfig, LayoutEngine, LineBox, LineMetrics, ParagraphLayout};
pub use metrics::{FixedAdvanceMetrics, FontMetrics};
pub use paragraph::Paragraph;
pub use split::{LineEnd, LineSpan, LineSplitter};
pub use style::{InlineStyle, TextFormat};
pub use token::{Rect, Token, TokenKind};
pub use tokenize::{push_text, tokenize, InlineItem};
