use guidebook_layout::{
    FontMetrics, InlineItem, InlineStyle, LayoutEngine, LineEnd, Paragraph, TextFormat,
};
use guidebook_layout_embedded_graphics::MonoFontMetrics;

fn guide_paragraph(metrics: &dyn FontMetrics) -> Paragraph {
    Paragraph::from_items(
        [
            InlineItem::text(
                "The request table crafts missing components on demand and pulls \
                 ingredients from every provider it can reach.",
                InlineStyle::DEFAULT,
            ),
            InlineItem::LineBreak,
            InlineItem::text("See also ", InlineStyle::DEFAULT.with_format(TextFormat::ITALIC)),
            InlineItem::link(
                "request pipes",
                "page:request_pipe",
                InlineStyle::DEFAULT.with_format(TextFormat::UNDERLINE),
            ),
        ],
        metrics,
    )
}

#[test]
fn shared_metrics_drive_layout_through_trait_object() {
    let metrics = MonoFontMetrics::shared();
    let mut paragraph = guide_paragraph(metrics.as_ref());
    let engine = LayoutEngine::default();

    let height = paragraph.relayout(&engine, 8, 8, 210);
    let layout = paragraph.layout();
    assert!(layout.line_count() >= 3);
    assert_eq!(
        height,
        1 + layout.lines.iter().map(|l| l.height).sum::<i32>() + 1
    );

    for line in &layout.lines {
        if line.end == LineEnd::Overflow {
            assert!(line.justified);
            assert_eq!(line.width, 210);
        }
    }
    let break_line = layout
        .lines
        .iter()
        .find(|l| l.end == LineEnd::ForcedBreak)
        .expect("forced break line");
    assert!(!break_line.justified);
}

#[test]
fn link_hit_testing_uses_mono_cell_widths() {
    let metrics = MonoFontMetrics::new();
    let mut paragraph = guide_paragraph(&metrics);
    paragraph.relayout(&LayoutEngine::default(), 0, 0, 480);

    let link = paragraph
        .tokens()
        .iter()
        .find(|t| t.link_target().is_some())
        .expect("link token");
    assert_eq!(link.natural_width, 13 * 7);
    assert_eq!(
        paragraph.link_at(link.area.x + link.area.width - 1, link.area.y),
        Some("page:request_pipe")
    );
    assert_eq!(
        paragraph.link_at(link.area.x + link.area.width, link.area.y),
        None
    );
}
