//! Small fixed panels drawn on the game's tooltip: tier count summary,
//! highlight frame, grade badge and item level badge.

use tiertip_types::{ItemLevelSettings, ItemModsSettings};

use crate::geometry::{Pos, Rect, TextAnchor};
use crate::palette::{BADGE_BG, FRAME_COLOR, tier_color_or};
use crate::surface::{DisplayList, TextMeasure};
use crate::tiers::TierCounts;

/// Widest line the count panel is sized for
const COUNT_PROBE: &str = "T1 x6";
const COUNT_LINE_PROBE: &str = "T";
const COUNT_EXTRA_WIDTH: f32 = 10.0;
const COUNT_EXTRA_HEIGHT: f32 = 5.0;
const COUNT_INSET: (f32, f32) = (5.0, 2.0);

pub const HIGHLIGHT_THICKNESS: f32 = 2.0;

const GRADE_PADDING: (f32, f32) = (6.0, 2.0);
const GRADE_INSET: f32 = 4.0;

const ITEM_LEVEL_PADDING: (f32, f32) = (6.0, 4.0);

/// "T{n} x{count}" lines in the tooltip's top-left corner.
///
/// Returns the panel box, `None` when nothing is counted.
pub fn draw_count_panel(
    out: &mut DisplayList,
    counts: &TierCounts,
    origin: Pos,
    settings: &ItemModsSettings,
    measure: &mut impl TextMeasure,
) -> Option<Rect> {
    if counts.is_empty() {
        return None;
    }

    let line_height = measure.measure(COUNT_LINE_PROBE).h;
    let width = measure.measure(COUNT_PROBE).w + COUNT_EXTRA_WIDTH;
    let height = line_height * counts.non_zero_tiers() as f32 + COUNT_EXTRA_HEIGHT;
    let rect = Rect::from_corners(origin, origin.translate(width, height));

    out.fill_rect(rect, settings.background_color);
    out.stroke_rect(rect, FRAME_COLOR, 1.0);

    let mut pos = origin.translate(COUNT_INSET.0, COUNT_INSET.1);
    for (tier, count) in counts.lines() {
        let color = tier_color_or(settings, tier, FRAME_COLOR);
        pos.y += out.text(measure, &format!("T{tier} x{count}"), pos, color).h;
    }
    Some(rect)
}

/// Frame around the whole tooltip in the best tier's color, gray without one
pub fn draw_highlight_frame(
    out: &mut DisplayList,
    counts: &TierCounts,
    tooltip: Rect,
    settings: &ItemModsSettings,
) {
    let color = counts.highlight_color(settings, FRAME_COLOR);
    out.stroke_rect(tooltip, color, HIGHLIGHT_THICKNESS);
}

/// S/A/B letter in the tooltip's top-right corner
pub fn draw_grade_badge(
    out: &mut DisplayList,
    counts: &TierCounts,
    tooltip: Rect,
    settings: &ItemModsSettings,
    measure: &mut impl TextMeasure,
) -> Option<Rect> {
    let grade = counts.grade()?;
    let color = settings.tier_color(grade.tier())?;

    let size = measure.measure(grade.label());
    let rect = Rect::new(
        tooltip.right() - size.w - GRADE_PADDING.0 * 2.0 - GRADE_INSET,
        tooltip.top() + GRADE_INSET,
        size.w + GRADE_PADDING.0 * 2.0,
        size.h + GRADE_PADDING.1 * 2.0,
    );

    out.fill_rect(rect, BADGE_BG);
    out.stroke_rect(rect, color, 1.0);
    out.text(
        measure,
        grade.label(),
        rect.top_left().translate(GRADE_PADDING.0, GRADE_PADDING.1),
        color,
    );
    Some(rect)
}

/// "iLVL: N" box below the tooltip header
pub fn draw_item_level_badge(
    out: &mut DisplayList,
    item_level: u32,
    tooltip: Rect,
    header_offset: f32,
    settings: &ItemLevelSettings,
    measure: &mut impl TextMeasure,
) -> Rect {
    let text = format!("iLVL: {item_level}");
    let scale = settings.clamped_text_size();
    let size = measure.measure_scaled(&text, scale);

    let origin = Pos::new(tooltip.left(), tooltip.top() + header_offset);
    let rect = Rect::new(
        origin.x,
        origin.y,
        size.w + ITEM_LEVEL_PADDING.0 * 2.0,
        size.h + ITEM_LEVEL_PADDING.1 * 2.0,
    );

    out.fill_rect(rect, settings.background_color);
    out.stroke_rect(rect, FRAME_COLOR, 1.0);
    out.text_anchored(
        measure,
        &text,
        origin.translate(ITEM_LEVEL_PADDING.0, ITEM_LEVEL_PADDING.1),
        settings.text_color,
        TextAnchor::TopLeft,
        scale,
    );
    rect
}
