//! Primary mod block layout
//!
//! Places one text block per mod beneath the game's tooltip. The pass is a
//! fold over the ordered mods: every step takes the cursor where the
//! previous block ended and returns where the next one starts. Each block
//! advances the cursor by at least one line height plus the bottom margin,
//! so blocks can never collapse onto each other no matter which optional
//! segments the settings suppress.

use std::ops::Range;

use tiertip_types::{Color, ItemModsSettings};

use crate::affix::{display_label, single_letter_labels};
use crate::geometry::Pos;
use crate::mod_value::ModValue;
use crate::palette::{CRAFTED_COLOR, DESCRIPTION_COLOR, STAT_NAME_COLOR, tag_color, tier_color_or};
use crate::surface::{DisplayList, TextMeasure};

/// Space after every mod block
pub const MARGIN_BOTTOM: f32 = 4.0;
/// Tolerance for the minimum-advance check
pub const ADVANCE_EPSILON: f32 = 0.001;
pub const CRAFTED_LABEL: &str = "[CRAFTED]";
/// Glyph used to measure one line of text
const LINE_PROBE: &str = "A";

/// Position threaded through the pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
}

impl LayoutCursor {
    pub fn at(pos: Pos) -> Self {
        Self { x: pos.x, y: pos.y }
    }

    fn pos(self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// Font-derived sizes shared by every block of one pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMetrics {
    pub line_height: f32,
    /// Narrowest label column, keeps tier/name columns aligned
    pub min_label_width: f32,
}

/// Vertical extent of one mod's block and the commands it recorded
#[derive(Debug, Clone, PartialEq)]
pub struct ModBlock {
    pub top: f32,
    /// Cursor advance including the bottom margin
    pub advance: f32,
    pub commands: Range<usize>,
}

impl ModBlock {
    pub fn bottom(&self) -> f32 {
        self.top + self.advance
    }
}

/// Output of one layout pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipLayout {
    pub display: DisplayList,
    pub blocks: Vec<ModBlock>,
    /// Final cursor y minus the origin y
    pub height: f32,
}

impl TooltipLayout {
    /// Text strings recorded by block `index`
    pub fn block_texts(&self, index: usize) -> Vec<&str> {
        let Some(block) = self.blocks.get(index) else {
            return Vec::new();
        };
        self.display.commands()[block.commands.clone()]
            .iter()
            .filter_map(|c| match c {
                crate::surface::DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Primary layout engine; caches the minimum label width for its lifetime
#[derive(Debug, Default)]
pub struct TooltipEngine {
    min_label_width: Option<f32>,
}

impl TooltipEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn metrics(&mut self, measure: &mut impl TextMeasure) -> BlockMetrics {
        let min_label_width = *self.min_label_width.get_or_insert_with(|| {
            single_letter_labels()
                .map(|label| measure.measure(&format!("{label} ")).w)
                .fold(0.0, f32::max)
        });
        BlockMetrics {
            line_height: measure.measure(LINE_PROBE).h,
            min_label_width,
        }
    }

    /// Lay out `mods` (already ordered) starting at `origin`
    pub fn layout(
        &mut self,
        mods: &[ModValue],
        origin: Pos,
        settings: &ItemModsSettings,
        measure: &mut impl TextMeasure,
    ) -> TooltipLayout {
        let metrics = self.metrics(measure);
        let mut display = DisplayList::new();
        let mut blocks = Vec::with_capacity(mods.len());

        let end = mods.iter().fold(LayoutCursor::at(origin), |cursor, mv| {
            let first = display.len();
            let next = layout_mod(cursor, mv, &metrics, settings, measure, &mut display);
            blocks.push(ModBlock {
                top: cursor.y,
                advance: next.y - cursor.y,
                commands: first..display.len(),
            });
            next
        });

        TooltipLayout {
            display,
            blocks,
            height: end.y - origin.y,
        }
    }
}

/// Color of the tier/name segments: tier colored when the tier means something
fn segment_color(mv: &ModValue, settings: &ItemModsSettings) -> Color {
    let affix_color = mv.affix_type.color(settings);
    if mv.affix_type.is_affix() && mv.total_tiers > 1 {
        tier_color_or(settings, mv.tier, affix_color)
    } else {
        affix_color
    }
}

/// One fold step: record `mv`'s block at `cursor`, return the next cursor
pub fn layout_mod(
    cursor: LayoutCursor,
    mv: &ModValue,
    metrics: &BlockMetrics,
    settings: &ItemModsSettings,
    measure: &mut impl TextMeasure,
    out: &mut DisplayList,
) -> LayoutCursor {
    if mv.is_crafted {
        return layout_crafted(cursor, mv, metrics, measure, out);
    }

    let line_height = metrics.line_height;
    let stats_same_line = settings.start_stats_on_same_line;
    let mut pos = cursor.pos();

    let (label, label_color) = display_label(mv.affix_type, mv.is_implicit, settings);
    let label_width = measure
        .measure(&format!("{label} "))
        .w
        .max(metrics.min_label_width);
    out.text(measure, label, pos, label_color);

    if !mv.affix_type.is_label_only() {
        let color = segment_color(mv, settings);
        // Width and height of what follows the label on its line
        let mut line_w = 0.0f32;
        let mut line_h = 0.0f32;

        if mv.shows_tier_marker() {
            let size = out.text(
                measure,
                &format!("T{} ", mv.tier),
                pos.translate(label_width + line_w, 0.0),
                color,
            );
            line_w += size.w;
            line_h = line_h.max(size.h);
        }

        if settings.show_short_names && mv.has_short_name() {
            let size = out.text(
                measure,
                &mv.short_name,
                pos.translate(label_width + line_w, 0.0),
                color,
            );
            line_w += size.w;
            line_h = line_h.max(size.h);
        }

        if settings.show_mod_names && !mv.affix_name.is_empty() {
            let text = if line_w > 0.0 {
                format!(" | \"{}\"", mv.affix_name)
            } else {
                format!("\"{}\"", mv.affix_name)
            };
            let size = out.text(measure, &text, pos.translate(label_width + line_w, 0.0), color);
            line_w += size.w;
            line_h = line_h.max(size.h);
        }

        let mut tags_w = 0.0f32;
        // Width of a tag row drawn under the label line
        let mut wrapped_w = 0.0f32;
        if settings.show_tags && !mv.tags.is_empty() {
            let tags_same_line = settings.start_tags_on_same_line;
            let start = if tags_same_line {
                tags_w += measure.measure(" ").w;
                pos.translate(label_width + line_w, 0.0)
            } else {
                pos.translate(label_width, line_h)
            };

            for tag in &mv.tags {
                tags_w += out
                    .text(
                        measure,
                        &format!("[{tag}] "),
                        start.translate(tags_w, 0.0),
                        tag_color(tag),
                    )
                    .w;
            }

            let tag_height = measure.measure(&mv.tags[0]).h;
            if tags_same_line {
                line_h = line_h.max(tag_height);
            } else {
                pos.y += tag_height;
                wrapped_w = tags_w;
                tags_w = 0.0;
            }
        }

        if stats_same_line {
            pos.x += (line_w + tags_w).max(wrapped_w);
        } else {
            pos.y += line_h;
        }
    }

    if !mv.human_name.is_empty() {
        let text = if stats_same_line {
            format!(" {}", mv.human_name)
        } else {
            mv.human_name.clone()
        };
        let size = out.text(measure, &text, pos.translate(label_width, 0.0), DESCRIPTION_COLOR);
        pos.y += size.h.max(line_height);
    } else if !stats_same_line {
        pos.y += line_height;
    }

    if settings.show_stat_names
        && let Some(stat) = mv.first_stat_name()
    {
        let size = out.text(measure, stat, pos.translate(label_width, 0.0), STAT_NAME_COLOR);
        pos.y += size.h;
    }

    finish_block(cursor, pos.y, line_height)
}

fn layout_crafted(
    cursor: LayoutCursor,
    mv: &ModValue,
    metrics: &BlockMetrics,
    measure: &mut impl TextMeasure,
    out: &mut DisplayList,
) -> LayoutCursor {
    let pos = cursor.pos();
    out.text(measure, CRAFTED_LABEL, pos, CRAFTED_COLOR);

    let mut bottom = pos.y;
    if !mv.human_name.is_empty() {
        let label_width = measure.measure(&format!("{CRAFTED_LABEL} ")).w;
        let size = out.text(
            measure,
            &format!(" {}", mv.human_name),
            pos.translate(label_width, 0.0),
            DESCRIPTION_COLOR,
        );
        bottom += size.h;
    }

    finish_block(cursor, bottom, metrics.line_height)
}

/// Apply the one-line minimum advance and the bottom margin
fn finish_block(start: LayoutCursor, bottom: f32, line_height: f32) -> LayoutCursor {
    let bottom = if bottom - start.y < line_height - ADVANCE_EPSILON {
        start.y + line_height
    } else {
        bottom
    };
    LayoutCursor {
        x: start.x,
        y: bottom + MARGIN_BOTTOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::AffixType;
    use crate::surface::DrawCommand;
    use crate::surface::testing::{CHAR_WIDTH, LINE_HEIGHT, MonoMeasure};

    const BLOCK: f32 = LINE_HEIGHT + MARGIN_BOTTOM;

    fn prefix_t1() -> ModValue {
        ModValue {
            affix_type: AffixType::Prefix,
            category: 1,
            tier: 1,
            total_tiers: 8,
            short_name: "Life".to_string(),
            human_name: "+90 to maximum Life".to_string(),
            affix_name: "Prime".to_string(),
            raw_name: "IncreasedLife8".to_string(),
            stat_names: vec!["base_maximum_life".to_string()],
            tags: vec!["Life".to_string(), "Defences".to_string()],
            is_implicit: false,
            is_crafted: false,
            can_have_tiers: true,
        }
    }

    fn bare(affix_type: AffixType) -> ModValue {
        ModValue {
            affix_type,
            category: affix_type.code(),
            tier: 0,
            total_tiers: 0,
            short_name: String::new(),
            human_name: String::new(),
            affix_name: String::new(),
            raw_name: String::new(),
            stat_names: Vec::new(),
            tags: Vec::new(),
            is_implicit: false,
            is_crafted: false,
            can_have_tiers: false,
        }
    }

    fn all_on() -> ItemModsSettings {
        ItemModsSettings {
            show_tags: true,
            show_short_names: true,
            show_mod_names: true,
            show_stat_names: false,
            start_stats_on_same_line: false,
            start_tags_on_same_line: false,
            ..Default::default()
        }
    }

    fn all_off() -> ItemModsSettings {
        ItemModsSettings {
            show_tags: false,
            show_short_names: false,
            show_mod_names: false,
            show_stat_names: false,
            ..Default::default()
        }
    }

    fn run(mods: &[ModValue], settings: &ItemModsSettings) -> TooltipLayout {
        TooltipEngine::new().layout(mods, Pos::new(10.0, 100.0), settings, &mut MonoMeasure::default())
    }

    fn text_positions(layout: &TooltipLayout) -> Vec<(String, Pos)> {
        layout
            .display
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, pos, .. } => Some((text.clone(), *pos)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn prefix_with_every_switch_on() {
        let layout = run(&[prefix_t1()], &all_on());
        assert_eq!(
            layout.block_texts(0),
            vec![
                "[P]",
                "T1 ",
                "Life",
                " | \"Prime\"",
                "[Life] ",
                "[Defences] ",
                "+90 to maximum Life"
            ]
        );
        // label line, tag line, description line
        assert_eq!(layout.height, 3.0 * LINE_HEIGHT + MARGIN_BOTTOM);
        assert!(layout.height >= BLOCK);
    }

    #[test]
    fn segments_line_up_after_the_label_column() {
        let layout = run(&[prefix_t1()], &all_on());
        let texts = text_positions(&layout);
        let label_col = 4.0 * CHAR_WIDTH;
        assert_eq!(texts[1].1, Pos::new(10.0 + label_col, 100.0));
        assert_eq!(texts[2].1.x, 10.0 + label_col + 3.0 * CHAR_WIDTH);
        // Tags start on their own line under the label line
        assert_eq!(texts[4].1, Pos::new(10.0 + label_col, 100.0 + LINE_HEIGHT));
        assert_eq!(texts[6].1, Pos::new(10.0 + label_col, 100.0 + 2.0 * LINE_HEIGHT));
    }

    #[test]
    fn everything_on_one_line_when_both_same_line_switches_are_on() {
        let settings = ItemModsSettings {
            start_stats_on_same_line: true,
            start_tags_on_same_line: true,
            ..all_on()
        };
        let layout = run(&[prefix_t1()], &settings);
        let texts = text_positions(&layout);
        assert!(texts.iter().all(|(_, pos)| pos.y == 100.0));
        // Strictly increasing x: sequential width accumulation
        for pair in texts.windows(2) {
            assert!(pair[1].1.x > pair[0].1.x, "{pair:?}");
        }
        assert_eq!(texts.last().map(|(t, _)| t.as_str()), Some(" +90 to maximum Life"));
        assert_eq!(layout.height, BLOCK);
    }

    #[test]
    fn crafted_ignores_every_switch() {
        let mut crafted = prefix_t1();
        crafted.is_crafted = true;
        crafted.human_name = "+25% to Cold Resistance".to_string();

        for settings in [all_on(), all_off()] {
            let layout = run(std::slice::from_ref(&crafted), &settings);
            assert_eq!(layout.block_texts(0), vec!["[CRAFTED]", " +25% to Cold Resistance"]);
            let texts = text_positions(&layout);
            assert_eq!(texts[0].1.y, texts[1].1.y);
            assert_eq!(texts[1].1.x, 10.0 + 10.0 * CHAR_WIDTH);
            assert_eq!(layout.height, BLOCK);
        }
    }

    #[test]
    fn crafted_without_text_still_takes_a_line() {
        let mut crafted = bare(AffixType::Suffix);
        crafted.is_crafted = true;
        let layout = run(&[crafted], &all_on());
        assert_eq!(layout.block_texts(0), vec!["[CRAFTED]"]);
        assert_eq!(layout.height, BLOCK);
    }

    #[test]
    fn three_empty_mods_make_three_blocks() {
        let mods = vec![bare(AffixType::Prefix), bare(AffixType::Suffix), bare(AffixType::Unknown)];
        for same_line in [false, true] {
            let settings = ItemModsSettings {
                start_stats_on_same_line: same_line,
                ..all_off()
            };
            let layout = run(&mods, &settings);
            assert_eq!(layout.blocks.len(), 3);
            for block in &layout.blocks {
                assert_eq!(block.advance, BLOCK);
            }
            assert_eq!(layout.height, 3.0 * BLOCK);
        }
    }

    #[test]
    fn blocks_never_overlap() {
        let mut implicit = prefix_t1();
        implicit.is_implicit = true;
        let mut unique = bare(AffixType::Unique);
        unique.human_name = "Adds 1 to 4 Lightning Damage".to_string();
        let mods = vec![implicit, prefix_t1(), unique, bare(AffixType::Corrupted), prefix_t1()];

        for stats in [false, true] {
            for tags in [false, true] {
                let settings = ItemModsSettings {
                    start_stats_on_same_line: stats,
                    start_tags_on_same_line: tags,
                    show_stat_names: true,
                    ..all_on()
                };
                let layout = run(&mods, &settings);
                for pair in layout.blocks.windows(2) {
                    assert!(pair[0].bottom() <= pair[1].top + ADVANCE_EPSILON);
                    assert!(pair[0].advance >= BLOCK - ADVANCE_EPSILON);
                }
                // Every text of a block stays above the block's margin
                for block in &layout.blocks {
                    for command in &layout.display.commands()[block.commands.clone()] {
                        if let DrawCommand::Text { pos, .. } = command {
                            assert!(pos.y >= block.top);
                            assert!(pos.y + LINE_HEIGHT <= block.bottom() - MARGIN_BOTTOM + ADVANCE_EPSILON);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn texts_on_a_row_never_overlap() {
        for stats in [false, true] {
            for tags in [false, true] {
                let settings = ItemModsSettings {
                    start_stats_on_same_line: stats,
                    start_tags_on_same_line: tags,
                    ..all_on()
                };
                let layout = run(&[prefix_t1()], &settings);
                let spans: Vec<_> = text_positions(&layout)
                    .into_iter()
                    .map(|(text, pos)| (pos.y, pos.x, pos.x + text.chars().count() as f32 * CHAR_WIDTH))
                    .collect();
                for (i, a) in spans.iter().enumerate() {
                    for b in &spans[i + 1..] {
                        if a.0 == b.0 {
                            assert!(a.2 <= b.1 || b.2 <= a.1, "stats={stats} tags={tags}: {a:?} {b:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn same_line_stats_clear_a_wrapped_tag_row() {
        let settings = ItemModsSettings {
            start_stats_on_same_line: true,
            start_tags_on_same_line: false,
            ..all_on()
        };
        let layout = run(&[prefix_t1()], &settings);
        let texts = text_positions(&layout);
        let label_col = 4.0 * CHAR_WIDTH;
        let tag_row_end = 10.0 + label_col + "[Life] [Defences] ".len() as f32 * CHAR_WIDTH;

        let (text, pos) = texts.last().unwrap();
        assert_eq!(text, " +90 to maximum Life");
        assert_eq!(pos.y, 100.0 + LINE_HEIGHT);
        assert_eq!(pos.x, tag_row_end);
    }

    #[test]
    fn single_total_tier_never_shows_marker() {
        let mut mv = prefix_t1();
        mv.total_tiers = 1;
        let settings = ItemModsSettings {
            sort_mods_by_tier: true,
            ..all_on()
        };
        let layout = run(&[mv], &settings);
        assert!(!layout.block_texts(0).iter().any(|t| t.starts_with('T')));
        // Short name still leads, so the separator remains
        assert!(layout.block_texts(0).contains(&" | \"Prime\""));
    }

    #[test]
    fn empty_short_name_matches_short_names_disabled() {
        let mut unnamed = prefix_t1();
        unnamed.short_name = String::new();
        let with_empty = run(std::slice::from_ref(&unnamed), &all_on());

        let disabled = ItemModsSettings {
            show_short_names: false,
            ..all_on()
        };
        let with_disabled = run(&[prefix_t1()], &disabled);
        assert_eq!(with_empty.display, with_disabled.display);
        assert_eq!(with_empty.height, with_disabled.height);
    }

    #[test]
    fn separator_only_after_a_leading_segment() {
        let mut mv = prefix_t1();
        mv.total_tiers = 1;
        mv.short_name = String::new();
        let layout = run(&[mv], &all_on());
        assert!(layout.block_texts(0).contains(&"\"Prime\""));
    }

    #[test]
    fn label_column_has_a_minimum_width() {
        let mut corrupted = bare(AffixType::Corrupted);
        corrupted.human_name = "Corrupted".to_string();
        let mut prefix = bare(AffixType::Prefix);
        prefix.human_name = "x".to_string();
        let layout = run(&[prefix, corrupted], &all_off());
        let texts = text_positions(&layout);
        // "[P] " is the floor, "[COR] " is wider
        assert_eq!(texts[1].1.x, 10.0 + 4.0 * CHAR_WIDTH);
        assert_eq!(texts[3].1.x, 10.0 + 6.0 * CHAR_WIDTH);
    }

    #[test]
    fn label_only_types_skip_tier_and_names() {
        let mut unique = prefix_t1();
        unique.affix_type = AffixType::Unique;
        let layout = run(&[unique], &all_on());
        assert_eq!(layout.block_texts(0), vec!["[U]", "+90 to maximum Life"]);
        assert_eq!(layout.height, BLOCK);
    }

    #[test]
    fn implicit_uses_i_label() {
        let mut mv = prefix_t1();
        mv.is_implicit = true;
        let layout = run(&[mv], &all_off());
        assert_eq!(layout.block_texts(0)[0], "[I]");
    }

    #[test]
    fn stat_name_debug_line() {
        let settings = ItemModsSettings {
            show_stat_names: true,
            ..all_off()
        };
        let layout = run(&[prefix_t1()], &settings);
        assert_eq!(layout.block_texts(0).last(), Some(&"base_maximum_life"));
        // tier marker line, description, stat name
        assert_eq!(layout.height, 3.0 * LINE_HEIGHT + MARGIN_BOTTOM);
    }

    #[test]
    fn non_empty_input_has_positive_height() {
        for mv in [prefix_t1(), bare(AffixType::Unknown), bare(AffixType::Corrupted)] {
            assert!(run(&[mv], &all_off()).height > 0.0);
        }
        assert_eq!(run(&[], &all_on()).height, 0.0);
    }

    #[test]
    fn min_label_width_is_measured_once() {
        let mut engine = TooltipEngine::new();
        let mut measure = MonoMeasure::default();
        engine.layout(&[], Pos::default(), &all_off(), &mut measure);
        let first = measure.calls;
        engine.layout(&[], Pos::default(), &all_off(), &mut measure);
        // Second pass only measures the line probe
        assert_eq!(measure.calls - first, 1);
    }
}
