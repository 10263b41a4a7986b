//! Fast-mods panel: a column of tier badges ("P1", "S3", "P?") beside the
//! tooltip, optionally followed by the mod's tag names.
//!
//! The panel is all or nothing. Every badge is laid out into a local display
//! list first and the list is only handed back when the whole column
//! succeeded; any bad measurement or geometry returns an error instead.

use tiertip_types::{Color, FastModsAnchor, ItemModsSettings, tooltip_colors};

use crate::affix::AffixType;
use crate::error::FastModsError;
use crate::geometry::{Pos, Rect, Size, TextAnchor};
use crate::mod_value::ModValue;
use crate::palette::{FRAME_COLOR, tag_color, tier_color_or};
use crate::surface::{DisplayList, TextMeasure};

/// Space between the badge column and the tooltip
pub const GUTTER: f32 = 6.0;
/// Padding added after the label and after every tag
pub const CELL_PADDING: f32 = 5.0;
/// Extra width of the background box past the measured content
pub const BOX_EXTRA: f32 = 6.0;
const ROW_PROBE: &str = "P1";
const ROW_SCALE: f32 = 1.5;
const UNSET_TIER: &str = "?";

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeTag {
    pub name: String,
    pub color: Color,
}

/// One badge before placement
#[derive(Debug, Clone, PartialEq)]
pub struct TierBadge {
    pub label: String,
    pub color: Color,
    pub tags: Vec<BadgeTag>,
    /// Rows covered by the badge
    pub lines: u32,
}

/// A badge with its final geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBadge {
    pub badge: TierBadge,
    /// Background box of the whole badge
    pub rect: Rect,
    /// Box around the label cell only
    pub label_rect: Rect,
}

/// Result of one panel layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FastModsPanel {
    pub badges: Vec<PlacedBadge>,
    pub display: DisplayList,
}

impl FastModsPanel {
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

/// Mods that get a badge: explicit, uncrafted prefixes and suffixes
pub fn is_badge_eligible(mv: &ModValue) -> bool {
    mv.affix_type.is_affix() && !mv.is_implicit && !mv.is_crafted
}

fn affix_rank(affix_type: AffixType) -> u8 {
    match affix_type {
        AffixType::Prefix => 0,
        _ => 1,
    }
}

/// Eligible mods as badges, ordered by tier then affix with unset tiers last
pub fn collect_badges(mods: &[ModValue], settings: &ItemModsSettings) -> Vec<TierBadge> {
    let mut eligible: Vec<&ModValue> = mods.iter().filter(|mv| is_badge_eligible(mv)).collect();
    eligible.sort_by_key(|mv| (mv.tier == 0, mv.tier, affix_rank(mv.affix_type)));

    eligible
        .into_iter()
        .map(|mv| {
            let letter = mv.affix_type.badge_letter().unwrap_or(UNSET_TIER);
            let label = if mv.tier == 0 {
                format!("{letter}{UNSET_TIER}")
            } else {
                format!("{letter}{}", mv.tier)
            };
            let affix_color = mv.affix_type.color(settings);
            TierBadge {
                label,
                color: tier_color_or(settings, mv.tier, affix_color),
                tags: mv
                    .tags
                    .iter()
                    .map(|tag| BadgeTag {
                        name: tag.clone(),
                        color: tag_color(tag),
                    })
                    .collect(),
                lines: 1,
            }
        })
        .collect()
}

fn checked_measure(measure: &mut impl TextMeasure, text: &str) -> Result<Size, FastModsError> {
    let size = measure.measure(text);
    if size.is_finite() {
        Ok(size)
    } else {
        Err(FastModsError::NonFiniteMeasure {
            text: text.to_string(),
        })
    }
}

/// Lay the badge column out against the left edge of `anchor`
pub fn layout(
    mods: &[ModValue],
    anchor: Rect,
    settings: &ItemModsSettings,
    trace: bool,
    measure: &mut impl TextMeasure,
) -> Result<FastModsPanel, FastModsError> {
    let badges = collect_badges(mods, settings);
    if badges.is_empty() {
        return Ok(FastModsPanel::default());
    }

    if !anchor.is_valid() {
        return Err(FastModsError::InvalidAnchor {
            x: anchor.x,
            y: anchor.y,
            w: anchor.w,
            h: anchor.h,
        });
    }

    let row_height = checked_measure(measure, ROW_PROBE)?.h * ROW_SCALE;
    if row_height <= 0.0 {
        return Err(FastModsError::DegenerateBadge { index: 0 });
    }

    let rows: u32 = badges.iter().map(|b| b.lines).sum();
    let panel_height = row_height * rows as f32;
    let right = anchor.left() - GUTTER;
    let mut y = match settings.fast_mods_anchor {
        FastModsAnchor::Top => anchor.top(),
        FastModsAnchor::Bottom => anchor.bottom() - panel_height,
    };

    let mut display = DisplayList::new();
    let mut placed = Vec::with_capacity(badges.len());

    for (index, badge) in badges.into_iter().enumerate() {
        if trace {
            let tags: Vec<&str> = badge.tags.iter().map(|t| t.name.as_str()).collect();
            tracing::debug!(index, label = %badge.label, ?tags, "Fast mods badge");
        }

        let box_height = row_height * badge.lines as f32;
        let center_y = y + box_height / 2.0;

        let label_size = checked_measure(measure, &badge.label)?;
        let label_width = label_size.w + CELL_PADDING;
        let mut width = label_width;

        let mut texts = vec![(badge.label.clone(), Pos::new(right, center_y), badge.color)];
        if settings.enable_fast_mods_tags {
            let mut tag_right = right - label_width - CELL_PADDING;
            for tag in &badge.tags {
                let tag_size = checked_measure(measure, &tag.name)?;
                texts.push((tag.name.clone(), Pos::new(tag_right, center_y), tag.color));
                width += tag_size.w + CELL_PADDING;
                tag_right -= tag_size.w + CELL_PADDING;
            }
            if !badge.tags.is_empty() {
                width += CELL_PADDING;
            }
        }

        let rect = Rect::new(right - width, y, width + BOX_EXTRA, box_height);
        let label_rect = Rect::new(right - label_width, y, label_width + BOX_EXTRA, box_height);
        if !rect.is_valid() || !label_rect.is_valid() || rect.w <= 0.0 {
            return Err(FastModsError::DegenerateBadge { index });
        }

        display.fill_rect(rect, tooltip_colors::BLACK);
        display.stroke_rect(rect, FRAME_COLOR, 1.0);
        display.stroke_rect(label_rect, FRAME_COLOR, 1.0);
        for (text, pos, color) in texts {
            display.text_anchored(measure, &text, pos, color, TextAnchor::RightCenter, 1.0);
        }

        placed.push(PlacedBadge {
            badge,
            rect,
            label_rect,
        });
        y += box_height;
    }

    Ok(FastModsPanel {
        badges: placed,
        display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawCommand;
    use crate::surface::testing::{BrokenMeasure, CHAR_WIDTH, LINE_HEIGHT, MonoMeasure};

    const ROW: f32 = LINE_HEIGHT * 1.5;

    fn mv(affix_type: AffixType, tier: u32, tags: &[&str]) -> ModValue {
        ModValue {
            affix_type,
            category: affix_type.code(),
            tier,
            total_tiers: 6,
            short_name: String::new(),
            human_name: String::new(),
            affix_name: String::new(),
            raw_name: String::new(),
            stat_names: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_implicit: false,
            is_crafted: false,
            can_have_tiers: tier > 0,
        }
    }

    fn anchor() -> Rect {
        Rect::new(300.0, 100.0, 200.0, 400.0)
    }

    fn settings(anchor: FastModsAnchor, tags: bool) -> ItemModsSettings {
        ItemModsSettings {
            fast_mods_anchor: anchor,
            enable_fast_mods_tags: tags,
            ..Default::default()
        }
    }

    fn labels(panel: &FastModsPanel) -> Vec<&str> {
        panel.badges.iter().map(|b| b.badge.label.as_str()).collect()
    }

    #[test]
    fn no_eligible_mods_draws_nothing() {
        let mut implicit = mv(AffixType::Prefix, 1, &[]);
        implicit.is_implicit = true;
        let mut crafted = mv(AffixType::Suffix, 1, &[]);
        crafted.is_crafted = true;
        let mods = vec![implicit, crafted, mv(AffixType::Unique, 0, &[]), mv(AffixType::Corrupted, 0, &[])];

        let panel = layout(
            &mods,
            anchor(),
            &settings(FastModsAnchor::Bottom, true),
            false,
            &mut MonoMeasure::default(),
        )
        .unwrap();
        assert!(panel.is_empty());
        assert!(panel.display.is_empty());
    }

    #[test]
    fn ordered_by_tier_then_affix_with_unset_last() {
        let mods = vec![
            mv(AffixType::Suffix, 0, &[]),
            mv(AffixType::Prefix, 2, &[]),
            mv(AffixType::Suffix, 1, &[]),
            mv(AffixType::Prefix, 1, &[]),
            mv(AffixType::Prefix, 0, &[]),
        ];
        let panel = layout(
            &mods,
            anchor(),
            &settings(FastModsAnchor::Top, false),
            false,
            &mut MonoMeasure::default(),
        )
        .unwrap();
        assert_eq!(labels(&panel), vec!["P1", "S1", "P2", "P?", "S?"]);

        // Badges stack without overlapping each other or the tooltip
        for (i, badge) in panel.badges.iter().enumerate() {
            assert!(!badge.rect.intersects(&anchor()));
            for other in &panel.badges[i + 1..] {
                assert!(!badge.rect.intersects(&other.rect));
            }
        }
    }

    #[test]
    fn badge_colors_follow_tier_then_affix() {
        let s = settings(FastModsAnchor::Top, false);
        let badges = collect_badges(
            &[mv(AffixType::Prefix, 3, &[]), mv(AffixType::Suffix, 5, &[])],
            &s,
        );
        assert_eq!(badges[0].color, s.t3_color);
        assert_eq!(badges[1].color, s.suffix_color);
    }

    #[test]
    fn top_and_bottom_anchoring() {
        let mods = vec![mv(AffixType::Prefix, 1, &[]), mv(AffixType::Suffix, 2, &[])];
        let mut measure = MonoMeasure::default();

        let top = layout(&mods, anchor(), &settings(FastModsAnchor::Top, false), false, &mut measure).unwrap();
        assert_eq!(top.badges[0].rect.y, 100.0);
        assert_eq!(top.badges[1].rect.y, 100.0 + ROW);

        let bottom =
            layout(&mods, anchor(), &settings(FastModsAnchor::Bottom, false), false, &mut measure).unwrap();
        assert_eq!(bottom.badges[1].rect.bottom(), anchor().bottom());
        assert_eq!(bottom.badges[0].rect.y, anchor().bottom() - 2.0 * ROW);
    }

    #[test]
    fn badge_geometry_without_tags() {
        let panel = layout(
            &[mv(AffixType::Prefix, 1, &["Fire"])],
            anchor(),
            &settings(FastModsAnchor::Top, false),
            false,
            &mut MonoMeasure::default(),
        )
        .unwrap();
        let right = 300.0 - GUTTER;
        let width = 2.0 * CHAR_WIDTH + CELL_PADDING;
        let badge = &panel.badges[0];
        assert_eq!(badge.rect, Rect::new(right - width, 100.0, width + BOX_EXTRA, ROW));
        assert_eq!(badge.label_rect, badge.rect);
        assert_eq!(panel.display.texts().collect::<Vec<_>>(), vec!["P1"]);
    }

    #[test]
    fn tags_widen_the_badge() {
        let panel = layout(
            &[mv(AffixType::Suffix, 2, &["Fire", "Elemental"])],
            anchor(),
            &settings(FastModsAnchor::Top, true),
            true,
            &mut MonoMeasure::default(),
        )
        .unwrap();
        let label_width = 2.0 * CHAR_WIDTH + CELL_PADDING;
        let width = label_width
            + (4.0 * CHAR_WIDTH + CELL_PADDING)
            + (9.0 * CHAR_WIDTH + CELL_PADDING)
            + CELL_PADDING;
        let badge = &panel.badges[0];
        assert_eq!(badge.rect.w, width + BOX_EXTRA);
        assert_eq!(badge.label_rect.w, label_width + BOX_EXTRA);

        // Tags run right to left, right-aligned and centered on the row
        let positions: Vec<(String, Pos)> = panel
            .display
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, pos, anchor, .. } => {
                    assert_eq!(*anchor, TextAnchor::RightCenter);
                    Some((text.clone(), *pos))
                }
                _ => None,
            })
            .collect();
        let right = 300.0 - GUTTER;
        let center = 100.0 + ROW / 2.0;
        assert_eq!(positions[0], ("S2".to_string(), Pos::new(right, center)));
        assert_eq!(
            positions[1],
            ("Fire".to_string(), Pos::new(right - label_width - CELL_PADDING, center))
        );
        assert_eq!(positions[2].1.x, right - label_width - CELL_PADDING - 4.0 * CHAR_WIDTH - CELL_PADDING);
    }

    #[test]
    fn broken_measurement_fails_the_whole_panel() {
        let err = layout(
            &[mv(AffixType::Prefix, 1, &[])],
            anchor(),
            &settings(FastModsAnchor::Top, true),
            false,
            &mut BrokenMeasure,
        )
        .unwrap_err();
        assert_eq!(err, FastModsError::NonFiniteMeasure { text: "P1".to_string() });
    }

    #[test]
    fn invalid_anchor_is_rejected() {
        let err = layout(
            &[mv(AffixType::Prefix, 1, &[])],
            Rect::new(f32::NAN, 0.0, 10.0, 10.0),
            &settings(FastModsAnchor::Top, false),
            false,
            &mut MonoMeasure::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FastModsError::InvalidAnchor { .. }));
    }
}
